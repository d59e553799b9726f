use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::market::MarketSizing;
use super::plan::PlanShareSet;
use super::projection::Crossing;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioFinancials {
    pub total_cost: f64,
    pub breakeven_month: Crossing,
    pub weighted_price: f64,
    #[serde(default)]
    pub subscription_revenue: f64,
    #[serde(default = "not_reached")]
    pub payback_month: Crossing,
}

fn not_reached() -> Crossing {
    Crossing::NotReached
}

/// A named snapshot of a planning run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub plan_prices: BTreeMap<String, f64>,
    pub market: MarketSizing,
    #[serde(default)]
    pub shares: PlanShareSet,
    pub financial: ScenarioFinancials,
}

/// On-disk layout of the scenario file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScenarioFile {
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}
