use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::models::{
    Corridor, CostLineItem, MarketCorridor, PaybackParams, Plan, PlanShareSet, PlanningInputs,
    ProjectionParams,
};

/// Horizon of the cost/revenue breakeven simulation, in months.
pub const BREAKEVEN_HORIZON_MONTHS: u32 = 24;
/// Horizon of the investment payback simulation, in months.
pub const PAYBACK_HORIZON_MONTHS: u32 = 60;

pub const SCENARIO_FILE: &str = "scenarios.json";
/// Column summed when an investment table is uploaded.
pub const INVESTMENT_COLUMN: &str = "Investimento";

pub const REFERENCE_PLANS: [&str; 3] = ["Starter", "Growth", "Enterprise"];

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("hub-planner")
    } else {
        PathBuf::from(".hub-planner")
    }
}

/// The three reference tiers with the form's default values.
pub fn reference_plans() -> Vec<Plan> {
    REFERENCE_PLANS
        .iter()
        .map(|name| Plan {
            name: name.to_string(),
            fixed_fee: 100.0,
            sku_allowance: 50,
            marketplace_count: 2,
            ..Plan::default()
        })
        .collect()
}

pub fn reference_corridors() -> BTreeMap<Corridor, MarketCorridor> {
    BTreeMap::from([
        (
            Corridor::LatamToUs,
            MarketCorridor::new(5000, 10.0, 150.0)
                .with_channel("amazon", 0)
                .with_channel("ebay", 0)
                .with_channel("other", 0),
        ),
        (
            Corridor::UsChinaToLatam,
            MarketCorridor::new(3000, 10.0, 120.0)
                .with_channel("mercado_livre", 0)
                .with_channel("magalu", 0)
                .with_channel("b2w", 0)
                .with_channel("amazon_latam", 0),
        ),
    ])
}

pub fn reference_shares() -> PlanShareSet {
    PlanShareSet::new()
        .with("Starter", 40.0)
        .with("Growth", 40.0)
        .with("Enterprise", 20.0)
}

/// A complete, ready-to-evaluate set of inputs.
pub fn reference_inputs() -> PlanningInputs {
    PlanningInputs {
        plans: reference_plans(),
        corridors: reference_corridors(),
        basis_corridor: Corridor::LatamToUs,
        shares: reference_shares(),
        costs: vec![
            CostLineItem::new("team", 5000.0, 12, 1),
            CostLineItem::new("infrastructure", 3000.0, 12, 1),
            CostLineItem::new("marketing", 2000.0, 24, 1),
        ],
        projection: ProjectionParams {
            start_month: 1,
            initial_cohort: 10.0,
            cohort_growth_pct: 10.0,
        },
        payback: PaybackParams {
            investment: 100_000.0,
            monthly_revenue: None,
            revenue_growth_pct: 0.0,
        },
    }
}
