use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::cost::CostLineItem;
use super::market::{Corridor, MarketCorridor};
use super::plan::{Plan, PlanShareSet};
use crate::error::{PlannerError, Result};

// ---------------------------------------------------------------------------
// ProjectionParams
// ---------------------------------------------------------------------------

/// Seller-cohort growth knobs for the revenue projection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionParams {
    /// First month with new sellers, 1-based. 0 is read as 1.
    pub start_month: u32,
    pub initial_cohort: f64,
    /// Compound monthly growth of the new-seller cohort, in percent.
    pub cohort_growth_pct: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            start_month: 1,
            initial_cohort: 0.0,
            cohort_growth_pct: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// PaybackParams
// ---------------------------------------------------------------------------

/// Payback knobs. `revenue_growth_pct` compounds the monthly revenue figure
/// itself and is unrelated to [`ProjectionParams::cohort_growth_pct`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PaybackParams {
    pub investment: f64,
    /// Replaces the computed subscription revenue when set.
    pub monthly_revenue: Option<f64>,
    pub revenue_growth_pct: f64,
}

// ---------------------------------------------------------------------------
// PlanningInputs
// ---------------------------------------------------------------------------

/// Everything the operator enters for one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PlanningInputs {
    pub plans: Vec<Plan>,
    pub corridors: BTreeMap<Corridor, MarketCorridor>,
    /// Corridor whose adopters pay the subscriptions.
    pub basis_corridor: Corridor,
    pub shares: PlanShareSet,
    pub costs: Vec<CostLineItem>,
    pub projection: ProjectionParams,
    pub payback: PaybackParams,
}

impl PlanningInputs {
    /// Reject inputs the engine cannot price unambiguously.
    ///
    /// Shares are keyed by plan name, so two plans with the same name would
    /// each be charged the full share.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for plan in &self.plans {
            if !seen.insert(plan.name.as_str()) {
                return Err(PlannerError::InvalidArgument(format!(
                    "Duplicate plan name: {}",
                    plan.name
                )));
            }
        }
        Ok(())
    }
}
