use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// Billing configuration of one subscription tier.
///
/// Every numeric field defaults to zero, so a plan deserialized from a
/// partially filled form is always priceable.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Plan {
    pub name: String,
    pub fixed_fee: f64,
    /// Informational only; never enters the price.
    pub sku_allowance: u32,
    /// Informational only; never enters the price.
    pub marketplace_count: u32,
    pub monthly_orders: u64,
    pub avg_ticket: f64,
    pub sale_percentage: f64,
    pub price_per_order: f64,
}

impl Plan {
    /// A plan carrying only a name and a fixed monthly fee.
    pub fn fixed(name: &str, fixed_fee: f64) -> Self {
        Self {
            name: name.to_string(),
            fixed_fee,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// PricingPolicy
// ---------------------------------------------------------------------------

/// How the per-order and percentage-of-sale terms combine into a price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PricingPolicy {
    /// Fixed fee plus whichever variable term is larger.
    #[default]
    Max,
    /// Fixed fee plus both variable terms.
    Sum,
    /// Fixed fee plus the percentage-of-sale term only.
    PercentOnly,
}

impl PricingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingPolicy::Max => "max",
            PricingPolicy::Sum => "sum",
            PricingPolicy::PercentOnly => "percent_only",
        }
    }
}

impl std::str::FromStr for PricingPolicy {
    type Err = crate::error::PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "max" => Ok(PricingPolicy::Max),
            "sum" => Ok(PricingPolicy::Sum),
            "percent_only" | "percent" => Ok(PricingPolicy::PercentOnly),
            other => Err(crate::error::PlannerError::InvalidArgument(format!(
                "Unknown pricing policy: {}",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// PriceBreakdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct PriceBreakdown {
    pub fixed_fee: f64,
    pub by_order: f64,
    pub by_percent: f64,
    pub price: f64,
}

// ---------------------------------------------------------------------------
// PlanShareSet
// ---------------------------------------------------------------------------

/// Adoption weights (in percent) keyed by plan name.
///
/// Weights are expected to sum to 100 but nothing enforces it: the
/// aggregator scales its output by whatever weights it is given.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct PlanShareSet {
    weights: BTreeMap<String, f64>,
}

impl PlanShareSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, plan: &str, share_pct: f64) -> Self {
        self.set(plan, share_pct);
        self
    }

    pub fn set(&mut self, plan: &str, share_pct: f64) {
        self.weights.insert(plan.to_string(), share_pct);
    }

    /// Weight for `plan`, or 0 when the plan has no entry.
    pub fn share(&self, plan: &str) -> f64 {
        self.weights.get(plan).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// True when the weights add up to 100 (within a cent of a percent).
    pub fn is_balanced(&self) -> bool {
        (self.total() - 100.0).abs() < 0.01
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(String, f64)> for PlanShareSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
