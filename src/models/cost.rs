use serde::{Deserialize, Serialize};

/// One operating-cost stream: `amount` per month for `duration_months`,
/// starting at `start_month` (1-based).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CostLineItem {
    pub label: String,
    pub amount: f64,
    pub duration_months: u32,
    pub start_month: u32,
}

impl Default for CostLineItem {
    fn default() -> Self {
        Self {
            label: String::new(),
            amount: 0.0,
            duration_months: 0,
            start_month: 1,
        }
    }
}

impl CostLineItem {
    pub fn new(label: &str, amount: f64, duration_months: u32, start_month: u32) -> Self {
        Self {
            label: label.to_string(),
            amount,
            duration_months,
            start_month,
        }
    }

    /// Months of this item that fall inside `horizon_months`.
    ///
    /// `clamp(duration, 0, horizon - start + 1)`, computed in signed
    /// arithmetic so a start far past the horizon yields 0.
    pub fn effective_months(&self, horizon_months: u32) -> u32 {
        let remaining = i64::from(horizon_months) - i64::from(self.start_month) + 1;
        let months = i64::from(self.duration_months).min(remaining).max(0);
        months as u32
    }
}
