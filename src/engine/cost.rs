//! Operating cost over a fixed horizon.

use crate::models::CostLineItem;

/// Cost of one item inside `horizon_months`.
pub fn item_cost(item: &CostLineItem, horizon_months: u32) -> f64 {
    item.amount * f64::from(item.effective_months(horizon_months))
}

/// Sum of all items, each truncated at the horizon boundary.
pub fn total_cost(items: &[CostLineItem], horizon_months: u32) -> f64 {
    items.iter().map(|i| item_cost(i, horizon_months)).sum()
}
