//! TAM/SAM market sizing for a trade corridor.

/// Sellers expected to adopt the hub: `total_sellers * adoption_rate_pct / 100`.
pub fn serviceable_sellers(total_sellers: u64, adoption_rate_pct: f64) -> f64 {
    total_sellers as f64 * (adoption_rate_pct / 100.0)
}

/// Potential revenue of a corridor for one period.
///
/// No rounding and no range checks; an out-of-range adoption rate simply
/// scales the result.
pub fn estimate_revenue(total_sellers: u64, adoption_rate_pct: f64, avg_order_value: f64) -> f64 {
    serviceable_sellers(total_sellers, adoption_rate_pct) * avg_order_value
}
