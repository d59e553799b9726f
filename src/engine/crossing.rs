//! Breakeven and payback detection.
//!
//! Both questions reduce to "first month a cumulative series reaches a
//! target": breakeven scans projected cumulative revenue against total cost,
//! payback scans net cash (revenue minus investment) against zero.

use crate::models::{Crossing, PaybackRow, PaybackSeries};

/// First month whose cumulative value is `>= target`.
///
/// `points` must be in month order.
pub fn find_crossing<I>(points: I, target: f64) -> Crossing
where
    I: IntoIterator<Item = (u32, f64)>,
{
    points
        .into_iter()
        .find(|(_, value)| *value >= target)
        .map_or(Crossing::NotReached, |(month, _)| Crossing::Month(month))
}

/// Net cash position for months `0..horizon_months`.
///
/// Month `k` earns `monthly_revenue * (1 + revenue_growth_pct/100)^k`; the
/// running total starts at `-investment`.
pub fn payback_series(
    investment: f64,
    monthly_revenue: f64,
    revenue_growth_pct: f64,
    horizon_months: u32,
) -> PaybackSeries {
    let growth = 1.0 + revenue_growth_pct / 100.0;
    let mut rows = Vec::with_capacity(horizon_months as usize);
    let mut revenue = monthly_revenue;
    let mut cumulative = -investment;

    for month in 0..horizon_months {
        cumulative += revenue;
        rows.push(PaybackRow {
            month,
            revenue,
            cumulative,
        });
        revenue *= growth;
    }

    PaybackSeries { rows }
}

/// Payback month: first month the net cash position reaches zero.
pub fn payback(
    investment: f64,
    monthly_revenue: f64,
    revenue_growth_pct: f64,
    horizon_months: u32,
) -> (PaybackSeries, Crossing) {
    let series = payback_series(investment, monthly_revenue, revenue_growth_pct, horizon_months);
    let crossing = find_crossing(series.cumulative(), 0.0);
    (series, crossing)
}
