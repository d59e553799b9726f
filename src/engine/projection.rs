//! Seller-growth and recurring revenue projection.

use crate::models::{ProjectionRow, ProjectionSeries};

/// Project sellers and revenue for months `1..=horizon_months`.
///
/// Nothing happens before `start_month`. From then on the month's new
/// sellers are `initial_cohort * (1 + growth/100)^(month - start_month)`,
/// always reseeded from the initial cohort rather than the previous month.
/// Every seller acquired so far pays `weighted_price` each month.
///
/// Months are 1-based; a `start_month` of 0 is treated as month 1.
pub fn project(
    start_month: u32,
    initial_cohort: f64,
    cohort_growth_pct: f64,
    weighted_price: f64,
    horizon_months: u32,
) -> ProjectionSeries {
    let start_month = start_month.max(1);
    let growth = 1.0 + cohort_growth_pct / 100.0;
    let mut rows = Vec::with_capacity(horizon_months as usize);
    let mut cumulative_sellers = 0.0;
    let mut cumulative_revenue = 0.0;

    for month in 1..=horizon_months {
        let new_sellers = if month < start_month {
            0.0
        } else {
            let elapsed = (month - start_month) as i32;
            initial_cohort * growth.powi(elapsed)
        };

        cumulative_sellers += new_sellers;
        let monthly_revenue = cumulative_sellers * weighted_price;
        cumulative_revenue += monthly_revenue;

        rows.push(ProjectionRow {
            month,
            new_sellers,
            cumulative_sellers,
            monthly_revenue,
            cumulative_revenue,
        });
    }

    ProjectionSeries { rows }
}
