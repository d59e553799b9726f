//! Weighted multi-tier subscription revenue.

use crate::models::{PlanRevenue, PlanShareSet, SubscriptionRevenue};

/// Split `adopters` across plans by share and price each slice.
///
/// `prices` is `(plan name, monthly price)` in display order. Plans without
/// a share contribute nothing; shares that do not sum to 100 scale the
/// total proportionally.
pub fn aggregate<'a, I>(adopters: f64, shares: &PlanShareSet, prices: I) -> SubscriptionRevenue
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut per_plan = Vec::new();
    let mut total = 0.0;

    for (plan, price) in prices {
        let share_pct = shares.share(plan);
        let revenue = adopters * (share_pct / 100.0) * price;
        total += revenue;
        per_plan.push(PlanRevenue {
            plan: plan.to_string(),
            share_pct,
            price,
            revenue,
        });
    }

    SubscriptionRevenue {
        adopters,
        per_plan,
        total,
    }
}

/// Blended monthly price per seller: `sum(share / 100 * price)`.
pub fn weighted_price<'a, I>(shares: &PlanShareSet, prices: I) -> f64
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    prices
        .into_iter()
        .map(|(plan, price)| shares.share(plan) / 100.0 * price)
        .sum()
}
