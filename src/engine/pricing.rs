//! Monthly price of a subscription plan.

use crate::models::{Plan, PriceBreakdown, PricingPolicy};

/// Price `plan` under `policy`.
///
/// A variable term only counts when all of its factors are strictly
/// positive, so the result is never below the fixed fee.
pub fn price(plan: &Plan, policy: PricingPolicy) -> f64 {
    price_breakdown(plan, policy).price
}

/// Price `plan` and return the fixed and variable components alongside it.
pub fn price_breakdown(plan: &Plan, policy: PricingPolicy) -> PriceBreakdown {
    let orders = plan.monthly_orders as f64;

    let by_order = if plan.monthly_orders > 0 && plan.price_per_order > 0.0 {
        orders * plan.price_per_order
    } else {
        0.0
    };

    let by_percent =
        if plan.monthly_orders > 0 && plan.avg_ticket > 0.0 && plan.sale_percentage > 0.0 {
            orders * plan.avg_ticket * (plan.sale_percentage / 100.0)
        } else {
            0.0
        };

    let variable = match policy {
        PricingPolicy::Max => by_order.max(by_percent),
        PricingPolicy::Sum => by_order + by_percent,
        PricingPolicy::PercentOnly => by_percent,
    };

    PriceBreakdown {
        fixed_fee: plan.fixed_fee,
        by_order,
        by_percent,
        price: plan.fixed_fee + variable,
    }
}
