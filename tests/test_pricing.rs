//! Plan pricing under each pricing policy.

mod common;

use hub_planner::engine::{price, price_breakdown};
use hub_planner::models::{Plan, PricingPolicy};

const POLICIES: [PricingPolicy; 3] = [
    PricingPolicy::Max,
    PricingPolicy::Sum,
    PricingPolicy::PercentOnly,
];

// ---------------------------------------------------------------------------
// Max (reference)
// ---------------------------------------------------------------------------

#[test]
fn max_policy_takes_larger_variable_term() {
    let plan = common::mixed_fee_plan();
    let b = price_breakdown(&plan, PricingPolicy::Max);
    common::assert_close(b.by_order, 200.0);
    common::assert_close(b.by_percent, 150.0);
    common::assert_close(b.price, 300.0);
}

#[test]
fn max_policy_picks_percent_when_it_is_larger() {
    let plan = Plan {
        sale_percentage: 5.0,
        ..common::mixed_fee_plan()
    };
    // by_order 200, by_percent 500
    common::assert_close(price(&plan, PricingPolicy::Max), 600.0);
}

// ---------------------------------------------------------------------------
// Sum
// ---------------------------------------------------------------------------

#[test]
fn sum_policy_adds_both_terms() {
    let plan = common::mixed_fee_plan();
    common::assert_close(price(&plan, PricingPolicy::Sum), 450.0);
}

// ---------------------------------------------------------------------------
// PercentOnly
// ---------------------------------------------------------------------------

#[test]
fn percent_only_policy_ignores_per_order_fee() {
    let plan = common::mixed_fee_plan();
    common::assert_close(price(&plan, PricingPolicy::PercentOnly), 250.0);
}

#[test]
fn percent_only_with_no_percentage_is_fixed_fee() {
    let plan = Plan {
        sale_percentage: 0.0,
        ..common::mixed_fee_plan()
    };
    common::assert_close(price(&plan, PricingPolicy::PercentOnly), 100.0);
}

// ---------------------------------------------------------------------------
// Term gating
// ---------------------------------------------------------------------------

#[test]
fn fixed_fee_only_plan_prices_at_fixed_fee() {
    let plan = Plan::fixed("Starter", 149.9);
    for policy in POLICIES {
        assert_eq!(price(&plan, policy), 149.9);
    }
}

#[test]
fn default_plan_prices_at_zero() {
    for policy in POLICIES {
        assert_eq!(price(&Plan::default(), policy), 0.0);
    }
}

#[test]
fn zero_orders_disable_both_terms() {
    let plan = Plan {
        monthly_orders: 0,
        ..common::mixed_fee_plan()
    };
    for policy in POLICIES {
        common::assert_close(price(&plan, policy), 100.0);
    }
}

#[test]
fn negative_rates_never_reduce_price() {
    let plan = Plan {
        fixed_fee: 80.0,
        monthly_orders: 10,
        avg_ticket: -50.0,
        sale_percentage: 10.0,
        price_per_order: -3.0,
        ..Plan::default()
    };
    let b = price_breakdown(&plan, PricingPolicy::Sum);
    assert_eq!(b.by_order, 0.0);
    assert_eq!(b.by_percent, 0.0);
    assert_eq!(b.price, 80.0);
}

#[test]
fn price_is_at_least_fixed_fee_for_assorted_plans() {
    let plans = [
        common::mixed_fee_plan(),
        Plan {
            monthly_orders: 1,
            price_per_order: 0.01,
            fixed_fee: 10.0,
            ..Plan::default()
        },
        Plan {
            monthly_orders: 5000,
            avg_ticket: 80.0,
            sale_percentage: 0.5,
            fixed_fee: 0.0,
            ..Plan::default()
        },
        Plan {
            fixed_fee: 50.0,
            sku_allowance: 10_000,
            marketplace_count: 12,
            ..Plan::default()
        },
    ];
    for plan in &plans {
        for policy in POLICIES {
            assert!(price(plan, policy) >= plan.fixed_fee);
        }
    }
}

#[test]
fn informational_fields_do_not_affect_price() {
    let base = common::mixed_fee_plan();
    let bigger = Plan {
        sku_allowance: 999,
        marketplace_count: 40,
        ..base.clone()
    };
    assert_eq!(
        price(&base, PricingPolicy::Max),
        price(&bigger, PricingPolicy::Max)
    );
}

// ---------------------------------------------------------------------------
// PricingPolicy parsing
// ---------------------------------------------------------------------------

#[test]
fn policy_parses_from_str() {
    assert_eq!("max".parse::<PricingPolicy>().unwrap(), PricingPolicy::Max);
    assert_eq!("SUM".parse::<PricingPolicy>().unwrap(), PricingPolicy::Sum);
    assert_eq!(
        "percent-only".parse::<PricingPolicy>().unwrap(),
        PricingPolicy::PercentOnly
    );
    assert!("median".parse::<PricingPolicy>().is_err());
}

#[test]
fn policy_defaults_to_max() {
    assert_eq!(PricingPolicy::default(), PricingPolicy::Max);
}

#[test]
fn partial_plan_json_fills_zeroes() {
    let plan: Plan = serde_json::from_str(r#"{"name": "Starter", "fixed_fee": 120.0}"#).unwrap();
    assert_eq!(plan.monthly_orders, 0);
    assert_eq!(plan.price_per_order, 0.0);
    assert_eq!(price(&plan, PricingPolicy::Max), 120.0);
}
