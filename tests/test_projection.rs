//! Seller-growth projection and operating cost accumulation.

mod common;

use hub_planner::engine::{item_cost, project, total_cost};
use hub_planner::models::CostLineItem;

// ---------------------------------------------------------------------------
// project
// ---------------------------------------------------------------------------

#[test]
fn projection_covers_every_month_of_horizon() {
    let series = project(1, 10.0, 5.0, 50.0, 24);
    assert_eq!(series.horizon(), 24);
    let months: Vec<u32> = series.rows.iter().map(|r| r.month).collect();
    assert_eq!(months, (1..=24).collect::<Vec<u32>>());
}

#[test]
fn projection_delayed_start_cohort_growth() {
    let series = project(7, 10.0, 10.0, 50.0, 24);

    for month in 1..7 {
        let row = series.month(month).unwrap();
        assert_eq!(row.new_sellers, 0.0);
        assert_eq!(row.cumulative_revenue, 0.0);
    }

    let m7 = series.month(7).unwrap();
    common::assert_close(m7.new_sellers, 10.0);
    common::assert_close(m7.cumulative_sellers, 10.0);
    common::assert_close(m7.monthly_revenue, 500.0);

    let m8 = series.month(8).unwrap();
    common::assert_close(m8.new_sellers, 11.0);
    common::assert_close(m8.cumulative_sellers, 21.0);
    common::assert_close(m8.monthly_revenue, 1050.0);
    common::assert_close(m8.cumulative_revenue, 1550.0);

    let expected: f64 = 10.0 + (1..=5).map(|k| 10.0 * 1.1_f64.powi(k)).sum::<f64>();
    common::assert_close(series.month(12).unwrap().cumulative_sellers, expected);
}

#[test]
fn projection_reseeds_from_initial_cohort() {
    let series = project(1, 100.0, 50.0, 1.0, 4);
    let new: Vec<f64> = series.rows.iter().map(|r| r.new_sellers).collect();
    common::assert_close(new[0], 100.0);
    common::assert_close(new[1], 150.0);
    common::assert_close(new[2], 225.0);
    common::assert_close(new[3], 337.5);
}

#[test]
fn projection_zero_growth_is_flat_cohort() {
    let series = project(3, 25.0, 0.0, 10.0, 12);
    for row in series.rows.iter().filter(|r| r.month >= 3) {
        assert_eq!(row.new_sellers, 25.0);
    }
    assert_eq!(series.month(12).unwrap().cumulative_sellers, 250.0);
}

#[test]
fn projection_cumulative_series_never_decrease() {
    for growth in [0.0, 2.5, 10.0, 40.0] {
        let series = project(4, 7.0, growth, 33.0, 60);
        for pair in series.rows.windows(2) {
            assert!(pair[1].cumulative_sellers >= pair[0].cumulative_sellers);
            assert!(pair[1].cumulative_revenue >= pair[0].cumulative_revenue);
        }
    }
}

#[test]
fn projection_revenue_is_recurring_on_installed_base() {
    let series = project(1, 10.0, 0.0, 20.0, 3);
    // 10, 20, 30 sellers paying 20 each month
    common::assert_close(series.rows[0].monthly_revenue, 200.0);
    common::assert_close(series.rows[1].monthly_revenue, 400.0);
    common::assert_close(series.rows[2].monthly_revenue, 600.0);
    common::assert_close(series.last().unwrap().cumulative_revenue, 1200.0);
}

#[test]
fn projection_start_after_horizon_is_all_zero() {
    let series = project(30, 10.0, 10.0, 50.0, 24);
    assert_eq!(series.rows.len(), 24);
    assert!(series
        .rows
        .iter()
        .all(|r| r.new_sellers == 0.0 && r.cumulative_revenue == 0.0));
}

#[test]
fn projection_start_month_zero_reads_as_month_one() {
    let from_zero = project(0, 10.0, 10.0, 1.0, 3);
    let new: Vec<f64> = from_zero.rows.iter().map(|r| r.new_sellers).collect();
    common::assert_close(new[0], 10.0);
    common::assert_close(new[1], 11.0);
    assert_eq!(from_zero, project(1, 10.0, 10.0, 1.0, 3));
}

#[test]
fn projection_month_zero_is_out_of_range() {
    let series = project(1, 1.0, 0.0, 1.0, 5);
    assert!(series.month(0).is_none());
    assert!(series.month(6).is_none());
}

// ---------------------------------------------------------------------------
// total_cost
// ---------------------------------------------------------------------------

#[test]
fn total_cost_reference_items() {
    let items = vec![
        CostLineItem::new("team", 5000.0, 12, 1),
        CostLineItem::new("infrastructure", 3000.0, 12, 1),
        CostLineItem::new("marketing", 2000.0, 24, 1),
    ];
    common::assert_close(total_cost(&items, 24), 144_000.0);
}

#[test]
fn total_cost_truncates_at_horizon() {
    let item = CostLineItem::new("office", 1000.0, 12, 20);
    assert_eq!(item.effective_months(24), 5);
    common::assert_close(item_cost(&item, 24), 5000.0);
}

#[test]
fn total_cost_item_starting_past_horizon_is_zero() {
    assert_eq!(CostLineItem::new("late", 1000.0, 12, 25).effective_months(24), 0);
    assert_eq!(total_cost(&[CostLineItem::new("late", 1000.0, 12, 25)], 24), 0.0);
    assert_eq!(total_cost(&[CostLineItem::new("later", 1000.0, 12, 400)], 24), 0.0);
}

#[test]
fn total_cost_item_starting_on_last_month_counts_once() {
    common::assert_close(total_cost(&[CostLineItem::new("x", 750.0, 6, 24)], 24), 750.0);
}

#[test]
fn total_cost_zero_duration_is_zero() {
    assert_eq!(total_cost(&[CostLineItem::new("none", 900.0, 0, 1)], 24), 0.0);
}

#[test]
fn total_cost_of_no_items_is_zero() {
    assert_eq!(total_cost(&[], 24), 0.0);
}

#[test]
fn cost_item_defaults_start_at_month_one() {
    let item: CostLineItem = serde_json::from_str(r#"{"amount": 10.0, "duration_months": 3}"#).unwrap();
    assert_eq!(item.start_month, 1);
    common::assert_close(item_cost(&item, 24), 30.0);
}
