//! Shared test fixtures for the hub planner integration tests.
//!
//! Provides a planner backed by a temporary data directory, a CSV writer for
//! investment tables, and a float comparison helper.

#![allow(dead_code)]

use hub_planner::models::{Plan, PlanShareSet};
use hub_planner::HubPlanner;
use std::io::Write;
use std::path::PathBuf;

/// Build a planner whose scenario file lives in a fresh temp directory.
///
/// Returns `(HubPlanner, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test.
pub fn temp_planner() -> (HubPlanner, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let planner = HubPlanner::builder()
        .data_dir(tmp_dir.path())
        .build()
        .unwrap();
    (planner, tmp_dir)
}

/// Write `contents` to `name` inside `dir` and return its path.
pub fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    path
}

/// Assert two floats agree to within `1e-6` (relative for large values).
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-6_f64.max(expected.abs() * 1e-9);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

/// Growth tier with both variable fees: 100 orders at 100 average, 1.5% or 2.00 per order.
pub fn mixed_fee_plan() -> Plan {
    Plan {
        name: "Growth".to_string(),
        fixed_fee: 100.0,
        monthly_orders: 100,
        avg_ticket: 100.0,
        sale_percentage: 1.5,
        price_per_order: 2.0,
        ..Plan::default()
    }
}

pub fn tiered_prices() -> Vec<(&'static str, f64)> {
    vec![("Starter", 100.0), ("Growth", 300.0), ("Enterprise", 1000.0)]
}

pub fn reference_shares() -> PlanShareSet {
    PlanShareSet::new()
        .with("Starter", 40.0)
        .with("Growth", 40.0)
        .with("Enterprise", 20.0)
}
