//! The financial projection engine.
//!
//! Every function here is pure and infallible: inputs are trusted as given
//! (zero or negative values included) and outputs are plain numbers or
//! materialized series.

pub mod aggregate;
pub mod cost;
pub mod crossing;
pub mod market;
pub mod pricing;
pub mod projection;

pub use aggregate::{aggregate, weighted_price};
pub use cost::{item_cost, total_cost};
pub use crossing::{find_crossing, payback, payback_series};
pub use market::{estimate_revenue, serviceable_sellers};
pub use pricing::{price, price_breakdown};
pub use projection::project;
