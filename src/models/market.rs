use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Corridor
// ---------------------------------------------------------------------------

/// A directional cross-border trade scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Corridor {
    /// LATAM sellers exporting to the US (Amazon, eBay, ...).
    #[default]
    LatamToUs,
    /// US and Chinese sellers exporting to LATAM (Mercado Livre, Magalu, B2W, ...).
    UsChinaToLatam,
}

impl Corridor {
    pub fn all() -> [Corridor; 2] {
        [Corridor::LatamToUs, Corridor::UsChinaToLatam]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Corridor::LatamToUs => "latam_to_us",
            Corridor::UsChinaToLatam => "us_china_to_latam",
        }
    }
}

impl fmt::Display for Corridor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corridor::LatamToUs => write!(f, "LATAM -> US"),
            Corridor::UsChinaToLatam => write!(f, "US/China -> LATAM"),
        }
    }
}

// ---------------------------------------------------------------------------
// MarketCorridor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MarketCorridor {
    pub total_sellers: u64,
    /// Percentage in [0, 100]. Clamping is the input surface's job.
    pub adoption_rate_pct: f64,
    pub avg_order_value: f64,
    /// Expected monthly orders per sales channel. Display only.
    pub channel_orders: BTreeMap<String, u64>,
}

impl MarketCorridor {
    pub fn new(total_sellers: u64, adoption_rate_pct: f64, avg_order_value: f64) -> Self {
        Self {
            total_sellers,
            adoption_rate_pct,
            avg_order_value,
            channel_orders: BTreeMap::new(),
        }
    }

    pub fn with_channel(mut self, channel: &str, orders: u64) -> Self {
        self.channel_orders.insert(channel.to_string(), orders);
        self
    }

    pub fn total_channel_orders(&self) -> u64 {
        self.channel_orders.values().sum()
    }
}

// ---------------------------------------------------------------------------
// CorridorSizing
// ---------------------------------------------------------------------------

/// Market-sizing output for one corridor.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CorridorSizing {
    pub total_sellers: u64,
    pub adoption_rate_pct: f64,
    pub avg_order_value: f64,
    /// SAM in whole sellers (fractional adopters truncated).
    pub serviceable_sellers: u64,
    pub potential_revenue: f64,
    pub channel_orders: u64,
}

pub type MarketSizing = BTreeMap<Corridor, CorridorSizing>;
