use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ProjectionSeries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct ProjectionRow {
    pub month: u32,
    pub new_sellers: f64,
    pub cumulative_sellers: f64,
    pub monthly_revenue: f64,
    pub cumulative_revenue: f64,
}

/// Month-by-month seller and revenue projection, months `1..=horizon`.
///
/// Fully materialized: consumers index into prior cumulative values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProjectionSeries {
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionSeries {
    pub fn horizon(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Row for a 1-based month, if it lies inside the horizon.
    pub fn month(&self, month: u32) -> Option<&ProjectionRow> {
        if month == 0 {
            return None;
        }
        self.rows.get((month - 1) as usize)
    }

    pub fn last(&self) -> Option<&ProjectionRow> {
        self.rows.last()
    }

    /// `(month, cumulative_revenue)` pairs, the shape the crossing detector scans.
    pub fn cumulative_revenue(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.rows.iter().map(|r| (r.month, r.cumulative_revenue))
    }
}

// ---------------------------------------------------------------------------
// PaybackSeries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct PaybackRow {
    pub month: u32,
    pub revenue: f64,
    pub cumulative: f64,
}

/// Net cash position month by month, months `0..horizon`, starting from
/// `-investment`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PaybackSeries {
    pub rows: Vec<PaybackRow>,
}

impl PaybackSeries {
    pub fn cumulative(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.rows.iter().map(|r| (r.month, r.cumulative))
    }
}

// ---------------------------------------------------------------------------
// Crossing
// ---------------------------------------------------------------------------

/// Outcome of scanning a cumulative series against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Crossing {
    Month(u32),
    NotReached,
}

impl Crossing {
    pub fn month(&self) -> Option<u32> {
        match self {
            Crossing::Month(m) => Some(*m),
            Crossing::NotReached => None,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Crossing::Month(_))
    }
}

impl From<Option<u32>> for Crossing {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Crossing::NotReached, Crossing::Month)
    }
}

impl From<Crossing> for Option<u32> {
    fn from(value: Crossing) -> Self {
        value.month()
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crossing::Month(m) => write!(f, "month {}", m),
            Crossing::NotReached => write!(f, "not reached"),
        }
    }
}
