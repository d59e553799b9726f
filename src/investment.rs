//! Investment totals from an uploaded table or a manual figure.
//!
//! The engine only ever sees the resulting number; where it came from is
//! decided here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config;
use crate::connection::{csv_source, Connection, Table};
use crate::error::{PlannerError, Result};

// ---------------------------------------------------------------------------
// InvestmentQuery
// ---------------------------------------------------------------------------

/// Reads investment tables through the planner's DuckDB connection.
pub struct InvestmentQuery<'a> {
    conn: &'a Connection,
}

impl<'a> InvestmentQuery<'a> {
    /// Create a new `InvestmentQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Whether the CSV at `path` has the investment column.
    pub fn has_investment_column(&self, path: &Path) -> Result<bool> {
        let columns = self.conn.csv_columns(path)?;
        Ok(columns.iter().any(|c| c == config::INVESTMENT_COLUMN))
    }

    /// Sum of the investment column.
    ///
    /// Cells that are not numbers are skipped; an empty table sums to 0.
    /// Fails with [`PlannerError::MissingColumn`] when the header lacks the
    /// column.
    pub fn total_from_csv(&self, path: &Path) -> Result<f64> {
        if !self.has_investment_column(path)? {
            return Err(PlannerError::MissingColumn {
                column: config::INVESTMENT_COLUMN.to_string(),
                path: path.display().to_string(),
            });
        }

        let sql = format!(
            "SELECT COALESCE(SUM(TRY_CAST(\"{col}\" AS DOUBLE)), 0) AS total FROM {src}",
            col = config::INVESTMENT_COLUMN,
            src = csv_source(path)?
        );
        let total = self.conn.query_f64(&sql)?.unwrap_or(0.0);

        tracing::debug!("Investment total {:.2} from {}", total, path.display());
        Ok(total)
    }

    /// Every row of the table, for showing the upload back to the operator.
    pub fn table_from_csv(&self, path: &Path) -> Result<Table> {
        let sql = format!("SELECT * FROM {}", csv_source(path)?);
        self.conn.query_table(&sql)
    }
}

// ---------------------------------------------------------------------------
// InvestmentSource
// ---------------------------------------------------------------------------

/// Where the total investment comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentSource {
    Manual(f64),
    /// Sum the investment column of `path`; use `fallback` if the column is
    /// missing.
    Table { path: PathBuf, fallback: f64 },
}

impl InvestmentSource {
    /// Resolve to a number.
    ///
    /// A table without the investment column is not an error: a warning is
    /// logged and the manual fallback is used. Any other failure (missing
    /// file, unreadable CSV) is returned.
    pub fn resolve(&self, conn: &Connection) -> Result<f64> {
        match self {
            InvestmentSource::Manual(amount) => Ok(*amount),
            InvestmentSource::Table { path, fallback } => {
                match InvestmentQuery::new(conn).total_from_csv(path) {
                    Ok(total) => Ok(total),
                    Err(PlannerError::MissingColumn { column, path }) => {
                        tracing::warn!(
                            "Column '{}' not found in {}; using manual investment {:.2}",
                            column,
                            path,
                            fallback
                        );
                        Ok(*fallback)
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }
}
