//! DuckDB connection wrapper used to read uploaded tables.
//!
//! Tables are never imported: every query reads the file in place through
//! DuckDB's `read_csv_auto`, so an upload can be re-read after editing.

use crate::error::{PlannerError, Result};
use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Rows of a query result with their column names, in source order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell of `row` under `column`, if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx)
    }
}

/// Wraps an in-memory DuckDB connection.
pub struct Connection {
    conn: DuckDbConnection,
}

impl Connection {
    /// Open an in-memory DuckDB database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Run a query and collect every row, keeping the column order.
    pub fn query_table(&self, sql: &str) -> Result<Table> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;

        // Column names are only known once the statement has executed
        let columns: Vec<String> = rows
            .as_ref()
            .ok_or_else(|| {
                PlannerError::InvalidArgument(format!("Query produced no statement: {}", sql))
            })?
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        let mut table = Table {
            columns,
            rows: Vec::new(),
        };
        while let Some(row) = rows.next()? {
            let cells = (0..table.columns.len())
                .map(|i| row.get_ref(i).map(cell_value))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            table.rows.push(cells);
        }
        Ok(table)
    }

    /// First column of the first row as a number.
    ///
    /// `None` when the result is empty or the cell is not numeric.
    pub fn query_f64(&self, sql: &str) -> Result<Option<f64>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        match rows.next()? {
            Some(row) => Ok(cell_value(row.get_ref(0)?).as_f64()),
            None => Ok(None),
        }
    }

    /// Column names of a CSV file, read from its header only.
    pub fn csv_columns(&self, path: &Path) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT column_name FROM (DESCRIBE SELECT * FROM {})",
            csv_source(path)?
        ))?;

        let mut rows = stmt.query([])?;
        let mut columns = Vec::new();
        while let Some(row) = rows.next()? {
            let name: String = row.get(0)?;
            columns.push(name);
        }
        Ok(columns)
    }
}

/// `read_csv_auto('<path>', header = true)` with the path escaped for SQL.
///
/// DuckDB table functions cannot take bound parameters for the file name,
/// so the path is quoted inline.
pub(crate) fn csv_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PlannerError::NotFound(format!(
            "Table file {} does not exist",
            path.display()
        )));
    }
    // Use forward slashes for DuckDB compatibility
    let path_str = path.to_string_lossy().replace('\\', "/").replace('\'', "''");
    Ok(format!("read_csv_auto('{}', header = true)", path_str))
}

fn cell_value(val: ValueRef<'_>) -> Value {
    match val {
        ValueRef::Null => Value::Null,
        ValueRef::Boolean(b) => Value::Bool(b),
        ValueRef::TinyInt(n) => Value::from(n),
        ValueRef::SmallInt(n) => Value::from(n),
        ValueRef::Int(n) => Value::from(n),
        ValueRef::BigInt(n) => Value::from(n),
        ValueRef::UTinyInt(n) => Value::from(n),
        ValueRef::USmallInt(n) => Value::from(n),
        ValueRef::UInt(n) => Value::from(n),
        ValueRef::UBigInt(n) => Value::from(n),
        ValueRef::HugeInt(n) => match i64::try_from(n) {
            Ok(i) => Value::from(i),
            Err(_) => Value::String(n.to_string()),
        },
        // non-finite floats become null
        ValueRef::Float(f) => Value::from(f64::from(f)),
        ValueRef::Double(f) => Value::from(f),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        _ => Value::Null,
    }
}
