#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Column '{column}' not found in {path}")]
    MissingColumn { column: String, path: String },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
