use thiserror::Error;

/// Errors emitted by rule dispatch, factories, and output rendering.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid factory: {0}")]
    InvalidFactory(String),
    #[error("no rule matched field '{table}.{field}' and no catch-all rule is registered")]
    UnresolvedField { table: String, field: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
