use logbook_lib::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("table error: {0}")]
    Table(#[from] TableError),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("collapsed_lines must be at least 1")]
    ZeroCollapsedLines,
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("invalid click position {0:?}, expected X,Y")]
    InvalidClick(String),
}
