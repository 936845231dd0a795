//! Error types

/// Errors raised by a table configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// None of the columns identifies a row.
    #[error("no column is marked as primary")]
    NoPrimaryColumn,

    /// More than one column claims to identify a row.
    #[error("several columns are marked as primary: {}", keys.join(", "))]
    MultiplePrimaryColumns {
        /// Keys of the primary columns, in column order.
        keys: Vec<String>,
    },

    /// A column key that is not part of the table.
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}
