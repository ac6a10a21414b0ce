//! Error types for prompt formatting.
//!
//! Uses thiserror for derive macros. Every lookup that would index past the
//! table surfaces here instead of panicking.

use thiserror::Error;

/// Main error type for mmlu-prompt operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// A row index at or past the table's row count was requested.
    #[error("row {row} is out of range for a table with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    /// A column index at or past the table's column count was requested.
    #[error("column {column} is out of range for a table with {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },

    /// The table has more option columns than there are choice letters.
    #[error("table has {options} option columns but only {max} choice letters exist")]
    TooManyOptions { options: usize, max: usize },

    /// The table cannot hold both a question and an answer column.
    #[error("table needs at least 2 columns (question and answer), found {columns}")]
    TooFewColumns { columns: usize },

    /// A row's width does not match the table's column count.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An example count below -1 was given.
    #[error("invalid example count {0}: expected -1 (all rows) or a non-negative count")]
    InvalidShots(i64),

    /// Config could not be read, parsed, or validated.
    #[error("{0}")]
    Config(String),
}

/// Result type alias for mmlu-prompt operations.
pub type Result<T> = std::result::Result<T, PromptError>;
