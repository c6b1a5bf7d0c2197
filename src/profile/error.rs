//! Error types for table profiling

use thiserror::Error;

use super::kind::ValueKind;

/// Errors that abort profiling of a table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Requested table is not in the database
    #[error("Table {0} not found")]
    TableNotFound(String),

    /// Requested table has no rows
    #[error("Table {0} is empty")]
    EmptyTable(String),

    /// Column count exceeds what the subset enumeration can address
    #[error("Too many columns for candidate key search: {count} > {max}")]
    TooManyColumns { count: usize, max: usize },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for ProfileError {
    fn from(e: serde_json::Error) -> Self {
        ProfileError::JsonParse(e.to_string())
    }
}

/// Malformed input that was skipped while building a database
///
/// These never abort processing; the offending table or row is dropped and
/// the rest of the input is still used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputIssue {
    /// The document root is not an object of tables
    #[error("Expected an object of tables at root, found {found}")]
    RootNotObject { found: ValueKind },

    /// A table value is not an array; the table is treated as empty
    #[error("Expected an array for table {table}, found {found}")]
    TableNotArray { table: String, found: ValueKind },

    /// A row is not an object; the row is skipped
    #[error("Expected object rows in table {table}, found {found} at index {index}")]
    RowNotObject {
        table: String,
        index: usize,
        found: ValueKind,
    },
}
