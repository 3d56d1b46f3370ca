//! View pipeline error types

/// Errors that can occur while preparing a view of the items.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// A sort or filter column id has no matching entry in the columns.
    #[error("Column '{column}' not found")]
    ColumnNotFound { column: String },
}

impl ViewError {
    /// Creates a new column not found error.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }
}
