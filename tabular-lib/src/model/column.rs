//! Column configuration

use serde::Deserialize;
use serde::Serialize;

use super::FieldPath;
use crate::error::ViewError;

/// Column configuration.
///
/// Columns name the fields of the items that the view works with. The
/// `path` addresses the column's value inside an item and defaults to the
/// column `id`.
///
/// # Example
///
/// ```
/// use tabular_lib::model::Column;
///
/// let columns = vec![
///     Column::new("id", "ID").sortable(),
///     Column::new("owner", "Owner").path("owner.name").sortable().filterable(),
/// ];
///
/// assert_eq!(columns[0].data_path(), "id");
/// assert_eq!(columns[1].data_path(), "owner.name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique column identifier.
    pub id: String,
    /// Header text.
    #[serde(default)]
    pub label: String,
    /// Path into the item, when it differs from `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Whether the column can be sorted on.
    #[serde(default)]
    pub sort: bool,
    /// Whether the column takes part in free-text search.
    #[serde(default)]
    pub filter: bool,
}

impl Column {
    /// Creates a new column with the given id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: None,
            sort: false,
            filter: false,
        }
    }

    /// Sets the data path of the column.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Makes the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sort = true;
        self
    }

    /// Includes the column in free-text search.
    pub fn filterable(mut self) -> Self {
        self.filter = true;
        self
    }

    /// Returns the raw data path, falling back to the column id.
    pub fn data_path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.id)
    }

    /// Returns the parsed data path.
    pub fn field_path(&self) -> FieldPath {
        FieldPath::parse(self.data_path())
    }

    /// Finds the column with the given id.
    pub fn find<'a>(columns: &'a [Column], id: &str) -> Result<&'a Column, ViewError> {
        columns
            .iter()
            .find(|column| column.id == id)
            .ok_or_else(|| ViewError::column_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let column: Column = serde_json::from_str(r#"{"id": "name", "label": "Name"}"#).unwrap();

        assert_eq!(column, Column::new("name", "Name"));
        assert_eq!(column.data_path(), "name");
    }

    #[test]
    fn test_deserialize_flags_and_path() {
        let column: Column = serde_json::from_str(
            r#"{"id": "owner", "label": "Owner", "path": "owner.name", "sort": true, "filter": true}"#,
        )
        .unwrap();

        assert!(column.sort);
        assert!(column.filter);
        assert_eq!(column.data_path(), "owner.name");
    }

    #[test]
    fn test_find() {
        let columns = vec![Column::new("id", "ID"), Column::new("name", "Name")];

        assert_eq!(Column::find(&columns, "name").unwrap().label, "Name");
        assert_eq!(
            Column::find(&columns, "age").unwrap_err(),
            ViewError::column_not_found("age")
        );
    }
}
