//! View parameters

use serde::Deserialize;
use serde::Serialize;

use crate::change::SelectionSet;
use crate::model::Column;
use crate::model::FieldPath;
use crate::model::Record;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Field used for selection keys when no `selection_id` is configured.
pub const DEFAULT_SELECTION_ID: &str = "id";

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_sort_descending() -> bool {
    true
}

/// Parameters describing how a set of items is viewed.
///
/// Parameters are plain values: the view functions only read them and the
/// change functions in [`crate::change`] always return a new value. The
/// optional `filter_value`, `sort_column` and `page_number` fields switch the
/// matching stage of [`crate::view::prepare`] on when present.
///
/// # Example
///
/// ```
/// use tabular_lib::Parameters;
/// use tabular_lib::model::Column;
///
/// let params = Parameters::new(vec![Column::new("name", "Name").sortable().filterable()])
///     .with_sort("name", false)
///     .with_filter("do")
///     .with_page(1)
///     .with_page_size(25);
///
/// assert_eq!(params.page_number, Some(1));
/// assert_eq!(params.page_size, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    /// Column configuration.
    #[serde(default)]
    pub columns: Vec<Column>,

    /// Id of the column to sort on.
    #[serde(default)]
    pub sort_column: Option<String>,

    /// Whether the sort is descending.
    ///
    /// Default: `true`
    #[serde(default = "default_sort_descending")]
    pub sort_descending: bool,

    /// Search term, or exact value when used with `filter_column`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_value: Option<String>,

    /// Id of the column used by [`crate::view::exact_filter`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_column: Option<String>,

    /// One-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<usize>,

    /// Number of items per page.
    ///
    /// Default: 10
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Keys of the selected items.
    #[serde(default, skip_serializing_if = "SelectionSet::is_empty")]
    pub selected: SelectionSet,

    /// Path of the field holding each item's selection key.
    ///
    /// Default: `"id"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_id: Option<String>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            sort_column: None,
            sort_descending: default_sort_descending(),
            filter_value: None,
            filter_column: None,
            page_number: None,
            page_size: DEFAULT_PAGE_SIZE,
            selected: SelectionSet::new(),
            selection_id: None,
        }
    }
}

impl Parameters {
    /// Creates parameters for the given columns with default settings.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Sets the sort column and direction.
    pub fn with_sort(mut self, column: impl Into<String>, descending: bool) -> Self {
        self.sort_column = Some(column.into());
        self.sort_descending = descending;
        self
    }

    /// Sets the filter value.
    pub fn with_filter(mut self, value: impl Into<String>) -> Self {
        self.filter_value = Some(value.into());
        self
    }

    /// Sets the column used for exact filtering.
    pub fn with_filter_column(mut self, column: impl Into<String>) -> Self {
        self.filter_column = Some(column.into());
        self
    }

    /// Sets the page number.
    pub fn with_page(mut self, page_number: usize) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the path of the selection key field.
    pub fn with_selection_id(mut self, selection_id: impl Into<String>) -> Self {
        self.selection_id = Some(selection_id.into());
        self
    }

    /// Replaces the selected keys.
    pub fn with_selected(mut self, selected: SelectionSet) -> Self {
        self.selected = selected;
        self
    }

    /// Returns the parsed path of the selection key field.
    pub fn selection_path(&self) -> FieldPath {
        FieldPath::parse(self.selection_id.as_deref().unwrap_or(DEFAULT_SELECTION_ID))
    }

    /// Returns the selection key of a record, if it has one.
    pub fn selection_key(&self, record: &Record) -> Option<String> {
        selection_key(&self.selection_path(), record)
    }
}

pub(crate) fn selection_key(path: &FieldPath, record: &Record) -> Option<String> {
    path.resolve(record)
        .and_then(|value| value.to_text())
        .map(|key| key.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let params: Parameters = serde_json::from_str("{}").unwrap();

        assert_eq!(params, Parameters::default());
        assert!(params.sort_descending);
        assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let params: Parameters = serde_json::from_value(serde_json::json!({
            "columns": [{"id": "name", "label": "Name", "filter": true}],
            "sortColumn": "name",
            "sortDescending": false,
            "filterValue": "do",
            "pageNumber": 2,
            "pageSize": 5,
            "selected": ["1", "4"],
            "selectionId": "key"
        }))
        .unwrap();

        assert_eq!(params.sort_column.as_deref(), Some("name"));
        assert!(!params.sort_descending);
        assert_eq!(params.filter_value.as_deref(), Some("do"));
        assert_eq!(params.page_number, Some(2));
        assert_eq!(params.page_size, 5);
        assert!(params.selected.contains("4"));
        assert_eq!(params.selection_id.as_deref(), Some("key"));
    }

    #[test]
    fn test_selection_key() {
        let record = Record::new()
            .set("id", 12i64)
            .set("meta", Record::new().set("key", "k-12"));

        assert_eq!(Parameters::default().selection_key(&record).as_deref(), Some("12"));
        assert_eq!(
            Parameters::default()
                .with_selection_id("meta.key")
                .selection_key(&record)
                .as_deref(),
            Some("k-12")
        );
        assert_eq!(
            Parameters::default().with_selection_id("missing").selection_key(&record),
            None
        );
    }
}
