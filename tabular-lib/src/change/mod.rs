//! Parameter reducer.
//!
//! A [`Change`] describes one user action on a table view (typing a search
//! term, clicking a column header, picking a page, selecting rows).
//! [`change`] applies it to the current [`Parameters`] and returns the next
//! parameters; the current value is only read.
//!
//! # Example
//!
//! ```
//! use tabular_lib::Parameters;
//! use tabular_lib::change::{Change, change};
//!
//! let params = Parameters::default().with_page(3);
//!
//! let next = change(&Change::Filter { value: "frog".into() }, &params).unwrap();
//! assert_eq!(next.filter_value.as_deref(), Some("frog"));
//! assert_eq!(next.page_number, Some(1));
//! assert_eq!(params.page_number, Some(3));
//! ```

mod selection;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de;

pub use selection::SelectionSet;

use crate::Parameters;
use crate::error::ChangeError;
use crate::model::Record;
use crate::model::Value;
use crate::params::selection_key;
use crate::view;

/// The kind of a [`Change`], as named by its `kind` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Filter,
    PageSize,
    Page,
    Sort,
    Select,
    SelectAll,
    DeselectAll,
    SelectAllDisplayed,
    DeselectAllDisplayed,
}

impl ChangeKind {
    /// All change kinds.
    pub const ALL: [ChangeKind; 9] = [
        ChangeKind::Filter,
        ChangeKind::PageSize,
        ChangeKind::Page,
        ChangeKind::Sort,
        ChangeKind::Select,
        ChangeKind::SelectAll,
        ChangeKind::DeselectAll,
        ChangeKind::SelectAllDisplayed,
        ChangeKind::DeselectAllDisplayed,
    ];

    /// Returns the tag used for this kind in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Filter => "filter",
            ChangeKind::PageSize => "pageSize",
            ChangeKind::Page => "page",
            ChangeKind::Sort => "sort",
            ChangeKind::Select => "select",
            ChangeKind::SelectAll => "selectAll",
            ChangeKind::DeselectAll => "deselectAll",
            ChangeKind::SelectAllDisplayed => "selectAllDisplayed",
            ChangeKind::DeselectAllDisplayed => "deselectAllDisplayed",
        }
    }
}

impl FromStr for ChangeKind {
    type Err = ChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChangeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ChangeError::invalid_kind(s))
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user action on the view parameters.
///
/// In JSON a change is an object tagged by `kind`:
///
/// ```json
/// {"kind": "sort", "value": "name"}
/// {"kind": "select", "id": "12"}
/// {"kind": "selectAllDisplayed", "items": [{"id": "1"}, {"id": "2"}]}
/// ```
///
/// Selection changes that act on a set of items carry those items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Change {
    /// Set the search term and go back to the first page.
    Filter { value: String },
    /// Set the page size and go back to the first page.
    PageSize { value: usize },
    /// Go to a page.
    Page { value: usize },
    /// Sort on a column, or flip the direction if already sorted on it.
    Sort { value: String },
    /// Toggle the selection of one key.
    Select {
        #[serde(deserialize_with = "deserialize_key")]
        id: String,
    },
    /// Select every item, regardless of the current view.
    SelectAll {
        #[serde(default)]
        items: Vec<Record>,
    },
    /// Clear the selection.
    DeselectAll,
    /// Select the items currently displayed.
    SelectAllDisplayed {
        #[serde(default)]
        items: Vec<Record>,
    },
    /// Deselect the items currently displayed.
    DeselectAllDisplayed {
        #[serde(default)]
        items: Vec<Record>,
    },
}

fn deserialize_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value.to_text().map(Cow::into_owned).ok_or_else(|| {
        de::Error::custom(format!(
            "expected a string or number id, got {}",
            value.type_name()
        ))
    })
}

impl Change {
    /// Returns the kind of this change.
    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Filter { .. } => ChangeKind::Filter,
            Change::PageSize { .. } => ChangeKind::PageSize,
            Change::Page { .. } => ChangeKind::Page,
            Change::Sort { .. } => ChangeKind::Sort,
            Change::Select { .. } => ChangeKind::Select,
            Change::SelectAll { .. } => ChangeKind::SelectAll,
            Change::DeselectAll => ChangeKind::DeselectAll,
            Change::SelectAllDisplayed { .. } => ChangeKind::SelectAllDisplayed,
            Change::DeselectAllDisplayed { .. } => ChangeKind::DeselectAllDisplayed,
        }
    }

    /// Decodes a change from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ChangeError::InvalidChangeKind`] if `kind` is missing or not
    /// a known kind, and [`ChangeError::Payload`] if the rest of the object
    /// does not fit that kind.
    pub fn from_json(json: serde_json::Value) -> Result<Self, ChangeError> {
        let Some(kind) = json.get("kind") else {
            return Err(ChangeError::invalid_kind(""));
        };
        if let serde_json::Value::String(kind) = kind {
            kind.parse::<ChangeKind>()?;
        } else {
            return Err(ChangeError::invalid_kind(kind.to_string()));
        }
        Ok(serde_json::from_value(json)?)
    }

    /// Supplies `items` to a selection change that carries none.
    pub fn with_default_items(mut self, default_items: &[Record]) -> Self {
        match &mut self {
            Change::SelectAll { items }
            | Change::SelectAllDisplayed { items }
            | Change::DeselectAllDisplayed { items }
                if items.is_empty() =>
            {
                *items = default_items.to_vec();
            }
            _ => {}
        }
        self
    }
}

impl FromStr for Change {
    type Err = ChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(serde_json::from_str(s)?)
    }
}

/// Applies `change` to `params` and returns the next parameters.
///
/// # Errors
///
/// Returns [`ChangeError::View`] if a displayed-items selection cannot run the
/// view pipeline, for example because the sort column does not exist.
pub fn change(change: &Change, params: &Parameters) -> Result<Parameters, ChangeError> {
    log::debug!("Applying {} change", change.kind());

    let next = match change {
        Change::Filter { value } => change_filter(value, params),
        Change::PageSize { value } => change_page_size(*value, params),
        Change::Page { value } => change_page(*value, params),
        Change::Sort { value } => change_sort(value, params),
        Change::Select { id } => select(id, params),
        Change::SelectAll { items } => select_all(items, params),
        Change::DeselectAll => deselect_all(params),
        Change::SelectAllDisplayed { items } => select_all_displayed(items, params)?,
        Change::DeselectAllDisplayed { items } => deselect_all_displayed(items, params)?,
    };
    Ok(next)
}

/// Sets the filter value and resets to the first page.
pub fn change_filter(filter_value: impl Into<String>, params: &Parameters) -> Parameters {
    Parameters {
        filter_value: Some(filter_value.into()),
        page_number: Some(1),
        ..params.clone()
    }
}

/// Sets the page size and resets to the first page.
pub fn change_page_size(page_size: usize, params: &Parameters) -> Parameters {
    Parameters {
        page_size,
        page_number: Some(1),
        ..params.clone()
    }
}

/// Sets the page number.
pub fn change_page(page_number: usize, params: &Parameters) -> Parameters {
    Parameters {
        page_number: Some(page_number),
        ..params.clone()
    }
}

/// Sorts on `sort_column`.
///
/// Sorting again on the current column flips the direction; a new column
/// always starts descending.
pub fn change_sort(sort_column: &str, params: &Parameters) -> Parameters {
    let sorted_by = params.sort_column.as_deref() == Some(sort_column);
    let sort_descending = if sorted_by {
        !params.sort_descending
    } else {
        true
    };

    Parameters {
        sort_column: Some(sort_column.to_string()),
        sort_descending,
        ..params.clone()
    }
}

/// Toggles the selection of `id`.
pub fn select(id: &str, params: &Parameters) -> Parameters {
    Parameters {
        selected: params.selected.toggled(id),
        ..params.clone()
    }
}

/// Selects every item in `items`, ignoring filter, sort and page.
pub fn select_all(items: &[Record], params: &Parameters) -> Parameters {
    Parameters {
        selected: params.selected.with_all(selection_keys(params, items)),
        ..params.clone()
    }
}

/// Clears the selection.
pub fn deselect_all(params: &Parameters) -> Parameters {
    Parameters {
        selected: SelectionSet::new(),
        ..params.clone()
    }
}

/// Selects the items of `items` that the current view displays.
///
/// # Errors
///
/// Returns [`ChangeError::View`] if the view pipeline fails.
pub fn select_all_displayed(items: &[Record], params: &Parameters) -> Result<Parameters, ChangeError> {
    let displayed = view::prepare(params, items)?;
    Ok(Parameters {
        selected: params.selected.with_all(selection_keys(params, displayed.items)),
        ..params.clone()
    })
}

/// Deselects the items of `items` that the current view displays.
///
/// # Errors
///
/// Returns [`ChangeError::View`] if the view pipeline fails.
pub fn deselect_all_displayed(
    items: &[Record],
    params: &Parameters,
) -> Result<Parameters, ChangeError> {
    let displayed = view::prepare(params, items)?;
    Ok(Parameters {
        selected: params.selected.without_all(selection_keys(params, displayed.items)),
        ..params.clone()
    })
}

fn selection_keys<'a>(
    params: &Parameters,
    items: impl IntoIterator<Item = &'a Record>,
) -> Vec<String> {
    let path = params.selection_path();
    items
        .into_iter()
        .filter_map(|item| selection_key(&path, item))
        .collect()
}
