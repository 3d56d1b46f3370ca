//! Exact and free-text filtering.

use std::borrow::Borrow;

use crate::Parameters;
use crate::error::ViewError;
use crate::model::Column;
use crate::model::FieldPath;
use crate::model::Record;
use crate::model::Value;

fn search_term(params: &Parameters) -> Option<&str> {
    params.filter_value.as_deref().filter(|value| !value.is_empty())
}

/// Keeps the items whose `filter_column` value equals `filter_value`.
///
/// Only string values can match, and they must match exactly. An empty or
/// absent filter value keeps every item.
///
/// # Errors
///
/// Returns [`ViewError::ColumnNotFound`] if `filter_column` is absent or not
/// one of the configured columns.
pub fn exact_filter<T>(params: &Parameters, items: &[T]) -> Result<Vec<T>, ViewError>
where
    T: Borrow<Record> + Clone,
{
    let Some(value) = search_term(params) else {
        return Ok(items.to_vec());
    };

    let column_id = params.filter_column.as_deref().unwrap_or_default();
    let path = Column::find(&params.columns, column_id)?.field_path();

    Ok(items
        .iter()
        .filter(|item| path.resolve((*item).borrow()).and_then(Value::as_str) == Some(value))
        .cloned()
        .collect())
}

/// Keeps the items where any filterable column contains `filter_value`.
///
/// Matching is a case-insensitive substring test on the value's text form.
/// Missing values never match. Commas are dropped from the search term when
/// it is tested against a number, so `"1,200"` finds `1200`. Lists are
/// searched as their elements joined with `,`.
///
/// An empty or absent filter value, or a column set with no filterable
/// columns, keeps every item.
pub fn filter<T>(params: &Parameters, items: &[T]) -> Vec<T>
where
    T: Borrow<Record> + Clone,
{
    let Some(term) = search_term(params) else {
        return items.to_vec();
    };

    let paths: Vec<FieldPath> = params
        .columns
        .iter()
        .filter(|column| column.filter)
        .map(Column::field_path)
        .collect();

    if paths.is_empty() {
        return items.to_vec();
    }

    let matcher = TextMatcher::new(term);
    items
        .iter()
        .filter(|item| {
            let record = (*item).borrow();
            paths
                .iter()
                .any(|path| path.resolve(record).is_some_and(|value| matcher.matches(value)))
        })
        .cloned()
        .collect()
}

struct TextMatcher {
    term: String,
    numeric_term: String,
}

impl TextMatcher {
    fn new(term: &str) -> Self {
        let term = term.to_lowercase();
        let numeric_term = term.replace(',', "");
        Self { term, numeric_term }
    }

    fn matches(&self, value: &Value) -> bool {
        let Some(text) = value.to_text() else {
            return false;
        };
        let term = if value.is_number() {
            &self.numeric_term
        } else {
            &self.term
        };
        text.to_lowercase().contains(term.as_str())
    }
}
