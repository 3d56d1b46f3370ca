//! Derived views over a slice of records.
//!
//! Every function here reads its inputs and returns new vectors; neither the
//! parameters nor the items are changed. The stage functions are generic over
//! `T: Borrow<Record> + Clone`, so they work on owned records as well as on
//! references into the caller's slice.
//!
//! [`prepare`] runs the stages in a fixed order:
//!
//! 1. [`filter`] when a filter value is present
//! 2. [`sort`] when a sort column is present
//! 3. pagination when a page number is present

mod filter;
mod order;
pub mod page;

use serde::Serialize;

pub use filter::exact_filter;
pub use filter::filter;
pub use order::Comparator;
pub use order::Direction;
pub use order::sort;

use crate::Parameters;
use crate::error::ViewError;
use crate::model::Record;

/// Result of [`prepare`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prepared<'a> {
    /// The filtered, sorted and paginated items.
    pub items: Vec<&'a Record>,
    /// Number of items left after filtering, before pagination.
    pub filtered_count: usize,
}

impl Prepared<'_> {
    /// Returns owned copies of the prepared items.
    pub fn to_records(&self) -> Vec<Record> {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

/// Filters, sorts and paginates `items` according to `params`.
///
/// # Errors
///
/// Returns [`ViewError::ColumnNotFound`] if the sort column is not one of the
/// configured columns.
///
/// # Example
///
/// ```
/// use tabular_lib::Parameters;
/// use tabular_lib::model::{Column, Record};
/// use tabular_lib::view::prepare;
///
/// let items: Vec<Record> = ["frog", "dog", "dolphin"]
///     .into_iter()
///     .map(|name| Record::new().set("name", name))
///     .collect();
/// let params = Parameters::new(vec![Column::new("name", "Name").filterable()])
///     .with_filter("do")
///     .with_sort("name", false)
///     .with_page(1)
///     .with_page_size(1);
///
/// let prepared = prepare(&params, &items).unwrap();
/// assert_eq!(prepared.filtered_count, 2);
/// assert_eq!(prepared.items, vec![&items[1]]);
/// ```
pub fn prepare<'a>(params: &Parameters, items: &'a [Record]) -> Result<Prepared<'a>, ViewError> {
    let mut prepared: Vec<&'a Record> = items.iter().collect();
    let mut filtered_count = prepared.len();

    if params.filter_value.is_some() {
        prepared = filter(params, &prepared);
        filtered_count = prepared.len();
    }

    if params.sort_column.is_some() {
        prepared = sort(params, &prepared)?;
    }

    if let Some(page_number) = params.page_number {
        prepared = page::paginate(page_number, params.page_size, &prepared);
    }

    log::debug!(
        "Prepared {} of {} items ({} after filtering)",
        prepared.len(),
        items.len(),
        filtered_count
    );

    Ok(Prepared {
        items: prepared,
        filtered_count,
    })
}

/// Returns the number of pages `items` spans at the parameters' page size.
pub fn count_pages<T>(params: &Parameters, items: &[T]) -> usize {
    page::count_pages(params.page_size, items.len())
}

/// Returns `true` if the parameters' page number exists for `items`.
///
/// An absent page number is never valid.
pub fn is_page_number_valid<T>(params: &Parameters, items: &[T]) -> bool {
    params
        .page_number
        .is_some_and(|page_number| page::is_page_number_valid(page_number, params.page_size, items.len()))
}

/// Negation of [`is_page_number_valid`].
pub fn is_page_number_invalid<T>(params: &Parameters, items: &[T]) -> bool {
    !is_page_number_valid(params, items)
}

/// Returns the page of `items` selected by the parameters.
///
/// Without a page number the items are returned unpaged.
pub fn paginate<T: Clone>(params: &Parameters, items: &[T]) -> Vec<T> {
    match params.page_number {
        Some(page_number) => page::paginate(page_number, params.page_size, items),
        None => items.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    fn letters() -> Vec<Record> {
        ["c", "a", "e", "b", "d", "f", "g"]
            .into_iter()
            .map(|name| Record::new().set("name", name))
            .collect()
    }

    fn params() -> Parameters {
        Parameters::new(vec![Column::new("name", "Name").sortable().filterable()])
    }

    #[test]
    fn test_prepare_without_stages_passes_through() {
        let items = letters();

        let prepared = prepare(&params(), &items).unwrap();
        assert_eq!(prepared.to_records(), items);
        assert_eq!(prepared.filtered_count, 7);
    }

    #[test]
    fn test_prepare_filters_before_paginating() {
        let items: Vec<Record> = ["ab", "b", "ac", "c", "ad"]
            .into_iter()
            .map(|name| Record::new().set("name", name))
            .collect();

        let prepared = prepare(&params().with_filter("a").with_page(2).with_page_size(2), &items)
            .unwrap();
        assert_eq!(prepared.items, vec![&items[4]]);
        assert_eq!(prepared.filtered_count, 3);
    }

    #[test]
    fn test_prepare_sorts_before_paginating() {
        let items = letters();

        let prepared = prepare(
            &params().with_sort("name", false).with_page(1).with_page_size(3),
            &items,
        )
        .unwrap();
        assert_eq!(prepared.items, vec![&items[1], &items[3], &items[0]]);
        assert_eq!(prepared.filtered_count, 7);
    }

    #[test]
    fn test_prepare_propagates_missing_column() {
        let err = prepare(&params().with_sort("age", false), &letters()).unwrap_err();

        assert_eq!(err, ViewError::column_not_found("age"));
    }

    #[test]
    fn test_prepared_serializes_camel_case() {
        let items = letters();
        let prepared = prepare(&params().with_filter("g"), &items).unwrap();

        assert_eq!(
            serde_json::to_value(&prepared).unwrap(),
            serde_json::json!({"items": [{"name": "g"}], "filteredCount": 1})
        );
    }

    #[test]
    fn test_page_helpers() {
        let items = letters();
        let params = params().with_page_size(3);

        assert_eq!(count_pages(&params, &items), 3);
        assert!(is_page_number_invalid(&params, &items));
        assert!(is_page_number_valid(&params.clone().with_page(3), &items));
        assert!(is_page_number_invalid(&params.clone().with_page(4), &items));
        assert_eq!(paginate(&params.clone().with_page(3), &items), vec![items[6].clone()]);
        assert_eq!(paginate(&params, &items), items);
    }
}
