//! Comparator and sorting.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::Parameters;
use crate::error::ViewError;
use crate::model::Column;
use crate::model::FieldPath;
use crate::model::Record;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9), missing values last.
    Asc,
    /// Descending order (Z-A, 9-0), missing values first.
    Desc,
}

impl Direction {
    /// Returns the direction for a `sort_descending` flag.
    pub fn from_descending(descending: bool) -> Self {
        if descending { Direction::Desc } else { Direction::Asc }
    }
}

/// Orders records by the value at a fixed path.
///
/// The ascending order puts records with a missing value after every record
/// that has one. The descending order is the ascending comparator with its
/// arguments flipped, so missing values come first there.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use tabular_lib::model::{FieldPath, Record};
/// use tabular_lib::view::{Comparator, Direction};
///
/// let frog = Record::new().set("name", "frog");
/// let unnamed = Record::new();
///
/// let asc = Comparator::new(FieldPath::parse("name"), Direction::Asc);
/// assert_eq!(asc.compare(&unnamed, &frog), Ordering::Greater);
///
/// let desc = Comparator::new(FieldPath::parse("name"), Direction::Desc);
/// assert_eq!(desc.compare(&unnamed, &frog), Ordering::Less);
/// ```
#[derive(Debug, Clone)]
pub struct Comparator {
    path: FieldPath,
    direction: Direction,
}

impl Comparator {
    /// Creates a comparator over `path` in the given direction.
    pub fn new(path: FieldPath, direction: Direction) -> Self {
        Self { path, direction }
    }

    /// Returns the path the comparator reads.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Returns the direction of the comparator.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Compares two records.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self.direction {
            Direction::Asc => self.ascending(a, b),
            Direction::Desc => self.ascending(b, a),
        }
    }

    fn ascending(&self, a: &Record, b: &Record) -> Ordering {
        match (self.path.resolve(a), self.path.resolve(b)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.compare(b),
        }
    }
}

/// Sorts a copy of `items` by the parameters' sort column.
///
/// Returns the items unchanged when no sort column is set. The sort is
/// stable, so records with equal values keep their relative order.
///
/// # Errors
///
/// Returns [`ViewError::ColumnNotFound`] if the sort column is not one of the
/// configured columns.
pub fn sort<T>(params: &Parameters, items: &[T]) -> Result<Vec<T>, ViewError>
where
    T: Borrow<Record> + Clone,
{
    let mut sorted = items.to_vec();

    let Some(sort_column) = params.sort_column.as_deref() else {
        return Ok(sorted);
    };

    let column = Column::find(&params.columns, sort_column)?;
    let comparator = Comparator::new(
        column.field_path(),
        Direction::from_descending(params.sort_descending),
    );

    log::trace!(
        "Sorting {} items by '{}' ({:?})",
        sorted.len(),
        comparator.path(),
        comparator.direction()
    );

    sorted.sort_by(|a, b| comparator.compare(a.borrow(), b.borrow()));
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn named(id: &str, name: impl Into<Value>) -> Record {
        Record::new().set("id", id).set("name", name)
    }

    fn ids(items: &[Record]) -> Vec<&str> {
        items
            .iter()
            .map(|item| item.get("id").and_then(Value::as_str).unwrap())
            .collect()
    }

    fn params() -> Parameters {
        Parameters::new(vec![
            Column::new("id", "ID").sortable(),
            Column::new("name", "Name").sortable(),
        ])
    }

    fn fruit() -> Vec<Record> {
        vec![
            named("1", "banana"),
            named("2", "apple"),
            named("3", Value::Null),
            named("4", "cat"),
            named("5", "aardvark"),
        ]
    }

    #[test]
    fn test_ascending_puts_missing_last() {
        let sorted = sort(&params().with_sort("name", false), &fruit()).unwrap();

        assert_eq!(ids(&sorted), vec!["5", "2", "1", "4", "3"]);
    }

    #[test]
    fn test_descending_puts_missing_first() {
        let sorted = sort(&params().with_sort("name", true), &fruit()).unwrap();

        assert_eq!(ids(&sorted), vec!["3", "4", "1", "2", "5"]);
    }

    #[test]
    fn test_absent_field_is_missing() {
        let items = vec![Record::new().set("id", "1"), named("2", "b"), named("3", "a")];

        let sorted = sort(&params().with_sort("name", false), &items).unwrap();
        assert_eq!(ids(&sorted), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_stable_for_equal_values() {
        let items = vec![
            named("1", "b"),
            named("2", "a"),
            named("3", "b"),
            named("4", "a"),
            named("5", "b"),
        ];

        let asc = sort(&params().with_sort("name", false), &items).unwrap();
        assert_eq!(ids(&asc), vec!["2", "4", "1", "3", "5"]);

        let desc = sort(&params().with_sort("name", true), &items).unwrap();
        assert_eq!(ids(&desc), vec!["1", "3", "5", "2", "4"]);
    }

    #[test]
    fn test_sort_by_nested_path() {
        let columns = vec![Column::new("owner", "Owner").path("owner.age")];
        let items: Vec<Record> = [("1", 40i64), ("2", 7), ("3", 23)]
            .into_iter()
            .map(|(id, age)| Record::new().set("id", id).set("owner", Record::new().set("age", age)))
            .collect();

        let sorted = sort(&Parameters::new(columns).with_sort("owner", false), &items).unwrap();
        assert_eq!(ids(&sorted), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_no_sort_column_passes_through() {
        let items = fruit();

        let sorted = sort(&params(), &items).unwrap();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_unknown_column() {
        let err = sort(&params().with_sort("age", true), &fruit()).unwrap_err();

        assert_eq!(err, ViewError::column_not_found("age"));
    }

    #[test]
    fn test_input_left_untouched() {
        let items = fruit();
        let before = items.clone();

        let _ = sort(&params().with_sort("name", false), &items).unwrap();
        assert_eq!(items, before);
    }
}
