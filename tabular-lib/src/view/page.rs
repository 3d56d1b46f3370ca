//! Page arithmetic.
//!
//! Page numbers are one-based. A page size of zero is treated as one.

/// Returns the number of pages needed for `item_count` items.
///
/// There is always at least one page, even with no items.
pub fn count_pages(page_size: usize, item_count: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

/// Returns `true` if `page_number` is between 1 and the page count.
pub fn is_page_number_valid(page_number: usize, page_size: usize, item_count: usize) -> bool {
    (1..=count_pages(page_size, item_count)).contains(&page_number)
}

/// Returns the items on page `page_number`.
///
/// Pages past the end, and page 0, are empty.
pub fn paginate<T: Clone>(page_number: usize, page_size: usize, items: &[T]) -> Vec<T> {
    let page_size = page_size.max(1);
    let Some(first) = page_number
        .checked_sub(1)
        .map(|index| index.saturating_mul(page_size))
    else {
        return Vec::new();
    };

    items.iter().skip(first).take(page_size).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pages() {
        assert_eq!(count_pages(3, 0), 1);
        assert_eq!(count_pages(3, 1), 1);
        assert_eq!(count_pages(3, 3), 1);
        assert_eq!(count_pages(3, 4), 2);
        assert_eq!(count_pages(3, 5), 2);
        assert_eq!(count_pages(3, 6), 2);
        assert_eq!(count_pages(3, 7), 3);
    }

    #[test]
    fn test_count_pages_matches_ceil_division() {
        for page_size in 1..=7 {
            for item_count in 1..=50 {
                let expected = (item_count as f64 / page_size as f64).ceil() as usize;
                assert_eq!(count_pages(page_size, item_count), expected);
            }
        }
    }

    #[test]
    fn test_is_page_number_valid() {
        assert!(!is_page_number_valid(0, 3, 0));
        assert!(is_page_number_valid(1, 3, 0));
        assert!(!is_page_number_valid(2, 3, 0));
        assert!(is_page_number_valid(1, 3, 3));
        assert!(!is_page_number_valid(2, 3, 3));
        assert!(is_page_number_valid(3, 3, 7));
        assert!(!is_page_number_valid(4, 3, 7));
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=12).collect();

        assert_eq!(paginate(1, 5, &items), vec![1, 2, 3, 4, 5]);
        assert_eq!(paginate(2, 5, &items), vec![6, 7, 8, 9, 10]);
        assert_eq!(paginate(3, 5, &items), vec![11, 12]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=12).collect();

        assert!(paginate(4, 5, &items).is_empty());
        assert!(paginate(0, 5, &items).is_empty());
        assert!(paginate(usize::MAX, 5, &items).is_empty());
        assert!(paginate(1, 5, &Vec::<u32>::new()).is_empty());
    }

    #[test]
    fn test_zero_page_size_acts_as_one() {
        assert_eq!(count_pages(0, 4), 4);
        assert_eq!(paginate(2, 0, &[1, 2, 3]), vec![2]);
    }
}
