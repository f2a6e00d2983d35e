use serde::{Deserialize, Serialize};

/// One page of an ordered sequence plus the page count for the whole
/// sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Slices the half-open window `[(page_number - 1) * page_size,
/// page_number * page_size)` out of an ordered sequence.
///
/// `page_number` is 1-based. `total_pages` is `ceil(len / page_size)`
/// floored at 1, so an empty sequence still reports one (empty) page and
/// the UI keeps a stable "Page 1 of 1" footer. Out-of-range requests,
/// including page 0, return an empty slice rather than an error; keeping
/// `page_number` inside `[1, total_pages]` is the caller's contract.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page_number: usize) -> Page<T> {
    if page_size == 0 {
        return Page {
            items: Vec::new(),
            total_pages: 1,
        };
    }

    let total_pages = items.len().div_ceil(page_size).max(1);

    if page_number == 0 {
        return Page {
            items: Vec::new(),
            total_pages,
        };
    }

    let start = (page_number - 1).saturating_mul(page_size);
    let page_items = if start >= items.len() {
        Vec::new()
    } else {
        let end = (start + page_size).min(items.len());
        items[start..end].to_vec()
    };

    Page {
        items: page_items,
        total_pages,
    }
}
