//! Fixed-size paging over filtered entries.

/// One page of results (1-based page numbers).
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Whether paging controls are worth showing at all.
    pub fn is_paged(&self) -> bool {
        self.total_pages > 1
    }
}

/// Slice `items` into page `page` of `per_page` items.
///
/// `page` is clamped into range and `per_page` of zero is treated as one.
/// An empty input yields page 1 of 1 with no items.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let number = page.clamp(1, total_pages);

    let items = items
        .into_iter()
        .skip((number - 1) * per_page)
        .take(per_page)
        .collect();

    Page {
        items,
        number,
        total_pages,
        total_items,
    }
}
