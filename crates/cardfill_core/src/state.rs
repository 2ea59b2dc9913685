use std::ops::Range;

/// Search keyword plus the optional category/status filter of a screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    keyword: String,
    category_or_status: Option<String>,
}

impl FilterState {
    /// Builds a filter, trimming the keyword and treating a blank extra
    /// filter as "no filter".
    pub fn new(keyword: &str, category_or_status: Option<&str>) -> Self {
        let category_or_status = category_or_status
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned);
        Self {
            keyword: keyword.trim().to_owned(),
            category_or_status,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn category_or_status(&self) -> Option<&str> {
        self.category_or_status.as_deref()
    }
}

/// Pagination metadata for one rendered page.
///
/// `current_page` is 1-indexed and always within `1..=total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub total_pages: usize,
}

impl PageState {
    pub(crate) fn initial(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_records: 0,
            total_pages: 1,
        }
    }

    /// Derives the state for `total_records`, clamping `requested_page`.
    pub(crate) fn derive(requested_page: usize, page_size: usize, total_records: usize) -> Self {
        let total_pages = Self::pages_for(total_records, page_size);
        Self {
            current_page: requested_page.clamp(1, total_pages),
            page_size,
            total_records,
            total_pages,
        }
    }

    /// `max(1, ceil(total_records / page_size))`; an empty set still has one page.
    pub fn pages_for(total_records: usize, page_size: usize) -> usize {
        debug_assert!(page_size > 0);
        total_records.div_ceil(page_size).max(1)
    }

    /// "Page X of Y" as shown next to the prev/next controls.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Index range of the current page within the full result set.
    pub fn window(&self) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(self.total_records);
        let end = start.saturating_add(self.page_size).min(self.total_records);
        start..end
    }
}
