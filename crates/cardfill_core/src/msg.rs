/// Direction of a prev/next page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Previous,
    Next,
}

impl PageStep {
    /// Applies the step to `current_page`, staying within `1..=total_pages`.
    pub fn apply(self, current_page: usize, total_pages: usize) -> usize {
        let last = total_pages.max(1);
        match self {
            PageStep::Previous => current_page.saturating_sub(1).clamp(1, last),
            PageStep::Next => current_page.saturating_add(1).clamp(1, last),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMsg {
    /// User edited the search box.
    KeywordChanged(String),
    /// User picked a category/status from the filter dropdown (`None` = all).
    FilterChanged(Option<String>),
    /// User pressed the search button with both inputs at once.
    SearchSubmitted {
        keyword: String,
        filter: Option<String>,
    },
    /// User clicked the previous-page button.
    PreviousPage,
    /// User clicked the next-page button.
    NextPage,
    /// User picked a different page size.
    PageSizeChanged(usize),
    /// Data changed underneath the screen (e.g. after an edit dialog closed).
    Refresh,
}
