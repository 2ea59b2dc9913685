use cardfill_logging::{admin_debug, admin_warn};

use crate::aggregate::Counter;
use crate::{
    Aggregates, ConfigError, FilterState, ListError, PageState, PageStep, PageView, RecordSource,
};

/// Search, filter and pagination state for one list screen.
///
/// Every mutator ends in a full re-query: the source returns the whole
/// matching set, the controller derives the page window from it and counts
/// the declared aggregates over the whole set, not just the visible page.
/// A failed query leaves the filter, the page state and the last view as
/// they were.
pub struct PagedListController<S: RecordSource> {
    source: S,
    filter: FilterState,
    counters: Vec<Counter<S::Record>>,
    view: PageView<S::Record>,
}

impl<S: RecordSource> PagedListController<S> {
    /// Creates a controller on page 1 with an empty filter. Nothing is
    /// queried until the first [`refresh`](Self::refresh).
    pub fn new(source: S, page_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(Self {
            source,
            filter: FilterState::default(),
            counters: Vec::new(),
            view: PageView {
                items: Vec::new(),
                state: PageState::initial(page_size),
                aggregates: Aggregates::default(),
            },
        })
    }

    /// Declares a counter reported in every view's aggregates.
    pub fn with_counter(
        mut self,
        label: impl Into<String>,
        predicate: impl Fn(&S::Record) -> bool + 'static,
    ) -> Self {
        self.counters.push(Counter::new(label.into(), predicate));
        self.view.aggregates = Aggregates::zeroed(&self.counters);
        self
    }

    /// Replaces the whole filter and jumps back to page 1.
    pub fn set_filter(
        &mut self,
        keyword: &str,
        extra_filter: Option<&str>,
    ) -> Result<&PageView<S::Record>, S::Error> {
        self.reload(FilterState::new(keyword, extra_filter), 1, self.page_size())
    }

    /// Changes the keyword, keeping the extra filter, and jumps back to page 1.
    pub fn set_keyword(&mut self, keyword: &str) -> Result<&PageView<S::Record>, S::Error> {
        let filter = FilterState::new(keyword, self.filter.category_or_status());
        self.reload(filter, 1, self.page_size())
    }

    /// Changes the extra filter, keeping the keyword, and jumps back to page 1.
    pub fn set_extra_filter(
        &mut self,
        extra_filter: Option<&str>,
    ) -> Result<&PageView<S::Record>, S::Error> {
        let filter = FilterState::new(self.filter.keyword(), extra_filter);
        self.reload(filter, 1, self.page_size())
    }

    /// Moves one page back or forward. Stepping past either end is a no-op.
    pub fn change_page(&mut self, step: PageStep) -> Result<&PageView<S::Record>, S::Error> {
        let state = self.view.state;
        let requested = step.apply(state.current_page, state.total_pages);
        self.reload(self.filter.clone(), requested, state.page_size)
    }

    /// Changes the page size, keeping the current page clamped into range.
    pub fn set_page_size(
        &mut self,
        page_size: usize,
    ) -> Result<&PageView<S::Record>, ListError<S::Error>> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize.into());
        }
        let current_page = self.view.state.current_page;
        self.reload(self.filter.clone(), current_page, page_size)
            .map_err(ListError::Query)
    }

    /// Re-queries with the current filter and re-derives the page window.
    pub fn refresh(&mut self) -> Result<&PageView<S::Record>, S::Error> {
        let state = self.view.state;
        self.reload(self.filter.clone(), state.current_page, state.page_size)
    }

    pub fn view(&self) -> &PageView<S::Record> {
        &self.view
    }

    pub fn items(&self) -> &[S::Record] {
        &self.view.items
    }

    pub fn page_state(&self) -> PageState {
        self.view.state
    }

    pub fn aggregates(&self) -> &Aggregates {
        &self.view.aggregates
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page_size(&self) -> usize {
        self.view.state.page_size
    }

    /// Queries with the candidate inputs and commits them only on success.
    fn reload(
        &mut self,
        filter: FilterState,
        requested_page: usize,
        page_size: usize,
    ) -> Result<&PageView<S::Record>, S::Error> {
        let records = match self
            .source
            .query(filter.keyword(), filter.category_or_status())
        {
            Ok(records) => records,
            Err(err) => {
                admin_warn!(
                    "List query failed (keyword={:?}, filter={:?}); keeping page {}",
                    filter.keyword(),
                    filter.category_or_status(),
                    self.view.state.current_page
                );
                return Err(err);
            }
        };

        let state = PageState::derive(requested_page, page_size, records.len());
        let aggregates = Aggregates::tally(&self.counters, &records);
        let window = state.window();
        let items: Vec<_> = records
            .into_iter()
            .skip(window.start)
            .take(window.len())
            .collect();

        admin_debug!(
            "List refreshed: page {}/{} ({} of {} records, keyword={:?}, filter={:?})",
            state.current_page,
            state.total_pages,
            items.len(),
            state.total_records,
            filter.keyword(),
            filter.category_or_status()
        );

        self.filter = filter;
        self.view = PageView {
            items,
            state,
            aggregates,
        };
        Ok(&self.view)
    }
}
