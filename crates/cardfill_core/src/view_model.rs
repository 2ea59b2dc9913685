use crate::{Aggregates, PageState};

/// Everything a renderer needs for one page: the visible rows, the
/// pagination metadata and the counters over the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub state: PageState,
    pub aggregates: Aggregates,
}
