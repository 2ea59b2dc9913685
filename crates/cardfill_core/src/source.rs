use std::marker::PhantomData;

/// The persistence-side query a list screen is built on.
///
/// Implementations return the full matching result set for a keyword and an
/// optional category/status filter. Ranking and matching belong to the
/// implementation; the controller only counts and slices what comes back.
pub trait RecordSource {
    type Record;
    type Error;

    fn query(
        &mut self,
        keyword: &str,
        filter: Option<&str>,
    ) -> Result<Vec<Self::Record>, Self::Error>;
}

/// Adapter turning a plain closure into a [`RecordSource`].
pub struct QueryFn<F, T, E> {
    query: F,
    _marker: PhantomData<fn() -> (T, E)>,
}

/// Wraps `query` so it can back a [`crate::PagedListController`].
pub fn query_fn<F, T, E>(query: F) -> QueryFn<F, T, E>
where
    F: FnMut(&str, Option<&str>) -> Result<Vec<T>, E>,
{
    QueryFn {
        query,
        _marker: PhantomData,
    }
}

impl<F, T, E> RecordSource for QueryFn<F, T, E>
where
    F: FnMut(&str, Option<&str>) -> Result<Vec<T>, E>,
{
    type Record = T;
    type Error = E;

    fn query(&mut self, keyword: &str, filter: Option<&str>) -> Result<Vec<T>, E> {
        (self.query)(keyword, filter)
    }
}
