//! Cardfill core: the shared paginated list controller and record capabilities.
mod aggregate;
mod controller;
mod error;
mod msg;
mod relation;
mod source;
mod state;
mod update;
mod view_model;

pub use aggregate::{AggregateCount, Aggregates};
pub use controller::PagedListController;
pub use error::{ConfigError, ListError};
pub use msg::{ListMsg, PageStep};
pub use relation::{DisplayName, OwnedRecord, RecordId, Relation};
pub use source::{query_fn, QueryFn, RecordSource};
pub use state::{FilterState, PageState};
pub use update::apply;
pub use view_model::PageView;
