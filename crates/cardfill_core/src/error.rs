use thiserror::Error;

/// Invalid controller configuration, reported when it is built or resized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page size must be a positive integer")]
    ZeroPageSize,
}

/// Failure while applying a [`crate::ListMsg`].
///
/// Query failures carry the collaborator's error untouched.
#[derive(Debug, Error)]
pub enum ListError<E> {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("query failed: {0}")]
    Query(E),
}
