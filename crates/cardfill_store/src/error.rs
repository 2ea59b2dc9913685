use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::persist::PersistError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database file {path:?} is unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("database file {path:?} could not be parsed: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("snapshot could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}
