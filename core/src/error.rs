use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Home path not found")]
    HomeNotFound,
    #[error("The store is not attached to any file")]
    NotPersisted,
    #[error("IO Error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error reading the store: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("Error writing the store: {0}")]
    Serialize(#[from] toml::ser::Error),
}

