use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Object store request failed (network, credentials, missing bucket).
    #[error(transparent)]
    ObjectStore(#[from] object_store::Error),

    /// A stored file URL does not end in a file name.
    #[error("Cannot derive a storage key from URL '{0}'")]
    InvalidUrl(String),
}
