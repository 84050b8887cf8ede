use std::path::PathBuf;
use thiserror::Error;

/// Common result type for metric collection.
pub type Result<T> = std::result::Result<T, CollectionError>;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("unsupported platform: {0}")]
    Unsupported(String),
    #[error("not a valid mount point: {}", .0.display())]
    InvalidMount(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
