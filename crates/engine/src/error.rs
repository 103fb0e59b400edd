//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`ValidationError`] returned when a candidate transaction is rejected.
//! - [`StoreWriteError`] returned when the store could not be replaced.
//!
//! Read faults are not errors: the store degrades them to an empty sequence,
//! and malformed records are skipped by the aggregations.
use std::path::PathBuf;

use thiserror::Error;

/// Reason a candidate transaction was rejected before being appended.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid productId")]
    MissingProductId,
    #[error("Invalid amount")]
    InvalidAmount,
}

/// Failure while persisting the whole transaction sequence.
#[derive(Error, Debug)]
pub enum StoreWriteError {
    #[error("failed to write \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize transactions: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreWriteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    StoreWrite(#[from] StoreWriteError),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::StoreWrite(a), Self::StoreWrite(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
