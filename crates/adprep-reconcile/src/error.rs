//! Fatal reconciliation errors.
//!
//! Row-level problems are not errors; they are recorded in the
//! [`ReconciliationResult`](adprep_model::ReconciliationResult).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Asset folder does not exist or is not a directory.
    #[error("asset folder not found: {path}")]
    FolderNotFound { path: PathBuf },

    /// The folder could not be listed before processing started.
    #[error("failed to list asset folder: {source}")]
    InitialListing {
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReconcileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReconcileError::FolderNotFound {
            path: PathBuf::from("/media/renders"),
        };
        assert_eq!(err.to_string(), "asset folder not found: /media/renders");
    }
}
