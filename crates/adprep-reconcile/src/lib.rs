//! Reconciliation of spreadsheet rows against an asset folder.
//!
//! Each row is matched to the file whose stem equals its `Description`, and
//! that file is renamed to `"{Description}-{AD ID}"` with its extension kept.
//! The outcome of every row lands in a
//! [`ReconciliationResult`](adprep_model::ReconciliationResult): renamed,
//! failed, or skipped for blank keys. Only a missing or unlistable folder is
//! an error.
//!
//! ```ignore
//! use adprep_reconcile::reconcile_with_progress;
//!
//! let result = reconcile_with_progress(&rows, folder, |p| println!("PROGRESS:{p}"))?;
//! println!("{} renamed", result.renamed_count());
//! ```

mod engine;
mod error;
mod folder;

pub use engine::{ReconciliationEngine, reconcile, reconcile_with_progress};
pub use error::{ReconcileError, Result};
pub use folder::{DiskFolder, FolderStore};
