//! Metadata mapping for reconciled ad assets.
//!
//! [`map_row`] turns one spreadsheet row plus its asset filename into an
//! [`ExportRecord`](adprep_model::ExportRecord). [`map_rows`] does the same
//! for a batch, locating each row's renamed file in an [`AssetIndex`].
//!
//! Field rules live in [`transforms`].

pub mod index;
pub mod mapper;
pub mod transforms;

pub use index::AssetIndex;
pub use mapper::{MappingOutcome, MissingAsset, map_row, map_rows};
