//! Multi-format snapshot exporter for Synthhub.
//!
//! This crate persists a generated bundle as CSV/NDJSON/Parquet/JSON
//! artifacts plus a manifest carrying checksums and summary statistics.
//! Export is a pure function of the bundle: re-running it over the same
//! bundle yields byte-identical files.

pub mod engine;
pub mod errors;
pub mod manifest;
pub mod model;
pub mod output;
pub mod readme;

pub use engine::export;
pub use errors::ExportError;
pub use manifest::{summarize, SnapshotManifest, SummaryStatistics};
pub use model::{Entity, EntityTable, ExportOptions, Format};
