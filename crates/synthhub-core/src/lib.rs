//! Core contracts and helpers for Synthhub.
//!
//! This crate defines the entity records, dataset settings, canonical column
//! sets, and validation helpers shared across the generator, exporter, API,
//! and CLI.

pub mod records;
pub mod schema;
pub mod settings;
pub mod validation;

pub use records::{
    DatasetMetadata, LobType, Person, Profile, SnapshotBundle, Vehicle, VIN_ALPHABET,
};
pub use schema::{Cell, ColumnKind, ColumnSpec, PERSON_COLUMNS, PROFILE_COLUMNS, VEHICLE_COLUMNS};
pub use settings::DatasetSettings;
pub use validation::{validate_bundle, validate_person_records, validate_vehicle_records};
