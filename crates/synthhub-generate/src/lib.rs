//! Deterministic record-synthesis engine for Synthhub.
//!
//! This crate turns `(record_count, seed)` into an internally consistent
//! snapshot bundle of persons, vehicles, and derived profiles. Identical
//! inputs always produce byte-identical output.

pub mod engine;
pub mod errors;
pub mod profiles;
pub mod rules;

pub use engine::{describe_generation_plan, generate};
pub use errors::GenerateError;
pub use profiles::derive_profiles;
