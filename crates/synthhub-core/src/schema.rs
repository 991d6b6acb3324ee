//! Canonical column sets for each entity and the row projection used by the
//! tabular exporters.
//!
//! The column order here is the contract for CSV and Parquet artifacts;
//! reordering a list is a breaking change to downstream consumers.

use crate::records::{Person, Profile, Vehicle};

/// Value kind for a projected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Int,
}

/// One column of an entity's tabular projection.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn text(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Text,
    }
}

const fn int(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind: ColumnKind::Int,
    }
}

pub const PERSON_COLUMNS: &[ColumnSpec] = &[
    text("person_id"),
    text("first_name"),
    text("last_name"),
    text("date_of_birth"),
    text("driver_license_number"),
    text("driver_license_state"),
    text("address_line_1"),
    text("address_line_2"),
    text("city"),
    text("state"),
    text("postal_code"),
    text("country"),
    text("lob_type"),
    text("synthetic_source"),
];

pub const VEHICLE_COLUMNS: &[ColumnSpec] = &[
    text("vehicle_id"),
    text("person_id"),
    text("vin"),
    text("make"),
    text("model"),
    int("model_year"),
    text("body_style"),
    text("risk_rating"),
    text("lob_type"),
    text("garaging_state"),
    text("garaging_postal_code"),
    text("synthetic_source"),
];

pub const PROFILE_COLUMNS: &[ColumnSpec] = &[
    text("profile_id"),
    text("person_id"),
    text("vehicle_id"),
    text("full_name"),
    text("lob_type"),
    text("residence_state"),
    text("city"),
    text("postal_code"),
    text("garaging_state"),
    text("primary_vehicle_vin"),
    text("vehicle_summary"),
    text("risk_rating"),
    text("synthetic_source"),
];

/// Projected cell value for one column of one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Absent optional value; serializes as an empty CSV field.
    Empty,
    Int(i64),
    Text(String),
}

impl Cell {
    pub fn to_csv(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Int(value) => value.to_string(),
            Cell::Text(value) => value.clone(),
        }
    }
}

/// Project a person onto [`PERSON_COLUMNS`].
pub fn person_row(person: &Person) -> Vec<Cell> {
    vec![
        Cell::Text(person.person_id.clone()),
        Cell::Text(person.first_name.clone()),
        Cell::Text(person.last_name.clone()),
        Cell::Text(person.date_of_birth.format("%Y-%m-%d").to_string()),
        Cell::Text(person.driver_license_number.clone()),
        Cell::Text(person.driver_license_state.clone()),
        Cell::Text(person.address_line_1.clone()),
        person
            .address_line_2
            .as_ref()
            .map(|value| Cell::Text(value.clone()))
            .unwrap_or(Cell::Empty),
        Cell::Text(person.city.clone()),
        Cell::Text(person.state.clone()),
        Cell::Text(person.postal_code.clone()),
        Cell::Text(person.country.clone()),
        Cell::Text(person.lob_type.as_str().to_string()),
        Cell::Text(person.synthetic_source.clone()),
    ]
}

/// Project a vehicle onto [`VEHICLE_COLUMNS`].
pub fn vehicle_row(vehicle: &Vehicle) -> Vec<Cell> {
    vec![
        Cell::Text(vehicle.vehicle_id.clone()),
        Cell::Text(vehicle.person_id.clone()),
        Cell::Text(vehicle.vin.clone()),
        Cell::Text(vehicle.make.clone()),
        Cell::Text(vehicle.model.clone()),
        Cell::Int(i64::from(vehicle.model_year)),
        Cell::Text(vehicle.body_style.clone()),
        Cell::Text(vehicle.risk_rating.clone()),
        Cell::Text(vehicle.lob_type.as_str().to_string()),
        Cell::Text(vehicle.garaging_state.clone()),
        Cell::Text(vehicle.garaging_postal_code.clone()),
        Cell::Text(vehicle.synthetic_source.clone()),
    ]
}

/// Project a profile onto [`PROFILE_COLUMNS`].
pub fn profile_row(profile: &Profile) -> Vec<Cell> {
    vec![
        Cell::Text(profile.profile_id.clone()),
        Cell::Text(profile.person_id.clone()),
        Cell::Text(profile.vehicle_id.clone()),
        Cell::Text(profile.full_name.clone()),
        Cell::Text(profile.lob_type.as_str().to_string()),
        Cell::Text(profile.residence_state.clone()),
        Cell::Text(profile.city.clone()),
        Cell::Text(profile.postal_code.clone()),
        Cell::Text(profile.garaging_state.clone()),
        Cell::Text(profile.primary_vehicle_vin.clone()),
        Cell::Text(profile.vehicle_summary.clone()),
        Cell::Text(profile.risk_rating.clone()),
        Cell::Text(profile.synthetic_source.clone()),
    ]
}
