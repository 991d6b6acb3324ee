use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use synthhub_core::schema::{
    person_row, profile_row, vehicle_row, Cell, ColumnSpec, PERSON_COLUMNS, PROFILE_COLUMNS,
    VEHICLE_COLUMNS,
};
use synthhub_core::records::SnapshotBundle;

/// Entity collections that can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Persons,
    Vehicles,
    Profiles,
}

impl Entity {
    pub const ALL: [Entity; 3] = [Entity::Persons, Entity::Vehicles, Entity::Profiles];

    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Persons => "persons",
            Entity::Vehicles => "vehicles",
            Entity::Profiles => "profiles",
        }
    }
}

/// File formats the exporter can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Csv,
    Json,
    Ndjson,
    Parquet,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Ndjson => "ndjson",
            Format::Parquet => "parquet",
        }
    }
}

/// Options for one export call.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Entities to export; empty means all.
    pub entities: Vec<Entity>,
    /// Formats to write. CSV/NDJSON/Parquet gate the per-entity files; JSON
    /// gates the combined dataset and standalone metadata documents. The
    /// manifest and README are always written.
    pub formats: BTreeSet<Format>,
    /// Seed echoed in the README's regeneration command when known.
    pub seed_hint: Option<u64>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            formats: [Format::Csv, Format::Json].into_iter().collect(),
            seed_hint: None,
        }
    }
}

impl ExportOptions {
    /// Entities honoring the "empty means all" filter, deduplicated while
    /// preserving the caller's order.
    pub fn selected_entities(&self) -> Vec<Entity> {
        if self.entities.is_empty() {
            return Entity::ALL.to_vec();
        }
        let mut seen = BTreeSet::new();
        self.entities
            .iter()
            .copied()
            .filter(|entity| seen.insert(*entity))
            .collect()
    }
}

/// Tabular projection of one entity collection, shared by the CSV and
/// Parquet writers.
#[derive(Debug, Clone)]
pub struct EntityTable {
    pub entity: Entity,
    pub columns: &'static [ColumnSpec],
    pub rows: Vec<Vec<Cell>>,
}

/// Project one entity collection of a bundle onto its canonical columns.
pub fn table_for(bundle: &SnapshotBundle, entity: Entity) -> EntityTable {
    let (columns, rows) = match entity {
        Entity::Persons => (
            PERSON_COLUMNS,
            bundle.persons.iter().map(person_row).collect(),
        ),
        Entity::Vehicles => (
            VEHICLE_COLUMNS,
            bundle.vehicles.iter().map(vehicle_row).collect(),
        ),
        Entity::Profiles => (
            PROFILE_COLUMNS,
            bundle.profiles.iter().map(profile_row).collect(),
        ),
    };
    EntityTable {
        entity,
        columns,
        rows,
    }
}
