use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Characters permitted in a VIN: 17 draws from this alphabet, which excludes
/// the easily-confused I, O, and Q.
pub const VIN_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

/// Line-of-business classification attached to persons and vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LobType {
    Personal,
    Commercial,
}

impl LobType {
    pub fn as_str(self) -> &'static str {
        match self {
            LobType::Personal => "Personal",
            LobType::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for LobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity, address, and classification record for one synthetic person.
///
/// Immutable once created; lives for the duration of one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier within a bundle (UUID string).
    pub person_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub driver_license_number: String,
    /// Two-letter issuing state code.
    pub driver_license_state: String,
    pub address_line_1: String,
    pub address_line_2: Option<String>,
    pub city: String,
    /// Two-letter residence state code.
    pub state: String,
    pub postal_code: String,
    /// Fixed to `US` in this dataset version.
    pub country: String,
    pub lob_type: LobType,
    /// Provenance marker signalling non-real data.
    pub synthetic_source: String,
}

/// Owned-asset record, one-to-one with a [`Person`] in this dataset version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier within a bundle (UUID string).
    pub vehicle_id: String,
    /// Resolves to a [`Person`] present in the same bundle.
    pub person_id: String,
    /// Exactly 17 characters drawn from [`VIN_ALPHABET`].
    pub vin: String,
    pub make: String,
    /// Always one of the make's governed model list.
    pub model: String,
    pub model_year: i32,
    pub body_style: String,
    pub risk_rating: String,
    /// Always equals the owning person's `lob_type`.
    pub lob_type: LobType,
    /// Mirrors the owning person's state, not independently drawn.
    pub garaging_state: String,
    /// Mirrors the owning person's postal code.
    pub garaging_postal_code: String,
    pub synthetic_source: String,
}

/// Denormalized join of exactly one [`Person`] and its [`Vehicle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Deterministic identifier derived from `(person_id, vehicle_id)`.
    pub profile_id: String,
    pub person_id: String,
    pub vehicle_id: String,
    pub full_name: String,
    pub lob_type: LobType,
    pub residence_state: String,
    pub city: String,
    pub postal_code: String,
    pub garaging_state: String,
    pub primary_vehicle_vin: String,
    /// Human-readable `<year> <make> <model>` summary.
    pub vehicle_summary: String,
    pub risk_rating: String,
    pub synthetic_source: String,
}

/// Describes one generation run. Counts always equal the lengths of the
/// corresponding collections in the same bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub dataset_version: String,
    pub generated_at: DateTime<Utc>,
    pub record_count_persons: u64,
    pub record_count_vehicles: u64,
    pub record_count_profiles: u64,
    pub notes: Option<String>,
}

/// The unit of work passed between generator, profile deriver, and exporter.
///
/// Collections are ordered sequences; insertion order equals generation order
/// and is meaningful for reproducibility. The bundle is exclusively owned by
/// the caller for its lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotBundle {
    pub metadata: DatasetMetadata,
    pub persons: Vec<Person>,
    pub vehicles: Vec<Vehicle>,
    pub profiles: Vec<Profile>,
}
