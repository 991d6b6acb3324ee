//! Static reference tables consumed by the generator.
//!
//! These lists are governed data: adding, removing, or reordering entries
//! shifts every downstream draw and is a breaking change to determinism.

use synthhub_core::records::LobType;

pub const FIRST_NAMES: &[&str] = &["Alex", "Jordan", "Taylor", "Casey", "Morgan"];
pub const LAST_NAMES: &[&str] = &["Rivera", "Nguyen", "Patel", "Garcia", "Smith"];

/// Governed western-region state with curated cities and postal range.
#[derive(Debug, Clone, Copy)]
pub struct StateRule {
    pub code: &'static str,
    pub cities: &'static [&'static str],
    /// Inclusive postal-code range for the state.
    pub postal_range: (u32, u32),
}

pub const STATES: &[StateRule] = &[
    StateRule {
        code: "CA",
        cities: &["Sacramento", "Walnut Creek", "Fresno"],
        postal_range: (90_000, 96_199),
    },
    StateRule {
        code: "AZ",
        cities: &["Phoenix", "Tucson", "Mesa"],
        postal_range: (85_000, 86_599),
    },
    StateRule {
        code: "NV",
        cities: &["Las Vegas", "Reno", "Henderson"],
        postal_range: (89_000, 89_899),
    },
    StateRule {
        code: "OR",
        cities: &["Portland", "Salem", "Eugene"],
        postal_range: (97_000, 97_999),
    },
    StateRule {
        code: "WA",
        cities: &["Seattle", "Spokane", "Tacoma"],
        postal_range: (98_000, 99_499),
    },
];

/// Vehicle make with its governed model list.
#[derive(Debug, Clone, Copy)]
pub struct MakeRule {
    pub make: &'static str,
    pub models: &'static [&'static str],
}

pub const MAKES: &[MakeRule] = &[
    MakeRule {
        make: "Toyota",
        models: &["Camry", "Prius"],
    },
    MakeRule {
        make: "Ford",
        models: &["Focus", "Escape"],
    },
    MakeRule {
        make: "Honda",
        models: &["Civic", "CR-V"],
    },
    MakeRule {
        make: "Subaru",
        models: &["Outback", "Forester"],
    },
    MakeRule {
        make: "Chevrolet",
        models: &["Equinox", "Malibu"],
    },
];

/// Inclusive model-year range reflecting late-model fleets.
pub const MODEL_YEAR_RANGE: (i32, i32) = (2008, 2024);

/// Categorical line-of-business weights, Personal-heavy by design.
pub const LOB_WEIGHTS: &[(LobType, f64)] = &[
    (LobType::Personal, 0.70),
    (LobType::Commercial, 0.30),
];

/// Body-style distribution conditioned on the owning person's line of
/// business; commercial accounts skew toward trucks.
pub fn body_style_weights(lob: LobType) -> &'static [(&'static str, f64)] {
    match lob {
        LobType::Personal => &[("Sedan", 0.50), ("SUV", 0.35), ("Truck", 0.15)],
        LobType::Commercial => &[("Truck", 0.55), ("SUV", 0.25), ("Sedan", 0.20)],
    }
}

/// Risk-rating distribution conditioned on the line of business.
pub fn risk_rating_weights(lob: LobType) -> &'static [(&'static str, f64)] {
    match lob {
        LobType::Personal => &[("Low", 0.45), ("Medium", 0.40), ("High", 0.15)],
        LobType::Commercial => &[("Low", 0.20), ("Medium", 0.40), ("High", 0.40)],
    }
}

/// High-level person generation rules, surfaced by the health endpoint and
/// the `plan` CLI subcommand.
pub const PERSON_RULES: &[&str] = &[
    "Use deterministic random seed + UUID identifiers for each person.",
    "Select driver_license_state from the governed western region list (CA/AZ/NV/OR/WA).",
    "Generate postal_code values that stay within curated ranges for each state.",
    "Populate address_line_2 for every third record to validate optional-field logic.",
    "Weight lob_type assignments toward Personal (70%) while keeping Commercial coverage.",
];

/// High-level vehicle generation rules.
pub const VEHICLE_RULES: &[&str] = &[
    "Each Person receives one vehicle to guarantee referential integrity.",
    "VINs are composed of governed characters (17 chars, excluding I/O/Q).",
    "Model years range from 2008 through 2024 to reflect late-model fleets.",
    "Body style + risk rating distributions change with the owning Person's lob_type.",
    "Garaging state/postal code mirror the owning Person's address to keep datasets coherent.",
];
