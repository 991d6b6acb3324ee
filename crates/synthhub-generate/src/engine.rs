//! Seeded snapshot generation.
//!
//! The whole run consumes a single `ChaCha8Rng` stream in a frozen order.
//! Per person: id bits, first name, last name, state, date-of-birth offset,
//! license number, city, postal code, line of business. Per vehicle: id bits,
//! make, model, model year, 17 VIN characters, body style, risk rating.
//! `address_line_2` and the garaging fields consume no draws. Inserting,
//! removing, or reordering a draw shifts every downstream value; that
//! fragility is the determinism contract and must not be "fixed".

use chrono::{Duration, NaiveDate};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;
use uuid::Uuid;

use synthhub_core::records::{
    DatasetMetadata, LobType, Person, SnapshotBundle, Vehicle, VIN_ALPHABET,
};
use synthhub_core::settings::DatasetSettings;

use crate::errors::GenerateError;
use crate::profiles::derive_profiles;
use crate::rules;

/// Largest date-of-birth offset in days from the 1975-01-01 base date.
const DOB_OFFSET_DAYS: i64 = 18_000;

/// Deterministically generate a snapshot bundle of `records` persons with one
/// vehicle each, plus derived profiles unless `include_profiles` is false.
///
/// Pure function of its inputs and the static rule tables; identical
/// `(records, seed)` pairs yield byte-identical bundles across process
/// restarts.
pub fn generate(
    settings: &DatasetSettings,
    records: u64,
    seed: Option<u64>,
    include_profiles: bool,
) -> Result<SnapshotBundle, GenerateError> {
    if records == 0 {
        return Err(GenerateError::InvalidArgument(
            "records must be a positive integer".to_string(),
        ));
    }

    let seed = seed.unwrap_or(settings.default_seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    info!(records, seed, include_profiles, "generating snapshot bundle");

    let mut persons = Vec::with_capacity(records as usize);
    let mut vehicles = Vec::with_capacity(records as usize);
    for index in 0..records {
        let person = generate_person(&mut rng, index, &settings.synthetic_marker);
        let vehicle = generate_vehicle(&mut rng, &person, &settings.synthetic_marker);
        persons.push(person);
        vehicles.push(vehicle);
    }

    let profiles = if include_profiles {
        derive_profiles(&persons, &vehicles, &settings.synthetic_marker)
    } else {
        Vec::new()
    };

    let metadata = DatasetMetadata {
        dataset_version: settings.dataset_version.clone(),
        generated_at: settings.generated_at,
        record_count_persons: persons.len() as u64,
        record_count_vehicles: vehicles.len() as u64,
        record_count_profiles: profiles.len() as u64,
        notes: None,
    };

    Ok(SnapshotBundle {
        metadata,
        persons,
        vehicles,
        profiles,
    })
}

/// Summarize the generation plan for the health endpoint and CLI.
pub fn describe_generation_plan(settings: &DatasetSettings) -> Vec<String> {
    let mut plan = vec![
        format!("Dataset version: {}", settings.dataset_version),
        format!("Target person records: {}", settings.target_person_records),
        "Use deterministic seed for reproducibility.".to_string(),
        "Generate Persons first, then attach Vehicles per rules.".to_string(),
        "Derive Profiles from matched Person/Vehicle pairs.".to_string(),
    ];
    plan.extend(rules::PERSON_RULES.iter().map(|rule| (*rule).to_string()));
    plan.extend(rules::VEHICLE_RULES.iter().map(|rule| (*rule).to_string()));
    plan
}

fn generate_person(rng: &mut ChaCha8Rng, index: u64, marker: &str) -> Person {
    let person_id = seeded_uuid(rng);
    let first_name = pick(rng, rules::FIRST_NAMES);
    let last_name = pick(rng, rules::LAST_NAMES);
    let state = rules::STATES[rng.random_range(0..rules::STATES.len())];
    let dob_base = NaiveDate::from_ymd_opt(1975, 1, 1).unwrap_or_default();
    let date_of_birth = dob_base + Duration::days(rng.random_range(0..=DOB_OFFSET_DAYS));
    let license_number = format!("{}{}", state.code, rng.random_range(100_000..=999_999_u32));
    let city = pick(rng, state.cities);
    let postal_code = rng
        .random_range(state.postal_range.0..=state.postal_range.1)
        .to_string();
    let lob_type = weighted_choice(rng, rules::LOB_WEIGHTS);
    // Every third record exercises the optional field; no draw is consumed.
    let address_line_2 = (index % 3 == 0).then(|| format!("Unit {}", index / 3 + 1));

    Person {
        person_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth,
        driver_license_number: license_number,
        driver_license_state: state.code.to_string(),
        address_line_1: format!("{} Main Street", 100 + index),
        address_line_2,
        city: city.to_string(),
        state: state.code.to_string(),
        postal_code,
        country: "US".to_string(),
        lob_type,
        synthetic_source: marker.to_string(),
    }
}

fn generate_vehicle(rng: &mut ChaCha8Rng, person: &Person, marker: &str) -> Vehicle {
    let vehicle_id = seeded_uuid(rng);
    let make = rules::MAKES[rng.random_range(0..rules::MAKES.len())];
    let model = pick(rng, make.models);
    let model_year = rng.random_range(rules::MODEL_YEAR_RANGE.0..=rules::MODEL_YEAR_RANGE.1);
    let vin = generate_vin(rng);
    let body_style = weighted_choice(rng, rules::body_style_weights(person.lob_type));
    let risk_rating = weighted_choice(rng, rules::risk_rating_weights(person.lob_type));

    Vehicle {
        vehicle_id,
        person_id: person.person_id.clone(),
        vin,
        make: make.make.to_string(),
        model: model.to_string(),
        model_year,
        body_style: body_style.to_string(),
        risk_rating: risk_rating.to_string(),
        lob_type: person.lob_type,
        garaging_state: person.state.clone(),
        garaging_postal_code: person.postal_code.clone(),
        synthetic_source: marker.to_string(),
    }
}

/// 128 bits from the seeded stream, formatted as a v4-shaped UUID so the
/// identifiers are reproducible rather than drawn from system entropy.
fn seeded_uuid(rng: &mut ChaCha8Rng) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from_bytes(bytes).to_string()
}

fn generate_vin(rng: &mut ChaCha8Rng) -> String {
    (0..17)
        .map(|_| {
            let index = rng.random_range(0..VIN_ALPHABET.len());
            char::from(VIN_ALPHABET[index])
        })
        .collect()
}

fn pick<'a>(rng: &mut ChaCha8Rng, values: &'a [&'a str]) -> &'a str {
    values[rng.random_range(0..values.len())]
}

/// Map a uniform draw in `[0, 1)` onto cumulative-probability ranges. When
/// floating-point rounding leaves the cumulative sum short of the draw, the
/// first category wins.
fn weighted_choice<T: Copy>(rng: &mut ChaCha8Rng, weights: &[(T, f64)]) -> T {
    let draw: f64 = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (value, weight) in weights {
        cumulative += weight;
        if draw < cumulative {
            return *value;
        }
    }
    weights[0].0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_choice_falls_back_to_first_category() {
        // Weights that sum well short of 1.0 force the fallback branch for
        // most draws.
        let weights: &[(&str, f64)] = &[("first", 0.0), ("second", 0.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..16 {
            assert_eq!(weighted_choice(&mut rng, weights), "first");
        }
    }

    #[test]
    fn weighted_choice_covers_all_categories() {
        let weights: &[(LobType, f64)] = rules::LOB_WEIGHTS;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut saw_personal = false;
        let mut saw_commercial = false;
        for _ in 0..256 {
            match weighted_choice(&mut rng, weights) {
                LobType::Personal => saw_personal = true,
                LobType::Commercial => saw_commercial = true,
            }
        }
        assert!(saw_personal && saw_commercial);
    }

    #[test]
    fn seeded_uuid_is_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(seeded_uuid(&mut a), seeded_uuid(&mut b));
    }
}
