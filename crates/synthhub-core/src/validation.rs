use std::collections::HashMap;

use crate::records::{Person, SnapshotBundle, Vehicle, VIN_ALPHABET};

/// Inclusive model-year range accepted by the structural checks.
pub const MODEL_YEAR_RANGE: (i32, i32) = (1980, 2100);

/// Run lightweight structural checks on already-constructed person records.
///
/// Returns `(all_valid, errors)` and never fails; the generator is trusted to
/// produce valid output by construction, so this layer only catches drift in
/// future rule changes.
pub fn validate_person_records(persons: &[Person]) -> (bool, Vec<String>) {
    let mut errors = Vec::new();
    for (index, person) in persons.iter().enumerate() {
        if person.person_id.is_empty() {
            errors.push(format!("Person[{index}] is missing person_id"));
        }
        if person.driver_license_state.len() != 2 {
            errors.push(format!(
                "Person[{index}] driver_license_state must be 2 characters"
            ));
        }
        if person.state.len() != 2 {
            errors.push(format!("Person[{index}] state must be 2 characters"));
        }
        if person.country != "US" {
            errors.push(format!("Person[{index}] country must be 'US' in this scope"));
        }
    }
    (errors.is_empty(), errors)
}

/// Run lightweight structural checks on already-constructed vehicle records.
pub fn validate_vehicle_records(vehicles: &[Vehicle]) -> (bool, Vec<String>) {
    let mut errors = Vec::new();
    for (index, vehicle) in vehicles.iter().enumerate() {
        if vehicle.vehicle_id.is_empty() {
            errors.push(format!("Vehicle[{index}] is missing vehicle_id"));
        }
        if vehicle.vin.len() != 17 {
            errors.push(format!("Vehicle[{index}] vin must be 17 characters"));
        }
        if !vehicle
            .vin
            .bytes()
            .all(|byte| VIN_ALPHABET.contains(&byte))
        {
            errors.push(format!(
                "Vehicle[{index}] vin contains characters outside the governed alphabet"
            ));
        }
        if vehicle.model_year < MODEL_YEAR_RANGE.0 || vehicle.model_year > MODEL_YEAR_RANGE.1 {
            errors.push(format!(
                "Vehicle[{index}] model_year is out of range ({}-{})",
                MODEL_YEAR_RANGE.0, MODEL_YEAR_RANGE.1
            ));
        }
    }
    (errors.is_empty(), errors)
}

/// Cross-entity checks over a full bundle: metadata counts, the one-vehicle
/// per-person shape, and referential coherence.
pub fn validate_bundle(bundle: &SnapshotBundle) -> (bool, Vec<String>) {
    let (_, mut errors) = validate_person_records(&bundle.persons);
    let (_, vehicle_errors) = validate_vehicle_records(&bundle.vehicles);
    errors.extend(vehicle_errors);

    let metadata = &bundle.metadata;
    if metadata.record_count_persons != bundle.persons.len() as u64 {
        errors.push("metadata person count does not match collection length".to_string());
    }
    if metadata.record_count_vehicles != bundle.vehicles.len() as u64 {
        errors.push("metadata vehicle count does not match collection length".to_string());
    }
    if metadata.record_count_profiles != bundle.profiles.len() as u64 {
        errors.push("metadata profile count does not match collection length".to_string());
    }

    let persons: HashMap<&str, &Person> = bundle
        .persons
        .iter()
        .map(|person| (person.person_id.as_str(), person))
        .collect();
    if persons.len() != bundle.persons.len() {
        errors.push("duplicate person_id found in bundle".to_string());
    }

    let mut owners: HashMap<&str, u64> = HashMap::new();
    for (index, vehicle) in bundle.vehicles.iter().enumerate() {
        match persons.get(vehicle.person_id.as_str()) {
            Some(person) => {
                if person.lob_type != vehicle.lob_type {
                    errors.push(format!(
                        "Vehicle[{index}] lob_type does not match its owning person"
                    ));
                }
            }
            None => errors.push(format!(
                "Vehicle[{index}] references person_id absent from the bundle"
            )),
        }
        *owners.entry(vehicle.person_id.as_str()).or_insert(0) += 1;
    }
    for (person_id, count) in owners {
        if count > 1 {
            errors.push(format!("person {person_id} owns {count} vehicles, expected 1"));
        }
    }

    (errors.is_empty(), errors)
}
