use std::collections::HashMap;

use synthhub_core::records::{LobType, VIN_ALPHABET};
use synthhub_core::settings::DatasetSettings;
use synthhub_core::validation::validate_bundle;
use synthhub_generate::{derive_profiles, generate, GenerateError};

#[test]
fn generate_is_deterministic() {
    let settings = DatasetSettings::default();
    let a = generate(&settings, 25, Some(777), true).expect("run generation A");
    let b = generate(&settings, 25, Some(777), true).expect("run generation B");
    assert_eq!(a, b, "identical (records, seed) must yield identical bundles");
}

#[test]
fn different_seeds_diverge() {
    let settings = DatasetSettings::default();
    let a = generate(&settings, 10, Some(1), true).expect("run generation A");
    let b = generate(&settings, 10, Some(2), true).expect("run generation B");
    assert_ne!(a.persons, b.persons);
}

#[test]
fn omitted_seed_uses_the_default() {
    let settings = DatasetSettings::default();
    let implicit = generate(&settings, 5, None, true).expect("implicit seed");
    let explicit =
        generate(&settings, 5, Some(settings.default_seed), true).expect("explicit seed");
    assert_eq!(implicit, explicit);
}

#[test]
fn first_person_id_is_stable_across_runs() {
    let settings = DatasetSettings::default();
    let a = generate(&settings, 3, Some(7), true).expect("run A");
    let b = generate(&settings, 3, Some(7), true).expect("run B");
    assert_eq!(a.persons[0].person_id, b.persons[0].person_id);
}

#[test]
fn zero_records_is_an_invalid_argument() {
    let settings = DatasetSettings::default();
    let err = generate(&settings, 0, Some(42), true).expect_err("zero records must fail");
    assert!(matches!(err, GenerateError::InvalidArgument(_)));
}

#[test]
fn bundle_counts_match_collections() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 12, Some(5), true).expect("run generation");
    assert_eq!(bundle.metadata.record_count_persons, 12);
    assert_eq!(bundle.metadata.record_count_vehicles, 12);
    assert_eq!(bundle.metadata.record_count_profiles, 12);
    assert_eq!(bundle.persons.len(), 12);
    assert_eq!(bundle.vehicles.len(), 12);
    assert_eq!(bundle.profiles.len(), 12);
}

#[test]
fn every_vehicle_resolves_to_its_person() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 40, Some(99), true).expect("run generation");

    let persons: HashMap<&str, LobType> = bundle
        .persons
        .iter()
        .map(|person| (person.person_id.as_str(), person.lob_type))
        .collect();
    assert_eq!(persons.len(), bundle.persons.len(), "person ids must be unique");

    for vehicle in &bundle.vehicles {
        let lob = persons
            .get(vehicle.person_id.as_str())
            .expect("vehicle references a person in the same bundle");
        assert_eq!(*lob, vehicle.lob_type);
    }
}

#[test]
fn vehicles_mirror_their_persons_garaging_address() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 20, Some(4), false).expect("run generation");
    for (person, vehicle) in bundle.persons.iter().zip(&bundle.vehicles) {
        assert_eq!(vehicle.person_id, person.person_id);
        assert_eq!(vehicle.garaging_state, person.state);
        assert_eq!(vehicle.garaging_postal_code, person.postal_code);
    }
}

#[test]
fn vins_use_only_the_governed_alphabet() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 50, Some(13), false).expect("run generation");
    for vehicle in &bundle.vehicles {
        assert_eq!(vehicle.vin.len(), 17);
        for byte in vehicle.vin.bytes() {
            assert!(
                VIN_ALPHABET.contains(&byte),
                "unexpected VIN character {:?}",
                char::from(byte)
            );
        }
        assert!(!vehicle.vin.contains(['I', 'O', 'Q']));
    }
}

#[test]
fn address_line_2_populated_for_every_third_record() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 9, Some(11), false).expect("run generation");
    for (index, person) in bundle.persons.iter().enumerate() {
        assert_eq!(person.address_line_2.is_some(), index % 3 == 0);
    }
}

#[test]
fn include_profiles_false_yields_empty_profiles() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 6, Some(3), false).expect("run generation");
    assert!(bundle.profiles.is_empty());
    assert_eq!(bundle.metadata.record_count_profiles, 0);
}

#[test]
fn profiles_rederive_with_identical_ids() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 15, Some(21), true).expect("run generation");
    let rederived = derive_profiles(
        &bundle.persons,
        &bundle.vehicles,
        &settings.synthetic_marker,
    );
    assert_eq!(bundle.profiles, rederived);
}

#[test]
fn profiles_skip_persons_without_vehicles() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 5, Some(8), false).expect("run generation");
    // Drop one vehicle; its person should be silently skipped.
    let vehicles = &bundle.vehicles[1..];
    let profiles = derive_profiles(&bundle.persons, vehicles, &settings.synthetic_marker);
    assert_eq!(profiles.len(), 4);
    assert!(profiles
        .iter()
        .all(|profile| profile.person_id != bundle.persons[0].person_id));
}

#[test]
fn profile_lob_distribution_favors_personal() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 500, Some(1234), false).expect("run generation");
    let personal = bundle
        .persons
        .iter()
        .filter(|person| person.lob_type == LobType::Personal)
        .count();
    // 70/30 split with generous slack for a 500-draw sample.
    assert!(personal > 250, "personal share unexpectedly low: {personal}");
    assert!(personal < 450, "personal share unexpectedly high: {personal}");
}

#[test]
fn generated_bundle_passes_validation() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 30, Some(77), true).expect("run generation");
    let (ok, errors) = validate_bundle(&bundle);
    assert!(ok, "unexpected validation errors: {errors:?}");
}
