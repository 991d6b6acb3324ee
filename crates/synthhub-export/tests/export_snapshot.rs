use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use synthhub_core::records::SnapshotBundle;
use synthhub_core::DatasetSettings;
use synthhub_export::{export, ExportOptions, Format, SnapshotManifest};
use synthhub_generate::generate;

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("synthhub_export_{label}_{}", uuid::Uuid::new_v4()));
    dir
}

fn all_formats() -> BTreeSet<Format> {
    [Format::Csv, Format::Json, Format::Ndjson, Format::Parquet]
        .into_iter()
        .collect()
}

#[test]
fn combined_json_round_trips_the_bundle() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 5, Some(777), true).expect("generate");

    let out_dir = temp_out_dir("round_trip");
    export(&bundle, &out_dir, &ExportOptions::default()).expect("export");

    let bytes = fs::read(out_dir.join("dataset_v0_1.json")).expect("read dataset");
    let decoded: SnapshotBundle = serde_json::from_slice(&bytes).expect("decode dataset");
    assert_eq!(decoded, bundle);

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn identical_bundles_export_identical_checksums() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 8, Some(4242), true).expect("generate");

    let options = ExportOptions {
        formats: all_formats(),
        ..ExportOptions::default()
    };
    let dir_a = temp_out_dir("checksums_a");
    let dir_b = temp_out_dir("checksums_b");
    export(&bundle, &dir_a, &options).expect("export a");
    export(&bundle, &dir_b, &options).expect("export b");

    let manifest_a = read_manifest(&dir_a);
    let manifest_b = read_manifest(&dir_b);
    assert!(!manifest_a.checksums.is_empty());
    assert_eq!(manifest_a.checksums, manifest_b.checksums);
    assert_eq!(manifest_a.artifacts, manifest_b.artifacts);

    fs::remove_dir_all(&dir_a).ok();
    fs::remove_dir_all(&dir_b).ok();
}

#[test]
fn manifest_counts_match_the_bundle() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 5, Some(777), true).expect("generate");

    let out_dir = temp_out_dir("counts");
    export(&bundle, &out_dir, &ExportOptions::default()).expect("export");

    let manifest = read_manifest(&out_dir);
    assert_eq!(manifest.record_counts.get("persons"), Some(&5));
    assert_eq!(manifest.record_counts.get("vehicles"), Some(&5));
    assert_eq!(manifest.record_counts.get("profiles"), Some(&5));
    assert_eq!(manifest.dataset_version, settings.dataset_version);
    assert_eq!(
        manifest.summary_statistics.lob_distribution.values().sum::<u64>(),
        5
    );

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn default_options_write_csv_json_manifest_and_readme() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 3, Some(11), true).expect("generate");

    let out_dir = temp_out_dir("layout");
    let written = export(&bundle, &out_dir, &ExportOptions::default()).expect("export");

    for name in [
        "persons_v0_1.csv",
        "vehicles_v0_1.csv",
        "profiles_v0_1.csv",
        "dataset_v0_1.json",
        "metadata_v0_1.json",
        "snapshot_manifest_v0_1.json",
        "README_SNAPSHOT_V0_1.md",
    ] {
        assert!(out_dir.join(name).is_file(), "missing {name}");
    }
    assert!(!out_dir.join("persons_v0_1.ndjson").exists());
    assert!(!out_dir.join("persons_v0_1.parquet").exists());

    assert_eq!(
        written.get("persons_csv"),
        Some(&out_dir.join("persons_v0_1.csv"))
    );
    assert!(written.contains_key("manifest"));
    assert!(written.contains_key("readme"));

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn entity_filter_limits_per_entity_artifacts() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 3, Some(11), true).expect("generate");

    let options = ExportOptions {
        entities: vec![synthhub_export::Entity::Vehicles],
        ..ExportOptions::default()
    };
    let out_dir = temp_out_dir("entity_filter");
    export(&bundle, &out_dir, &options).expect("export");

    assert!(out_dir.join("vehicles_v0_1.csv").is_file());
    assert!(!out_dir.join("persons_v0_1.csv").exists());
    assert!(!out_dir.join("profiles_v0_1.csv").exists());
    assert!(out_dir.join("dataset_v0_1.json").is_file());

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn parquet_artifacts_read_back_with_matching_row_counts() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 6, Some(303), true).expect("generate");

    let options = ExportOptions {
        formats: [Format::Parquet].into_iter().collect(),
        ..ExportOptions::default()
    };
    let out_dir = temp_out_dir("parquet");
    export(&bundle, &out_dir, &options).expect("export");

    let file = fs::File::open(out_dir.join("persons_v0_1.parquet")).expect("open parquet");
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .expect("parquet reader")
        .build()
        .expect("build reader");
    let rows: usize = reader
        .map(|batch| batch.expect("batch").num_rows())
        .sum();
    assert_eq!(rows, 6);

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn ndjson_lines_match_record_count() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 4, Some(909), true).expect("generate");

    let options = ExportOptions {
        formats: [Format::Ndjson].into_iter().collect(),
        ..ExportOptions::default()
    };
    let out_dir = temp_out_dir("ndjson");
    export(&bundle, &out_dir, &options).expect("export");

    let text = fs::read_to_string(out_dir.join("profiles_v0_1.ndjson")).expect("read ndjson");
    assert_eq!(text.lines().count(), 4);

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn readme_names_every_artifact_and_the_seed() {
    let settings = DatasetSettings::default();
    let bundle = generate(&settings, 5, Some(777), true).expect("generate");

    let options = ExportOptions {
        seed_hint: Some(777),
        ..ExportOptions::default()
    };
    let out_dir = temp_out_dir("readme");
    export(&bundle, &out_dir, &options).expect("export");

    let readme = fs::read_to_string(out_dir.join("README_SNAPSHOT_V0_1.md")).expect("read readme");
    let manifest = read_manifest(&out_dir);
    for file_name in manifest.artifacts.values() {
        assert!(readme.contains(file_name.as_str()), "readme missing {file_name}");
    }
    assert!(readme.contains("--seed 777"));
    assert!(readme.contains("synthhub generate-snapshot"));

    fs::remove_dir_all(&out_dir).ok();
}

fn read_manifest(out_dir: &std::path::Path) -> SnapshotManifest {
    let bytes = fs::read(out_dir.join("snapshot_manifest_v0_1.json")).expect("read manifest");
    serde_json::from_slice(&bytes).expect("decode manifest")
}
