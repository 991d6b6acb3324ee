//! Export orchestration: renders each requested artifact in memory, hashes
//! it, writes it, then writes the manifest and README describing the run.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;

use synthhub_core::records::SnapshotBundle;

use crate::errors::ExportError;
use crate::manifest::build_manifest;
use crate::model::{table_for, Entity, ExportOptions, Format};
use crate::output::csv::render_csv;
use crate::output::ndjson::render_ndjson;
use crate::output::parquet::render_parquet;
use crate::readme::render_readme;

const FALLBACK_SYNTHETIC_SOURCE: &str = "synthhub v0.1";

/// Write the bundle's artifacts into `out_dir`, creating it if needed.
///
/// Returns a map from artifact label to the path written. Checksums in the
/// manifest are computed over the exact bytes on disk.
pub fn export(
    bundle: &SnapshotBundle,
    out_dir: &Path,
    options: &ExportOptions,
) -> Result<BTreeMap<String, PathBuf>, ExportError> {
    fs::create_dir_all(out_dir)?;

    let slug = bundle.metadata.dataset_version.replace('.', "_");
    let mut sink = ArtifactSink::new(out_dir);

    for entity in options.selected_entities() {
        if options.formats.contains(&Format::Csv) {
            let bytes = render_csv(&table_for(bundle, entity))?;
            sink.write(
                entity_label(entity, Format::Csv),
                format!("{}_{slug}.csv", entity.as_str()),
                bytes,
            )?;
        }
        if options.formats.contains(&Format::Ndjson) {
            let bytes = match entity {
                Entity::Persons => render_ndjson(&bundle.persons)?,
                Entity::Vehicles => render_ndjson(&bundle.vehicles)?,
                Entity::Profiles => render_ndjson(&bundle.profiles)?,
            };
            sink.write(
                entity_label(entity, Format::Ndjson),
                format!("{}_{slug}.ndjson", entity.as_str()),
                bytes,
            )?;
        }
        if options.formats.contains(&Format::Parquet) {
            let bytes = render_parquet(&table_for(bundle, entity))?;
            sink.write(
                entity_label(entity, Format::Parquet),
                format!("{}_{slug}.parquet", entity.as_str()),
                bytes,
            )?;
        }
    }

    if options.formats.contains(&Format::Json) {
        sink.write(
            "dataset_json".to_string(),
            format!("dataset_{slug}.json"),
            render_json(bundle)?,
        )?;
        sink.write(
            "metadata_json".to_string(),
            format!("metadata_{slug}.json"),
            render_json(&bundle.metadata)?,
        )?;
    }

    let synthetic_source = bundle
        .persons
        .first()
        .map(|person| person.synthetic_source.as_str())
        .unwrap_or(FALLBACK_SYNTHETIC_SOURCE);
    let manifest = build_manifest(bundle, synthetic_source, sink.artifacts, sink.checksums);
    let mut written = sink.written;

    let manifest_path = out_dir.join(format!("snapshot_manifest_{slug}.json"));
    fs::write(&manifest_path, render_json(&manifest)?)?;
    written.insert("manifest".to_string(), manifest_path);

    let readme_path = out_dir.join(format!("README_SNAPSHOT_{}.md", slug.to_uppercase()));
    fs::write(&readme_path, render_readme(&manifest, options.seed_hint))?;
    written.insert("readme".to_string(), readme_path);

    info!(
        out_dir = %out_dir.display(),
        artifacts = written.len(),
        persons = bundle.metadata.record_count_persons,
        vehicles = bundle.metadata.record_count_vehicles,
        profiles = bundle.metadata.record_count_profiles,
        "snapshot exported"
    );

    Ok(written)
}

/// Accumulates the written artifact names, their checksums, and the
/// label-to-path map returned to the caller.
struct ArtifactSink<'a> {
    out_dir: &'a Path,
    artifacts: BTreeMap<String, String>,
    checksums: BTreeMap<String, String>,
    written: BTreeMap<String, PathBuf>,
}

impl<'a> ArtifactSink<'a> {
    fn new(out_dir: &'a Path) -> Self {
        Self {
            out_dir,
            artifacts: BTreeMap::new(),
            checksums: BTreeMap::new(),
            written: BTreeMap::new(),
        }
    }

    fn write(&mut self, label: String, file_name: String, bytes: Vec<u8>) -> Result<(), ExportError> {
        let path = self.out_dir.join(&file_name);
        self.checksums.insert(label.clone(), sha256_hex(&bytes));
        fs::write(&path, bytes)?;
        self.artifacts.insert(label.clone(), file_name);
        self.written.insert(label, path);
        Ok(())
    }
}

fn entity_label(entity: Entity, format: Format) -> String {
    format!("{}_{}", entity.as_str(), format.as_str())
}

fn render_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    Ok(bytes)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
