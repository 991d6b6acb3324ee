//! Human-readable README for one exported snapshot.

use std::collections::BTreeMap;

use crate::manifest::SnapshotManifest;

/// Render a deterministic markdown README listing the written artifacts and
/// the regeneration command.
pub fn render_readme(manifest: &SnapshotManifest, seed_hint: Option<u64>) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "# Snapshot {} — synthetic dataset",
        manifest.dataset_version
    ));
    lines.push(String::new());
    lines.push(format!("- generated_at: {}", manifest.generated_at));
    lines.push(format!("- synthetic_source: {}", manifest.synthetic_source));
    for (entity, count) in &manifest.record_counts {
        lines.push(format!("- {entity}: {count} records"));
    }
    lines.push(String::new());

    lines.push("## Artifacts".to_string());
    for (label, file_name) in &manifest.artifacts {
        lines.push(format!("- `{file_name}` — {}", describe(label)));
    }
    lines.push(format!(
        "- `snapshot_manifest_{}.json` — this run's manifest with checksums and summary statistics",
        slug(&manifest.dataset_version)
    ));
    lines.push(String::new());

    lines.push("## Regeneration".to_string());
    lines.push(String::new());
    let seed_flag = seed_hint
        .map(|seed| format!(" --seed {seed}"))
        .unwrap_or_default();
    lines.push("```".to_string());
    lines.push(format!(
        "synthhub generate-snapshot --output-dir <dir> --records {}{seed_flag}",
        total_persons(&manifest.record_counts)
    ));
    lines.push("```".to_string());
    lines.push(String::new());
    lines.push(manifest.notes.clone());
    lines.push(String::new());

    lines.join("\n")
}

fn describe(label: &str) -> String {
    match label {
        "dataset_json" => "combined document: metadata plus all entity collections".to_string(),
        "metadata_json" => "standalone dataset metadata".to_string(),
        other => match other.rsplit_once('_') {
            Some((entity, format)) => {
                format!("{entity} records as {}", format.to_uppercase())
            }
            None => other.to_string(),
        },
    }
}

fn slug(version: &str) -> String {
    version.replace('.', "_")
}

fn total_persons(counts: &BTreeMap<String, u64>) -> u64 {
    counts.get("persons").copied().unwrap_or_default()
}
