//! Manifest construction and summary statistics.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use synthhub_core::records::SnapshotBundle;

/// Age summary computed from dates of birth against the fixed generation
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeSummary {
    pub min: i64,
    pub max: i64,
    /// Mean age in years, rounded to two decimals for stable JSON output.
    pub average: f64,
}

/// Summary statistics embedded in the snapshot manifest. All maps are
/// ordered so the serialized manifest is byte-stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub age: AgeSummary,
    pub lob_distribution: BTreeMap<String, u64>,
    pub vin_first_char_distribution: BTreeMap<String, u64>,
    pub make_distribution: BTreeMap<String, u64>,
}

/// The JSON artifact describing what one export run wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotManifest {
    pub dataset_version: String,
    pub generated_at: DateTime<Utc>,
    pub record_counts: BTreeMap<String, u64>,
    /// Artifact label -> file name within the output directory.
    pub artifacts: BTreeMap<String, String>,
    /// Artifact label -> sha256 over the file bytes.
    pub checksums: BTreeMap<String, String>,
    pub summary_statistics: SummaryStatistics,
    pub notes: String,
    pub synthetic_source: String,
}

/// Compute the manifest's summary statistics from a bundle. Pure function of
/// the bundle and its fixed generation timestamp.
pub fn summarize(bundle: &SnapshotBundle) -> SummaryStatistics {
    let as_of = bundle.metadata.generated_at.date_naive();

    let ages: Vec<i64> = bundle
        .persons
        .iter()
        .map(|person| age_in_years(person.date_of_birth, as_of))
        .collect();
    let age = if ages.is_empty() {
        AgeSummary {
            min: 0,
            max: 0,
            average: 0.0,
        }
    } else {
        let min = ages.iter().copied().min().unwrap_or(0);
        let max = ages.iter().copied().max().unwrap_or(0);
        let sum: i64 = ages.iter().sum();
        let average = (sum as f64 / ages.len() as f64 * 100.0).round() / 100.0;
        AgeSummary { min, max, average }
    };

    let mut lob_distribution = BTreeMap::new();
    for person in &bundle.persons {
        *lob_distribution
            .entry(person.lob_type.as_str().to_string())
            .or_insert(0) += 1;
    }

    let mut vin_first_char_distribution = BTreeMap::new();
    let mut make_distribution = BTreeMap::new();
    for vehicle in &bundle.vehicles {
        if let Some(first) = vehicle.vin.chars().next() {
            *vin_first_char_distribution
                .entry(first.to_string())
                .or_insert(0) += 1;
        }
        *make_distribution.entry(vehicle.make.clone()).or_insert(0) += 1;
    }

    SummaryStatistics {
        age,
        lob_distribution,
        vin_first_char_distribution,
        make_distribution,
    }
}

/// Assemble the manifest from the bundle plus the written artifact names and
/// checksums.
pub fn build_manifest(
    bundle: &SnapshotBundle,
    synthetic_source: &str,
    artifacts: BTreeMap<String, String>,
    checksums: BTreeMap<String, String>,
) -> SnapshotManifest {
    let metadata = &bundle.metadata;
    let mut record_counts = BTreeMap::new();
    record_counts.insert("persons".to_string(), metadata.record_count_persons);
    record_counts.insert("vehicles".to_string(), metadata.record_count_vehicles);
    record_counts.insert("profiles".to_string(), metadata.record_count_profiles);

    let notes = metadata.notes.clone().unwrap_or_else(|| {
        "Synthetic snapshot for demo use; contains no real customer data.".to_string()
    });

    SnapshotManifest {
        dataset_version: metadata.dataset_version.clone(),
        generated_at: metadata.generated_at,
        record_counts,
        artifacts,
        checksums,
        summary_statistics: summarize(bundle),
        notes,
        synthetic_source: synthetic_source.to_string(),
    }
}

fn age_in_years(date_of_birth: NaiveDate, as_of: NaiveDate) -> i64 {
    let mut age = i64::from(as_of.year() - date_of_birth.year());
    if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_counts_whole_years_only() {
        let dob = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        let before_birthday = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let on_birthday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(age_in_years(dob, before_birthday), 34);
        assert_eq!(age_in_years(dob, on_birthday), 35);
    }
}
