use chrono::{DateTime, TimeZone, Utc};

/// Dataset-level configuration for one generation run.
///
/// Constructed once by the caller and passed by reference into the generator
/// and exporter; there is no mutable global state.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSettings {
    /// Dataset contract version (e.g. `v0.1`).
    pub dataset_version: String,
    /// Person record count used when no explicit count is requested.
    pub target_person_records: u64,
    /// Seed used when the caller does not supply one.
    ///
    /// Changing this value invalidates recorded golden snapshots.
    pub default_seed: u64,
    /// Fixed generation timestamp; keeps artifacts and checksums stable
    /// across repeated runs.
    pub generated_at: DateTime<Utc>,
    /// Provenance marker embedded in every record.
    pub synthetic_marker: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            dataset_version: "v0.1".to_string(),
            target_person_records: 200,
            default_seed: 20_251_101,
            generated_at: Utc
                .with_ymd_and_hms(2025, 11, 1, 0, 0, 0)
                .single()
                .unwrap_or_else(Utc::now),
            synthetic_marker: "synthhub v0.1".to_string(),
        }
    }
}

impl DatasetSettings {
    /// Filesystem-safe rendering of the dataset version (`v0.1` -> `v0_1`).
    pub fn version_slug(&self) -> String {
        self.dataset_version.replace('.', "_")
    }

    /// Uppercase slug used for the snapshot README file name.
    pub fn version_slug_upper(&self) -> String {
        self.version_slug().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_slug_replaces_dots() {
        let settings = DatasetSettings::default();
        assert_eq!(settings.version_slug(), "v0_1");
        assert_eq!(settings.version_slug_upper(), "V0_1");
    }

    #[test]
    fn default_timestamp_is_fixed() {
        let a = DatasetSettings::default();
        let b = DatasetSettings::default();
        assert_eq!(a.generated_at, b.generated_at);
    }
}
