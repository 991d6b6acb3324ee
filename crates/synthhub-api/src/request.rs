//! Request body parsing and seed resolution.

use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use synthhub_core::DatasetSettings;

use crate::error::{ApiError, ApiResult};

/// Records returned when the body omits `records`.
pub const DEFAULT_RECORDS: u64 = 5;

/// Upper bound on the random seed drawn for `randomize` / `"random"`.
const RANDOM_SEED_BOUND: u64 = 1_000_000_000;

/// Body accepted by every generation endpoint. All fields are optional; an
/// absent body behaves like `{}`.
///
/// `records` and `seed` arrive as raw JSON values because the seed field
/// accepts both integers and the string `"random"`, and digit strings are
/// tolerated for both fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    pub records: Option<Value>,
    pub seed: Option<Value>,
    #[serde(default)]
    pub randomize: bool,
}

/// Validated request parameters ready for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub records: u64,
    pub seed: u64,
}

impl GenerateRequest {
    /// Validate the body against the settings, drawing a random seed when
    /// asked to.
    pub fn resolve(&self, settings: &DatasetSettings) -> ApiResult<ResolvedRequest> {
        let records = match &self.records {
            None => DEFAULT_RECORDS,
            Some(value) => parse_count(value)?,
        };

        let seed = if self.randomize {
            random_seed()
        } else {
            match &self.seed {
                None => settings.default_seed,
                Some(value) => match parse_seed(value)? {
                    Some(seed) => seed,
                    None => random_seed(),
                },
            }
        };

        Ok(ResolvedRequest { records, seed })
    }
}

fn random_seed() -> u64 {
    rand::rng().random_range(0..RANDOM_SEED_BOUND)
}

fn parse_count(value: &Value) -> ApiResult<u64> {
    let records = match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    };
    match records {
        Some(records) if records > 0 => Ok(records),
        _ => Err(ApiError::invalid_request(
            "records must be a positive integer",
        )),
    }
}

/// `Ok(None)` means the caller asked for a random seed.
fn parse_seed(value: &Value) -> ApiResult<Option<u64>> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .map(Some)
            .ok_or_else(|| ApiError::invalid_request("seed must be a non-negative integer")),
        Value::String(text) if text.trim().eq_ignore_ascii_case("random") => Ok(None),
        Value::String(text) => text.trim().parse::<u64>().map(Some).map_err(|_| {
            ApiError::invalid_request("seed must be an integer or the string \"random\"")
        }),
        _ => Err(ApiError::invalid_request(
            "seed must be an integer or the string \"random\"",
        )),
    }
}
