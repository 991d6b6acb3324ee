//! Route handlers.
//!
//! Each generation endpoint resolves the request body, runs the generator,
//! and returns the requested slice of the bundle. The resolved seed and the
//! requested record count are echoed so callers can reproduce a response.

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::info;

use synthhub_core::records::{DatasetMetadata, Person, Profile, SnapshotBundle, Vehicle};
use synthhub_generate::{describe_generation_plan, generate};

use crate::error::{ApiError, ApiResult};
use crate::request::{GenerateRequest, ResolvedRequest};
use crate::ApiState;

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    dataset_version: String,
    default_seed: u64,
    target_records: u64,
    plan: Vec<String>,
}

#[derive(Serialize)]
struct EntityResponse<T: Serialize> {
    metadata: DatasetMetadata,
    #[serde(flatten)]
    records: T,
    record_count: u64,
    seed: u64,
    records_requested: u64,
}

#[derive(Serialize)]
struct PersonRecords {
    persons: Vec<Person>,
}

#[derive(Serialize)]
struct VehicleRecords {
    vehicles: Vec<Vehicle>,
}

#[derive(Serialize)]
struct ProfileRecords {
    profiles: Vec<Profile>,
}

#[derive(Serialize)]
struct BundleResponse {
    #[serde(flatten)]
    bundle: SnapshotBundle,
    seed: u64,
    records_requested: u64,
}

#[get("/healthz")]
pub async fn healthz(state: web::Data<ApiState>) -> HttpResponse {
    let settings = &state.settings;
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        dataset_version: settings.dataset_version.clone(),
        default_seed: settings.default_seed,
        target_records: settings.target_person_records,
        plan: describe_generation_plan(settings),
    })
}

#[post("/generate/person")]
pub async fn generate_person(
    state: web::Data<ApiState>,
    req: HttpRequest,
    body: Option<web::Json<GenerateRequest>>,
) -> ApiResult<HttpResponse> {
    let resolved = prepare(&state, &req, body, "person")?;
    let bundle = generate(&state.settings, resolved.records, Some(resolved.seed), false)?;
    Ok(HttpResponse::Ok().json(EntityResponse {
        record_count: bundle.metadata.record_count_persons,
        metadata: bundle.metadata,
        records: PersonRecords {
            persons: bundle.persons,
        },
        seed: resolved.seed,
        records_requested: resolved.records,
    }))
}

#[post("/generate/vehicle")]
pub async fn generate_vehicle(
    state: web::Data<ApiState>,
    req: HttpRequest,
    body: Option<web::Json<GenerateRequest>>,
) -> ApiResult<HttpResponse> {
    let resolved = prepare(&state, &req, body, "vehicle")?;
    let bundle = generate(&state.settings, resolved.records, Some(resolved.seed), false)?;
    Ok(HttpResponse::Ok().json(EntityResponse {
        record_count: bundle.metadata.record_count_vehicles,
        metadata: bundle.metadata,
        records: VehicleRecords {
            vehicles: bundle.vehicles,
        },
        seed: resolved.seed,
        records_requested: resolved.records,
    }))
}

#[post("/generate/profile")]
pub async fn generate_profile(
    state: web::Data<ApiState>,
    req: HttpRequest,
    body: Option<web::Json<GenerateRequest>>,
) -> ApiResult<HttpResponse> {
    let resolved = prepare(&state, &req, body, "profile")?;
    let bundle = generate(&state.settings, resolved.records, Some(resolved.seed), true)?;
    Ok(HttpResponse::Ok().json(EntityResponse {
        record_count: bundle.metadata.record_count_profiles,
        metadata: bundle.metadata,
        records: ProfileRecords {
            profiles: bundle.profiles,
        },
        seed: resolved.seed,
        records_requested: resolved.records,
    }))
}

#[post("/generate/bundle")]
pub async fn generate_bundle(
    state: web::Data<ApiState>,
    req: HttpRequest,
    body: Option<web::Json<GenerateRequest>>,
) -> ApiResult<HttpResponse> {
    let resolved = prepare(&state, &req, body, "bundle")?;
    let bundle = generate(&state.settings, resolved.records, Some(resolved.seed), true)?;
    Ok(HttpResponse::Ok().json(BundleResponse {
        bundle,
        seed: resolved.seed,
        records_requested: resolved.records,
    }))
}

/// Shared front half of every generation handler: api-key check plus body
/// resolution.
fn prepare(
    state: &ApiState,
    req: &HttpRequest,
    body: Option<web::Json<GenerateRequest>>,
    entity: &str,
) -> ApiResult<ResolvedRequest> {
    check_api_key(state, req)?;
    let request = body.map(web::Json::into_inner).unwrap_or_default();
    let resolved = request.resolve(&state.settings)?;
    info!(
        entity,
        records = resolved.records,
        seed = resolved.seed,
        "generation request"
    );
    Ok(resolved)
}

fn check_api_key(state: &ApiState, req: &HttpRequest) -> ApiResult<()> {
    let Some(expected) = state.api_key.as_deref() else {
        return Ok(());
    };
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    if presented == Some(expected) {
        Ok(())
    } else {
        Err(ApiError::unauthorized())
    }
}
