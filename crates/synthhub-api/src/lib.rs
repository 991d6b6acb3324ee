//! Thin HTTP surface over the generator.
//!
//! Exposes a health probe plus per-entity generation endpoints returning
//! freshly generated records as JSON. The service holds no state between
//! requests; every response is a pure function of the request body and the
//! dataset settings.

pub mod error;
pub mod handlers;
pub mod request;

use std::io;

use actix_web::{web, App, HttpServer};
use tracing::info;

use synthhub_core::DatasetSettings;

pub use error::{ApiError, ErrorCode};
pub use request::GenerateRequest;

/// Shared, read-only state for all handlers.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub settings: DatasetSettings,
    /// When set, requests must carry a matching `x-api-key` header.
    pub api_key: Option<String>,
}

impl ApiState {
    pub fn new(settings: DatasetSettings, api_key: Option<String>) -> Self {
        Self { settings, api_key }
    }
}

/// Register all routes on an existing service config. Split out so tests can
/// assemble an app without binding a socket.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::healthz)
        .service(handlers::generate_person)
        .service(handlers::generate_vehicle)
        .service(handlers::generate_profile)
        .service(handlers::generate_bundle);
}

/// Bind and run the HTTP server until it is shut down.
pub async fn serve(state: ApiState, host: &str, port: u16) -> io::Result<()> {
    info!(host, port, "starting api server");
    let data = web::Data::new(state);
    HttpServer::new(move || App::new().app_data(data.clone()).configure(configure))
        .bind((host, port))?
        .run()
        .await
}

/// Blocking entry point for synchronous callers.
pub fn run(state: ApiState, host: &str, port: u16) -> io::Result<()> {
    actix_web::rt::System::new().block_on(serve(state, host, port))
}
