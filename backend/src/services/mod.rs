//! HTTP surface of the calculator.
//!
//! - `bundles`: saved calculations and templates (CRUD).
//! - `calculate`: batch evaluation of product inputs.
//! - `share`: URL-safe tokens for product lists.
//! - `export`: CSV and PDF reports.

pub mod bundles;
pub mod calculate;
pub mod export;
pub mod share;

use crate::error::ApiError;
use actix_web::web::{self, get};
use actix_web::HttpResponse;
use common::model::calculation::Calculation;
use common::model::template::Template;

/// Registers every route. Expects `web::Data<Store>` and `web::Data<Config>`
/// to be provided by the `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(bundles::configure_routes::<Calculation>())
        .service(bundles::configure_routes::<Template>())
        .service(calculate::configure_routes())
        .service(share::configure_routes())
        .service(export::configure_routes())
        .route("/health", get().to(health));
}

/// JSON extractor settings: body size limit and `400` bodies listing what
/// failed to deserialize.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| ApiError::Validation(vec![err.to_string()]).into())
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
