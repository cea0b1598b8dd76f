//! `POST /api/calculate`: evaluates a batch of products.
//!
//! Products are independent of each other, so the batch is spread over the
//! rayon pool. Output order matches input order.

use actix_web::web::{post, scope};
use actix_web::{web, HttpResponse, Scope};
use common::engine;
use common::model::metrics::ProductReport;
use common::model::product::ProductInput;
use common::requests::ProductsRequest;
use rayon::prelude::*;

const API_PATH: &str = "/api/calculate";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(process))
}

async fn process(payload: web::Json<ProductsRequest>) -> HttpResponse {
    HttpResponse::Ok().json(report_all(&payload.products))
}

/// Computes every product's report in parallel, preserving order.
pub fn report_all(products: &[ProductInput]) -> Vec<ProductReport> {
    products.par_iter().map(engine::report).collect()
}
