use crate::error::ApiError;
use crate::services::calculate::report_all;
use actix_web::{web, HttpResponse};
use common::i18n::{t, Language};
use common::model::metrics::ProductReport;
use common::model::product::ProductInput;
use common::share;
use common::workset::ProductSet;
use serde::Serialize;

#[derive(Serialize)]
struct SharedProducts {
    products: Vec<ProductInput>,
    calculations: Vec<ProductReport>,
}

/// Restores a shared product list. Ids are repaired the same way a loaded
/// snapshot's are, and an empty list comes back as one sample product.
pub async fn process(token: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let decoded = share::decode(&token).map_err(ApiError::Share)?;
    let fallback = format!("{} 1", t(Language::default(), "product"));
    let products = ProductSet::from_products(decoded, &fallback).into_products();
    let calculations = report_all(&products);
    Ok(HttpResponse::Ok().json(SharedProducts {
        products,
        calculations,
    }))
}
