use crate::error::ApiError;
use crate::store::{Store, StoredBundle};
use actix_web::{web, HttpResponse};

/// Handler for `GET {API_PATH}`.
pub async fn process<B: StoredBundle>(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let bundles = store
        .list::<B>()
        .map_err(ApiError::store(format!("fetch {}", B::TABLE)))?;
    Ok(HttpResponse::Ok().json(bundles))
}
