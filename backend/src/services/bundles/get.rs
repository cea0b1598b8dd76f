use crate::error::ApiError;
use crate::store::{Store, StoredBundle};
use actix_web::{web, HttpResponse};

/// Handler for `GET {API_PATH}/{id}`.
///
/// # Returns
/// - `200 OK` with the bundle as JSON.
/// - `404 Not Found` when no bundle has that id.
pub async fn process<B: StoredBundle>(
    store: web::Data<Store>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let bundle = store
        .get::<B>(&id)
        .map_err(ApiError::store(format!("fetch {}", B::LABEL.to_lowercase())))?
        .ok_or(ApiError::NotFound(B::LABEL))?;
    Ok(HttpResponse::Ok().json(bundle))
}
