use crate::error::ApiError;
use crate::store::{Store, StoredBundle};
use actix_web::{web, HttpResponse};

/// Handler for `DELETE {API_PATH}/{id}`: `204` when removed, `404` otherwise.
pub async fn process<B: StoredBundle>(
    store: web::Data<Store>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let deleted = store
        .delete::<B>(&id)
        .map_err(ApiError::store(format!("delete {}", B::LABEL.to_lowercase())))?;
    if !deleted {
        return Err(ApiError::NotFound(B::LABEL));
    }
    Ok(HttpResponse::NoContent().finish())
}
