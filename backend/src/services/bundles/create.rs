use crate::error::ApiError;
use crate::store::{Store, StoredBundle};
use actix_web::{web, HttpResponse};
use log::info;

/// Handler for `POST {API_PATH}`.
///
/// Shape errors in the body are rejected by the JSON extractor before this
/// runs (see `services::json_config`); here only the semantic checks remain.
pub async fn process<B: StoredBundle>(
    store: web::Data<Store>,
    payload: web::Json<B::Draft>,
) -> Result<HttpResponse, ApiError> {
    let draft = payload.into_inner();
    let issues = B::issues(&draft);
    if !issues.is_empty() {
        return Err(ApiError::Validation(issues));
    }
    let bundle = store
        .create::<B>(draft)
        .map_err(ApiError::store(format!("create {}", B::LABEL.to_lowercase())))?;
    info!("{} saved", B::LABEL);
    Ok(HttpResponse::Created().json(bundle))
}
