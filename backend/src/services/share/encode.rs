use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::requests::{ProductsRequest, ShareToken};
use common::share;

pub async fn process(payload: web::Json<ProductsRequest>) -> Result<HttpResponse, ApiError> {
    let token = share::encode(&payload.products).map_err(ApiError::ShareEncode)?;
    Ok(HttpResponse::Ok().json(ShareToken { token }))
}
