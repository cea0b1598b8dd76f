use crate::store::StoreError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::share::ShareError;
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with, and how it is shown to clients.
///
/// Not-found and validation problems go back as `404`/`400`; anything else is
/// logged and answered with a generic `500` naming the failed action.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Invalid data")]
    Validation(Vec<String>),
    #[error("Invalid share token")]
    Share(#[source] ShareError),
    #[error("Failed to encode share token")]
    ShareEncode(#[source] ShareError),
    #[error("Failed to {action}")]
    Store {
        action: String,
        #[source]
        source: StoreError,
    },
    #[error("Failed to export {kind}")]
    Export {
        kind: &'static str,
        #[source]
        source: crate::services::export::ExportError,
    },
}

impl ApiError {
    pub fn store(action: impl Into<String>) -> impl FnOnce(StoreError) -> ApiError {
        let action = action.into();
        move |source| ApiError::Store { action, source }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::Share(_) => StatusCode::BAD_REQUEST,
            ApiError::Store { .. } | ApiError::Export { .. } | ApiError::ShareEncode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Store { source, .. } => log::error!("{}: {}", self, source),
            ApiError::Export { source, .. } => log::error!("{}: {}", self, source),
            ApiError::ShareEncode(source) => log::error!("{}: {}", self, source),
            ApiError::Share(source) => log::debug!("{}: {}", self, source),
            _ => {}
        }
        let body = match self {
            ApiError::Validation(details) => json!({ "error": self.to_string(), "details": details }),
            ApiError::Share(source) => json!({ "error": self.to_string(), "details": [source.to_string()] }),
            _ => json!({ "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::NotFound("Template").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFound("Template").to_string(), "Template not found");
        assert_eq!(
            ApiError::Validation(vec!["name".into()]).status_code(),
            StatusCode::BAD_REQUEST
        );
        let err = ApiError::store("fetch calculations")(StoreError::Poisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to fetch calculations");
    }

    #[actix_web::test]
    async fn share_failures_split_by_side() {
        let bad_json = || ShareError::from(serde_json::from_str::<serde_json::Value>("[").unwrap_err());
        let decode = ApiError::Share(bad_json());
        assert_eq!(decode.status_code(), StatusCode::BAD_REQUEST);

        let encode = ApiError::ShareEncode(bad_json());
        assert_eq!(encode.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(encode.to_string(), "Failed to encode share token");
        let bytes = actix_web::body::to_bytes(encode.error_response().into_body())
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Failed to encode share token" }));
    }
}
