//! URL-safe tokens that carry a product list between browsers.
//!
//! A token is the JSON array of products, base64-encoded with the URL-safe
//! alphabet and no padding, so it can travel as a query parameter untouched.
//! Decoding treats the payload as untrusted and runs it through
//! [`validation`](crate::validation).

use crate::model::product::ProductInput;
use crate::validation::{ValidationError, validate_records};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("token is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("token payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

pub fn encode(products: &[ProductInput]) -> Result<String, ShareError> {
    let json = serde_json::to_vec(products)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode(token: &str) -> Result<Vec<ProductInput>, ShareError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
    let text = String::from_utf8(bytes)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    Ok(validate_records(&value)?)
}
