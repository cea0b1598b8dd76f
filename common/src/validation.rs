//! Boundary checks for product records that arrive as loose JSON, such as
//! browser-stored snapshots or decoded share tokens.
//!
//! Records are coerced field by field instead of being trusted or rejected as
//! a whole: a bad number becomes `0`, a missing id is regenerated. Only a
//! record that is not a JSON object at all is refused.

use crate::model::product::{ProductField, ProductInput, new_product_id};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("record {index} is not an object")]
    NotAnObject { index: usize },
    #[error("expected an array of product records")]
    NotAnArray,
}

/// Coerces one JSON record into a [`ProductInput`].
pub fn validate_record(value: &Value) -> Result<ProductInput, ValidationError> {
    validate_at(value, 0)
}

/// Coerces a JSON array of records. Fails on the first non-object entry.
pub fn validate_records(value: &Value) -> Result<Vec<ProductInput>, ValidationError> {
    let items = value.as_array().ok_or(ValidationError::NotAnArray)?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_at(item, index))
        .collect()
}

fn validate_at(value: &Value, index: usize) -> Result<ProductInput, ValidationError> {
    let obj = value
        .as_object()
        .ok_or(ValidationError::NotAnObject { index })?;

    let id = match obj.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        // numeric ids from older snapshots
        Some(Value::Number(n)) => n.to_string(),
        _ => new_product_id(),
    };
    let product_name = match obj.get(ProductField::ProductName.key()) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };

    let mut product = ProductInput {
        id,
        product_name,
        aov: 0.0,
        product_cost: 0.0,
        credit_card_fee_percent: 0.0,
        payment_processing_fee: 0.0,
        shipping_cost: 0.0,
        fulfillment_cost: 0.0,
    };
    for field in ProductField::NUMERIC {
        product.set_number(field, coerce_number(obj.get(field.key())));
    }
    Ok(product)
}

fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_number_or_zero(s),
        _ => 0.0,
    }
}

/// Parses user-typed text the lenient way browsers do for number inputs:
/// the longest numeric prefix wins, and text without one becomes `0`.
///
/// `"12.5kg"` is `12.5`, `" -3e2x"` is `-300`, `"abc"` and `""` are `0`.
pub fn parse_number_or_zero(raw: &str) -> f64 {
    match parse_number_prefix(raw) {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Returns the value of the longest numeric prefix of `raw`, if any.
pub fn parse_number_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
