//! Shared domain code for the break-even ROAS calculator.
//!
//! Everything in this crate is free of I/O so it can be used by the HTTP
//! service and by any client that wants to recompute figures locally:
//!
//! - `model`: product inputs, derived values and saved bundles.
//! - `engine`: the closed-form profitability and ROAS formulas.
//! - `workset`: an ordered, never-empty set of products being edited.
//! - `validation`: field-by-field coercion of untrusted JSON records.
//! - `share`: URL-safe tokens carrying a product list.
//! - `i18n`: labels and locale-aware number formatting.
//! - `requests`: payloads exchanged with the HTTP API.

pub mod engine;
pub mod i18n;
pub mod model;
pub mod requests;
pub mod share;
pub mod validation;
pub mod workset;
