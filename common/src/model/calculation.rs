use crate::model::product::ProductInput;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named snapshot of a product set, saved by the user for later reuse.
///
/// Immutable once stored: it can be listed, loaded and deleted but never
/// edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub id: String,
    pub name: String,
    pub products: Vec<ProductInput>,
    pub created_at: DateTime<Utc>,
}
