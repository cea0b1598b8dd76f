use crate::model::product::ProductInput;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reusable starting point: like a saved calculation, plus a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub products: Vec<ProductInput>,
    pub created_at: DateTime<Utc>,
}
