use chrono::{DateTime, Utc};
use common::model::calculation::Calculation;
use common::model::product::ProductInput;
use common::model::template::Template;
use common::requests::{bundle_issues, NewCalculation, NewTemplate};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The storage shape shared by every bundle kind.
#[derive(Debug, Clone)]
pub struct BundleRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub products: Vec<ProductInput>,
    pub created_at: DateTime<Utc>,
}

/// A kind of named product bundle the repository can hold.
///
/// Implementors describe where they are stored and how they map onto a
/// [`BundleRow`]; the store and HTTP handlers are generic over this trait.
pub trait StoredBundle: Serialize + Send + Sized + 'static {
    /// The creation payload, as posted by clients.
    type Draft: DeserializeOwned + Send + 'static;

    const TABLE: &'static str;
    /// Human label used in messages, e.g. "Calculation not found".
    const LABEL: &'static str;
    /// Mount point of the CRUD routes.
    const API_PATH: &'static str;

    fn issues(draft: &Self::Draft) -> Vec<String>;
    fn into_row(draft: Self::Draft, id: String, created_at: DateTime<Utc>) -> BundleRow;
    fn from_row(row: BundleRow) -> Self;
}

impl StoredBundle for Calculation {
    type Draft = NewCalculation;

    const TABLE: &'static str = "calculations";
    const LABEL: &'static str = "Calculation";
    const API_PATH: &'static str = "/api/calculations";

    fn issues(draft: &NewCalculation) -> Vec<String> {
        bundle_issues(&draft.name, &draft.products)
    }

    fn into_row(draft: NewCalculation, id: String, created_at: DateTime<Utc>) -> BundleRow {
        BundleRow {
            id,
            name: draft.name,
            description: None,
            products: draft.products,
            created_at,
        }
    }

    fn from_row(row: BundleRow) -> Self {
        Calculation {
            id: row.id,
            name: row.name,
            products: row.products,
            created_at: row.created_at,
        }
    }
}

impl StoredBundle for Template {
    type Draft = NewTemplate;

    const TABLE: &'static str = "templates";
    const LABEL: &'static str = "Template";
    const API_PATH: &'static str = "/api/templates";

    fn issues(draft: &NewTemplate) -> Vec<String> {
        bundle_issues(&draft.name, &draft.products)
    }

    fn into_row(draft: NewTemplate, id: String, created_at: DateTime<Utc>) -> BundleRow {
        BundleRow {
            id,
            name: draft.name,
            // blank descriptions are stored as absent
            description: draft.description.filter(|d| !d.trim().is_empty()),
            products: draft.products,
            created_at,
        }
    }

    fn from_row(row: BundleRow) -> Self {
        Template {
            id: row.id,
            name: row.name,
            description: row.description,
            products: row.products,
            created_at: row.created_at,
        }
    }
}
