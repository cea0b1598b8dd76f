//! Payloads accepted by the HTTP API.

use crate::i18n::{Currency, Language};
use crate::model::product::ProductInput;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/calculations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalculation {
    pub name: String,
    pub products: Vec<ProductInput>,
}

/// Body of `POST /api/templates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub products: Vec<ProductInput>,
}

/// Service rules shared by both bundle kinds, checked after the body has
/// deserialized. Returns one message per broken rule.
pub fn bundle_issues(name: &str, products: &[ProductInput]) -> Vec<String> {
    let mut issues = Vec::new();
    if name.trim().is_empty() {
        issues.push("name: this service does not save bundles with a blank name".to_string());
    }
    if products.is_empty() {
        issues.push("products: this service does not save bundles without products".to_string());
    }
    issues
}

/// Body of `POST /api/calculate` and `POST /api/share`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsRequest {
    pub products: Vec<ProductInput>,
}

/// Body of the export endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub products: Vec<ProductInput>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub currency: Currency,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareToken {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_request_defaults_to_turkish_lira() {
        let req: ExportRequest = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert_eq!(req.language, Language::Tr);
        assert_eq!(req.currency, Currency::Try);
    }

    #[test]
    fn bundle_issues_reports_blank_name_and_empty_products() {
        let issues = bundle_issues("  ", &[]);
        assert_eq!(
            issues,
            vec![
                "name: this service does not save bundles with a blank name",
                "products: this service does not save bundles without products",
            ]
        );
        let product = ProductInput::with_defaults("1", "A");
        assert!(bundle_issues("Summer", &[product]).is_empty());
    }
}
