//! Language and currency selection, label lookup and number formatting.
//!
//! Currency selection changes only how amounts are rendered; no conversion
//! is ever applied to the figures.

mod format;
mod translations;

pub use format::{format_currency, format_percent, format_roas};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "TRY")]
    Try,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Try => "TRY",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Try => "₺",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }
}

/// Looks up a label, falling back to Turkish and then to the key itself.
pub fn t(language: Language, key: &str) -> String {
    translations::lookup(language, key)
        .or_else(|| translations::lookup(Language::Tr, key))
        .unwrap_or(key)
        .to_string()
}

/// Like [`t`], substituting each `{name}` placeholder from `params`.
pub fn t_with(language: Language, key: &str, params: &[(&str, &str)]) -> String {
    let mut text = t(language, key);
    for (name, value) in params {
        text = text.replace(&format!("{{{}}}", name), value);
    }
    text
}
