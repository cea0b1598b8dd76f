//! # Report Export Services
//!
//! Renders a product list and its computed figures as a downloadable report.
//! Both formats share one table: product name, sales price, total cost, net
//! profit, margin and break-even ROAS, with headers in the requested language.
//!
//! *   **`POST /api/export/csv`** → `csv::process`: spreadsheet-friendly CSV,
//!     raw numbers for amounts.
//! *   **`POST /api/export/pdf`** → `pdf::process`: a table rendered with
//!     `genpdf`, amounts formatted in the requested currency.

mod csv;
mod pdf;

pub use self::csv::render_csv;
pub use self::pdf::render_pdf;

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::web::{post, scope};
use actix_web::Scope;
use common::engine;
use common::i18n::{t, Language};
use common::model::product::ProductInput;
use rayon::prelude::*;
use thiserror::Error;

const API_PATH: &str = "/api/export";
const FILE_STEM: &str = "roas-calculations";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no usable font family in {dir}: {source}")]
    Font {
        dir: String,
        #[source]
        source: genpdf::error::Error,
    },
    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] genpdf::error::Error),
    #[error("CSV writing failed: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export task did not finish: {0}")]
    Join(String),
}

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/csv", post().to(csv::process))
        .route("/pdf", post().to(pdf::process))
}

/// One line of the exported table, before any formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub product_name: String,
    pub sales_price: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    pub margin_percent: f64,
    pub break_even_roas: f64,
    pub loss_making: bool,
    pub max_margin_percent: f64,
}

pub fn headers(language: Language) -> [String; 6] {
    [
        "productName",
        "salesPrice",
        "totalCost",
        "netProfit",
        "margin",
        "breakEvenRoas",
    ]
    .map(|key| t(language, key))
}

pub fn rows(products: &[ProductInput]) -> Vec<ExportRow> {
    products
        .par_iter()
        .map(|p| {
            let values = engine::calculate(p);
            ExportRow {
                product_name: p.product_name.clone(),
                sales_price: p.aov,
                total_cost: values.total_cost,
                net_profit: values.expected_gross_profit,
                margin_percent: values.gross_margin_percent,
                break_even_roas: values.break_even_roas,
                loss_making: values.is_loss_making(),
                max_margin_percent: values.max_achievable_margin(),
            }
        })
        .collect()
}

fn attachment(extension: &str) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(format!(
            "{}.{}",
            FILE_STEM, extension
        ))],
    }
}
