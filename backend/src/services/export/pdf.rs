use super::{attachment, headers, rows, ExportError};
use crate::config::Config;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::i18n::{format_currency, format_percent, format_roas, t, t_with, Currency, Language};
use common::requests::ExportRequest;
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::Style;
use genpdf::{Document, Element, SimplePageDecorator};
use log::info;
use std::path::Path;

const FONT_SIZE_PT: u8 = 9;
const TITLE_SIZE_PT: u8 = 14;
const MARGIN_MM: i32 = 10;

/// Rendering is CPU-bound, so it runs on the blocking pool.
pub async fn process(
    config: web::Data<Config>,
    payload: web::Json<ExportRequest>,
) -> Result<HttpResponse, ApiError> {
    let fonts_dir = config.fonts_dir.clone();
    let request = payload.into_inner();
    let count = request.products.len();

    let rendered = tokio::task::spawn_blocking(move || render_pdf(&request, &fonts_dir))
        .await
        .map_err(|e| ExportError::Join(e.to_string()))
        .and_then(|result| result)
        .map_err(|source| ApiError::Export { kind: "PDF", source })?;

    info!("Exported {} products to PDF", count);
    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(attachment("pdf"))
        .body(rendered))
}

/// Loads Arial from `dir`, falling back to LiberationSans.
fn load_font(dir: &Path) -> Result<FontFamily<FontData>, ExportError> {
    if let Ok(family) = genpdf::fonts::from_files(dir, "Arial", None) {
        return Ok(family);
    }
    genpdf::fonts::from_files(dir, "LiberationSans", None).map_err(|source| ExportError::Font {
        dir: dir.display().to_string(),
        source,
    })
}

fn configure_document(fonts_dir: &Path, title: &str) -> Result<Document, ExportError> {
    let mut doc = Document::new(load_font(fonts_dir)?);
    doc.set_title(title);
    doc.set_font_size(FONT_SIZE_PT);
    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(MARGIN_MM);
    doc.set_page_decorator(decorator);
    Ok(doc)
}

fn cells(row: &super::ExportRow, language: Language, currency: Currency) -> [String; 6] {
    [
        row.product_name.clone(),
        format_currency(row.sales_price, currency),
        format_currency(row.total_cost, currency),
        format_currency(row.net_profit, currency),
        format_percent(row.margin_percent, language),
        format_roas(row.break_even_roas, language),
    ]
}

/// One line per product under the table: the loss warning for products that
/// lose money, otherwise the highest margin their costs allow.
fn notes(rows: &[super::ExportRow], language: Language) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let note = if row.loss_making {
                format!(
                    "{} {}",
                    t(language, "lossWarningTitle"),
                    t(language, "lossWarningDesc")
                )
            } else {
                let margin = format_percent(row.max_margin_percent, language);
                t_with(language, "maxMarginInfo", &[("margin", &margin)])
            };
            format!("{}: {}", row.product_name, note)
        })
        .collect()
}

/// Renders the report table to PDF bytes.
pub fn render_pdf(request: &ExportRequest, fonts_dir: &Path) -> Result<Vec<u8>, ExportError> {
    let title = t(request.language, "title");
    let mut doc = configure_document(fonts_dir, &t(request.language, "exportSheetName"))?;
    doc.push(Paragraph::new(title).styled(Style::new().bold().with_font_size(TITLE_SIZE_PT)));
    doc.push(Paragraph::new(format!(
        "{}: {}",
        t(request.language, "currency"),
        request.currency.code()
    )));
    doc.push(Break::new(1));

    let report_rows = rows(&request.products);
    let mut table = TableLayout::new(vec![3, 2, 2, 2, 1, 1]);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let mut header = table.row();
    for label in headers(request.language) {
        header = header.element(Paragraph::new(label).styled(Style::new().bold()).padded(1));
    }
    header.push()?;

    for row in &report_rows {
        let mut line = table.row();
        for cell in cells(row, request.language, request.currency) {
            line = line.element(Paragraph::new(cell).padded(1));
        }
        line.push()?;
    }
    doc.push(table);
    doc.push(Break::new(1));

    for (row, note) in report_rows.iter().zip(notes(&report_rows, request.language)) {
        let style = if row.loss_making { Style::new().bold() } else { Style::new() };
        doc.push(Paragraph::new(note).styled(style));
    }

    let mut buffer = Vec::new();
    doc.render(&mut buffer)?;
    Ok(buffer)
}
