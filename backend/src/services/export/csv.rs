use super::{attachment, headers, rows, ExportError};
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use common::requests::ExportRequest;

pub async fn process(payload: web::Json<ExportRequest>) -> Result<HttpResponse, ApiError> {
    let bytes = render_csv(&payload).map_err(|source| ApiError::Export { kind: "CSV", source })?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(attachment("csv"))
        .body(bytes))
}

/// Amounts stay raw so spreadsheets can compute with them; margin and ROAS
/// are fixed to two decimals.
pub fn render_csv(request: &ExportRequest) -> Result<Vec<u8>, ExportError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(headers(request.language))?;
    for row in rows(&request.products) {
        writer.write_record([
            row.product_name,
            row.sales_price.to_string(),
            row.total_cost.to_string(),
            row.net_profit.to_string(),
            format!("{:.2}%", row.margin_percent),
            format!("{:.2}", row.break_even_roas),
        ])?;
    }
    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}
