//! Share links.
//!
//! *   **`POST /api/share`** → `encode::process`: turns a product list into a token.
//! *   **`GET /api/share/{token}`** → `decode::process`: restores the products
//!     and returns them with freshly computed figures.

mod decode;
mod encode;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/share";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(encode::process))
        .route("/{token}", get().to(decode::process))
}
