//! # Saved Bundle Services
//!
//! CRUD endpoints for named product bundles. The same handlers serve every
//! [`StoredBundle`] kind; each kind is mounted under its own `API_PATH`:
//!
//! *   **`GET /`** → `list::process`: all bundles, newest first.
//! *   **`POST /`** → `create::process`: validates the draft and stores it.
//!     Answers `201 Created` with the stored bundle, or `400` with details.
//! *   **`GET /{id}`** → `get::process`: one bundle, or `404`.
//! *   **`DELETE /{id}`** → `delete::process`: `204 No Content`, or `404`.
//!
//! Bundles are never updated in place, so there is no `PUT`.

mod create;
mod delete;
mod get;
mod list;

use crate::store::StoredBundle;
use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

/// Configures and returns the Actix `Scope` for bundle kind `B`.
pub fn configure_routes<B: StoredBundle>() -> Scope {
    scope(B::API_PATH)
        .route("", get().to(list::process::<B>))
        .route("", post().to(create::process::<B>))
        .route("/{id}", get().to(get::process::<B>))
        .route("/{id}", delete().to(delete::process::<B>))
}
