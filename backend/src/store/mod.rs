//! # Bundle Repository
//!
//! Saved calculations and templates live in a SQLite database, one table per
//! bundle kind. Both kinds share the same row shape:
//!
//! | column      | content                                   |
//! |-------------|-------------------------------------------|
//! | id          | opaque UUID                               |
//! | name        | user-facing name                          |
//! | description | templates only, `NULL` otherwise          |
//! | products    | JSON array of `ProductInput`              |
//! | created_at  | RFC 3339 UTC timestamp, fixed width       |
//!
//! The [`Store`] is created once in `main.rs` and handed to every handler as
//! application data. Bundles are immutable once written: the repository only
//! offers list, get, create and delete.

mod bundle;

pub use bundle::{BundleRow, StoredBundle};

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use common::model::product::ProductInput;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use uuid::Uuid;

const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("stored bundle {id} is malformed: {reason}")]
    Malformed { id: String, reason: String },
    #[error("could not encode products: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("database lock poisoned")]
    Poisoned,
}

pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Opens (or creates) the database at `path`. `":memory:"` gives a
    /// private in-memory database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = if path.as_os_str() == IN_MEMORY {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.migrate()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::open(IN_MEMORY)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        let conn = self.lock()?;
        for table in [
            <common::model::calculation::Calculation as StoredBundle>::TABLE,
            <common::model::template::Template as StoredBundle>::TABLE,
        ] {
            conn.execute_batch(&format!(
                "CREATE TABLE IF NOT EXISTS {table} (
                    id          TEXT PRIMARY KEY,
                    name        TEXT NOT NULL,
                    description TEXT,
                    products    TEXT NOT NULL,
                    created_at  TEXT NOT NULL
                );"
            ))?;
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// All bundles of kind `B`, newest first.
    pub fn list<B: StoredBundle>(&self) -> Result<Vec<B>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT id, name, description, products, created_at FROM {} \
             ORDER BY created_at DESC, rowid DESC",
            B::TABLE
        ))?;
        let raw_rows = stmt
            .query_map([], RawRow::from_sql)?
            .collect::<Result<Vec<_>, _>>()?;
        raw_rows
            .into_iter()
            .map(|raw| raw.decode().map(B::from_row))
            .collect()
    }

    pub fn get<B: StoredBundle>(&self, id: &str) -> Result<Option<B>, StoreError> {
        let conn = self.lock()?;
        let raw = conn
            .query_row(
                &format!(
                    "SELECT id, name, description, products, created_at FROM {} WHERE id = ?1",
                    B::TABLE
                ),
                params![id],
                RawRow::from_sql,
            )
            .optional()?;
        raw.map(|raw| raw.decode().map(B::from_row)).transpose()
    }

    /// Stores a new bundle, assigning its id and creation time.
    pub fn create<B: StoredBundle>(&self, draft: B::Draft) -> Result<B, StoreError> {
        // stored with microsecond precision, so keep the returned copy identical
        let created_at = Utc::now().trunc_subsecs(6);
        let row = B::into_row(draft, Uuid::new_v4().to_string(), created_at);
        let products = serde_json::to_string(&row.products)?;
        let conn = self.lock()?;
        conn.execute(
            &format!(
                "INSERT INTO {} (id, name, description, products, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                B::TABLE
            ),
            params![
                row.id,
                row.name,
                row.description,
                products,
                timestamp(&row.created_at)
            ],
        )?;
        debug!("Stored {} {}", B::LABEL, row.id);
        Ok(B::from_row(row))
    }

    /// Returns false when no bundle had that id.
    pub fn delete<B: StoredBundle>(&self, id: &str) -> Result<bool, StoreError> {
        let conn = self.lock()?;
        let affected = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", B::TABLE),
            params![id],
        )?;
        debug!("Deleted {} {}: {}", B::LABEL, id, affected > 0);
        Ok(affected > 0)
    }
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// A row as read from SQLite, before the JSON and timestamp are checked.
struct RawRow {
    id: String,
    name: String,
    description: Option<String>,
    products: String,
    created_at: String,
}

impl RawRow {
    fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            products: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn decode(self) -> Result<BundleRow, StoreError> {
        let products: Vec<ProductInput> =
            serde_json::from_str(&self.products).map_err(|e| StoreError::Malformed {
                id: self.id.clone(),
                reason: e.to_string(),
            })?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| StoreError::Malformed {
                id: self.id.clone(),
                reason: e.to_string(),
            })?
            .with_timezone(&Utc);
        Ok(BundleRow {
            id: self.id,
            name: self.name,
            description: self.description,
            products,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::calculation::Calculation;
    use common::model::template::Template;
    use common::requests::{NewCalculation, NewTemplate};

    fn draft(name: &str) -> NewCalculation {
        NewCalculation {
            name: name.to_string(),
            products: vec![ProductInput::with_defaults("p1", "Mug")],
        }
    }

    #[test]
    fn create_then_get() {
        let store = Store::open_in_memory().unwrap();
        let created: Calculation = store.create(draft("Summer")).unwrap();
        let fetched: Calculation = store.get(&created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.products[0].product_name, "Mug");
    }

    #[test]
    fn list_is_newest_first() {
        let store = Store::open_in_memory().unwrap();
        let first: Calculation = store.create(draft("first")).unwrap();
        let second: Calculation = store.create(draft("second")).unwrap();
        let listed: Vec<Calculation> = store.list().unwrap();
        let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let store = Store::open_in_memory().unwrap();
        let created: Calculation = store.create(draft("x")).unwrap();
        assert!(store.delete::<Calculation>(&created.id).unwrap());
        assert!(!store.delete::<Calculation>(&created.id).unwrap());
        assert!(store.get::<Calculation>(&created.id).unwrap().is_none());
    }

    #[test]
    fn kinds_are_kept_apart() {
        let store = Store::open_in_memory().unwrap();
        let template: Template = store
            .create(NewTemplate {
                name: "Starter".to_string(),
                description: Some("Three typical products".to_string()),
                products: vec![ProductInput::with_defaults("p1", "Mug")],
            })
            .unwrap();
        assert!(store.get::<Calculation>(&template.id).unwrap().is_none());
        assert!(store.list::<Calculation>().unwrap().is_empty());
        let fetched: Template = store.get(&template.id).unwrap().unwrap();
        assert_eq!(fetched.description.as_deref(), Some("Three typical products"));
    }

    #[test]
    fn malformed_products_are_reported() {
        let store = Store::open_in_memory().unwrap();
        store
            .lock()
            .unwrap()
            .execute(
                "INSERT INTO calculations (id, name, description, products, created_at) \
                 VALUES ('bad', 'broken', NULL, '{\"not\": \"a list\"}', '2024-01-01T00:00:00Z')",
                [],
            )
            .unwrap();
        let err = store.get::<Calculation>("bad").unwrap_err();
        assert!(matches!(err, StoreError::Malformed { ref id, .. } if id == "bad"));
    }

    #[test]
    fn file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roas.sqlite");
        let id = {
            let store = Store::open(&path).unwrap();
            store.create::<Calculation>(draft("kept")).unwrap().id
        };
        let reopened = Store::open(&path).unwrap();
        let fetched: Calculation = reopened.get(&id).unwrap().unwrap();
        assert_eq!(fetched.name, "kept");
    }
}
