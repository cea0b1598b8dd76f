//! Runtime settings, read from the environment (and a `.env` file if present).

use log::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE: &str = "roas.sqlite";
const DEFAULT_FONTS_DIR: &str = "./fonts";
const DEFAULT_JSON_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite file holding saved bundles, or `:memory:`.
    pub database: String,
    /// Directory with the TTF family used for PDF export.
    pub fonts_dir: PathBuf,
    /// Maximum accepted JSON body size in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            fonts_dir: PathBuf::from(DEFAULT_FONTS_DIR),
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

impl Config {
    /// Builds the configuration from `ROAS_*` variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("ROAS_HOST").unwrap_or(defaults.host),
            port: parse_or("ROAS_PORT", lookup("ROAS_PORT"), defaults.port),
            database: lookup("ROAS_DATABASE").unwrap_or(defaults.database),
            fonts_dir: lookup("ROAS_FONTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.fonts_dir),
            json_limit: parse_or("ROAS_JSON_LIMIT", lookup("ROAS_JSON_LIMIT"), defaults.json_limit),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}='{}', using default", key, raw);
            default
        }),
    }
}
