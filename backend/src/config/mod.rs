//! Central module for application-wide configuration settings.
//!
//! Configuration is loaded from the environment once at startup: server
//! port, database URL, media-hosting credentials, and session lifetime.
//! Missing optional values fall back to logged defaults; a value that is
//! present but unparseable aborts startup.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub media_base_url: String,
    pub media_upload_preset: String,
    pub session_ttl_hours: i64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "8080"),
            database_url: require("DATABASE_URL"),
            media_base_url: require("MEDIA_BASE_URL"),
            media_upload_preset: require("MEDIA_UPLOAD_PRESET"),
            session_ttl_hours: try_load("SESSION_TTL_HOURS", "72"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found");
    })
}

fn require(key: &str) -> String {
    var(key).expect("Environment misconfigured!")
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
