use std::env;
use std::path::Path;

use crate::utils::AppError;

/// Arquivos .env candidatos, na ordem de tentativa
pub const DOTENV_CANDIDATES: [&str; 3] = [".env", "../.env", "../../.env"];

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE: &str = "fiberdb";
pub const USERS_COLLECTION: &str = "users";

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub database: String,
    pub collection: String,
}

impl Settings {
    /// Reads the process environment. Call [`load_env_file`] first.
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mongo_uri = non_empty("MONGO_URI").ok_or_else(|| {
            AppError::Config(
                "MONGO_URI missing! Create .env file with MONGO_URI=your_connection_string".into(),
            )
        })?;

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("invalid PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        Ok(Settings {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            mongo_uri,
            database: non_empty("MONGO_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            collection: USERS_COLLECTION.to_string(),
        })
    }
}

/// Loads the first readable .env candidate into the process environment.
/// Variables already set are left untouched; no candidate at all is fine.
pub fn load_env_file() -> Option<&'static str> {
    load_dotenv(&DOTENV_CANDIDATES)
}

fn load_dotenv<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|path| dotenv::from_path(Path::new(*path)).is_ok())
}
