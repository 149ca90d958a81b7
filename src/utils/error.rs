use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub enum AppError {
    /// Required configuration is missing or malformed
    Config(String),
    /// Initial connect/ping against the store failed
    Connection(String),
    /// A store command (find, insert, update, delete, ping) failed
    Query(String),
    /// Documents came back but could not be decoded
    Decode(String),
    /// The call did not finish before its deadline
    Timeout(Duration),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Connection(msg) => write!(f, "Connection error: {}", msg),
            AppError::Query(msg) => write!(f, "Database error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AppError::Timeout(budget) => write!(f, "Deadline of {:?} exceeded", budget),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::Query(e.to_string())
    }
}
