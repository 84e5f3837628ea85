//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for newsfeed operations.
///
/// The view engine itself never fails; every variant here belongs to a
/// boundary: fetching the feed, reading configuration, or constructing
/// view parameters.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure while fetching the feed
    #[error("Fetch failed: {message}")]
    Fetch {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The feed endpoint answered with a non-success status
    #[error("Request failed with status {status}")]
    Http { status: u16 },

    /// View parameters that admit no valid pagination
    #[error("Invalid view parameters: {0}")]
    InvalidParams(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Requested item does not exist in the feed
    #[error("No news item with id '{0}'")]
    NotFound(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Fetch error for a feed file that could not be read
    pub fn fetch(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::Fetch {
            message: format!("Cannot read feed {}: {}", path.display(), source),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Message shown to the user when a fetch does not produce items.
    ///
    /// Transport failures keep their own message; everything else
    /// collapses to a generic "could not load" line.
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch { message, .. } => message.clone(),
            Self::Http { .. } => "API request failed".to_string(),
            _ => "Could not load news data".to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
