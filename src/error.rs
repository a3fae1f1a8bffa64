use thiserror::Error;

/// Errors that can occur while fetching, normalizing or searching recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// Transport failure talking to the recipe API
    #[error("Failed to fetch from recipe API: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Recipe API answered with a non-success status
    #[error("Recipe API returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body could not be decoded
    #[error("Failed to decode recipe API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Raw record is missing a required field
    #[error("Malformed recipe record: {0}")]
    MalformedRecord(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FinderError {
    /// Whether retrying the same request could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            FinderError::Fetch(_) => true,
            FinderError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

pub type Result<T, E = FinderError> = std::result::Result<T, E>;
