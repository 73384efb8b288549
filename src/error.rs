use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedmineError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP {status}")]
    Http { status: u16 },

    #[error("could not decode server response: {message}")]
    Decode { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No API key found. Set REDMINE_API_KEY env var or add api_key to the config file (run 'redmine init')"
    )]
    MissingApiKey,

    #[error(
        "No server URL found. Set REDMINE_URL env var or add url to the config file (run 'redmine init')"
    )]
    MissingBaseUrl,

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, RedmineError>;
