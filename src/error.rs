// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single report could not be turned into data.
/// Never fatal: the runner logs it and moves on to the next id.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("invalid report body from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid id list `{0}`")]
    IdList(String),

    #[error("invalid id range `{0}`")]
    IdRange(String),

    #[error("id list selects more than {max} ids")]
    TooManyIds { max: usize },

    #[error("ids must be 1 or greater (got {0})")]
    IdZero(u32),

    #[error("URL template `{0}` has no {{id}} placeholder")]
    Template(String),

    #[error("unknown format `{0}` (expected csv or tsv)")]
    Format(String),

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

#[derive(Debug, Error)]
#[error("could not write {}: {source}", .path.display())]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Fatal errors: anything that ends the run before both tables are written.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
