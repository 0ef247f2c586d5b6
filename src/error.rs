use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AhauxError {
    #[error("no container registered under '{0}'")]
    NoSuchContainer(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("font data could not be parsed")]
    InvalidFont,

    #[error("request to {url} failed: {detail}")]
    Transport { url: String, detail: String },

    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to save download to {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AhauxError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
