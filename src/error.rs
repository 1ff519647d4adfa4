//! Error types for content loading and request handling

use std::path::PathBuf;

use thiserror::Error;

pub type SiteResult<T> = Result<T, SiteError>;

#[derive(Error, Debug)]
pub enum SiteError {
  #[error("failed to read {path:?}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("content is not valid JSON: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("invalid content: {0}")]
  Invalid(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("file watcher error: {0}")]
  Watch(#[from] notify::Error),
}

impl SiteError {
  pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    SiteError::Io { path: path.into(), source }
  }

  pub fn not_found(what: impl Into<String>) -> Self {
    SiteError::NotFound(what.into())
  }
}
