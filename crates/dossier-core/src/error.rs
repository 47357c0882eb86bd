//! Error taxonomy for `dossier-core`.
//!
//! Repository operations signal "record not found" through `Option`/`bool`
//! return values rather than an error variant, so callers can choose their
//! own mapping. Everything that is a genuine failure lives here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Malformed or missing required input.
  #[error("{0}")]
  Validation(String),

  /// An insert would exceed a fixed watch-list cap.
  #[error("maximum of {cap} {entity} reached")]
  CapacityExceeded { entity: &'static str, cap: usize },

  /// The underlying database failed. Fatal for the current request, not for
  /// the process.
  #[error("storage error: {0}")]
  Storage(String),
}

impl Error {
  /// Shorthand for a [`Error::Validation`] with a formatted message.
  pub fn validation(msg: impl Into<String>) -> Self {
    Self::Validation(msg.into())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
