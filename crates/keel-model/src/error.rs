//! Error types for `keel-model`.

use thiserror::Error;

use crate::value::Value;

#[derive(Debug, Error)]
pub enum Error {
  /// A required argument was absent (it converted to [`Value::Null`]).
  #[error("invalid argument: `{0}` must not be null")]
  InvalidArgument(&'static str),

  /// An identifier lookup found more than one entity sharing the identifier.
  #[error("more than one entity shares the requested identifier")]
  MultipleMatches,

  #[error("version mismatch: expected {expected}, found {actual}")]
  VersionMismatch { actual: Value, expected: Value },

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
