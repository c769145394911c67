//! Error type for `keel-sql`.

use keel_model::Field;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("model error: {0}")]
  Model(#[from] keel_model::Error),

  /// The target table has no column for this field, so the criterion cannot
  /// be pushed down.
  #[error("no column mapped for field `{0}`")]
  UnmappedField(Field),

  /// SQLite integers are signed 64-bit.
  #[error("unsigned value {0} does not fit in an SQLite integer")]
  IntegerOverflow(u64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
