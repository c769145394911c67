//! Optimistic-concurrency version tokens.
//!
//! A caller reads an entity and remembers its version, prepares a change, then
//! calls [`Versioned::ensure_version`] immediately before committing. If another
//! writer advanced the version in the meantime the write must be rejected.
//! Locking, retries and the compare-and-swap itself belong to the store.

use uuid::Uuid;

use crate::{Error, Result, value::Value};

pub trait Versioned {
  /// An opaque token: bytes, a UUID, an integer or a string.
  type Version: PartialEq + Clone + Into<Value>;

  fn version(&self) -> &Self::Version;
  fn set_version(&mut self, version: Self::Version);

  /// Fail with [`Error::VersionMismatch`] unless the current version equals
  /// `expected`.
  ///
  /// Byte tokens are always compared element by element, including when the
  /// lengths match.
  fn ensure_version(&self, expected: &Self::Version) -> Result<()> {
    if self.version() == expected {
      return Ok(());
    }

    let actual: Value = self.version().clone().into();
    let expected: Value = expected.clone().into();
    tracing::warn!(%actual, %expected, "version mismatch");
    Err(Error::VersionMismatch { actual, expected })
  }

  /// Replace the version with its successor.
  fn bump_version(&mut self) -> &mut Self
  where
    Self::Version: NextVersion,
  {
    let next = self.version().next_version();
    self.set_version(next);
    self
  }
}

/// Tokens that the application, rather than the store, can advance.
pub trait NextVersion {
  fn next_version(&self) -> Self;
}

/// A fresh random token; the previous value plays no part.
impl NextVersion for Uuid {
  fn next_version(&self) -> Self { Uuid::new_v4() }
}

macro_rules! next_by_increment {
  ($($t:ty),*) => {
    $(impl NextVersion for $t {
      fn next_version(&self) -> Self { self.wrapping_add(1) }
    })*
  };
}

next_by_increment!(i32, i64, u32, u64);
