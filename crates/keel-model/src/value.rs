//! Scalar values carried by query criteria and version-mismatch errors.
//!
//! A [`Value`] is the store-neutral form of an identifier, actor or version
//! token. Translators map each variant to their native parameter type.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
  /// An absent value, e.g. `None` for an optional actor.
  Null,
  Bool(bool),
  Int(i64),
  UInt(u64),
  Text(String),
  Uuid(Uuid),
  Bytes(Vec<u8>),
}

impl Value {
  pub fn is_null(&self) -> bool { matches!(self, Self::Null) }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Null => f.write_str("null"),
      Self::Bool(b) => write!(f, "{b}"),
      Self::Int(i) => write!(f, "{i}"),
      Self::UInt(u) => write!(f, "{u}"),
      Self::Text(s) => write!(f, "{s:?}"),
      Self::Uuid(id) => write!(f, "{}", id.hyphenated()),
      Self::Bytes(bytes) => write!(f, "0x{}", hex::encode(bytes)),
    }
  }
}

/// Convert a required argument, rejecting absent values.
pub(crate) fn required(
  name: &'static str,
  value: impl Into<Value>,
) -> Result<Value> {
  let value = value.into();
  if value.is_null() {
    return Err(Error::InvalidArgument(name));
  }
  Ok(value)
}

// ─── Conversions ─────────────────────────────────────────────────────────────

macro_rules! from_signed {
  ($($t:ty),*) => {
    $(impl From<$t> for Value {
      fn from(value: $t) -> Self { Self::Int(i64::from(value)) }
    })*
  };
}

macro_rules! from_unsigned {
  ($($t:ty),*) => {
    $(impl From<$t> for Value {
      fn from(value: $t) -> Self { Self::UInt(u64::from(value)) }
    })*
  };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<bool> for Value {
  fn from(value: bool) -> Self { Self::Bool(value) }
}

impl From<String> for Value {
  fn from(value: String) -> Self { Self::Text(value) }
}

impl From<&str> for Value {
  fn from(value: &str) -> Self { Self::Text(value.to_owned()) }
}

impl From<Uuid> for Value {
  fn from(value: Uuid) -> Self { Self::Uuid(value) }
}

impl From<Vec<u8>> for Value {
  fn from(value: Vec<u8>) -> Self { Self::Bytes(value) }
}

impl From<&[u8]> for Value {
  fn from(value: &[u8]) -> Self { Self::Bytes(value.to_vec()) }
}

impl<const N: usize> From<[u8; N]> for Value {
  fn from(value: [u8; N]) -> Self { Self::Bytes(value.to_vec()) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(value: Option<T>) -> Self { value.map_or(Self::Null, Into::into) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn optional_values_collapse_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("bob")), Value::Text("bob".into()));
  }

  #[test]
  fn bytes_display_as_hex() {
    let value = Value::from(vec![0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(value.to_string(), "0xdeadbeef");
  }

  #[test]
  fn json_shape_is_tagged() {
    let json = serde_json::to_value(Value::from(7_i64)).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "int", "value": 7 }));
  }
}
