//! Binding [`Value`]s as `rusqlite` parameters.
//!
//! UUIDs are bound as hyphenated lowercase strings, booleans as `0`/`1` and
//! bytes as blobs, matching how the columns are expected to be stored.

use keel_model::Value;
use rusqlite::types::Value as SqlValue;

use crate::{Error, Result, SqlFilter};

pub fn encode_value(value: &Value) -> Result<SqlValue> {
  Ok(match value {
    Value::Null => SqlValue::Null,
    Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
    Value::Int(i) => SqlValue::Integer(*i),
    Value::UInt(u) => {
      let i = i64::try_from(*u).map_err(|_| Error::IntegerOverflow(*u))?;
      SqlValue::Integer(i)
    }
    Value::Text(s) => SqlValue::Text(s.clone()),
    Value::Uuid(id) => SqlValue::Text(id.hyphenated().to_string()),
    Value::Bytes(bytes) => SqlValue::Blob(bytes.clone()),
  })
}

impl SqlFilter {
  /// The filter's parameters, ready for `rusqlite::params_from_iter`.
  pub fn sqlite_params(&self) -> Result<Vec<SqlValue>> {
    self.params.iter().map(encode_value).collect()
  }
}
