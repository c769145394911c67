//! [`SqlTranslator`] — renders criteria as a SQL `WHERE` clause.

use std::collections::HashMap;

use keel_model::{Criterion, Field, QueryTranslator, StringComparison, Value};

use crate::{Error, Result};

// ─── Column mapping ──────────────────────────────────────────────────────────

/// Maps entity fields to table columns.
///
/// Every field maps to its snake_case name (`created_by`, `deleted_on`, ...)
/// unless renamed. Excluded fields have no column; criteria on them fail to
/// translate with [`Error::UnmappedField`].
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
  overrides: HashMap<Field, Option<String>>,
}

impl ColumnMap {
  pub fn new() -> Self { Self::default() }

  pub fn rename(mut self, field: Field, column: impl Into<String>) -> Self {
    self.overrides.insert(field, Some(column.into()));
    self
  }

  pub fn exclude(mut self, field: Field) -> Self {
    self.overrides.insert(field, None);
    self
  }

  pub fn column(&self, field: Field) -> Option<&str> {
    match self.overrides.get(&field) {
      Some(column) => column.as_deref(),
      None => Some(field.into()),
    }
  }
}

// ─── Output ──────────────────────────────────────────────────────────────────

/// A rendered filter: conditions joined with `AND`, and their positional
/// parameters in placeholder order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFilter {
  pub clause: String,
  pub params: Vec<Value>,
}

impl SqlFilter {
  pub fn is_empty(&self) -> bool { self.clause.is_empty() }

  /// `WHERE <clause>`, or an empty string when there is nothing to filter.
  pub fn where_clause(&self) -> String {
    if self.is_empty() {
      String::new()
    } else {
      format!("WHERE {}", self.clause)
    }
  }
}

// ─── Translator ──────────────────────────────────────────────────────────────

/// Renders criteria with numbered `?N` placeholders (SQLite syntax).
///
/// Every text comparison names its collation so the column's declared one
/// never applies: exact matches use `COLLATE BINARY`, case-insensitive ones
/// `COLLATE NOCASE`. SQLite's `NOCASE` folds ASCII letters only, so for
/// non-ASCII actors an ignore-case filter can select fewer rows than the
/// in-memory comparison unless the connection overrides `NOCASE` with a
/// Unicode-aware collation.
#[derive(Debug, Clone)]
pub struct SqlTranslator {
  columns:           ColumnMap,
  first_placeholder: usize,
}

impl Default for SqlTranslator {
  fn default() -> Self { Self::new(ColumnMap::default()) }
}

impl SqlTranslator {
  pub fn new(columns: ColumnMap) -> Self {
    Self { columns, first_placeholder: 1 }
  }

  /// Number placeholders from `first` instead of 1, for statements that
  /// already bind parameters ahead of the filter.
  pub fn starting_at(mut self, first: usize) -> Self {
    self.first_placeholder = first;
    self
  }

  fn column(&self, field: Field) -> Result<String> {
    let column = self.columns.column(field).ok_or(Error::UnmappedField(field))?;
    Ok(quote(column))
  }
}

impl QueryTranslator for SqlTranslator {
  type Output = SqlFilter;
  type Error = Error;

  fn translate(&self, criteria: &[Criterion]) -> Result<SqlFilter> {
    let mut conds: Vec<String> = Vec::with_capacity(criteria.len());
    let mut params: Vec<Value> = Vec::new();

    for criterion in criteria {
      let column = self.column(criterion.field())?;

      let cond = match criterion {
        Criterion::Equals { value, .. } => {
          if value.is_null() {
            return Err(keel_model::Error::InvalidArgument("value").into());
          }
          let n = self.first_placeholder + params.len();
          params.push(value.clone());
          match value {
            Value::Text(_) => format!("{column} = ?{n} COLLATE BINARY"),
            _ => format!("{column} = ?{n}"),
          }
        }
        Criterion::EqualsText { value, comparison, .. } => {
          let n = self.first_placeholder + params.len();
          params.push(Value::Text(value.clone()));
          match comparison {
            StringComparison::Ordinal => {
              format!("{column} = ?{n} COLLATE BINARY")
            }
            StringComparison::OrdinalIgnoreCase => {
              format!("{column} = ?{n} COLLATE NOCASE")
            }
          }
        }
        Criterion::IsNull { .. } => format!("{column} IS NULL"),
        Criterion::IsNotNull { .. } => format!("{column} IS NOT NULL"),
      };
      conds.push(cond);
    }

    tracing::debug!(
      conditions = conds.len(),
      params = params.len(),
      "rendered SQL filter"
    );

    Ok(SqlFilter { clause: conds.join(" AND "), params })
  }
}

fn quote(column: &str) -> String {
  format!("\"{}\"", column.replace('"', "\"\""))
}
