//! Deferred, translatable query expressions.
//!
//! A [`Query`] is built with the same vocabulary as [`crate::EntityIterExt`] but
//! nothing is evaluated when it is built. Each condition is recorded twice:
//!
//! - as a [`Criterion`], a store-neutral description (field, operator, value)
//!   that a [`QueryTranslator`] can push into a remote store's native filter;
//! - as an in-memory matcher, used by [`Query::matches`] and [`Query::apply`].
//!
//! All conditions are combined with AND.

use std::{fmt, ops::Deref, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  compare::StringComparison,
  entity::Entity,
  meta::{CreatedMeta, DeletedMeta, SoftDelete, UpdatedMeta},
  value::{Value, required},
  version::Versioned,
};

// ─── Criteria ────────────────────────────────────────────────────────────────

/// The entity field a criterion applies to.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::IntoStaticStr,
  strum::Display,
  strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Field {
  Id,
  CreatedBy,
  UpdatedBy,
  DeletedOn,
  DeletedBy,
  /// The soft-delete flag.
  Deleted,
  Version,
}

/// A single store-neutral condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Criterion {
  Equals {
    field: Field,
    value: Value,
  },
  EqualsText {
    field:      Field,
    value:      String,
    comparison: StringComparison,
  },
  IsNull {
    field: Field,
  },
  IsNotNull {
    field: Field,
  },
}

impl Criterion {
  pub fn field(&self) -> Field {
    match self {
      Self::Equals { field, .. }
      | Self::EqualsText { field, .. }
      | Self::IsNull { field }
      | Self::IsNotNull { field } => *field,
    }
  }
}

/// Turns a query's criteria into a store's native filter.
pub trait QueryTranslator {
  type Output;
  type Error;

  fn translate(&self, criteria: &[Criterion]) -> Result<Self::Output, Self::Error>;
}

// ─── Query ───────────────────────────────────────────────────────────────────

type Matcher<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// A composable filter over entities of type `E`.
pub struct Query<E: ?Sized> {
  criteria: Vec<Criterion>,
  matchers: Vec<Matcher<E>>,
}

impl<E: ?Sized> Query<E> {
  /// An empty query; it matches every entity.
  pub fn new() -> Self { Self { criteria: Vec::new(), matchers: Vec::new() } }

  pub fn criteria(&self) -> &[Criterion] { &self.criteria }

  pub fn is_empty(&self) -> bool { self.criteria.is_empty() }

  /// Evaluate the query against one entity.
  pub fn matches(&self, entity: &E) -> bool {
    self.matchers.iter().all(|m| m(entity))
  }

  /// Lazily filter `items` in memory.
  pub fn apply<I>(&self, items: I) -> impl Iterator<Item = I::Item>
  where
    I: IntoIterator,
    I::Item: Deref<Target = E>,
  {
    items.into_iter().filter(move |e| self.matches(e))
  }

  pub fn translate<T: QueryTranslator>(
    &self,
    translator: &T,
  ) -> Result<T::Output, T::Error> {
    translator.translate(&self.criteria)
  }

  /// The criteria as JSON, for stores that accept a serialised filter.
  pub fn to_json(&self) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(&self.criteria)?)
  }

  fn push(
    mut self,
    criterion: Criterion,
    matcher: impl Fn(&E) -> bool + Send + Sync + 'static,
  ) -> Self {
    self.criteria.push(criterion);
    self.matchers.push(Arc::new(matcher));
    self
  }
}

impl<E: Entity + ?Sized + 'static> Query<E> {
  pub fn where_id(self, id: E::Id) -> Result<Self>
  where
    E::Id: Clone + Into<Value> + Send + Sync + 'static,
  {
    let value = required("id", id.clone())?;
    Ok(self.push(Criterion::Equals { field: Field::Id, value }, move |e| {
      e.id() == &id
    }))
  }
}

impl<E: CreatedMeta + ?Sized + 'static> Query<E> {
  pub fn where_was_created_by(self, by: E::By) -> Result<Self>
  where
    E::By: PartialEq + Clone + Into<Value> + Send + Sync + 'static,
  {
    let value = required("by", by.clone())?;
    Ok(self.push(
      Criterion::Equals { field: Field::CreatedBy, value },
      move |e| e.was_created_by(&by),
    ))
  }

  pub fn where_was_created_by_str(
    self,
    by: &str,
    comparison: StringComparison,
  ) -> Self
  where
    E::By: AsRef<str>,
  {
    let by = by.to_owned();
    self.push(
      Criterion::EqualsText {
        field: Field::CreatedBy,
        value: by.clone(),
        comparison,
      },
      move |e| e.was_created_by_str(&by, comparison),
    )
  }
}

impl<E: UpdatedMeta + ?Sized + 'static> Query<E> {
  pub fn where_was_updated_by(self, by: E::By) -> Result<Self>
  where
    E::By: PartialEq + Clone + Into<Value> + Send + Sync + 'static,
  {
    let value = required("by", by.clone())?;
    Ok(self.push(
      Criterion::Equals { field: Field::UpdatedBy, value },
      move |e| e.was_updated_by(&by),
    ))
  }

  pub fn where_was_updated_by_str(
    self,
    by: &str,
    comparison: StringComparison,
  ) -> Self
  where
    E::By: AsRef<str>,
  {
    let by = by.to_owned();
    self.push(
      Criterion::EqualsText {
        field: Field::UpdatedBy,
        value: by.clone(),
        comparison,
      },
      move |e| e.was_updated_by_str(&by, comparison),
    )
  }
}

impl<E: DeletedMeta + ?Sized + 'static> Query<E> {
  /// Adds two criteria: `deleted_on` is set and `deleted_by` equals `by`.
  pub fn where_was_deleted_by(self, by: E::By) -> Result<Self>
  where
    E::By: PartialEq + Clone + Into<Value> + Send + Sync + 'static,
  {
    let value = required("by", by.clone())?;
    Ok(
      self
        .where_deleted(true)
        .push(Criterion::Equals { field: Field::DeletedBy, value }, move |e| {
          e.deleted_by() == &by
        }),
    )
  }

  pub fn where_was_deleted_by_str(
    self,
    by: &str,
    comparison: StringComparison,
  ) -> Self
  where
    E::By: AsRef<str>,
  {
    let by = by.to_owned();
    self.where_deleted(true).push(
      Criterion::EqualsText {
        field: Field::DeletedBy,
        value: by.clone(),
        comparison,
      },
      move |e| e.was_deleted_by_str(&by, comparison),
    )
  }

  pub fn where_deleted(self, deleted: bool) -> Self {
    let criterion = if deleted {
      Criterion::IsNotNull { field: Field::DeletedOn }
    } else {
      Criterion::IsNull { field: Field::DeletedOn }
    };
    self.push(criterion, move |e| e.is_deleted() == deleted)
  }
}

impl<E: SoftDelete + ?Sized + 'static> Query<E> {
  pub fn where_soft_deleted(self, deleted: bool) -> Self {
    self.push(
      Criterion::Equals { field: Field::Deleted, value: Value::Bool(deleted) },
      move |e| e.deleted() == deleted,
    )
  }
}

impl<E: Versioned + ?Sized + 'static> Query<E> {
  /// Restrict to entities still at `version`; pairs with
  /// [`Query::where_id`] for a conditional update.
  pub fn where_version(self, version: E::Version) -> Result<Self>
  where
    E::Version: Send + Sync + 'static,
  {
    let value = required("version", version.clone())?;
    Ok(self.push(
      Criterion::Equals { field: Field::Version, value },
      move |e| e.version() == &version,
    ))
  }
}

impl<E: ?Sized> Default for Query<E> {
  fn default() -> Self { Self::new() }
}

impl<E: ?Sized> Clone for Query<E> {
  fn clone(&self) -> Self {
    Self { criteria: self.criteria.clone(), matchers: self.matchers.clone() }
  }
}

impl<E: ?Sized> fmt::Debug for Query<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Query")
      .field("criteria", &self.criteria)
      .finish_non_exhaustive()
  }
}
