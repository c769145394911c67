//! In-memory filtering over iterators of entities.
//!
//! [`EntityIterExt`] is implemented for every iterator whose items dereference
//! to an entity: `slice.iter()`, `Vec<Box<E>>`, `Vec<Arc<E>>` and so on. The
//! `where_*` adapters are lazy and yield the original items.
//!
//! Identifier and actor arguments are checked up front, as [`crate::Query`]
//! checks them: a value that converts to [`Value::Null`] (e.g. `None`) fails
//! with [`Error::InvalidArgument`] before any item is inspected.

use std::ops::Deref;

use crate::{
  Error, Result,
  compare::StringComparison,
  entity::Entity,
  meta::{CreatedMeta, DeletedMeta, SoftDelete, UpdatedMeta},
  value::{Value, required},
};

pub trait EntityIterExt: Iterator + Sized {
  // ── Identity ──────────────────────────────────────────────────────────

  /// Find the single entity with `id`.
  ///
  /// Returns `Ok(None)` if there is none and [`Error::MultipleMatches`] if the
  /// identifier is shared by two or more entities.
  fn get_by_id<E>(mut self, id: &E::Id) -> Result<Option<Self::Item>>
  where
    Self::Item: Deref<Target = E>,
    E: Entity + ?Sized,
    E::Id: Clone + Into<Value>,
  {
    required("id", id.clone())?;

    let Some(found) = self.by_ref().find(|e| e.id() == id) else {
      return Ok(None);
    };

    if self.any(|e| e.id() == id) {
      tracing::warn!("identifier lookup matched more than one entity");
      return Err(Error::MultipleMatches);
    }

    Ok(Some(found))
  }

  fn contains_id<E>(mut self, id: &E::Id) -> Result<bool>
  where
    Self::Item: Deref<Target = E>,
    E: Entity + ?Sized,
    E::Id: Clone + Into<Value>,
  {
    required("id", id.clone())?;
    Ok(self.any(|e| e.id() == id))
  }

  fn where_id<E>(self, id: E::Id) -> Result<impl Iterator<Item = Self::Item>>
  where
    Self::Item: Deref<Target = E>,
    E: Entity + ?Sized,
    E::Id: Clone + Into<Value>,
  {
    required("id", id.clone())?;
    Ok(self.filter(move |e| e.id() == &id))
  }

  // ── Created ───────────────────────────────────────────────────────────

  fn where_was_created_by<E>(
    self,
    by: E::By,
  ) -> Result<impl Iterator<Item = Self::Item>>
  where
    Self::Item: Deref<Target = E>,
    E: CreatedMeta + ?Sized,
    E::By: PartialEq + Clone + Into<Value>,
  {
    required("by", by.clone())?;
    Ok(self.filter(move |e| e.was_created_by(&by)))
  }

  fn where_was_created_by_str<E>(
    self,
    by: &str,
    comparison: StringComparison,
  ) -> impl Iterator<Item = Self::Item>
  where
    Self::Item: Deref<Target = E>,
    E: CreatedMeta + ?Sized,
    E::By: AsRef<str>,
  {
    let by = by.to_owned();
    self.filter(move |e| e.was_created_by_str(&by, comparison))
  }

  // ── Updated ───────────────────────────────────────────────────────────

  fn where_was_updated_by<E>(
    self,
    by: E::By,
  ) -> Result<impl Iterator<Item = Self::Item>>
  where
    Self::Item: Deref<Target = E>,
    E: UpdatedMeta + ?Sized,
    E::By: PartialEq + Clone + Into<Value>,
  {
    required("by", by.clone())?;
    Ok(self.filter(move |e| e.was_updated_by(&by)))
  }

  fn where_was_updated_by_str<E>(
    self,
    by: &str,
    comparison: StringComparison,
  ) -> impl Iterator<Item = Self::Item>
  where
    Self::Item: Deref<Target = E>,
    E: UpdatedMeta + ?Sized,
    E::By: AsRef<str>,
  {
    let by = by.to_owned();
    self.filter(move |e| e.was_updated_by_str(&by, comparison))
  }

  // ── Deleted ───────────────────────────────────────────────────────────

  /// Entities currently deleted by `by`. Restored entities never match, even
  /// if their `deleted_by` still equals `by`.
  fn where_was_deleted_by<E>(
    self,
    by: E::By,
  ) -> Result<impl Iterator<Item = Self::Item>>
  where
    Self::Item: Deref<Target = E>,
    E: DeletedMeta + ?Sized,
    E::By: PartialEq + Clone + Into<Value>,
  {
    required("by", by.clone())?;
    Ok(self.filter(move |e| e.was_deleted_by(&by)))
  }

  fn where_was_deleted_by_str<E>(
    self,
    by: &str,
    comparison: StringComparison,
  ) -> impl Iterator<Item = Self::Item>
  where
    Self::Item: Deref<Target = E>,
    E: DeletedMeta + ?Sized,
    E::By: AsRef<str>,
  {
    let by = by.to_owned();
    self.filter(move |e| e.was_deleted_by_str(&by, comparison))
  }

  /// Keep entities whose `deleted_on` presence equals `deleted`.
  fn where_deleted<E>(self, deleted: bool) -> impl Iterator<Item = Self::Item>
  where
    Self::Item: Deref<Target = E>,
    E: DeletedMeta + ?Sized,
  {
    self.filter(move |e| e.is_deleted() == deleted)
  }

  /// Keep entities whose soft-delete flag equals `deleted`.
  fn where_soft_deleted<E>(
    self,
    deleted: bool,
  ) -> impl Iterator<Item = Self::Item>
  where
    Self::Item: Deref<Target = E>,
    E: SoftDelete + ?Sized,
  {
    self.filter(move |e| e.deleted() == deleted)
  }
}

impl<I: Iterator> EntityIterExt for I {}
