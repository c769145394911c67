//! Audit metadata capabilities.
//!
//! Each trait is an independent data contract. A type may implement any subset:
//! created and deleted metadata without updates, a bare soft-delete flag, and so
//! on. Stamping and authorship predicates are provided methods, so every
//! implementer gets them for free.
//!
//! The associated `On` type selects offset-aware or local timestamps; see
//! [`crate::timestamp`].

use crate::{compare::StringComparison, timestamp::Timestamp};

// ─── Created ─────────────────────────────────────────────────────────────────

pub trait CreatedMeta {
  /// Who created the entity.
  type By;
  type On: Timestamp;

  fn created_on(&self) -> &Self::On;
  fn set_created_on(&mut self, on: Self::On);
  fn created_by(&self) -> &Self::By;
  fn set_created_by(&mut self, by: Self::By);

  /// Record `by` as the creator, at `on` or now.
  fn mark_created(&mut self, by: Self::By, on: Option<Self::On>) -> &mut Self {
    self.set_created_by(by);
    self.set_created_on(on.unwrap_or_else(<Self::On as Timestamp>::now));
    self
  }

  fn was_created_by(&self, by: &Self::By) -> bool
  where
    Self::By: PartialEq,
  {
    self.created_by() == by
  }

  fn was_created_by_str(&self, by: &str, comparison: StringComparison) -> bool
  where
    Self::By: AsRef<str>,
  {
    comparison.equals(self.created_by().as_ref(), by)
  }
}

// ─── Updated ─────────────────────────────────────────────────────────────────

pub trait UpdatedMeta {
  /// Who last modified the entity.
  type By;
  type On: Timestamp;

  fn updated_on(&self) -> &Self::On;
  fn set_updated_on(&mut self, on: Self::On);
  fn updated_by(&self) -> &Self::By;
  fn set_updated_by(&mut self, by: Self::By);

  /// Record `by` as the last modifier, at `on` or now.
  fn mark_updated(&mut self, by: Self::By, on: Option<Self::On>) -> &mut Self {
    self.set_updated_by(by);
    self.set_updated_on(on.unwrap_or_else(<Self::On as Timestamp>::now));
    self
  }

  fn was_updated_by(&self, by: &Self::By) -> bool
  where
    Self::By: PartialEq,
  {
    self.updated_by() == by
  }

  fn was_updated_by_str(&self, by: &str, comparison: StringComparison) -> bool
  where
    Self::By: AsRef<str>,
  {
    comparison.equals(self.updated_by().as_ref(), by)
  }
}

// ─── Deleted ─────────────────────────────────────────────────────────────────

/// Soft-delete metadata. `deleted_on() == None` means "not deleted".
pub trait DeletedMeta {
  type By;
  type On: Timestamp;

  fn deleted_on(&self) -> Option<&Self::On>;
  fn set_deleted_on(&mut self, on: Option<Self::On>);
  fn deleted_by(&self) -> &Self::By;
  fn set_deleted_by(&mut self, by: Self::By);

  /// Soft-delete the entity on behalf of `by`, at `on` or now.
  fn mark_deleted(&mut self, by: Self::By, on: Option<Self::On>) -> &mut Self {
    self.set_deleted_by(by);
    let on = on.unwrap_or_else(<Self::On as Timestamp>::now);
    self.set_deleted_on(Some(on));
    self
  }

  /// Undo a soft delete. `deleted_by` keeps the previous actor.
  fn restore(&mut self) -> &mut Self {
    self.set_deleted_on(None);
    self
  }

  fn is_deleted(&self) -> bool { self.deleted_on().is_some() }

  /// True only while the entity is deleted; a stale `deleted_by` left over
  /// from a restored entity never matches.
  fn was_deleted_by(&self, by: &Self::By) -> bool
  where
    Self::By: PartialEq,
  {
    self.is_deleted() && self.deleted_by() == by
  }

  fn was_deleted_by_str(&self, by: &str, comparison: StringComparison) -> bool
  where
    Self::By: AsRef<str>,
  {
    self.is_deleted() && comparison.equals(self.deleted_by().as_ref(), by)
  }
}

// ─── Soft delete flag ────────────────────────────────────────────────────────

/// A timestamp-free soft-delete flag.
pub trait SoftDelete {
  fn deleted(&self) -> bool;
  fn set_deleted(&mut self, deleted: bool);

  fn soft_delete(&mut self) -> &mut Self {
    self.set_deleted(true);
    self
  }

  fn undelete(&mut self) -> &mut Self {
    self.set_deleted(false);
    self
  }
}
