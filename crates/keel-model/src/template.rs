//! Ready-made composite entities.
//!
//! These are flat structs, not a hierarchy: each implements the capability
//! traits it carries directly. Default type parameters collapse the uniform and
//! independent actor shapes into one type:
//!
//! - `AuditedEntity<Id, By>`: one actor type for create/update/delete.
//! - `AuditedEntity<Id, C, U, D>`: a distinct actor type per action.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  entity::Entity,
  meta::{CreatedMeta, DeletedMeta, UpdatedMeta},
  timestamp::Timestamp,
  value::Value,
  version::Versioned,
};

// ─── BasicEntity ─────────────────────────────────────────────────────────────

/// An entity with an identifier and nothing else.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct BasicEntity<Id> {
  pub id: Id,
}

impl<Id> BasicEntity<Id> {
  pub fn new(id: Id) -> Self { Self { id } }
}

impl<Id: PartialEq> Entity for BasicEntity<Id> {
  type Id = Id;

  fn id(&self) -> &Id { &self.id }

  fn set_id(&mut self, id: Id) { self.id = id; }
}

// ─── AuditedEntity ───────────────────────────────────────────────────────────

/// Identifier plus created, updated and deleted metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditedEntity<Id, C, U = C, D = C, Ts = DateTime<Utc>> {
  pub id:         Id,
  pub created_on: Ts,
  pub created_by: C,
  pub updated_on: Ts,
  pub updated_by: U,
  /// `None` until the entity is soft-deleted.
  pub deleted_on: Option<Ts>,
  pub deleted_by: D,
}

/// [`AuditedEntity`] with timezone-naive local timestamps.
pub type LocalAuditedEntity<Id, C, U = C, D = C> =
  AuditedEntity<Id, C, U, D, NaiveDateTime>;

impl<Id, C, U, D, Ts> AuditedEntity<Id, C, U, D, Ts>
where
  C: Default,
  U: Default,
  D: Default,
  Ts: Timestamp,
{
  /// Both `created_on` and `updated_on` are set to the same "now"; actors start
  /// at their defaults.
  pub fn new(id: Id) -> Self {
    let now = Ts::now();
    Self {
      id,
      created_on: now.clone(),
      created_by: C::default(),
      updated_on: now,
      updated_by: U::default(),
      deleted_on: None,
      deleted_by: D::default(),
    }
  }
}

impl<Id, C, U, D, Ts> Default for AuditedEntity<Id, C, U, D, Ts>
where
  Id: Default,
  C: Default,
  U: Default,
  D: Default,
  Ts: Timestamp,
{
  fn default() -> Self { Self::new(Id::default()) }
}

impl<Id: PartialEq, C, U, D, Ts> Entity for AuditedEntity<Id, C, U, D, Ts> {
  type Id = Id;

  fn id(&self) -> &Id { &self.id }

  fn set_id(&mut self, id: Id) { self.id = id; }
}

impl<Id, C, U, D, Ts: Timestamp> CreatedMeta for AuditedEntity<Id, C, U, D, Ts> {
  type By = C;
  type On = Ts;

  fn created_on(&self) -> &Ts { &self.created_on }

  fn set_created_on(&mut self, on: Ts) { self.created_on = on; }

  fn created_by(&self) -> &C { &self.created_by }

  fn set_created_by(&mut self, by: C) { self.created_by = by; }
}

impl<Id, C, U, D, Ts: Timestamp> UpdatedMeta for AuditedEntity<Id, C, U, D, Ts> {
  type By = U;
  type On = Ts;

  fn updated_on(&self) -> &Ts { &self.updated_on }

  fn set_updated_on(&mut self, on: Ts) { self.updated_on = on; }

  fn updated_by(&self) -> &U { &self.updated_by }

  fn set_updated_by(&mut self, by: U) { self.updated_by = by; }
}

impl<Id, C, U, D, Ts: Timestamp> DeletedMeta for AuditedEntity<Id, C, U, D, Ts> {
  type By = D;
  type On = Ts;

  fn deleted_on(&self) -> Option<&Ts> { self.deleted_on.as_ref() }

  fn set_deleted_on(&mut self, on: Option<Ts>) { self.deleted_on = on; }

  fn deleted_by(&self) -> &D { &self.deleted_by }

  fn set_deleted_by(&mut self, by: D) { self.deleted_by = by; }
}

// ─── VersionedEntity ─────────────────────────────────────────────────────────

/// An [`AuditedEntity`] with an optimistic-concurrency token, a [`Uuid`] unless
/// stated otherwise.
///
/// The audit fields are flattened when serialised, so the JSON shape is a
/// single object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedEntity<Id, C, U = C, D = C, V = Uuid, Ts = DateTime<Utc>> {
  #[serde(flatten)]
  pub entity:  AuditedEntity<Id, C, U, D, Ts>,
  pub version: V,
}

/// [`VersionedEntity`] with timezone-naive local timestamps.
pub type LocalVersionedEntity<Id, C, U = C, D = C, V = Uuid> =
  VersionedEntity<Id, C, U, D, V, NaiveDateTime>;

impl<Id, C, U, D, V, Ts> VersionedEntity<Id, C, U, D, V, Ts>
where
  C: Default,
  U: Default,
  D: Default,
  V: Default,
  Ts: Timestamp,
{
  pub fn new(id: Id) -> Self {
    Self { entity: AuditedEntity::new(id), version: V::default() }
  }
}

impl<Id, C, U, D, V, Ts> VersionedEntity<Id, C, U, D, V, Ts> {
  pub fn with_version(mut self, version: V) -> Self {
    self.version = version;
    self
  }
}

impl<Id: PartialEq, C, U, D, V, Ts> Entity
  for VersionedEntity<Id, C, U, D, V, Ts>
{
  type Id = Id;

  fn id(&self) -> &Id { &self.entity.id }

  fn set_id(&mut self, id: Id) { self.entity.id = id; }
}

impl<Id, C, U, D, V, Ts: Timestamp> CreatedMeta
  for VersionedEntity<Id, C, U, D, V, Ts>
{
  type By = C;
  type On = Ts;

  fn created_on(&self) -> &Ts { self.entity.created_on() }

  fn set_created_on(&mut self, on: Ts) { self.entity.set_created_on(on); }

  fn created_by(&self) -> &C { self.entity.created_by() }

  fn set_created_by(&mut self, by: C) { self.entity.set_created_by(by); }
}

impl<Id, C, U, D, V, Ts: Timestamp> UpdatedMeta
  for VersionedEntity<Id, C, U, D, V, Ts>
{
  type By = U;
  type On = Ts;

  fn updated_on(&self) -> &Ts { self.entity.updated_on() }

  fn set_updated_on(&mut self, on: Ts) { self.entity.set_updated_on(on); }

  fn updated_by(&self) -> &U { self.entity.updated_by() }

  fn set_updated_by(&mut self, by: U) { self.entity.set_updated_by(by); }
}

impl<Id, C, U, D, V, Ts: Timestamp> DeletedMeta
  for VersionedEntity<Id, C, U, D, V, Ts>
{
  type By = D;
  type On = Ts;

  fn deleted_on(&self) -> Option<&Ts> { self.entity.deleted_on() }

  fn set_deleted_on(&mut self, on: Option<Ts>) {
    self.entity.set_deleted_on(on);
  }

  fn deleted_by(&self) -> &D { self.entity.deleted_by() }

  fn set_deleted_by(&mut self, by: D) { self.entity.set_deleted_by(by); }
}

impl<Id, C, U, D, V, Ts> Versioned for VersionedEntity<Id, C, U, D, V, Ts>
where
  V: PartialEq + Clone + Into<Value>,
{
  type Version = V;

  fn version(&self) -> &V { &self.version }

  fn set_version(&mut self, version: V) { self.version = version; }
}

#[cfg(test)]
mod tests {
  use chrono::{Local, NaiveDateTime};

  use super::*;

  #[test]
  fn new_audited_entity_is_stamped_now_and_not_deleted() {
    let before = Utc::now();
    let entity: AuditedEntity<i64, String> = AuditedEntity::new(7);
    let after = Utc::now();

    assert_eq!(entity.id, 7);
    assert_eq!(entity.created_on, entity.updated_on);
    assert!(before <= entity.created_on && entity.created_on <= after);
    assert!(entity.deleted_on.is_none());
    assert!(!entity.is_deleted());
  }

  #[test]
  fn local_template_uses_naive_timestamps() {
    let before = Local::now().naive_local();
    let entity: LocalAuditedEntity<i64, String> = AuditedEntity::new(1);
    let created: NaiveDateTime = entity.created_on;
    assert!(created >= before);
  }

  #[test]
  fn independent_actor_types() {
    let mut entity: AuditedEntity<u32, String, i64, Option<Uuid>> =
      AuditedEntity::new(1);
    entity
      .mark_created("alice".into(), None)
      .mark_updated(42, None);
    entity.mark_deleted(Some(Uuid::nil()), None);

    assert!(entity.was_created_by(&"alice".to_string()));
    assert!(entity.was_updated_by(&42));
    assert!(entity.was_deleted_by(&Some(Uuid::nil())));
  }

  #[test]
  fn versioned_entity_flattens_audit_fields() {
    let entity: VersionedEntity<i64, String> =
      VersionedEntity::new(3).with_version(Uuid::nil());
    let json = serde_json::to_value(&entity).unwrap();

    assert_eq!(json["id"], 3);
    assert_eq!(json["created_by"], "");
    assert_eq!(json["version"], Uuid::nil().to_string());
    assert!(json.get("entity").is_none());

    let back: VersionedEntity<i64, String> =
      serde_json::from_value(json).unwrap();
    assert_eq!(back, entity);
  }
}
