//! Entity metadata and query toolkit.
//!
//! Capability traits describe what a persisted record carries (an identifier,
//! created/updated/deleted audit metadata, a soft-delete flag, an optimistic
//! concurrency version). Concrete types opt into any combination of them; the
//! [`template`] module provides ready-made composites for the common shapes.
//!
//! Filtering comes in two flavours:
//!
//! - [`EntityIterExt`] narrows any iterator of entities in memory.
//! - [`Query`] builds a deferred expression whose [`Criterion`]s can be handed
//!   to a [`QueryTranslator`] and pushed into a store's native filter.
//!
//! This crate performs no I/O. Storage, transactions and retries belong to the
//! caller.

pub mod compare;
pub mod entity;
pub mod error;
pub mod filter;
pub mod meta;
pub mod query;
pub mod template;
pub mod timestamp;
pub mod value;
pub mod version;

pub use compare::StringComparison;
pub use entity::Entity;
pub use error::{Error, Result};
pub use filter::EntityIterExt;
pub use meta::{CreatedMeta, DeletedMeta, SoftDelete, UpdatedMeta};
pub use query::{Criterion, Field, Query, QueryTranslator};
pub use template::{
  AuditedEntity, BasicEntity, LocalAuditedEntity, LocalVersionedEntity,
  VersionedEntity,
};
pub use timestamp::Timestamp;
pub use value::Value;
pub use version::{NextVersion, Versioned};
