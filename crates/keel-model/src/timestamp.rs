//! Timestamp types usable in audit metadata.
//!
//! Offset-aware metadata uses [`DateTime<Utc>`] or [`DateTime<FixedOffset>`];
//! local metadata, for systems that do not track offsets, uses
//! [`NaiveDateTime`]. Each type knows how to produce its own "now", so stamping
//! picks the matching awareness without a separate code path.

use std::fmt::Debug;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};

pub trait Timestamp: Clone + Debug + PartialEq {
  /// The current instant in this type's awareness.
  fn now() -> Self;
}

impl Timestamp for DateTime<Utc> {
  fn now() -> Self { Utc::now() }
}

impl Timestamp for DateTime<FixedOffset> {
  fn now() -> Self { Local::now().fixed_offset() }
}

/// Wall-clock time in the host's local zone, with the offset discarded.
impl Timestamp for NaiveDateTime {
  fn now() -> Self { Local::now().naive_local() }
}
