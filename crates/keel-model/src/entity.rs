//! Entity identity.

/// A value with a unique, equality-comparable identifier.
///
/// The identifier is not validated; default or zero values are accepted.
pub trait Entity {
  type Id: PartialEq;

  fn id(&self) -> &Self::Id;

  fn set_id(&mut self, id: Self::Id);
}
