//! String comparison modes for actor predicates.

use serde::{Deserialize, Serialize};

/// How two actor strings are compared.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StringComparison {
  /// Exact, case-sensitive comparison of the characters.
  #[default]
  Ordinal,
  /// Characters are compared after simple upper-case folding: a character
  /// whose upper-case form is more than one character (`ß`) is left as is, so
  /// the folded strings keep their lengths.
  OrdinalIgnoreCase,
}

impl StringComparison {
  pub fn equals(self, a: &str, b: &str) -> bool {
    match self {
      Self::Ordinal => a == b,
      Self::OrdinalIgnoreCase => a.chars().map(fold).eq(b.chars().map(fold)),
    }
  }
}

fn fold(c: char) -> char {
  let mut upper = c.to_uppercase();
  match (upper.next(), upper.next()) {
    (Some(u), None) => u,
    _ => c,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ordinal_is_case_sensitive() {
    assert!(StringComparison::Ordinal.equals("bbbb", "bbbb"));
    assert!(!StringComparison::Ordinal.equals("BBBB", "bbbb"));
  }

  #[test]
  fn ignore_case_folds_non_ascii() {
    let cmp = StringComparison::OrdinalIgnoreCase;
    assert!(cmp.equals("BBBB", "bbbb"));
    assert!(cmp.equals("Ærøskøbing", "ÆRØSKØBING"));
    assert!(!cmp.equals("bbbb", "bbb"));
  }

  #[test]
  fn ignore_case_maps_one_character_to_one() {
    let cmp = StringComparison::OrdinalIgnoreCase;
    assert!(!cmp.equals("straße", "STRASSE"));
    assert!(cmp.equals("straße", "STRAßE"));
  }
}
