//! Release state codes and their display labels

use std::fmt;

/// Release stage encoded in the third field of the version line
///
/// Each stage has a letter code and a numeric code. Both spellings are accepted and
/// map to the same label; nothing else is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseState {
  /// `a` or `0`
  Alpha,
  /// `b` or `1`
  Beta,
  /// `rc` or `2`
  ReleaseCandidate,
  /// `r` or `3`
  Release,
}

impl ReleaseState {
  /// All states, in release order
  pub const ALL: [ReleaseState; 4] = [
    ReleaseState::Alpha,
    ReleaseState::Beta,
    ReleaseState::ReleaseCandidate,
    ReleaseState::Release,
  ];

  /// Resolve a state code from the version line
  pub fn from_code(code: &str) -> Option<Self> {
    match code {
      "a" | "0" => Some(Self::Alpha),
      "b" | "1" => Some(Self::Beta),
      "rc" | "2" => Some(Self::ReleaseCandidate),
      "r" | "3" => Some(Self::Release),
      _ => None,
    }
  }

  /// The codes that resolve to this state (letter code first)
  pub fn codes(&self) -> [&'static str; 2] {
    match self {
      Self::Alpha => ["a", "0"],
      Self::Beta => ["b", "1"],
      Self::ReleaseCandidate => ["rc", "2"],
      Self::Release => ["r", "3"],
    }
  }

  /// Human-readable label used in the rendered version string
  pub fn label(&self) -> &'static str {
    match self {
      Self::Alpha => "Alpha",
      Self::Beta => "Beta",
      Self::ReleaseCandidate => "Release Candidate",
      Self::Release => "Release",
    }
  }

  /// Summary of every accepted code, for help text
  ///
  /// Example: `a|0 (Alpha), b|1 (Beta), rc|2 (Release Candidate), r|3 (Release)`
  pub fn accepted_codes() -> String {
    Self::ALL
      .iter()
      .map(|state| format!("{} ({})", state.codes().join("|"), state.label()))
      .collect::<Vec<_>>()
      .join(", ")
  }
}

impl fmt::Display for ReleaseState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}
