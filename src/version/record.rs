//! Version line extraction
//!
//! Only the first line of the form `version: <major>-<minor>-<state>-<revision>` is
//! read. The rest of the file is never parsed or validated.

use crate::core::error::{ResultExt, VersionError, VfileResult};
use crate::version::ReleaseState;
use regex::Regex;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

/// Matches at the start of a line; text after the revision digits is ignored.
/// The state group is greedy, so `1-2-x-y-3` gives state `x-y` and revision `3`.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^version: (?P<major>[0-9]+)-(?P<minor>[0-9]+)-(?P<state>.+)-(?P<revision>[0-9]+)")
    .expect("version pattern is a valid regex")
});

/// The four fields of a matched version line, before the state code is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLine {
  pub major: String,
  pub minor: String,
  pub state_code: String,
  pub revision: String,
}

impl VersionLine {
  /// Match a single line against the version pattern
  pub fn parse(line: &str) -> Option<Self> {
    let caps = VERSION_PATTERN.captures(line)?;
    Some(Self {
      major: caps["major"].to_string(),
      minor: caps["minor"].to_string(),
      state_code: caps["state"].to_string(),
      revision: caps["revision"].to_string(),
    })
  }

  /// Return the first matching line from a reader; later matches are ignored
  ///
  /// Lines are split on raw bytes and decoded lossily, so bytes that are not UTF-8
  /// elsewhere in the file do not stop the search.
  pub fn find<R: BufRead>(reader: R) -> std::io::Result<Option<Self>> {
    for line in reader.split(b'\n') {
      let line = line?;
      let line = line.strip_suffix(b"\r").unwrap_or(&line);
      if let Some(found) = Self::parse(&String::from_utf8_lossy(line)) {
        return Ok(Some(found));
      }
    }
    Ok(None)
  }
}

/// Parsed version with its release state resolved
///
/// Numeric fields keep the digits exactly as written; no range checks are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
  pub major: String,
  pub minor: String,
  pub state: ReleaseState,
  pub revision: String,
}

impl VersionRecord {
  /// Resolve the state code of a matched line
  pub fn from_line(line: VersionLine) -> Result<Self, VersionError> {
    let state = ReleaseState::from_code(&line.state_code).ok_or(VersionError::UnknownState {
      code: line.state_code,
    })?;

    Ok(Self {
      major: line.major,
      minor: line.minor,
      state,
      revision: line.revision,
    })
  }

  /// Read `path` and extract the version from its first version line
  pub fn extract(path: &Path) -> VfileResult<Self> {
    let file = File::open(path).with_context(|| format!("Failed to open config file {}", path.display()))?;
    let line = VersionLine::find(BufReader::new(file))
      .with_context(|| format!("Failed to read config file {}", path.display()))?
      .ok_or_else(|| VersionError::NotFound {
        path: path.to_path_buf(),
      })?;

    Ok(Self::from_line(line)?)
  }
}

impl fmt::Display for VersionRecord {
  /// `{major}.{minor} ({state label} {revision})`, e.g. `2.1 (Beta 3)`
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{} ({} {})", self.major, self.minor, self.state.label(), self.revision)
  }
}
