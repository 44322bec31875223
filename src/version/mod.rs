//! Version extraction from YAML-like config files
//!
//! The config file is not parsed as YAML. The first line that looks like
//!
//! ```text
//! version: 2-1-b-3
//! ```
//!
//! is split into major, minor, release state code and revision, and the state code is
//! mapped to a label. The example above renders as `2.1 (Beta 3)`.

pub mod record;
pub mod state;

pub use record::VersionRecord;
pub use state::ReleaseState;
