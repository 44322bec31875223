//! Shared building blocks for vfile-yaml
//!
//! - **error**: Error types with exit codes and contextual help messages

pub mod error;
