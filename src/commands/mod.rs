//! CLI commands for vfile-yaml
//!
//! - **generate**: Extract the version from a config file and write the version file

pub mod generate;

pub use generate::{GenerateOptions, run_generate};
