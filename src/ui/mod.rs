//! User-facing terminal output

pub mod output;
