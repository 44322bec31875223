//! Console reporting
//!
//! File contents go to stdout under a title line, warnings to stderr.
//! Errors are printed by `core::error::print_error`.

/// Marker line used above and below a block of file contents
const FENCE: &str = "\"\"\"";

/// Print a warning to stderr, indenting continuation lines under the marker
pub fn warn(message: impl AsRef<str>) {
  eprintln!("{}", format_warning(message.as_ref()));
}

/// Print a title followed by fenced file contents
pub fn contents(title: impl AsRef<str>, body: &str) {
  println!("{}", format_contents(title.as_ref(), body));
}

pub(crate) fn format_warning(message: &str) -> String {
  format!("⚠️  {}", message.lines().collect::<Vec<_>>().join("\n    "))
}

pub(crate) fn format_contents(title: &str, body: &str) -> String {
  format!("{}\n{}\n{}\n{}", title, FENCE, body.trim_end_matches('\n'), FENCE)
}
