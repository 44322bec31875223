//! Version message rendering

/// Advisory maximum for the header line
pub const FIRST_LINE_LIMIT: usize = 60;

/// Fixed layout of the version file; `{version}` and `{summary}` are substituted
const TEMPLATE: &str = "V{version}, {summary}

CHANGES:
    - none

BUG FIXES:
    - none
";

/// The text that will be written to the version file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
  text: String,
}

impl RenderedMessage {
  /// Fill the template with a formatted version string and a summary
  pub fn render(version: &str, summary: &str) -> Self {
    let text = TEMPLATE.replacen("{version}", version, 1).replacen("{summary}", summary, 1);
    Self { text }
  }

  pub fn as_str(&self) -> &str {
    &self.text
  }

  /// Everything before the first newline
  pub fn first_line(&self) -> &str {
    self.text.split('\n').next().unwrap_or_default()
  }

  /// Length of the first line in characters
  pub fn first_line_len(&self) -> usize {
    self.first_line().chars().count()
  }

  /// Whether the header exceeds [`FIRST_LINE_LIMIT`]
  pub fn first_line_too_long(&self) -> bool {
    self.first_line_len() > FIRST_LINE_LIMIT
  }
}
