//! Generate command: config file → version record → message → version file
//!
//! Each step either succeeds and hands off to the next or aborts the run. Nothing
//! touches the version file until the version has been extracted and the message
//! rendered, so content errors never leave a partially written file behind.

use crate::core::error::{ValidationError, VfileResult};
use crate::message::{FIRST_LINE_LIMIT, RenderedMessage};
use crate::ui::output;
use crate::version::VersionRecord;
use crate::writer::VersionFile;
use std::path::PathBuf;

/// Resolved options for a single run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
  pub config_file: PathBuf,
  pub version_file: PathBuf,
  pub summary: String,
  /// Render and report, but leave the version file alone
  pub dry_run: bool,
  /// Refuse to write when the first line is over the limit
  pub strict: bool,
}

/// Run the generate command
pub fn run_generate(opts: GenerateOptions) -> VfileResult<()> {
  let record = VersionRecord::extract(&opts.config_file)?;
  let message = RenderedMessage::render(&record.to_string(), &opts.summary);

  if message.first_line_too_long() {
    let length = message.first_line_len();
    if opts.strict {
      return Err(
        ValidationError::FirstLineTooLong {
          length,
          limit: FIRST_LINE_LIMIT,
        }
        .into(),
      );
    }
    output::warn(format!(
      "The first line exceeds {} characters ({}).\nConsider shortening the summary.",
      FIRST_LINE_LIMIT, length
    ));
  }

  let file = VersionFile::new(&opts.version_file);
  let display_path = file.path().display().to_string();

  let previous = file.read_existing()?;
  if let Some(previous) = &previous {
    output::contents(format!("📄 Old contents of {}:", display_path), previous);
  }

  if opts.dry_run {
    output::contents(
      format!("🔍 Dry run: {} would be replaced with:", display_path),
      message.as_str(),
    );
    return Ok(());
  }

  if previous.is_none() {
    file.create_empty()?;
  }
  file.overwrite(&message)?;

  output::contents(format!("✅ Contents of {} replaced with:", display_path), message.as_str());
  Ok(())
}
