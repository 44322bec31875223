mod commands;
mod core;
mod message;
mod ui;
mod version;
mod writer;

use clap::Parser;
use commands::GenerateOptions;
use crate::core::error::{VfileError, print_error};
use std::path::PathBuf;

/// Generate a version file from the version line of an app.yaml
///
/// Reads the first `version: <major>-<minor>-<state>-<revision>` line of the config
/// file and writes a version message to the version file, replacing whatever it held.
/// State codes: a|0 Alpha, b|1 Beta, rc|2 Release Candidate, r|3 Release.
#[derive(Parser, Debug)]
#[command(name = "vfile-yaml")]
#[command(styles = get_styles())]
struct Cli {
  /// Path to the .yaml file holding the version line
  config_file: PathBuf,

  /// Version file to create or overwrite
  #[arg(short = 'V', long, value_name = "PATH", default_value = "VERSION")]
  version_file: PathBuf,

  /// Summary for the first line of the version file (can be edited in later)
  #[arg(short, long, value_name = "TEXT", default_value = "summary.", allow_hyphen_values = true)]
  summary: String,

  /// Show the message that would be written without touching the version file
  #[arg(long)]
  dry_run: bool,

  /// Treat a first line longer than 60 characters as an error
  #[arg(long)]
  strict: bool,
}

impl From<Cli> for GenerateOptions {
  fn from(cli: Cli) -> Self {
    GenerateOptions {
      config_file: cli.config_file,
      version_file: cli.version_file,
      summary: cli.summary,
      dry_run: cli.dry_run,
      strict: cli.strict,
    }
  }
}

fn get_styles() -> clap::builder::Styles {
  use anstyle::{AnsiColor, Color, Style};

  let heading = Style::new()
    .bold()
    .underline()
    .fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
  let error = Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red)));

  clap::builder::Styles::styled()
    .usage(heading)
    .header(heading)
    .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
    .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
    .error(error)
    .invalid(error)
}

fn main() {
  // Help, missing arguments, unknown flags and missing flag values are all handled
  // (and exited on) by clap before anything is read or written
  let cli = Cli::parse();

  if let Err(err) = commands::run_generate(cli.into()) {
    handle_error(err);
  }
}

fn handle_error(err: VfileError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
