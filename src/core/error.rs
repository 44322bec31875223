//! Error types for vfile-yaml with contextual messages and exit codes
//!
//! Every failure is fatal for the run. Errors are grouped so that `main` can pick
//! an exit code and, where one exists, print a suggestion for fixing the input.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for vfile-yaml
///
/// Usage errors are reported by clap itself, which exits with 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// Bad input content (no version line, unknown state code)
  User = 1,
  /// I/O failure reading the config or writing the version file
  System = 2,
  /// A warning was promoted to an error by `--strict`
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for vfile-yaml
#[derive(Debug)]
pub enum VfileError {
  /// Problems with the version line in the config file
  Version(VersionError),

  /// Strict-mode failures
  Validation(ValidationError),

  /// I/O errors
  Io(io::Error),

  /// I/O error with a description of what was being attempted
  IoContext { context: String, source: io::Error },
}

impl VfileError {
  /// Add context to an existing error
  ///
  /// Only I/O errors take context (usually the file involved); the others already say
  /// what went wrong. Context added twice keeps the outermost description.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    match self {
      VfileError::Io(source) => VfileError::IoContext {
        context: ctx.into(),
        source,
      },
      VfileError::IoContext { source, .. } => VfileError::IoContext {
        context: ctx.into(),
        source,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      VfileError::Version(_) => ExitCode::User,
      VfileError::Validation(_) => ExitCode::Validation,
      VfileError::Io(_) | VfileError::IoContext { .. } => ExitCode::System,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      VfileError::Version(e) => e.help_message(),
      VfileError::Validation(e) => e.help_message(),
      VfileError::Io(_) | VfileError::IoContext { .. } => None,
    }
  }
}

impl fmt::Display for VfileError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      VfileError::Version(e) => write!(f, "{}", e),
      VfileError::Validation(e) => write!(f, "{}", e),
      VfileError::Io(e) => write!(f, "I/O error: {}", e),
      VfileError::IoContext { context, source } => write!(f, "{}\nI/O error: {}", context, source),
    }
  }
}

impl std::error::Error for VfileError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      VfileError::Io(e) | VfileError::IoContext { source: e, .. } => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for VfileError {
  fn from(err: io::Error) -> Self {
    VfileError::Io(err)
  }
}

impl From<VersionError> for VfileError {
  fn from(err: VersionError) -> Self {
    VfileError::Version(err)
  }
}

impl From<ValidationError> for VfileError {
  fn from(err: ValidationError) -> Self {
    VfileError::Validation(err)
  }
}

/// Errors raised while extracting the version line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
  /// No line in the file matched `version: <major>-<minor>-<state>-<revision>`
  NotFound { path: PathBuf },

  /// The state code is not one of the known release states
  UnknownState { code: String },
}

impl VersionError {
  fn help_message(&self) -> Option<String> {
    match self {
      VersionError::NotFound { .. } => Some(
        "The file needs a line like `version: 2-1-b-3` (major-minor-state-revision) at the start of a line."
          .to_string(),
      ),
      VersionError::UnknownState { .. } => Some(format!(
        "Known state codes: {}",
        crate::version::ReleaseState::accepted_codes()
      )),
    }
  }
}

impl fmt::Display for VersionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      VersionError::NotFound { path } => {
        write!(
          f,
          "There was a problem finding the version information:\nNo version line found in {}",
          path.display()
        )
      }
      VersionError::UnknownState { code } => {
        write!(f, "Unknown release state code '{}'", code)
      }
    }
  }
}

/// Strict-mode validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
  /// Header line longer than the advisory limit
  FirstLineTooLong { length: usize, limit: usize },
}

impl ValidationError {
  fn help_message(&self) -> Option<String> {
    match self {
      ValidationError::FirstLineTooLong { .. } => {
        Some("Shorten the summary, or drop --strict to write the file anyway.".to_string())
      }
    }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValidationError::FirstLineTooLong { length, limit } => {
        write!(f, "The first line is {} characters long (limit {})", length, limit)
      }
    }
  }
}

/// Result type alias for vfile-yaml
pub type VfileResult<T> = Result<T, VfileError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> VfileResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<VfileError>,
{
  fn with_context<F>(self, f: F) -> VfileResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &VfileError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
