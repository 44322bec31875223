//! Version file output
//!
//! The version file is always replaced wholesale. Previous contents are only shown
//! to the user before they are discarded; nothing is merged or backed up.

use crate::core::error::{ResultExt, VfileResult};
use crate::message::RenderedMessage;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Permissions for a newly created version file (before umask)
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// The file that receives the rendered message
#[derive(Debug, Clone)]
pub struct VersionFile {
  path: PathBuf,
}

impl VersionFile {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Current contents, or `None` if the file does not exist
  ///
  /// Invalid UTF-8 is replaced rather than rejected, since the contents are only displayed.
  pub fn read_existing(&self) -> VfileResult<Option<String>> {
    match fs::read(&self.path) {
      Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e).with_context(|| format!("Failed to read version file {}", self.path.display())),
    }
  }

  /// Create the file empty; fails if it already exists
  pub fn create_empty(&self) -> VfileResult<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
      use std::os::unix::fs::OpenOptionsExt;
      options.mode(NEW_FILE_MODE);
    }

    options
      .open(&self.path)
      .with_context(|| format!("Failed to create version file {}", self.path.display()))?;
    Ok(())
  }

  /// Truncate the existing file and write the message in full
  pub fn overwrite(&self, message: &RenderedMessage) -> VfileResult<()> {
    let mut file = OpenOptions::new()
      .write(true)
      .truncate(true)
      .open(&self.path)
      .with_context(|| format!("Failed to open version file {} for writing", self.path.display()))?;

    file
      .write_all(message.as_str().as_bytes())
      .and_then(|_| file.flush())
      .with_context(|| format!("Failed to write version file {}", self.path.display()))?;
    Ok(())
  }
}
