//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch directory holding a config file and (maybe) a version file
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  /// Create an empty workspace
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Create a workspace with an `app.yaml` carrying the given version line
  pub fn with_version(version: &str) -> Result<Self> {
    let ws = Self::new()?;
    ws.write_file(
      "app.yaml",
      &format!(
        "application: demo-app\n{}\nruntime: python27\napi_version: 1\n\nhandlers:\n- url: /.*\n  script: main.app\n",
        version
      ),
    )?;
    Ok(ws)
  }

  /// Write a file relative to the workspace
  pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
    std::fs::write(self.path.join(path), content)?;
    Ok(())
  }

  /// Check if a file exists
  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  /// Read a file
  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }
}

/// Run vfile-yaml and return its output whatever the exit status
pub fn run_vfile_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_vfile-yaml");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run vfile-yaml")
}

/// Run vfile-yaml, failing if it exits unsuccessfully
pub fn run_vfile(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_vfile_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "vfile-yaml command failed: vfile-yaml {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}
