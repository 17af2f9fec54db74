// backfill/src/git.rs
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, debug_span};

use crate::commit::{CommitSpec, CommitWriter};
use crate::error::{BackfillError, BackfillResult};

/// Writes commits by running the `git` binary inside a working tree.
pub struct Git {
  repo_dir: PathBuf,
}

impl Git {
  pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
    Self {
      repo_dir: repo_dir.into(),
    }
  }

  pub fn repo_dir(&self) -> &Path {
    &self.repo_dir
  }

  fn git(&self) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(&self.repo_dir);
    cmd.stdin(Stdio::null());
    cmd
  }

  /// Fails early when `repo_dir` is not inside a git working tree.
  pub fn ensure_work_tree(&self) -> BackfillResult<()> {
    let mut cmd = self.git();
    cmd.arg("rev-parse").arg("--is-inside-work-tree");
    debug!("{cmd:?}");
    let output = cmd.output()?;
    if !output.status.success() {
      return Err(BackfillError::Git {
        status: output.status,
        stdout: output.stdout,
        stderr: output.stderr,
      });
    }
    Ok(())
  }

  pub fn commit_empty(&self, commit: &CommitSpec) -> BackfillResult<()> {
    let _span = debug_span!("git_commit", "{}", commit.timestamp_arg()).entered();

    let mut cmd = self.git();
    cmd.arg("commit")
      .arg("--allow-empty")
      .arg("-m")
      .arg(&commit.message)
      .arg("--quiet");
    for (key, value) in commit.env_overrides() {
      cmd.env(key, value);
    }

    debug!("{cmd:?}");
    let output = cmd.output()?;
    if !output.status.success() {
      return Err(BackfillError::Git {
        status: output.status,
        stdout: output.stdout,
        stderr: output.stderr,
      });
    }
    Ok(())
  }
}

impl CommitWriter for Git {
  fn write_commit(&mut self, commit: &CommitSpec) -> BackfillResult<()> {
    self.commit_empty(commit)
  }
}
