// backfill/src/error.rs
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackfillError {
  #[error("Invalid schedule: {0}")]
  InvalidSchedule(String),

  #[error("git execution failed: {0}")]
  Io(#[from] std::io::Error),

  #[error(
    "git execution failed\ncode={}\nstdout=```\n{}```\nstderr=```\n{}```",
    .status,
    String::from_utf8_lossy(.stdout),
    String::from_utf8_lossy(.stderr)
  )]
  Git {
    status: ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
  },
}

pub type BackfillResult<T, E = BackfillError> = std::result::Result<T, E>;
