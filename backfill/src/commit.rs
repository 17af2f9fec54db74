// backfill/src/commit.rs

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

use crate::error::BackfillResult;

/// Format accepted by git for `GIT_AUTHOR_DATE` / `GIT_COMMITTER_DATE`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Name and email applied to both the author and the committer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
  pub name: String,
  pub email: String,
}

impl Identity {
  pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      email: email.into(),
    }
  }
}

impl fmt::Display for Identity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} <{}>", self.name, self.email)
  }
}

/// A single empty commit waiting to be written. Lives for one loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSpec {
  pub message: String,
  pub timestamp: NaiveDateTime,
  pub identity: Option<Identity>,
}

impl CommitSpec {
  pub fn timestamp_arg(&self) -> String {
    self.timestamp.format(TIMESTAMP_FORMAT).to_string()
  }

  /// Environment overrides handed to git for this commit.
  pub fn env_overrides(&self) -> Vec<(&'static str, String)> {
    let stamp = self.timestamp_arg();
    let mut vars = vec![("GIT_AUTHOR_DATE", stamp.clone()), ("GIT_COMMITTER_DATE", stamp)];
    if let Some(identity) = &self.identity {
      vars.push(("GIT_AUTHOR_NAME", identity.name.clone()));
      vars.push(("GIT_AUTHOR_EMAIL", identity.email.clone()));
      vars.push(("GIT_COMMITTER_NAME", identity.name.clone()));
      vars.push(("GIT_COMMITTER_EMAIL", identity.email.clone()));
    }
    vars
  }
}

/// `Initial architecture phase: Jan 05 - commit 3`
pub fn commit_message(day: NaiveDate, index: u32) -> String {
  format!("Initial architecture phase: {} - commit {}", day.format("%b %d"), index)
}

/// Receives commits in order. The first error stops the run.
pub trait CommitWriter {
  fn write_commit(&mut self, commit: &CommitSpec) -> BackfillResult<()>;
}

/// Counts commits without writing or keeping them; backs `--dry-run`.
#[derive(Debug, Default)]
pub struct CountingWriter {
  pub commits: u64,
}

impl CommitWriter for CountingWriter {
  fn write_commit(&mut self, commit: &CommitSpec) -> BackfillResult<()> {
    tracing::trace!(commit = %commit.message, "dry run: skipping commit");
    self.commits += 1;
    Ok(())
  }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingWriter {
  pub commits: Vec<CommitSpec>,
}

#[cfg(test)]
impl CommitWriter for RecordingWriter {
  fn write_commit(&mut self, commit: &CommitSpec) -> BackfillResult<()> {
    self.commits.push(commit.clone());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn jan_5_noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 5).unwrap().and_hms_opt(12, 0, 0).unwrap()
  }

  #[test]
  fn message_uses_short_month_and_padded_day() {
    let day = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    assert_eq!(commit_message(day, 0), "Initial architecture phase: Jan 05 - commit 0");
    assert_eq!(commit_message(day, 41), "Initial architecture phase: Jan 05 - commit 41");
  }

  #[test]
  fn timestamp_is_iso_like_without_zone() {
    let commit = CommitSpec {
      message: "m".to_string(),
      timestamp: jan_5_noon(),
      identity: None,
    };
    assert_eq!(commit.timestamp_arg(), "2025-01-05T12:00:00");
  }

  #[test]
  fn identity_overrides_author_and_committer() {
    let commit = CommitSpec {
      message: "m".to_string(),
      timestamp: jan_5_noon(),
      identity: Some(Identity::new("Dev Example", "dev@example.com")),
    };
    let vars = commit.env_overrides();
    let get = |key: &str| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str());
    assert_eq!(get("GIT_AUTHOR_DATE"), Some("2025-01-05T12:00:00"));
    assert_eq!(get("GIT_COMMITTER_DATE"), Some("2025-01-05T12:00:00"));
    assert_eq!(get("GIT_AUTHOR_NAME"), Some("Dev Example"));
    assert_eq!(get("GIT_COMMITTER_EMAIL"), Some("dev@example.com"));
  }

  #[test]
  fn without_identity_only_dates_are_overridden() {
    let commit = CommitSpec {
      message: "m".to_string(),
      timestamp: jan_5_noon(),
      identity: None,
    };
    let keys: Vec<&str> = commit.env_overrides().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["GIT_AUTHOR_DATE", "GIT_COMMITTER_DATE"]);
  }
}
