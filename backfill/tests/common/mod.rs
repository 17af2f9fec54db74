// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use assert_cmd::Command;
use once_cell::sync::Lazy;
use std::path::Path;
use tempfile::TempDir;

static GIT_AVAILABLE: Lazy<bool> = Lazy::new(|| {
  std::process::Command::new("git")
    .arg("--version")
    .output()
    .map(|out| out.status.success())
    .unwrap_or(false)
});

pub fn git_available() -> bool {
  *GIT_AVAILABLE
}

/// A `git` command isolated from the user's global and system config.
pub fn git(dir: &Path) -> std::process::Command {
  let mut cmd = std::process::Command::new("git");
  cmd
    .current_dir(dir)
    .env("GIT_CONFIG_GLOBAL", "/dev/null")
    .env("GIT_CONFIG_NOSYSTEM", "1")
    .env("TZ", "UTC");
  cmd
}

pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
  let output = git(dir).args(args).output().expect("failed to run git");
  assert!(output.status.success(), "git {:?} failed: {:?}", args, output);
  String::from_utf8(output.stdout).expect("git output is utf-8")
}

/// Fresh repository with no commits.
pub fn init_repository() -> TempDir {
  let dir = TempDir::new().expect("Failed to create temp dir");
  git_stdout(dir.path(), &["init", "--quiet"]);
  dir
}

/// The backfill binary, pointed at `repo` and sharing the isolated git config.
pub fn backfill(repo: &Path) -> Command {
  let mut cmd = Command::cargo_bin("backfill").expect("backfill binary is built");
  cmd
    .current_dir(repo)
    .env("GIT_CONFIG_GLOBAL", "/dev/null")
    .env("GIT_CONFIG_NOSYSTEM", "1")
    .env("TZ", "UTC")
    .env_remove("RUST_LOG");
  for var in [
    "BACKFILL_START",
    "BACKFILL_END",
    "BACKFILL_MIN_COMMITS",
    "BACKFILL_MAX_COMMITS",
    "BACKFILL_TIME",
    "BACKFILL_AUTHOR_NAME",
    "BACKFILL_AUTHOR_EMAIL",
    "BACKFILL_REPO",
    "BACKFILL_SEED",
  ] {
    cmd.env_remove(var);
  }
  cmd
}
