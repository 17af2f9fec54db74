// backfill/src/lib.rs

//! Fills a repository's history with dated empty commits.
//!
//! A [`Schedule`] names a calendar range and a per-day commit count range.
//! [`runner::run`] draws a count for each day and hands one [`CommitSpec`]
//! per commit to a [`CommitWriter`], normally [`Git`], which runs
//! `git commit --allow-empty` with the author and committer dates (and
//! optionally the identity) overridden through the environment.

pub mod args;
pub mod commit;
pub mod error;
pub mod git;
pub mod runner;
pub mod schedule;

pub use crate::commit::{commit_message, CommitSpec, CommitWriter, CountingWriter, Identity};
pub use crate::error::{BackfillError, BackfillResult};
pub use crate::git::Git;
pub use crate::runner::{run, RunSummary};
pub use crate::schedule::{DayPlan, Schedule};
