// backfill/src/args.rs
use chrono::{NaiveDate, NaiveTime};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::commit::Identity;
use crate::error::BackfillResult;
use crate::schedule::Schedule;

#[derive(Parser, Debug)]
#[command(
  name = "backfill",
  version,
  about = "Fill a date range with empty commits",
  long_about = "Creates a random number of empty commits for every day in a date range, \
  each stamped with that day at a fixed time of day. Commits land in the current branch \
  of the target repository. Running twice adds a second batch; nothing is deduplicated."
)]
pub struct CommandLineArgs {
  /// First day to fill (inclusive)
  #[arg(long, env = "BACKFILL_START", default_value = "2025-01-01")]
  pub start: NaiveDate,

  /// Last day to fill (inclusive)
  #[arg(long, env = "BACKFILL_END", default_value = "2025-02-28")]
  pub end: NaiveDate,

  /// Fewest commits to create on a day
  #[arg(long, env = "BACKFILL_MIN_COMMITS", default_value_t = 35)]
  pub min_commits: u32,

  /// Most commits to create on a day
  #[arg(long, env = "BACKFILL_MAX_COMMITS", default_value_t = 55)]
  pub max_commits: u32,

  /// Time of day written into every author and committer date
  #[arg(long, env = "BACKFILL_TIME", default_value = "12:00:00")]
  pub time: NaiveTime,

  /// Author and committer name; git's configured identity is used when unset
  #[arg(long, env = "BACKFILL_AUTHOR_NAME", requires = "author_email")]
  pub author_name: Option<String>,

  /// Author and committer email
  #[arg(long, env = "BACKFILL_AUTHOR_EMAIL", requires = "author_name")]
  pub author_email: Option<String>,

  /// Repository to commit into
  #[arg(long, env = "BACKFILL_REPO", default_value = ".")]
  pub repo: PathBuf,

  /// Seed for the per-day commit counts, for reproducible runs
  #[arg(long, env = "BACKFILL_SEED")]
  pub seed: Option<u64>,

  /// Log the plan without invoking git
  #[arg(long)]
  pub dry_run: bool,

  /// Enable verbose output; repeat for more
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,

  /// Only print warnings and errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,
}

impl CommandLineArgs {
  pub fn schedule(&self) -> BackfillResult<Schedule> {
    Ok(Schedule::new(self.start, self.end, self.min_commits, self.max_commits)?.with_time_of_day(self.time))
  }

  /// clap's `requires` guarantees name and email arrive together.
  pub fn identity(&self) -> Option<Identity> {
    match (&self.author_name, &self.author_email) {
      (Some(name), Some(email)) => Some(Identity::new(name.as_str(), email.as_str())),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::BackfillError;

  #[test]
  fn defaults_match_the_two_month_noon_schedule() {
    let args = CommandLineArgs::try_parse_from(["backfill"]).unwrap();
    assert_eq!(args.schedule().unwrap(), Schedule::default());
    assert_eq!(args.identity(), None);
    assert!(!args.dry_run);
  }

  #[test]
  fn identity_requires_both_parts() {
    assert!(CommandLineArgs::try_parse_from(["backfill", "--author-name", "Dev"]).is_err());
    assert!(CommandLineArgs::try_parse_from(["backfill", "--author-email", "dev@example.com"]).is_err());

    let args = CommandLineArgs::try_parse_from([
      "backfill",
      "--author-name",
      "Dev Example",
      "--author-email",
      "dev@example.com",
    ])
    .unwrap();
    assert_eq!(args.identity(), Some(Identity::new("Dev Example", "dev@example.com")));
  }

  #[test]
  fn custom_range_and_time_are_parsed() {
    let args = CommandLineArgs::try_parse_from([
      "backfill",
      "--start",
      "2024-12-30",
      "--end",
      "2025-01-02",
      "--min-commits",
      "1",
      "--max-commits",
      "2",
      "--time",
      "09:15:00",
    ])
    .unwrap();
    let schedule = args.schedule().unwrap();
    assert_eq!(schedule.len_days(), 4);
    assert_eq!(schedule.time_of_day().to_string(), "09:15:00");
  }

  #[test]
  fn inverted_count_range_is_rejected() {
    let args =
      CommandLineArgs::try_parse_from(["backfill", "--min-commits", "9", "--max-commits", "3"]).unwrap();
    assert!(matches!(args.schedule(), Err(BackfillError::InvalidSchedule(_))));
  }
}
