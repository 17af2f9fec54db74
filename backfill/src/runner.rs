// backfill/src/runner.rs

use rand::Rng;
use std::fmt;
use tracing::{info, info_span};

use crate::commit::{commit_message, CommitSpec, CommitWriter, Identity};
use crate::error::BackfillResult;
use crate::schedule::Schedule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
  pub days: u64,
  pub commits: u64,
}

impl fmt::Display for RunSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Created {} {} across {} {}",
      self.commits,
      if self.commits == 1 { "commit" } else { "commits" },
      self.days,
      if self.days == 1 { "day" } else { "days" }
    )
  }
}

/// Walks the schedule day by day, handing each commit to `writer` in order.
///
/// Nothing runs concurrently: every commit is written before the next one is
/// built. The first writer error abandons the remaining schedule and is
/// returned as-is. Running twice appends a second batch of commits.
pub fn run<R, W>(
  schedule: &Schedule,
  identity: Option<&Identity>,
  rng: &mut R,
  writer: &mut W,
) -> BackfillResult<RunSummary>
where
  R: Rng,
  W: CommitWriter + ?Sized,
{
  let mut summary = RunSummary::default();

  for day_plan in schedule.plan(rng) {
    let _span = info_span!("day", day = %day_plan.day).entered();
    info!(
      "Completing {}: Adding {} commits...",
      day_plan.day.format("%B %d, %Y"),
      day_plan.commits
    );

    let timestamp = schedule.timestamp_for(day_plan.day);
    for index in 0..day_plan.commits {
      let commit = CommitSpec {
        message: commit_message(day_plan.day, index),
        timestamp,
        identity: identity.cloned(),
      };
      writer.write_commit(&commit)?;
      summary.commits += 1;
    }
    summary.days += 1;
  }

  Ok(summary)
}
