// backfill/src/schedule.rs

//! Calendar range and per-day commit counts.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use std::ops::RangeInclusive;

use crate::error::{BackfillError, BackfillResult};

/// Every day in `start..=end`, each receiving between `min` and `max`
/// commits stamped at `time_of_day`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
  start: NaiveDate,
  end: NaiveDate,
  commits_per_day: RangeInclusive<u32>,
  time_of_day: NaiveTime,
}

/// One calendar day and the number of commits drawn for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPlan {
  pub day: NaiveDate,
  pub commits: u32,
}

impl Schedule {
  pub fn new(start: NaiveDate, end: NaiveDate, min_commits: u32, max_commits: u32) -> BackfillResult<Self> {
    if start > end {
      return Err(BackfillError::InvalidSchedule(format!(
        "start date {start} is after end date {end}"
      )));
    }
    if min_commits == 0 {
      return Err(BackfillError::InvalidSchedule(
        "minimum commits per day must be at least 1".to_string(),
      ));
    }
    if min_commits > max_commits {
      return Err(BackfillError::InvalidSchedule(format!(
        "minimum commits per day ({min_commits}) exceeds maximum ({max_commits})"
      )));
    }
    Ok(Self {
      start,
      end,
      commits_per_day: min_commits..=max_commits,
      time_of_day: noon(),
    })
  }

  pub fn with_time_of_day(mut self, time_of_day: NaiveTime) -> Self {
    self.time_of_day = time_of_day;
    self
  }

  pub fn start(&self) -> NaiveDate {
    self.start
  }

  pub fn end(&self) -> NaiveDate {
    self.end
  }

  pub fn commits_per_day(&self) -> &RangeInclusive<u32> {
    &self.commits_per_day
  }

  pub fn time_of_day(&self) -> NaiveTime {
    self.time_of_day
  }

  /// The forged timestamp for commits made on `day`.
  pub fn timestamp_for(&self, day: NaiveDate) -> NaiveDateTime {
    day.and_time(self.time_of_day)
  }

  pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
    let end = self.end;
    std::iter::successors(Some(self.start), |day| day.checked_add_days(Days::new(1)))
      .take_while(move |day| *day <= end)
  }

  pub fn len_days(&self) -> u64 {
    (self.end - self.start).num_days() as u64 + 1
  }

  /// Draws a uniform commit count for every day in the range.
  pub fn plan<R: Rng>(&self, rng: &mut R) -> Vec<DayPlan> {
    self
      .days()
      .map(|day| DayPlan {
        day,
        commits: rng.gen_range(self.commits_per_day.clone()),
      })
      .collect()
  }
}

impl Default for Schedule {
  /// January and February 2025, 35 to 55 commits a day at noon.
  fn default() -> Self {
    Self {
      start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN),
      end: NaiveDate::from_ymd_opt(2025, 2, 28).unwrap_or(NaiveDate::MIN),
      commits_per_day: 35..=55,
      time_of_day: noon(),
    }
  }
}

fn noon() -> NaiveTime {
  NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}
