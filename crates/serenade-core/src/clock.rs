//! How long we've been together.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Elapsed time broken into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedTime {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl ElapsedTime {
    /// Split a number of seconds; negative input counts as zero.
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }
}

impl std::fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes and {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Counts up from the day the relationship started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipClock {
    start: NaiveDateTime,
}

impl RelationshipClock {
    /// Default start: March 28th 2024, midnight local time
    pub fn default_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 28)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    pub fn new(start: NaiveDateTime) -> Self {
        Self { start }
    }

    /// Parse a `YYYY-MM-DD` start date (midnight local time)
    pub fn from_date_str(date: &str) -> CardResult<Self> {
        let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| CardError::InvalidDate(format!("{}: {}", date, e)))?;
        let start = day
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| CardError::InvalidDate(date.to_string()))?;
        Ok(Self::new(start))
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Elapsed time at `now`; a start in the future yields zero.
    pub fn elapsed_at(&self, now: NaiveDateTime) -> ElapsedTime {
        ElapsedTime::from_seconds((now - self.start).num_seconds())
    }

    /// Elapsed time right now, local clock
    pub fn elapsed(&self) -> ElapsedTime {
        self.elapsed_at(Local::now().naive_local())
    }
}

impl Default for RelationshipClock {
    fn default() -> Self {
        Self::new(Self::default_start())
    }
}
