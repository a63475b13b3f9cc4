//! Wall-clock model for output file names.
//!
//! # Design
//!
//! An output file is named after the local minute it was written in,
//! rendered as twelve zero-padded digits:
//!
//!   YYYYMMDDHHMM
//!
//! Seconds are dropped, so two saves inside the same minute resolve to the
//! same name.  Every field is fixed-width, so lexical order of the rendered
//! digits equals chronological order.
//!
//! The current time comes from a [`Clock`] so tests can pin it with
//! [`FixedClock`] instead of racing the system clock across a minute boundary.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

use crate::{SinkError, SinkResult};

/// `strftime` format of the 12-digit stamp.
pub const STAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Number of digits in a rendered stamp.
pub const STAMP_DIGITS: usize = 12;

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// A local wall-clock instant truncated to the minute.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Truncate `at` to the start of its minute.
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        let minute = at
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(at);
        Timestamp(minute)
    }

    /// Parse a 12-digit `YYYYMMDDHHMM` string.
    ///
    /// Anything other than exactly twelve ASCII digits naming a real calendar
    /// minute is rejected.
    pub fn parse(digits: &str) -> SinkResult<Self> {
        let invalid = || SinkError::InvalidTimestamp(digits.to_owned());

        if digits.len() != STAMP_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // All-ASCII, so byte slicing is on char boundaries.
        let field = |range: std::ops::Range<usize>| digits[range].parse::<u32>().map_err(|_| invalid());
        let year = field(0..4)? as i32;
        let month = field(4..6)?;
        let day = field(6..8)?;
        let hour = field(8..10)?;
        let minute = field(10..12)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .map(Timestamp)
            .ok_or_else(invalid)
    }

    /// The underlying minute-aligned date-time.
    #[inline]
    pub fn datetime(self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(STAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = SinkError;

    fn from_str(s: &str) -> SinkResult<Self> {
        Timestamp::parse(s)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of the current local time.
pub trait Clock {
    /// The current local date-time.
    fn now(&self) -> NaiveDateTime;

    /// The current minute as an output stamp.
    fn stamp(&self) -> Timestamp {
        Timestamp::from_datetime(self.now())
    }
}

/// Reads the host's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }

    /// Move the clock to `at`.
    pub fn set(&mut self, at: NaiveDateTime) {
        self.at = at;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}
