//! Reference-period parsing for the `REF_DATE` column.
//!
//! Precondition for every record: `REF_DATE` is `YYYY-MM` or `YYYY-MM-DD`.
//! Anything else is a [`PeriodParseError`] rather than a silently misread
//! offset.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::year_from_offset;
use crate::error::PeriodParseError;

fn ref_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{4})-(\d{2})(?:-(\d{2}))?$").expect("regex is valid")
    })
}

/// A calendar month parsed from a `REF_DATE` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RefPeriod {
    /// Four-digit calendar year.
    pub year: u32,
    /// Month, 1–12.
    pub month: u32,
}

impl RefPeriod {
    /// Parse a `REF_DATE` string.
    ///
    /// ```
    /// use tourism_core::period::RefPeriod;
    ///
    /// let p = RefPeriod::parse("2010-07").unwrap();
    /// assert_eq!((p.year_offset(), p.month), (10, 7));
    /// assert!(RefPeriod::parse("2010-7").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, PeriodParseError> {
        let caps = ref_date_pattern()
            .captures(input)
            .ok_or_else(|| PeriodParseError::new(input, "expected YYYY-MM or YYYY-MM-DD"))?;

        // The pattern guarantees ASCII digits of bounded width.
        let year: u32 = caps[1]
            .parse()
            .map_err(|_| PeriodParseError::new(input, "year is not a number"))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|_| PeriodParseError::new(input, "month is not a number"))?;
        let day: u32 = match caps.get(3) {
            Some(d) => d
                .as_str()
                .parse()
                .map_err(|_| PeriodParseError::new(input, "day is not a number"))?,
            None => 1,
        };

        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::new(
                input,
                format!("month {month} is outside 1-12"),
            ));
        }
        if NaiveDate::from_ymd_opt(year as i32, month, day).is_none() {
            return Err(PeriodParseError::new(
                input,
                format!("day {day} does not exist in {year}-{month:02}"),
            ));
        }

        Ok(Self { year, month })
    }

    /// Two-digit year exactly as written in the date (`2010` → `10`).
    pub fn year_offset(&self) -> u32 {
        self.year % 100
    }

    /// Whether this period is the given (year offset, month) pair.
    pub fn matches(&self, year_offset: u32, month: u32) -> bool {
        self.year_offset() == year_offset && self.month == month
    }

    /// Build a period from a year offset relative to 2000.
    pub fn from_offset(year_offset: u32, month: u32) -> Self {
        Self {
            year: year_from_offset(year_offset),
            month,
        }
    }
}

impl FromStr for RefPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RefPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
