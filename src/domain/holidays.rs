//! Externally maintained market closure list.
//!
//! The list is regenerated by hand every year. Entries are `YYYY-MM-DD`
//! dates; entries outside the target year are carried but have no effect
//! on a calendar built for that year.

use crate::domain::error::TradecalError;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Shanghai Stock Exchange closures for 2018.
pub const DEFAULT_CLOSE_DATES: &[&str] = &[
    // New Year
    "2018-01-01",
    // Spring Festival
    "2018-02-15", "2018-02-16", "2018-02-17", "2018-02-18", "2018-02-19", "2018-02-20",
    "2018-02-21",
    // Qingming
    "2018-04-05", "2018-04-06", "2018-04-07", "2018-04-08", "2018-04-29", "2018-04-30",
    // Labour Day
    "2018-05-01",
    // Dragon Boat
    "2018-06-16", "2018-06-17", "2018-06-18",
    // Mid-Autumn
    "2018-09-22", "2018-09-23", "2018-09-24",
    // National Day
    "2018-10-01", "2018-10-02", "2018-10-03", "2018-10-04", "2018-10-05", "2018-10-06",
    "2018-10-07",
];

#[derive(Debug, Clone, Default)]
pub struct HolidayList {
    first: Option<NaiveDate>,
    dates: BTreeSet<NaiveDate>,
}

impl HolidayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in closure list ([`DEFAULT_CLOSE_DATES`]).
    pub fn builtin() -> Result<Self, TradecalError> {
        Self::from_entries(DEFAULT_CLOSE_DATES.iter().copied())
    }

    pub fn from_entries<'a, I>(entries: I) -> Result<Self, TradecalError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut list = Self::new();
        for entry in entries {
            list.insert(parse_date(entry)?);
        }
        Ok(list)
    }

    /// Parse a free-form list: dates separated by commas or whitespace,
    /// with `#` starting a comment that runs to end of line.
    pub fn parse(input: &str) -> Result<Self, TradecalError> {
        let tokens = input
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
            .filter(|token| !token.is_empty());
        Self::from_entries(tokens)
    }

    pub fn insert(&mut self, date: NaiveDate) {
        if self.first.is_none() {
            self.first = Some(date);
        }
        self.dates.insert(date);
    }

    /// Extend with another list. The first entry of `self` is kept.
    pub fn extend(&mut self, other: &HolidayList) {
        if let Some(first) = other.first {
            self.insert(first);
        }
        for date in &other.dates {
            self.insert(*date);
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// First entry in source order, used to imply the target year.
    pub fn first(&self) -> Option<NaiveDate> {
        self.first
    }

    pub fn implied_year(&self) -> Option<i32> {
        self.first.map(|d| d.year())
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    pub fn outside_year(&self, year: i32) -> Vec<NaiveDate> {
        self.iter().filter(|d| d.year() != year).collect()
    }

    /// Entries that are already closed by virtue of falling on a weekend.
    pub fn on_weekends(&self) -> Vec<NaiveDate> {
        self.iter().filter(|d| is_weekend(*d)).collect()
    }

    /// A date is open iff it is a weekday and not listed.
    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.contains(date)
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn parse_date(value: &str) -> Result<NaiveDate, TradecalError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| TradecalError::InvalidDate {
        value: value.trim().to_string(),
    })
}
