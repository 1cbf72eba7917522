//! Annual trading-day calendar construction.
//!
//! The calendar is built in a single forward pass. A running cursor holds
//! the last trading date seen so far; it is copied onto every new record as
//! `prev_trade_date`. When a period boundary (week, month, quarter, year)
//! falls on a closed date, the flag is redirected onto the record at the
//! cursor, so each period's flag always lands on its last trading day.

use crate::domain::date_record::DateRecord;
use crate::domain::error::TradecalError;
use crate::domain::holidays::HolidayList;
use crate::domain::period::PeriodEnds;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct TradingCalendar {
    records: BTreeMap<NaiveDate, DateRecord>,
    last_trade_date: Option<NaiveDate>,
}

impl TradingCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the calendar for every day of `year`, Jan 1 through Dec 31.
    ///
    /// Holiday entries outside `year` never match and are ignored.
    pub fn for_year(year: i32, holidays: &HolidayList) -> Result<Self, TradecalError> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(TradecalError::InvalidYear(year))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(TradecalError::InvalidYear(year))?;

        let mut calendar = Self::new();
        for date in first.iter_days().take_while(|d| *d <= last) {
            calendar.add_date(date, holidays.is_trading_day(date))?;
        }
        Ok(calendar)
    }

    /// Append `date` to the calendar.
    ///
    /// Dates must arrive in strictly increasing order; anything else is
    /// rejected with [`TradecalError::OutOfOrder`] and leaves the calendar
    /// unchanged.
    pub fn add_date(&mut self, date: NaiveDate, is_open: bool) -> Result<(), TradecalError> {
        if let Some((&last, _)) = self.records.last_key_value() {
            if date <= last {
                return Err(TradecalError::OutOfOrder { date, last });
            }
        }

        let mut record = DateRecord::new(date, is_open, self.last_trade_date);
        let ends = PeriodEnds::of(date);

        if is_open {
            self.last_trade_date = Some(date);
            record.mark_period_ends(ends);
        } else if ends.any() {
            if let Some(cursor) = self.last_trade_date {
                if let Some(last_open) = self.records.get_mut(&cursor) {
                    last_open.mark_period_ends(ends);
                }
            }
        }

        self.records.insert(date, record);
        Ok(())
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DateRecord> {
        self.records.get(&date)
    }

    /// All records in ascending date order.
    pub fn records(&self) -> impl Iterator<Item = &DateRecord> {
        self.records.values()
    }

    pub fn trading_days(&self) -> impl Iterator<Item = &DateRecord> {
        self.records().filter(|r| r.is_open())
    }

    /// The cursor: latest trading date inserted so far.
    pub fn last_trade_date(&self) -> Option<NaiveDate> {
        self.last_trade_date
    }

    /// Year of the first record, if any.
    pub fn year(&self) -> Option<i32> {
        self.records.keys().next().map(|d| d.year())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
