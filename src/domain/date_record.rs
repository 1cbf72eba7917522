//! One calendar date's trading status and period-end flags.

use crate::domain::period::PeriodEnds;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Read-only once inserted into a [`TradingCalendar`](crate::domain::trading_calendar::TradingCalendar).
///
/// Equality and ordering compare `date` only.
#[derive(Debug, Clone)]
pub struct DateRecord {
    date: NaiveDate,
    is_open: bool,
    prev_trade_date: Option<NaiveDate>,
    period_ends: PeriodEnds,
}

impl DateRecord {
    pub(crate) fn new(date: NaiveDate, is_open: bool, prev_trade_date: Option<NaiveDate>) -> Self {
        Self {
            date,
            is_open,
            prev_trade_date,
            period_ends: PeriodEnds::default(),
        }
    }

    pub(crate) fn mark_period_ends(&mut self, ends: PeriodEnds) {
        self.period_ends.merge(ends);
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn prev_trade_date(&self) -> Option<NaiveDate> {
        self.prev_trade_date
    }

    pub fn period_ends(&self) -> PeriodEnds {
        self.period_ends
    }

    pub fn is_week_end(&self) -> bool {
        self.period_ends.week
    }

    pub fn is_month_end(&self) -> bool {
        self.period_ends.month
    }

    pub fn is_quarter_end(&self) -> bool {
        self.period_ends.quarter
    }

    pub fn is_year_end(&self) -> bool {
        self.period_ends.year
    }
}

impl PartialEq for DateRecord {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for DateRecord {}

impl PartialOrd for DateRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn new_record_has_no_flags() {
        let rec = DateRecord::new(d(2018, 1, 2), true, None);
        assert!(rec.is_open());
        assert_eq!(rec.prev_trade_date(), None);
        assert!(!rec.period_ends().any());
    }

    #[test]
    fn equality_ignores_everything_but_date() {
        let mut a = DateRecord::new(d(2018, 1, 2), true, None);
        let b = DateRecord::new(d(2018, 1, 2), false, Some(d(2017, 12, 29)));
        a.mark_period_ends(PeriodEnds {
            week: true,
            ..Default::default()
        });
        assert_eq!(a, b);
    }

    #[test]
    fn sorts_by_date() {
        let mut recs = vec![
            DateRecord::new(d(2018, 3, 1), true, None),
            DateRecord::new(d(2018, 1, 5), false, None),
            DateRecord::new(d(2018, 2, 9), true, None),
        ];
        recs.sort();
        let dates: Vec<_> = recs.iter().map(DateRecord::date).collect();
        assert_eq!(dates, vec![d(2018, 1, 5), d(2018, 2, 9), d(2018, 3, 1)]);
    }

    #[test]
    fn marks_accumulate() {
        let mut rec = DateRecord::new(d(2018, 9, 28), true, None);
        rec.mark_period_ends(PeriodEnds {
            week: true,
            ..Default::default()
        });
        rec.mark_period_ends(PeriodEnds {
            month: true,
            quarter: true,
            ..Default::default()
        });
        assert!(rec.is_week_end());
        assert!(rec.is_month_end());
        assert!(rec.is_quarter_end());
        assert!(!rec.is_year_end());
    }
}
