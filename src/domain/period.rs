//! Period boundary predicates and the per-record period-end flag set.

use chrono::{Datelike, NaiveDate, Weekday};

/// Which periods (week, month, quarter, year) a date closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodEnds {
    pub week: bool,
    pub month: bool,
    pub quarter: bool,
    pub year: bool,
}

impl PeriodEnds {
    /// Evaluate the boundary predicates against a raw calendar date,
    /// ignoring trading status.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            week: is_week_last_day(date),
            month: is_month_last_day(date),
            quarter: is_quarter_last_day(date),
            year: is_year_last_day(date),
        }
    }

    pub fn any(&self) -> bool {
        self.week || self.month || self.quarter || self.year
    }

    /// Set every flag that is set in `other`. Flags are never cleared.
    pub fn merge(&mut self, other: PeriodEnds) {
        self.week |= other.week;
        self.month |= other.month;
        self.quarter |= other.quarter;
        self.year |= other.year;
    }
}

/// Sunday closes the ISO week.
pub fn is_week_last_day(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

pub fn is_month_last_day(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.month() != date.month())
}

pub fn is_quarter_last_day(date: NaiveDate) -> bool {
    matches!(date.month(), 3 | 6 | 9 | 12) && is_month_last_day(date)
}

pub fn is_year_last_day(date: NaiveDate) -> bool {
    date.month() == 12 && date.day() == 31
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn week_ends_on_sunday() {
        assert!(is_week_last_day(d(2018, 9, 30)));
        assert!(!is_week_last_day(d(2018, 9, 29)));
        assert!(!is_week_last_day(d(2018, 10, 1)));
    }

    #[test]
    fn month_end_honors_leap_years() {
        assert!(is_month_last_day(d(2020, 2, 29)));
        assert!(!is_month_last_day(d(2020, 2, 28)));
        assert!(is_month_last_day(d(2018, 2, 28)));
        assert!(is_month_last_day(d(2018, 4, 30)));
        assert!(!is_month_last_day(d(2018, 1, 30)));
        assert!(is_month_last_day(d(2018, 12, 31)));
    }

    #[test]
    fn quarter_ends() {
        for date in [d(2018, 3, 31), d(2018, 6, 30), d(2018, 9, 30), d(2018, 12, 31)] {
            assert!(is_quarter_last_day(date), "{date}");
        }
        assert!(!is_quarter_last_day(d(2018, 4, 30)));
        assert!(!is_quarter_last_day(d(2018, 3, 30)));
    }

    #[test]
    fn year_end_only_on_december_31() {
        assert!(is_year_last_day(d(2018, 12, 31)));
        assert!(!is_year_last_day(d(2018, 12, 30)));
        assert!(!is_year_last_day(d(2018, 1, 1)));
    }

    #[test]
    fn of_december_31_2017_sets_everything() {
        // 2017-12-31 is a Sunday
        let ends = PeriodEnds::of(d(2017, 12, 31));
        assert_eq!(
            ends,
            PeriodEnds {
                week: true,
                month: true,
                quarter: true,
                year: true
            }
        );
    }

    #[test]
    fn merge_never_clears() {
        let mut ends = PeriodEnds {
            week: true,
            ..Default::default()
        };
        ends.merge(PeriodEnds {
            month: true,
            ..Default::default()
        });
        assert!(ends.week && ends.month);
        assert!(!ends.quarter && !ends.year);
        assert!(ends.any());
        assert!(!PeriodEnds::default().any());
    }
}
