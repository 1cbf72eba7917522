//! Aggregate figures for a built calendar.

use crate::domain::trading_calendar::TradingCalendar;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSummary {
    pub year: Option<i32>,
    pub days: usize,
    pub trading_days: usize,
    pub closed_days: usize,
    pub first_trading_day: Option<NaiveDate>,
    pub last_trading_day: Option<NaiveDate>,
    pub week_ends: usize,
    pub month_ends: usize,
    pub quarter_ends: usize,
    pub year_ends: usize,
}

impl CalendarSummary {
    pub fn of(calendar: &TradingCalendar) -> Self {
        let mut summary = Self {
            year: calendar.year(),
            days: calendar.len(),
            trading_days: 0,
            closed_days: 0,
            first_trading_day: None,
            last_trading_day: None,
            week_ends: 0,
            month_ends: 0,
            quarter_ends: 0,
            year_ends: 0,
        };

        for record in calendar.records() {
            if !record.is_open() {
                summary.closed_days += 1;
                continue;
            }
            summary.trading_days += 1;
            summary.first_trading_day.get_or_insert(record.date());
            summary.last_trading_day = Some(record.date());

            let ends = record.period_ends();
            summary.week_ends += usize::from(ends.week);
            summary.month_ends += usize::from(ends.month);
            summary.quarter_ends += usize::from(ends.quarter);
            summary.year_ends += usize::from(ends.year);
        }
        summary
    }
}

fn fmt_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
}

impl fmt::Display for CalendarSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => writeln!(f, "Year:              {year}")?,
            None => writeln!(f, "Year:              -")?,
        }
        writeln!(f, "Days:              {}", self.days)?;
        writeln!(f, "Trading days:      {}", self.trading_days)?;
        writeln!(f, "Closed days:       {}", self.closed_days)?;
        writeln!(f, "First trading day: {}", fmt_date(self.first_trading_day))?;
        writeln!(f, "Last trading day:  {}", fmt_date(self.last_trading_day))?;
        write!(
            f,
            "Period ends:       week={} month={} quarter={} year={}",
            self.week_ends, self.month_ends, self.quarter_ends, self.year_ends
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::holidays::HolidayList;

    #[test]
    fn summary_of_2018() {
        let cal = TradingCalendar::for_year(2018, &HolidayList::builtin().unwrap()).unwrap();
        let s = CalendarSummary::of(&cal);

        assert_eq!(s.year, Some(2018));
        assert_eq!(s.days, 365);
        assert_eq!(s.trading_days, 244);
        assert_eq!(s.closed_days, 121);
        assert_eq!(s.first_trading_day, NaiveDate::from_ymd_opt(2018, 1, 2));
        assert_eq!(s.last_trading_day, NaiveDate::from_ymd_opt(2018, 12, 31));
        // Sep 30 and Oct 7 both fold onto Sep 28
        assert_eq!(s.week_ends, 51);
        assert_eq!(s.month_ends, 12);
        assert_eq!(s.quarter_ends, 4);
        assert_eq!(s.year_ends, 1);
    }

    #[test]
    fn empty_calendar() {
        let s = CalendarSummary::of(&TradingCalendar::new());
        assert_eq!(s.days, 0);
        assert_eq!(s.first_trading_day, None);
        assert!(s.to_string().contains("First trading day: -"));
    }
}
