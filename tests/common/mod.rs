#![allow(dead_code)]

use chrono::{Datelike, NaiveDate, Weekday};
use tradecal::domain::holidays::HolidayList;
use tradecal::domain::trading_calendar::TradingCalendar;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn holidays(entries: &[&str]) -> HolidayList {
    HolidayList::from_entries(entries.iter().copied()).unwrap()
}

pub fn calendar_2018() -> TradingCalendar {
    TradingCalendar::for_year(2018, &HolidayList::builtin().unwrap()).unwrap()
}

pub fn days_in_year(year: i32) -> Vec<NaiveDate> {
    let first = d(year, 1, 1);
    first
        .iter_days()
        .take_while(|date| date.year() == year)
        .collect()
}

pub fn is_leap(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Nearest open date at or before `date` according to the raw classification.
pub fn nearest_open_at_or_before(list: &HolidayList, date: NaiveDate) -> Option<NaiveDate> {
    let mut cur = date;
    loop {
        if cur.year() != date.year() {
            return None;
        }
        if !matches!(cur.weekday(), Weekday::Sat | Weekday::Sun) && !list.contains(cur) {
            return Some(cur);
        }
        cur = cur.pred_opt()?;
    }
}
