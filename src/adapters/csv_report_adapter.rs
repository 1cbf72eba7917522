//! CSV calendar report.
//!
//! One row per calendar date, ascending:
//! `calendarDate,isOpen,prevTradeDate,isWeekEnd,isMonthEnd,isQuarterEnd,isYearEnd`.
//! Dates are rendered `YYYYMMDD`, flags as `0`/`1`, and a missing previous
//! trading date as an empty field.

use crate::domain::date_record::DateRecord;
use crate::domain::error::TradecalError;
use crate::domain::trading_calendar::TradingCalendar;
use crate::ports::report_port::ReportPort;
use chrono::NaiveDate;
use std::io::Write;

pub const HEADER: [&str; 7] = [
    "calendarDate",
    "isOpen",
    "prevTradeDate",
    "isWeekEnd",
    "isMonthEnd",
    "isQuarterEnd",
    "isYearEnd",
];

pub struct CsvReportAdapter {
    header: bool,
}

impl Default for CsvReportAdapter {
    fn default() -> Self {
        Self { header: true }
    }
}

impl CsvReportAdapter {
    pub fn new(header: bool) -> Self {
        Self { header }
    }
}

fn compact(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

fn row(record: &DateRecord) -> [String; 7] {
    [
        compact(record.date()),
        flag(record.is_open()).to_string(),
        record.prev_trade_date().map(compact).unwrap_or_default(),
        flag(record.is_week_end()).to_string(),
        flag(record.is_month_end()).to_string(),
        flag(record.is_quarter_end()).to_string(),
        flag(record.is_year_end()).to_string(),
    ]
}

impl ReportPort for CsvReportAdapter {
    fn write(&self, calendar: &TradingCalendar, writer: &mut dyn Write) -> Result<(), TradecalError> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        let csv_err = |e: csv::Error| TradecalError::Report {
            reason: format!("CSV write error: {}", e),
        };

        if self.header {
            wtr.write_record(HEADER).map_err(csv_err)?;
        }
        for record in calendar.records() {
            wtr.write_record(row(record)).map_err(csv_err)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Render `calendar` as CSV text with a header line.
pub fn render_report(calendar: &TradingCalendar) -> Result<String, TradecalError> {
    CsvReportAdapter::default().render(calendar)
}
