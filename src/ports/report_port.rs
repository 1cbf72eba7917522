//! Report generation port trait.

use crate::domain::error::TradecalError;
use crate::domain::trading_calendar::TradingCalendar;
use std::io::Write;

/// Port for writing a built calendar out.
pub trait ReportPort {
    fn write(&self, calendar: &TradingCalendar, writer: &mut dyn Write) -> Result<(), TradecalError>;

    /// Default implementation: renders through `write` into memory.
    fn render(&self, calendar: &TradingCalendar) -> Result<String, TradecalError> {
        let mut buf = Vec::new();
        self.write(calendar, &mut buf)?;
        String::from_utf8(buf).map_err(|e| TradecalError::Report {
            reason: e.to_string(),
        })
    }
}
