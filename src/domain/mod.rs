//! Core domain types and the calendar construction algorithm.

pub mod period;
pub mod date_record;
pub mod holidays;
pub mod trading_calendar;
pub mod summary;
pub mod error;
