//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for tradecal.
#[derive(Debug, thiserror::Error)]
pub enum TradecalError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("year {0} is out of range")]
    InvalidYear(i32),

    #[error("date {date} added out of order (last added {last})")]
    OutOfOrder { date: NaiveDate, last: NaiveDate },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TradecalError> for std::process::ExitCode {
    fn from(err: &TradecalError) -> Self {
        let code: u8 = match err {
            TradecalError::Io(_) | TradecalError::Report { .. } => 1,
            TradecalError::ConfigParse { .. }
            | TradecalError::ConfigMissing { .. }
            | TradecalError::ConfigInvalid { .. } => 2,
            TradecalError::InvalidDate { .. } | TradecalError::InvalidYear(_) => 3,
            TradecalError::OutOfOrder { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
