//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::error::TradecalError;
use crate::domain::holidays::HolidayList;
use crate::domain::summary::CalendarSummary;
use crate::domain::trading_calendar::TradingCalendar;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "tradecal", about = "Annual trading-day calendar generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the calendar for a year and write the CSV report
    Generate {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        no_header: bool,
    },
    /// Check a calendar configuration and its holiday list
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print trading-day totals for a year
    Info {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        year: Option<i32>,
    },
}

/// Settings resolved from an INI file, or the built-in defaults.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    pub year: Option<i32>,
    pub holidays: HolidayList,
    pub output: Option<PathBuf>,
    pub header: bool,
}

impl CalendarConfig {
    /// Built-in closure list, year implied by its first entry, report to stdout.
    pub fn builtin() -> Result<Self, TradecalError> {
        Ok(Self {
            year: None,
            holidays: HolidayList::builtin()?,
            output: None,
            header: true,
        })
    }
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Generate {
            config,
            year,
            output,
            no_header,
        } => run_generate(config.as_ref(), year, output.as_ref(), no_header),
        Command::Validate { config } => run_validate(&config),
        Command::Info { config, year } => run_info(config.as_ref(), year),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TradecalError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Read `[calendar]` and `[output]` settings.
///
/// A relative `holidays_file` is resolved against `base_dir` when given.
pub fn build_calendar_config(
    adapter: &dyn ConfigPort,
    base_dir: Option<&Path>,
) -> Result<CalendarConfig, TradecalError> {
    let invalid_year = |reason: String| TradecalError::ConfigInvalid {
        section: "calendar".into(),
        key: "year".into(),
        reason,
    };
    let year = adapter
        .get_int("calendar", "year")
        .map_err(invalid_year)?
        .map(|raw| i32::try_from(raw).map_err(|_| invalid_year(format!("{raw} is out of range"))))
        .transpose()?;

    let mut holidays = match adapter.get_string("calendar", "holidays") {
        Some(inline) => HolidayList::parse(&inline)?,
        None => HolidayList::new(),
    };

    if let Some(file) = adapter.get_string("calendar", "holidays_file") {
        let mut path = PathBuf::from(file.trim());
        if let Some(dir) = base_dir.filter(|_| path.is_relative()) {
            path = dir.join(&path);
        }
        let content = fs::read_to_string(&path).map_err(|e| TradecalError::ConfigInvalid {
            section: "calendar".into(),
            key: "holidays_file".into(),
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        holidays.extend(&HolidayList::parse(&content)?);
    }

    Ok(CalendarConfig {
        year,
        holidays,
        output: adapter
            .get_string("output", "path")
            .filter(|p| !p.trim().is_empty())
            .map(|p| PathBuf::from(p.trim())),
        header: adapter.get_bool("output", "header", true),
    })
}

/// Year precedence: command line, then config, then the first holiday entry.
pub fn resolve_year(
    override_year: Option<i32>,
    config: &CalendarConfig,
) -> Result<i32, TradecalError> {
    override_year
        .or(config.year)
        .or_else(|| config.holidays.implied_year())
        .ok_or_else(|| TradecalError::ConfigMissing {
            section: "calendar".into(),
            key: "year".into(),
        })
}

/// Build the calendar for `year`, warning about holiday entries it will ignore.
pub fn build_calendar(year: i32, holidays: &HolidayList) -> Result<TradingCalendar, TradecalError> {
    for date in holidays.outside_year(year) {
        eprintln!("Warning: ignoring holiday {} outside {}", date, year);
    }
    TradingCalendar::for_year(year, holidays)
}

fn load_settings(config_path: Option<&PathBuf>) -> Result<CalendarConfig, ExitCode> {
    let result = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            let adapter = load_config(path)?;
            build_calendar_config(&adapter, path.parent())
        }
        None => {
            eprintln!("No config given, using built-in closure list");
            CalendarConfig::builtin()
        }
    };
    result.map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

fn run_generate(
    config_path: Option<&PathBuf>,
    year_override: Option<i32>,
    output_override: Option<&PathBuf>,
    no_header: bool,
) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let result = resolve_year(year_override, &settings).and_then(|year| {
        eprintln!(
            "Building calendar for {} ({} holidays listed)",
            year,
            settings.holidays.len()
        );
        build_calendar(year, &settings.holidays)
    });
    let calendar = match result {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let reporter = CsvReportAdapter::new(settings.header && !no_header);
    let output = output_override.or(settings.output.as_ref());
    // Rendered in full before the target file is opened.
    let written = match output {
        Some(path) => reporter
            .render(&calendar)
            .and_then(|text| fs::write(path, text).map_err(TradecalError::from)),
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            reporter.write(&calendar, &mut lock)
        }
    };

    match written {
        Ok(()) => {
            if let Some(path) = output {
                eprintln!("Calendar written to {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let settings = match load_settings(Some(config_path)) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let year = match resolve_year(None, &settings) {
        Ok(y) => y,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("Year:     {}", year);
    eprintln!("Holidays: {}", settings.holidays.len());
    for date in settings.holidays.outside_year(year) {
        eprintln!("Warning: holiday {} is outside {} and will be ignored", date, year);
    }
    for date in settings.holidays.on_weekends() {
        eprintln!("Note: holiday {} already falls on a weekend", date);
    }
    if settings.holidays.is_empty() {
        eprintln!("Warning: holiday list is empty, only weekends will be closed");
    }
    eprintln!("Configuration is valid");
    ExitCode::SUCCESS
}

fn run_info(config_path: Option<&PathBuf>, year_override: Option<i32>) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let result = resolve_year(year_override, &settings)
        .and_then(|year| build_calendar(year, &settings.holidays));
    match result {
        Ok(calendar) => {
            let summary = CalendarSummary::of(&calendar);
            let mut out = io::stdout().lock();
            if let Err(e) = writeln!(out, "{summary}") {
                let err = TradecalError::from(e);
                eprintln!("error: {err}");
                return (&err).into();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
