//! Stderr logger for the `log` facade
//!
//! Reports go to stdout or a file; diagnostics always go to stderr so they
//! never mix with the report.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}", level_tag(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

fn level_tag(level: Level) -> String {
    let tag = format!("[{}]", level.as_str().to_lowercase());
    match level {
        Level::Error => tag.red().bold().to_string(),
        Level::Warn => tag.yellow().to_string(),
        Level::Info => tag.green().to_string(),
        Level::Debug | Level::Trace => tag.dimmed().to_string(),
    }
}

/// Map the quiet/verbose flags to a level. Quiet wins.
pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the logger. Safe to call more than once; later calls only
/// adjust the level and color setting.
pub fn init(quiet: bool, verbose: bool, no_color: bool) {
    if no_color {
        colored::control::set_override(false);
    }
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_for(quiet, verbose));
}
