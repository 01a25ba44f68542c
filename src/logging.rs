#![cfg(feature = "std")]
//! Stderr logger for the `fleet` binary. Stdout is kept for fleet output.

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "FLEET_LOG";

/// Level used when [`LOG_ENV`] is unset or not a level name.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Level named by `value`, case-insensitive. Anything else gives [`DEFAULT_LEVEL`].
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|name| name.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// One log line: `[LEVEL module] message`, module being the last path segment
/// of the record's target.
pub fn format_record(record: &Record<'_>) -> String {
    let target = record.target();
    let module = target.rsplit("::").next().unwrap_or(target);
    format!("[{:<5} {}] {}", record.level(), module, record.args())
}

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", format_record(record));
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Install the stderr logger at `level`. Fails if a logger is already set.
pub fn init_logging_at(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

/// Install the stderr logger at the level named by `FLEET_LOG`.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if init_logging_at(level).is_err() {
        log::debug!("logger already installed, keeping it");
    }
}
