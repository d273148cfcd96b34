#![cfg(feature = "std")]

use std::env;
use log::{LevelFilter, Log, Metadata, Record};

use crate::config::LOG_ENV_VAR;

/// Writes records to stderr as `LEVEL module: message`, with the crate
/// prefix stripped from the module path.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target();
        let module = target.strip_prefix("seabattle::").unwrap_or(target);
        eprintln!("{:<5} {}: {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `raw` (case-insensitive, surrounding whitespace ignored),
/// `info` when missing or unrecognised.
fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with a level taken from `SEABATTLE_LOG`
/// (`error`, `warn`, `info`, `debug`, `trace` or `off`).
pub fn init_logging() {
    let raw = env::var(LOG_ENV_VAR).ok();
    init_logging_with(parse_level(raw.as_deref()));
}

/// Install the stderr logger at `level`. Only the first installation in a
/// process takes effect.
pub fn init_logging_with(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
