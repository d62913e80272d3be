#![cfg(feature = "std")]

use log::{LevelFilter, Metadata, Record};
use std::env;

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Resolve the log level: an explicit override wins, then the
/// `BATTLESHIP_LOG` environment variable, then `info`.
pub fn resolve_level(explicit: Option<LevelFilter>) -> LevelFilter {
    explicit
        .or_else(|| env::var("BATTLESHIP_LOG").ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. Safe to call more than once; only the first
/// call installs the logger, later calls just adjust the level.
pub fn init_logging(explicit: Option<LevelFilter>) {
    let level = resolve_level(explicit);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
