// File: crates/phase-tools/src/logging.rs
// Summary: Minimal stderr logger for the `log` facade, level taken from PHASE_LOG.

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "PHASE_LOG";

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}] [{}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Parse a level name; unknown or missing values fall back to `Info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger once; later calls are ignored.
pub fn init() {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}
