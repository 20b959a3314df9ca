//! Console Logger
//!
//! Forwards `log` records (the core logs through the facade) to the
//! browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{}] {}: {}", level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let line: wasm_bindgen::JsValue = line.into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Warn, "tally_core::service", "ignoring persisted list"),
            "[WARN] tally_core::service: ignoring persisted list"
        );
    }

    #[test]
    fn test_debug_is_filtered() {
        let meta = Metadata::builder().level(Level::Debug).build();
        assert!(!ConsoleLogger.enabled(&meta));
        let meta = Metadata::builder().level(Level::Error).build();
        assert!(ConsoleLogger.enabled(&meta));
    }
}
