//! Custom logging module.
//!
//! This module provides a logger that formats records with a timestamp and
//! level and forwards them to a sink callback, for example standard error.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

type Sink = Box<dyn Fn(String) + Send + Sync>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger forwarding formatted records up to a maximum level to a sink
///
pub struct SessionLogger {
    level: LevelFilter,
    sink: Arc<Mutex<Option<Sink>>>,
}

impl SessionLogger {
    pub fn new(level: LevelFilter) -> Self {
        SessionLogger {
            level,
            sink: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_sink(&self, sink: Sink) {
        if let Ok(mut guard) = self.sink.lock() {
            *guard = Some(sink);
        }
        // A poisoned lock only means records are dropped
    }

    /// Register as the global logger. Can only succeed once per process.
    ///
    pub fn install(self) -> Result<(), AppError> {
        let level = self.level;
        log::set_logger(Box::leak(Box::new(self))).map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for SessionLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(sink) = self.sink.lock() {
                if let Some(ref callback) = *sink {
                    callback(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(logger: &SessionLogger) -> Arc<Mutex<Vec<String>>> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&lines);
        logger.set_sink(Box::new(move |line: String| captured.lock().unwrap().push(line)));
        lines
    }

    #[test]
    fn test_format_log() {
        let line = format_log(
            &Record::builder()
                .args(format_args!("Loaded 3 profiles"))
                .level(Level::Info)
                .build(),
        );
        assert!(line.ends_with("INFO Loaded 3 profiles"));
    }

    #[test]
    fn test_records_above_level_are_dropped() {
        let logger = SessionLogger::new(LevelFilter::Warn);
        let lines = capture(&logger);

        logger.log(&Record::builder().args(format_args!("kept")).level(Level::Error).build());
        logger.log(&Record::builder().args(format_args!("dropped")).level(Level::Debug).build());

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR kept"));
    }

    #[test]
    fn test_no_sink_is_silent() {
        let logger = SessionLogger::new(LevelFilter::Trace);
        logger.log(&Record::builder().args(format_args!("nowhere")).level(Level::Info).build());
    }
}
