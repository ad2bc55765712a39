use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn line(&self) -> String {
        format!(
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Logger echoing to stderr up to the requested verbosity.
///
/// Everything down to `Info` is also kept in a bounded buffer, so a failing
/// command can show what happened even when it ran quietly.
#[derive(Clone)]
pub struct CliLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
    max_entries: usize,
    echo: LevelFilter,
}

impl CliLogger {
    pub fn new(max_entries: usize, echo: LevelFilter) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            max_entries,
            echo,
        }
    }

    /// Map `-v` occurrences to the stderr level.
    pub fn level_for(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let max_level = self.echo.max(LevelFilter::Info);
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Buffered entries that were not echoed to stderr
    pub fn unechoed_entries(&self) -> Vec<LogEntry> {
        self.lock()
            .iter()
            .filter(|entry| entry.level > self.echo)
            .cloned()
            .collect()
    }

    fn record(&self, entry: LogEntry) {
        let mut entries = self.lock();
        entries.push(entry);

        // Keep only the most recent entries
        if entries.len() > self.max_entries {
            let excess = entries.len() - self.max_entries;
            entries.drain(0..excess);
        }
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.echo.max(LevelFilter::Info)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: format!("{}", record.args()),
        };
        if entry.level <= self.echo {
            eprintln!("{}", entry.line());
        }
        self.record(entry);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn log_at(logger: &CliLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("vcontract")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(CliLogger::level_for(0), LevelFilter::Warn);
        assert_eq!(CliLogger::level_for(1), LevelFilter::Info);
        assert_eq!(CliLogger::level_for(2), LevelFilter::Debug);
        assert_eq!(CliLogger::level_for(9), LevelFilter::Debug);
    }

    #[test]
    fn test_buffer_is_bounded() {
        let logger = CliLogger::new(3, LevelFilter::Off);
        for i in 0..5 {
            log_at(&logger, Level::Info, &format!("message {i}"));
        }
        let messages: Vec<String> = logger
            .get_entries()
            .into_iter()
            .map(|entry| entry.message)
            .collect();
        assert_eq!(messages, vec!["message 2", "message 3", "message 4"]);
    }

    #[test]
    fn test_quiet_run_keeps_info_for_failures() {
        let logger = CliLogger::new(10, LevelFilter::Warn);
        log_at(&logger, Level::Info, "stored contract");
        log_at(&logger, Level::Error, "delivery failed");
        log_at(&logger, Level::Debug, "dropped");

        let unechoed = logger.unechoed_entries();
        assert_eq!(unechoed.len(), 1);
        assert_eq!(unechoed[0].message, "stored contract");
        assert_eq!(logger.get_entries().len(), 2);
    }
}
