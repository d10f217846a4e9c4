use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

/// Writes log entries to stderr.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                entry(
                    &Local::now().format("%b %d %H:%M:%S").to_string(),
                    record.level(),
                    &record.args().to_string()
                )
            );
        }
    }

    fn flush(&self) {}
}

fn entry(time: &str, level: Level, message: &str) -> String {
    format!("{time} {level:<5} {message}")
}
