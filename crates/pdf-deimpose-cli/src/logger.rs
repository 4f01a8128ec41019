use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

/// Console logger writing timestamped records to stderr
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{} [{}] {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

pub fn init() {
    if log::set_boxed_logger(Box::new(ConsoleLogger)).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}
