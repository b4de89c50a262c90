use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Forwards every message to a primary logger and an optional secondary one.
pub struct MultiLogger {
    primary: Arc<dyn DomainLogger>,
    secondary: Option<Arc<dyn DomainLogger>>,
}

impl MultiLogger {
    pub fn new(primary: Arc<dyn DomainLogger>, secondary: Option<Arc<dyn DomainLogger>>) -> Self {
        Self { primary, secondary }
    }

    fn each(&self, f: impl Fn(&dyn DomainLogger)) {
        f(self.primary.as_ref());
        if let Some(sec) = &self.secondary {
            f(sec.as_ref());
        }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.each(|l| l.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.each(|l| l.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.each(|l| l.error(msg));
    }
}

/// Logger for the binary: file logging when a path is configured, console
/// otherwise. Falls back to console alone if the file cannot be opened.
pub fn init_logger(path: Option<&str>, level: log::LevelFilter) -> Arc<dyn DomainLogger> {
    let console = super::init_console_logger();
    let Some(path) = path else {
        return console;
    };
    match super::init_file_logger(path, level) {
        Ok(file_logger) => Arc::new(MultiLogger::new(file_logger, Some(console))),
        Err(e) => {
            console.warn(&e);
            console
        }
    }
}
