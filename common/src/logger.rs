use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct LoggerOptions {
    pub prefix: Option<String>,
    pub verbose: bool,
}

pub struct Logger {
    options: LoggerOptions,
}

impl Logger {
    fn new(options: LoggerOptions) -> Self {
        Self { options }
    }

    pub fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.options.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        println!("{}", self.format_line(message));
    }

    pub fn debug(&self, message: &str) {
        if self.options.verbose {
            self.log(message);
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.options.verbose
    }
}

/// Installs the process-wide logger. Later calls are ignored.
pub fn init_logger(options: LoggerOptions) {
    LOGGER.get_or_init(|| Logger::new(options));
}

// Messages sent before init_logger are dropped.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

pub fn debug(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(message);
    }
}

pub fn is_verbose() -> bool {
    LOGGER.get().is_some_and(Logger::is_verbose)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::debug(&format!($($arg)*))
        }
    };
}
