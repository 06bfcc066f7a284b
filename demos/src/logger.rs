//! Console logging sink: one line per value, with a clear/reset operation.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// A line-oriented console sink.
///
/// Renders every value as one line on stdout and keeps the lines in a
/// buffer that [`clear`](ConsoleLogger::clear) resets, the way the
/// visualizer's on-screen console wipes between interactions. Also
/// installs itself as the `log` facade sink so the path-finder's own
/// records land here.
pub struct ConsoleLogger {
    lines: Mutex<Vec<String>>,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    lines: Mutex::new(Vec::new()),
};

impl ConsoleLogger {
    /// Install the global sink and return it.
    pub fn init() -> &'static ConsoleLogger {
        // Fails only if a logger is already installed, which is fine here.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Debug);
        &LOGGER
    }

    /// Print one line and remember it.
    pub fn print(&self, line: impl Into<String>) {
        let line = line.into();
        println!("{line}");
        self.lines.lock().unwrap().push(line);
    }

    /// Drop everything logged since the last clear.
    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
        println!();
    }

    /// Number of lines logged since the last clear.
    pub fn line_count(&self) -> usize {
        self.lines.lock().unwrap().len()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.print(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_and_clear_track_lines() {
        let logger = ConsoleLogger {
            lines: Mutex::new(Vec::new()),
        };
        logger.print("one");
        logger.print(format!("{}", 2));
        assert_eq!(logger.line_count(), 2);
        logger.clear();
        assert_eq!(logger.line_count(), 0);
    }
}
