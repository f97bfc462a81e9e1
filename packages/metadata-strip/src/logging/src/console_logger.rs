// Console Logger
//
// Writes diagnostics to stderr as `ngo: <level>: <message>`. Stdout carries
// only the rewritten source, so nothing here may ever go there.

use std::io::{self, Write};

use super::logger::{LogLevel, Logger};

/// Program name every diagnostic line starts with.
pub const LOG_PREFIX: &str = "ngo";

/// Logger for the `ngo` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// One diagnostic line, without the trailing newline. Multi-line messages
    /// get the prefix on every line so they stay greppable.
    pub fn format_line(level: LogLevel, msg: &str) -> String {
        let mut lines = msg.lines();
        let first = lines.next().unwrap_or_default();
        let mut out = format!("{}: {}: {}", LOG_PREFIX, level, first);
        for line in lines {
            out.push('\n');
            out.push_str(&format!("{}: {}:   {}", LOG_PREFIX, level, line));
        }
        out
    }

    fn emit(&self, level: LogLevel, msg: &str) {
        if !self.is_enabled(level) {
            return;
        }
        // A closed stderr must not turn a successful strip into a panic.
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", Self::format_line(level, msg));
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn debug(&self, msg: &str) {
        self.emit(LogLevel::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.emit(LogLevel::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.emit(LogLevel::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.emit(LogLevel::Error, msg);
    }
}
