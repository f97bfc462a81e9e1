//! Logging
//!
//! Level-filtered diagnostics for the strip pipeline. Everything goes to
//! stderr because stdout carries the rewritten file.

pub mod src;

pub use src::console_logger::ConsoleLogger;
pub use src::logger::{LogLevel, Logger, NullLogger};
