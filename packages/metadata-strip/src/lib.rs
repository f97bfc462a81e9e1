#![deny(clippy::all)]

//! Angular Metadata Strip
//!
//! Removes downleveled Angular decorator metadata (`Foo.decorators = [...]`)
//! from compiled JavaScript, keeping every other character at its original offset.

pub mod config;
pub mod logging;
pub mod main_entry;
pub mod strip;

pub use config::StripOptions;
pub use logging::{ConsoleLogger, LogLevel, Logger, NullLogger};
pub use strip::{
    plan_source, source_type_for_path, strip_file, strip_source, utf16_len, PlaceholderStyle,
    RemovalKind, RemovalPlan, RemovalSpan, StripError, StripOutput,
};

