//! Strip Errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a file from being stripped.
///
/// Shape mismatches while matching decorator metadata are not errors; they
/// simply leave the statement alone.
#[derive(Debug, Error)]
pub enum StripError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {file_name}: {}", messages.join("; "))]
    Parse {
        file_name: String,
        messages: Vec<String>,
    },

    #[error("failed to read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A planned span does not fit the source text. Indicates a planner bug.
    #[error("removal span {start}..{end} is outside of the {len} byte source")]
    InvalidSpan { start: u32, end: u32, len: usize },

    /// Two planned spans overlap. Indicates a planner bug.
    #[error("removal span starting at {start} overlaps a previous span ending at {previous_end}")]
    OverlappingSpans { start: u32, previous_end: u32 },
}
