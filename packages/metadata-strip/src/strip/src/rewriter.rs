//! Text Rewriter
//!
//! Blanks planned spans with placeholders of the same UTF-16 length, so every
//! character offset a JavaScript consumer took from the input still points at
//! the same text. Spans themselves are UTF-8 byte ranges, which is what the
//! parser hands out; only the placeholder is measured in UTF-16 units.

use serde::{Deserialize, Serialize};

use super::error::StripError;
use super::planner::{RemovalPlan, RemovalSpan};

/// How removed text is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceholderStyle {
    /// Spaces followed by a single `\n`. Line breaks inside the removed node
    /// collapse into that one terminator, so later lines move up.
    #[default]
    CollapseLines,
    /// Every `\n` and `\r` stays where it was; every other character becomes
    /// as many spaces as it has UTF-16 units. Keeps both line numbers and
    /// columns.
    PreserveLines,
}

/// Length of `text` as JavaScript sees it.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Placeholder for `removed`, always `utf16_len(removed)` units long.
pub fn placeholder(removed: &str, style: PlaceholderStyle) -> String {
    match style {
        PlaceholderStyle::CollapseLines => {
            let units = utf16_len(removed);
            if units == 0 {
                return String::new();
            }
            let mut out = " ".repeat(units - 1);
            out.push('\n');
            out
        }
        PlaceholderStyle::PreserveLines => {
            let mut out = String::with_capacity(removed.len());
            for c in removed.chars() {
                match c {
                    '\n' | '\r' => out.push(c),
                    // Astral characters are two units.
                    _ => out.extend(std::iter::repeat(' ').take(c.len_utf16())),
                }
            }
            out
        }
    }
}

/// Applies a removal plan to the original source.
///
/// The original text is never mutated: the output is assembled from the
/// untouched segments between spans and the placeholders for the spans.
pub struct TextRewriter<'s> {
    source: &'s str,
    style: PlaceholderStyle,
}

impl<'s> TextRewriter<'s> {
    pub fn new(source: &'s str, style: PlaceholderStyle) -> Self {
        Self { source, style }
    }

    pub fn apply(&self, plan: &RemovalPlan) -> Result<String, StripError> {
        let mut spans: Vec<&RemovalSpan> = plan.iter().collect();
        spans.sort_by_key(|span| span.start);

        let mut output = String::with_capacity(self.source.len());
        let mut cursor = 0usize;
        let mut previous_end = 0u32;

        for span in spans {
            let range = span.range();
            if span.start > span.end || range.end > self.source.len() {
                return Err(StripError::InvalidSpan {
                    start: span.start,
                    end: span.end,
                    len: self.source.len(),
                });
            }
            if range.start < cursor {
                return Err(StripError::OverlappingSpans {
                    start: span.start,
                    previous_end,
                });
            }

            let (Some(kept), Some(removed)) = (
                self.source.get(cursor..range.start),
                self.source.get(range.clone()),
            ) else {
                // Not on a char boundary.
                return Err(StripError::InvalidSpan {
                    start: span.start,
                    end: span.end,
                    len: self.source.len(),
                });
            };

            output.push_str(kept);
            output.push_str(&placeholder(removed, self.style));
            cursor = range.end;
            previous_end = span.end;
        }

        output.push_str(&self.source[cursor..]);
        debug_assert_eq!(utf16_len(&output), utf16_len(self.source));
        Ok(output)
    }
}
