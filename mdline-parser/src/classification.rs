//! Line Classification
//!
//! Core classification logic for determining line kinds, plus the stateful classifier that
//! tracks preformatted blocks across lines.
use log::debug;

use crate::document::{trim_line, Document};
use crate::error::Marker;

/// The fence token, after trimming
pub const FENCE: &str = "```";

/// What a single line is, given the parser mode it was read in.
///
/// Payloads borrow from the source line. `Preformatted` and `Text` carry the raw line,
/// the others carry trimmed text with the wrapping markers removed where applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    FenceOpen,
    FenceClose,
    Preformatted(&'a str),
    Bold(&'a str),
    Italic(&'a str),
    /// Starts and ends with a marker without being a whole-line bold or italic span,
    /// e.g. `**bold** and _italic_`. Only a line with no paragraph neighbours stays a span
    /// line; [Classifier] turns the others back into `Text`.
    SpanLine(&'a str),
    Blank,
    Text(&'a str),
}

/// Determine the kind of a line. Order matters: the first matching rule wins.
pub fn classify_line(line: &str, preformatted: bool) -> LineKind<'_> {
    let trimmed = trim_line(line);

    if preformatted {
        if trimmed == FENCE {
            return LineKind::FenceClose;
        }
        return LineKind::Preformatted(line);
    }
    if trimmed == FENCE {
        return LineKind::FenceOpen;
    }
    if let Some(inner) = strip_wrapping(trimmed, Marker::Bold) {
        return LineKind::Bold(inner);
    }
    if let Some(inner) = strip_wrapping(trimmed, Marker::Italic) {
        return LineKind::Italic(inner);
    }
    if starts_with_marker(trimmed) && ends_with_marker(trimmed) {
        return LineKind::SpanLine(trimmed);
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    LineKind::Text(line)
}

/// Remove one delimiter from each end, if the text starts and ends with it
fn strip_wrapping(text: &str, marker: Marker) -> Option<&str> {
    let delimiter = marker.delimiter();
    text.strip_prefix(delimiter)?.strip_suffix(delimiter)
}

fn starts_with_marker(text: &str) -> bool {
    text.starts_with(Marker::Bold.delimiter()) || text.starts_with(Marker::Italic.delimiter())
}

fn ends_with_marker(text: &str) -> bool {
    text.ends_with(Marker::Bold.delimiter()) || text.ends_with(Marker::Italic.delimiter())
}

/// A preformatted block that has been opened and not yet closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenBlock {
    /// 1-based line of the opening fence
    line: usize,
}

/// A stateful classifier scoped to one render call.
///
/// Fence lines flip the preformatted mode; the block stack remembers where the current
/// block was opened so an unterminated one can be reported at the end.
#[derive(Debug, Default)]
pub struct Classifier {
    preformatted: bool,
    block_stack: Vec<OpenBlock>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the line at `index` (0-based) and apply its state transition.
    pub fn classify<'a>(&mut self, document: &Document<'a>, index: usize) -> LineKind<'a> {
        let line = document.line(index);
        let kind = match classify_line(line, self.preformatted) {
            LineKind::SpanLine(_) if !document.stands_alone(index) => LineKind::Text(line),
            kind => kind,
        };
        match kind {
            LineKind::FenceOpen => {
                self.preformatted = true;
                self.block_stack.push(OpenBlock { line: index + 1 });
            }
            LineKind::FenceClose => {
                self.preformatted = false;
                self.block_stack.pop();
            }
            _ => {}
        }
        debug!("line {}: {:?}", index + 1, kind);
        kind
    }

    /// The 1-based opening line of a block still open, if any
    pub fn unclosed_block(&self) -> Option<usize> {
        self.block_stack.last().map(|block| block.line)
    }
}
