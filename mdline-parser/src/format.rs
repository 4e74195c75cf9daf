//! Format trait definition
//!
//! This module defines the Format trait that every output representation implements.
//! The renderer classifies lines once and calls exactly one emitter per line; formats only
//! decide which literal fragments to append.

use crate::error::{Marker, RenderError};
use crate::inlines::{parse_inlines, InlineNode};

/// Positional facts about a text line, computed by the renderer from its neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineContext {
    /// First line of the document, or the previous line is blank
    pub opens_paragraph: bool,
    /// Last line of the document, or the next line is blank
    pub closes_paragraph: bool,
}

/// What the renderer learned about the whole document, handed to [`Format::finish`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Number of text lines that opened a paragraph
    pub paragraphs: usize,
    /// The first line was a text line
    pub starts_with_paragraph: bool,
    /// The last line was a text line
    pub ends_with_paragraph: bool,
    /// 1-based line of a preformatted block that was never closed
    pub unclosed_block: Option<usize>,
}

/// Trait for output representations
///
/// Implementors append fragments to the shared output buffer. The buffer only ever grows;
/// [`finish`](Format::finish) is the single place where a format may post-process it or
/// reject the document.
///
/// # Examples
///
/// ```ignore
/// struct PlainFormat;
///
/// impl Format for PlainFormat {
///     fn name(&self) -> &str {
///         "plain"
///     }
///     fn open_span(&self, _marker: Marker, _out: &mut String) {}
///     fn close_span(&self, _marker: Marker, _out: &mut String) {}
///     fn fence_open(&self, _out: &mut String) {}
///     fn fence_close(&self, _out: &mut String) {}
///     fn blank(&self, out: &mut String) {
///         out.push('\n');
///     }
///     fn text(&self, line: &str, _context: &LineContext, out: &mut String) {
///         out.push_str(line);
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "ansi")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    fn open_span(&self, marker: Marker, out: &mut String);

    fn close_span(&self, marker: Marker, out: &mut String);

    fn fence_open(&self, out: &mut String);

    fn fence_close(&self, out: &mut String);

    /// Content inside a preformatted block: the raw line and a line feed
    fn preformatted_line(&self, line: &str, out: &mut String) {
        out.push_str(line);
        out.push('\n');
    }

    /// A whole-line bold span; `text` has the markers already removed
    fn bold(&self, text: &str, out: &mut String) {
        self.open_span(Marker::Bold, out);
        out.push_str(text);
        self.close_span(Marker::Bold, out);
    }

    /// A whole-line italic span; `text` has the markers already removed
    fn italic(&self, text: &str, out: &mut String) {
        self.open_span(Marker::Italic, out);
        out.push_str(text);
        self.close_span(Marker::Italic, out);
    }

    /// A trimmed line bounded by markers, rendered inline with no paragraph handling
    fn span_line(&self, text: &str, out: &mut String) {
        self.inlines(text, out);
    }

    fn blank(&self, out: &mut String);

    fn text(&self, line: &str, context: &LineContext, out: &mut String);

    /// Finalize the buffer once every line has been emitted
    fn finish(&self, output: String, _summary: &RenderSummary) -> Result<String, RenderError> {
        Ok(output)
    }

    /// Write text with its paired markers turned into spans
    fn inlines(&self, text: &str, out: &mut String) {
        for node in parse_inlines(text) {
            match node {
                InlineNode::Text(run) => out.push_str(run),
                InlineNode::Open(marker) => self.open_span(marker, out),
                InlineNode::Close(marker) => self.close_span(marker, out),
            }
        }
    }
}
