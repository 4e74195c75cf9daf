//! ANSI terminal format
//!
//! Spans become SGR escapes closed by a full reset, preformatted blocks are shown in
//! reverse video, and a blank line is a paragraph break of two line feeds. There is no
//! paragraph wrapping: every text line is its content plus one space.
//!
//! Unlike html, this format rejects a document that ends inside a preformatted block.

use crate::error::{Marker, RenderError};
use crate::format::{Format, LineContext, RenderSummary};

const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const REVERSE: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiFormat;

impl Format for AnsiFormat {
    fn name(&self) -> &str {
        "ansi"
    }

    fn description(&self) -> &str {
        "Terminal escapes: bold, italic and reverse-video preformatted blocks"
    }

    fn open_span(&self, marker: Marker, out: &mut String) {
        out.push_str(match marker {
            Marker::Bold => BOLD,
            Marker::Italic => ITALIC,
        });
    }

    fn close_span(&self, _marker: Marker, out: &mut String) {
        out.push_str(RESET);
    }

    fn fence_open(&self, out: &mut String) {
        out.push_str(REVERSE);
    }

    fn fence_close(&self, out: &mut String) {
        out.push_str(RESET);
    }

    fn blank(&self, out: &mut String) {
        out.push_str("\n\n");
    }

    fn text(&self, line: &str, _context: &LineContext, out: &mut String) {
        self.inlines(line, out);
        out.push(' ');
    }

    fn finish(&self, output: String, summary: &RenderSummary) -> Result<String, RenderError> {
        match summary.unclosed_block {
            Some(line) => Err(RenderError::UnterminatedBlock { line }),
            None => Ok(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_fragments() {
        let mut out = String::new();
        AnsiFormat.bold("b", &mut out);
        AnsiFormat.italic("i", &mut out);
        assert_eq!(out, "\x1b[1mb\x1b[0m\x1b[3mi\x1b[0m");
    }

    #[test]
    fn test_text_ignores_paragraph_context() {
        let context = LineContext {
            opens_paragraph: true,
            closes_paragraph: true,
        };
        let mut out = String::new();
        AnsiFormat.text("plain", &context, &mut out);
        assert_eq!(out, "plain ");
    }

    #[test]
    fn test_preformatted_block_fragments() {
        let mut out = String::new();
        AnsiFormat.fence_open(&mut out);
        AnsiFormat.preformatted_line("code", &mut out);
        AnsiFormat.fence_close(&mut out);
        assert_eq!(out, "\x1b[7mcode\n\x1b[0m");
    }

    #[test]
    fn test_finish_rejects_unclosed_block() {
        let summary = RenderSummary {
            unclosed_block: Some(4),
            ..RenderSummary::default()
        };
        assert_eq!(
            AnsiFormat.finish(String::new(), &summary),
            Err(RenderError::UnterminatedBlock { line: 4 })
        );
    }
}
