//! HTML format implementation
//!
//! Strategy: direct line → tag emission, no intermediate tree.
//!
//! # Data Model
//!
//! | Line kind     | Output                                   |
//! |---------------|------------------------------------------|
//! | Bold          | `<b>…</b>`                               |
//! | Italic        | `<i>…</i>`                               |
//! | Fence open    | `<pre>`                                  |
//! | Fence close   | `</pre>`                                 |
//! | Preformatted  | raw line + `\n`                          |
//! | Blank         | `<br>`                                   |
//! | Text          | line + ` `, wrapped in `<p>…</p>` by position |
//!
//! Paragraphs are positional: a text line opens `<p>` when it is the first line or follows
//! a blank line, and closes it when it is the last line or precedes a blank line.
//! Consecutive text lines therefore join with single spaces and no line feed.
//!
//! A document that renders as one single paragraph loses its outer `<p>`/`</p>`, so
//! `hello` renders as `hello ` rather than `<p>hello </p>`. Documents with more than one
//! paragraph keep every wrapper.
//!
//! Text is not escaped; the dialect has no escaping.
//!
//! An unclosed preformatted block is not an error here, the output simply ends inside the
//! `<pre>`.

use crate::error::{Marker, RenderError};
use crate::format::{Format, LineContext, RenderSummary};

const PARAGRAPH_OPEN: &str = "<p>";
const PARAGRAPH_CLOSE: &str = "</p>";

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Structured markup: <p>, <b>, <i>, <pre> and <br> tags"
    }

    fn open_span(&self, marker: Marker, out: &mut String) {
        out.push_str(match marker {
            Marker::Bold => "<b>",
            Marker::Italic => "<i>",
        });
    }

    fn close_span(&self, marker: Marker, out: &mut String) {
        out.push_str(match marker {
            Marker::Bold => "</b>",
            Marker::Italic => "</i>",
        });
    }

    fn fence_open(&self, out: &mut String) {
        out.push_str("<pre>");
    }

    fn fence_close(&self, out: &mut String) {
        out.push_str("</pre>");
    }

    fn blank(&self, out: &mut String) {
        out.push_str("<br>");
    }

    fn text(&self, line: &str, context: &LineContext, out: &mut String) {
        if context.opens_paragraph {
            out.push_str(PARAGRAPH_OPEN);
        }
        self.inlines(line, out);
        out.push(' ');
        if context.closes_paragraph {
            out.push_str(PARAGRAPH_CLOSE);
        }
    }

    fn finish(&self, output: String, summary: &RenderSummary) -> Result<String, RenderError> {
        let single_paragraph =
            summary.paragraphs == 1 && summary.starts_with_paragraph && summary.ends_with_paragraph;
        if !single_paragraph {
            return Ok(output);
        }
        let stripped = output
            .strip_prefix(PARAGRAPH_OPEN)
            .and_then(|rest| rest.strip_suffix(PARAGRAPH_CLOSE))
            .map(str::to_string);
        Ok(stripped.unwrap_or(output))
    }
}
