//! The rendering pass
//!
//!     One pass over the document, one emitter call per line. Each call builds its own
//!     [Classifier] and output buffer, so rendering is a pure function of the source and the
//!     format: rendering the same input twice yields identical bytes.
//!
//!     Per line, in order:
//!         1. validate marker balance (fails the whole call)
//!         2. classify against the current mode and apply the fence transition
//!         3. dispatch to the format emitter
//!
//!     After the last line the format's `finish` gets the buffer and a [RenderSummary].

use log::debug;

use crate::classification::{Classifier, LineKind};
use crate::document::Document;
use crate::error::RenderError;
use crate::format::{Format, LineContext, RenderSummary};
use crate::formats::Representation;
use crate::validation::validate_line;

/// Render `source` into one of the built-in representations
pub fn render(source: &str, representation: Representation) -> Result<String, RenderError> {
    render_with(source, representation.format())
}

/// Render `source` with any [Format]
pub fn render_with(source: &str, format: &dyn Format) -> Result<String, RenderError> {
    let document = Document::parse(source);
    debug!(
        "rendering {} lines with format '{}'",
        document.len(),
        format.name()
    );

    let mut classifier = Classifier::new();
    let mut summary = RenderSummary::default();
    let mut out = String::with_capacity(source.len());

    for (index, &line) in document.lines().iter().enumerate() {
        validate_line(line, index)?;

        match classifier.classify(&document, index) {
            LineKind::FenceOpen => format.fence_open(&mut out),
            LineKind::FenceClose => format.fence_close(&mut out),
            LineKind::Preformatted(raw) => format.preformatted_line(raw, &mut out),
            LineKind::Bold(inner) => format.bold(inner, &mut out),
            LineKind::Italic(inner) => format.italic(inner, &mut out),
            LineKind::SpanLine(trimmed) => format.span_line(trimmed, &mut out),
            LineKind::Blank => format.blank(&mut out),
            LineKind::Text(raw) => {
                let context = paragraph_context(&document, index);
                if context.opens_paragraph {
                    summary.paragraphs += 1;
                }
                if index == 0 {
                    summary.starts_with_paragraph = true;
                }
                if document.is_last(index) {
                    summary.ends_with_paragraph = true;
                }
                format.text(raw, &context, &mut out);
            }
        }
    }

    summary.unclosed_block = classifier.unclosed_block();
    format.finish(out, &summary)
}

fn paragraph_context(document: &Document<'_>, index: usize) -> LineContext {
    LineContext {
        opens_paragraph: index == 0 || document.is_blank(index - 1),
        closes_paragraph: document.is_last(index) || document.is_blank(index + 1),
    }
}
