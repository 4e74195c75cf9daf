//! Paired markers inside a line
//!
//!     Inline parsing is flat. Each `**` toggles bold and each `_` toggles italic; there is
//!     no nesting discipline, so `**a _b** c_` yields overlapping spans exactly in token
//!     order. Validation guarantees even counts, but spans left open at the end of the text
//!     are closed anyway so a caller that skipped validation still gets balanced output.

use crate::error::Marker;
use crate::token::{tokenize_with_spans, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode<'a> {
    Text(&'a str),
    Open(Marker),
    Close(Marker),
}

/// Parse a line into text runs and span boundaries
pub fn parse_inlines(text: &str) -> Vec<InlineNode<'_>> {
    let mut nodes = Vec::new();
    let mut bold_open = false;
    let mut italic_open = false;
    let mut run_start: Option<usize> = None;

    for (token, span) in tokenize_with_spans(text) {
        let Some(marker) = token.marker() else {
            run_start.get_or_insert(span.start);
            continue;
        };
        if let Some(start) = run_start.take() {
            nodes.push(InlineNode::Text(&text[start..span.start]));
        }
        let open = match token {
            Token::BoldMarker => &mut bold_open,
            _ => &mut italic_open,
        };
        nodes.push(if *open {
            InlineNode::Close(marker)
        } else {
            InlineNode::Open(marker)
        });
        *open = !*open;
    }

    if let Some(start) = run_start {
        nodes.push(InlineNode::Text(&text[start..]));
    }
    if italic_open {
        nodes.push(InlineNode::Close(Marker::Italic));
    }
    if bold_open {
        nodes.push(InlineNode::Close(Marker::Bold));
    }
    nodes
}
