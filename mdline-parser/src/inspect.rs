//! Line-by-line classification dump
//!
//! Runs the same validation and classification as the renderer, but returns what each line
//! was taken for instead of rendered output. Used by `mdline --inspect`.

use serde::Serialize;

use crate::classification::{Classifier, LineKind};
use crate::document::Document;
use crate::error::RenderError;
use crate::validation::validate_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    FenceOpen,
    FenceClose,
    Preformatted,
    Bold,
    Italic,
    SpanLine,
    Blank,
    Text,
}

/// One classified line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRecord {
    /// 1-based line number
    pub line: usize,
    pub category: LineCategory,
    /// The payload the emitter receives (empty for fences and blanks)
    pub text: String,
}

impl From<LineKind<'_>> for LineCategory {
    fn from(kind: LineKind<'_>) -> Self {
        match kind {
            LineKind::FenceOpen => LineCategory::FenceOpen,
            LineKind::FenceClose => LineCategory::FenceClose,
            LineKind::Preformatted(_) => LineCategory::Preformatted,
            LineKind::Bold(_) => LineCategory::Bold,
            LineKind::Italic(_) => LineCategory::Italic,
            LineKind::SpanLine(_) => LineCategory::SpanLine,
            LineKind::Blank => LineCategory::Blank,
            LineKind::Text(_) => LineCategory::Text,
        }
    }
}

fn payload<'a>(kind: &LineKind<'a>) -> &'a str {
    match *kind {
        LineKind::Preformatted(text)
        | LineKind::Bold(text)
        | LineKind::Italic(text)
        | LineKind::SpanLine(text)
        | LineKind::Text(text) => text,
        LineKind::FenceOpen | LineKind::FenceClose | LineKind::Blank => "",
    }
}

/// Classify every line of `source`, failing on the first unbalanced line
pub fn inspect(source: &str) -> Result<Vec<LineRecord>, RenderError> {
    let document = Document::parse(source);
    let mut classifier = Classifier::new();

    document
        .lines()
        .iter()
        .enumerate()
        .map(|(index, &line)| -> Result<LineRecord, RenderError> {
            validate_line(line, index)?;
            let kind = classifier.classify(&document, index);
            Ok(LineRecord {
                line: index + 1,
                category: kind.into(),
                text: payload(&kind).to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(source: &str) -> Vec<LineCategory> {
        inspect(source)
            .unwrap()
            .into_iter()
            .map(|record| record.category)
            .collect()
    }

    #[test]
    fn test_every_category() {
        let source = "**b**\n_i_\n\n**b** _i_\n\ntext\n```\ncode\n```";
        assert_eq!(
            categories(source),
            vec![
                LineCategory::Bold,
                LineCategory::Italic,
                LineCategory::Blank,
                LineCategory::SpanLine,
                LineCategory::Blank,
                LineCategory::Text,
                LineCategory::FenceOpen,
                LineCategory::Preformatted,
                LineCategory::FenceClose,
            ]
        );
    }

    #[test]
    fn test_payloads() {
        let records = inspect("  **b**  \n  raw  ").unwrap();
        assert_eq!(records[0].text, "b");
        assert_eq!(records[1].text, "  raw  ");
        assert_eq!(records[1].line, 2);
    }

    #[test]
    fn test_span_line_with_a_text_neighbour_is_text() {
        assert_eq!(
            categories("lead\n_a_ or **b**"),
            vec![LineCategory::Text, LineCategory::Text]
        );
    }

    #[test]
    fn test_validation_error_propagates() {
        assert!(matches!(
            inspect("fine\n_"),
            Err(RenderError::Formatting { line: 2, .. })
        ));
    }
}
