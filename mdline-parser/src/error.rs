//! Errors raised while rendering

use std::fmt;
use thiserror::Error;

/// The two inline markers the dialect knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `**`
    Bold,
    /// `_`
    Italic,
}

impl Marker {
    /// The literal delimiter text
    pub fn delimiter(self) -> &'static str {
        match self {
            Marker::Bold => "**",
            Marker::Italic => "_",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Bold => write!(f, "bold"),
            Marker::Italic => write!(f, "italic"),
        }
    }
}

/// Errors that end a render call
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Invalid {marker} formatting on line {line}")]
    Formatting { line: usize, marker: Marker },

    #[error("Unclosed preformatted block (opened on line {line})")]
    UnterminatedBlock { line: usize },

    #[error("Unknown format '{0}'")]
    UnknownFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting_message_names_line_and_marker() {
        let err = RenderError::Formatting {
            line: 3,
            marker: Marker::Italic,
        };
        assert_eq!(err.to_string(), "Invalid italic formatting on line 3");
    }

    #[test]
    fn test_unterminated_message() {
        let err = RenderError::UnterminatedBlock { line: 1 };
        assert_eq!(
            err.to_string(),
            "Unclosed preformatted block (opened on line 1)"
        );
    }

    #[test]
    fn test_marker_delimiters() {
        assert_eq!(Marker::Bold.delimiter(), "**");
        assert_eq!(Marker::Italic.delimiter(), "_");
    }
}
