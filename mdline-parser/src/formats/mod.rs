//! Built-in formats
//!
//!     - html: structured markup, see [html](html)
//!     - ansi: terminal escapes, see [ansi](ansi)
//!
//!     Both share classification; they differ in the fragments they emit, in paragraph
//!     wrapping (html only) and in how they finish the buffer.

pub mod ansi;
pub mod html;

use std::fmt;
use std::str::FromStr;

pub use ansi::AnsiFormat;
pub use html::HtmlFormat;

use crate::error::RenderError;
use crate::format::Format;

/// The closed set of built-in representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Tag-based markup (`html`)
    StructuredMarkup,
    /// ANSI escape sequences (`ansi`)
    TerminalEscape,
}

impl Representation {
    pub const ALL: [Representation; 2] = [
        Representation::StructuredMarkup,
        Representation::TerminalEscape,
    ];

    /// The registry name of this representation
    pub fn name(self) -> &'static str {
        self.format().name()
    }

    /// The built-in format implementing this representation
    pub fn format(self) -> &'static dyn Format {
        match self {
            Representation::StructuredMarkup => &HtmlFormat,
            Representation::TerminalEscape => &AnsiFormat,
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Representation {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|representation| representation.name() == s)
            .ok_or_else(|| RenderError::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Representation::StructuredMarkup.name(), "html");
        assert_eq!(Representation::TerminalEscape.name(), "ansi");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "html".parse::<Representation>(),
            Ok(Representation::StructuredMarkup)
        );
        assert_eq!(
            "ansi".parse::<Representation>(),
            Ok(Representation::TerminalEscape)
        );
        assert_eq!(
            "pdf".parse::<Representation>(),
            Err(RenderError::UnknownFormat("pdf".to_string()))
        );
    }
}
