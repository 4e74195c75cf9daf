//! Source document split into lines
//!
//!     Lines are split on `\n` only. A trailing line feed therefore yields a final empty
//!     line, and the empty source is a single empty line. Carriage returns stay in the line
//!     text; trimming takes care of them where classification needs it.
//!
//!     Trimming also drops U+FEFF, so a byte-order mark in front of the first line does not
//!     hide its markers.

/// Trim whitespace and byte-order marks from both ends of a line
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// An immutable, ordered sequence of lines borrowed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    pub fn parse(source: &'a str) -> Self {
        Self {
            lines: source.split('\n').collect(),
        }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// The raw line at `index`; out of range reads as an empty line.
    pub fn line(&self, index: usize) -> &'a str {
        self.lines.get(index).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false once parsed: even the empty source is one line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.lines.len()
    }

    /// Whether the line at `index` is empty after trimming. Out of range counts as not blank.
    pub fn is_blank(&self, index: usize) -> bool {
        self.lines
            .get(index)
            .is_some_and(|line| trim_line(line).is_empty())
    }

    /// No paragraph neighbour on either side: the line is first or follows a blank, and is
    /// last or precedes a blank.
    pub fn stands_alone(&self, index: usize) -> bool {
        let after_break = index == 0 || self.is_blank(index - 1);
        let before_break = self.is_last(index) || self.is_blank(index + 1);
        after_break && before_break
    }
}
