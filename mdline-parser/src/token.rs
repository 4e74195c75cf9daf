//! Inline marker tokens
//!
//! Tokenization of a single line is handled entirely by logos. Marker matching is
//! non-overlapping, left to right: `***` is a bold marker followed by a lone star.
use logos::Logos;

use crate::error::Marker;

/// Tokens found inside one line of text
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[token("**")]
    BoldMarker,

    #[token("_")]
    ItalicMarker,

    // A star that is not part of a bold marker is plain text
    #[token("*")]
    Star,

    #[regex(r"[^*_]+")]
    Text,
}

impl Token {
    /// The marker this token stands for, if any
    pub fn marker(self) -> Option<Marker> {
        match self {
            Token::BoldMarker => Some(Marker::Bold),
            Token::ItalicMarker => Some(Marker::Italic),
            Token::Star | Token::Text => None,
        }
    }
}

/// Tokenize a line and collect tokens with their byte spans
pub fn tokenize_with_spans(line: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Count bold and italic markers in a line, as `(bold, italic)`
pub fn count_markers(line: &str) -> (usize, usize) {
    Token::lexer(line)
        .filter_map(|result| result.ok())
        .fold((0, 0), |(bold, italic), token| match token {
            Token::BoldMarker => (bold + 1, italic),
            Token::ItalicMarker => (bold, italic + 1),
            Token::Star | Token::Text => (bold, italic),
        })
}
