//! Logos-based lexer for release filenames.
//!
//! This module provides tokenization using the [logos](https://docs.rs/logos) crate,
//! which generates a fast lexer from regex patterns at compile time. On top of the
//! raw tokens, [`TokenStream`] drops delimiters and records which bracket group
//! (if any) each remaining token sits in.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// Byte span in the input string.
///
/// Represents a range of bytes in the original input, used for tracking
/// token positions and extracting substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if this span fully contains another.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Find the contents of all bracket groups in the input.
///
/// Returns the span inside each `[...]` or `(...)` pair, in the order the
/// closing bracket appears. Unbalanced or mismatched brackets are ignored.
pub fn find_bracket_groups(input: &str) -> Vec<Span> {
    let mut groups = Vec::new();
    let mut stack: Vec<(usize, char)> = Vec::new();

    for (i, ch) in input.char_indices() {
        match ch {
            '[' | '(' => {
                stack.push((i, ch));
            }
            ']' => {
                if let Some((start, '[')) = stack.pop() {
                    groups.push(Span::new(start + 1, i));
                }
            }
            ')' => {
                if let Some((start, '(')) = stack.pop() {
                    groups.push(Span::new(start + 1, i));
                }
            }
            _ => {}
        }
    }

    groups
}

/// A lexer that tokenizes release filenames using Logos.
pub struct Lexer<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given input.
    ///
    /// Tokenizes the entire input string immediately using Logos.
    pub fn new(input: &'src str) -> Self {
        let tokens: Vec<_> = Token::lexer(input)
            .spanned()
            .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
            .collect();
        Self { tokens }
    }

    /// Get all tokens with their spans.
    pub fn tokens(&self) -> &[(Token<'src>, Range<usize>)] {
        &self.tokens
    }
}

/// A content token: anything that is not a delimiter or bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'input> {
    /// The classified token.
    pub token: Token<'input>,
    /// The text of this token (borrowed from input).
    pub text: &'input str,
    /// Byte span in the original input.
    pub span: Span,
    /// Index of the innermost bracket group containing this token.
    pub group: Option<usize>,
    /// Whether a hyphen immediately precedes this token.
    pub after_hyphen: bool,
}

impl<'input> Lexeme<'input> {
    /// Returns true if this is a generic word rather than recognized metadata.
    pub fn is_word(&self) -> bool {
        matches!(self.token, Token::Word(_))
    }

    /// Whether this token is inside brackets.
    pub fn in_brackets(&self) -> bool {
        self.group.is_some()
    }
}

/// The content tokens of an input, in order, with bracket grouping resolved.
#[derive(Debug, Clone)]
pub struct TokenStream<'input> {
    lexemes: Vec<Lexeme<'input>>,
}

impl<'input> TokenStream<'input> {
    /// Tokenize an input string.
    pub fn new(input: &'input str) -> Self {
        let bracket_groups = find_bracket_groups(input);
        let lexer = Lexer::new(input);

        let mut lexemes = Vec::new();
        let mut after_hyphen = false;

        for (token, span) in lexer.tokens() {
            if token.is_delimiter() || token.is_bracket() {
                after_hyphen = *token == Token::Hyphen;
                continue;
            }

            let span = Span::from(span.clone());
            // Groups are pushed in closing order, so the innermost enclosing
            // group is the one with the greatest start offset.
            let group = bracket_groups
                .iter()
                .enumerate()
                .filter(|(_, inner)| inner.contains(&span))
                .max_by_key(|(_, inner)| inner.start)
                .map(|(idx, _)| idx);

            lexemes.push(Lexeme {
                token: *token,
                text: &input[span.start..span.end],
                span,
                group,
                after_hyphen,
            });
            after_hyphen = false;
        }

        Self { lexemes }
    }

    /// Get all content tokens.
    pub fn lexemes(&self) -> &[Lexeme<'input>] {
        &self.lexemes
    }

    /// Number of content tokens.
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    /// Whether the input produced no content tokens.
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }
}
