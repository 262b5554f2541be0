//! Character-level scanner turning Newick text into [Token]s.
//!
//! The [Tokenizer] makes a single left-to-right pass without backtracking:
//! * a maximal run of word characters (letters, digits, `_`) is a label,
//! * `(` and `)` are paren tokens,
//! * every other character (commas, whitespace, anything else) is skipped.
//!
//! Nothing is validated here; balancing parens is the parser's job.

use crate::newick::defs::{CLOSE_PAREN, OPEN_PAREN, is_separator, is_word_char};
use std::fmt;

// =#========================================================================#=
// TOKEN
// =#========================================================================$=
/// Lexical unit of a Newick string. Labels borrow from the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Maximal run of word characters
    Label(&'a str),
}

impl<'a> Token<'a> {
    /// The input text this token was scanned from.
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Label(label) => *label,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =#========================================================================#=
// TOKENIZER
// =#========================================================================$=
/// Lazy scanner over a Newick string.
///
/// Iterating yields plain [Token]s; [next_spanned](Self::next_spanned)
/// additionally reports the byte offset each token starts at.
///
/// # Example
/// ```
/// use newick_tree::parser::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::for_str("(Weka, Takahe)");
/// assert_eq!(tokenizer.next_spanned(), Some((0, Token::OpenParen)));
/// assert_eq!(tokenizer.next_spanned(), Some((1, Token::Label("Weka"))));
/// assert_eq!(tokenizer.next_spanned(), Some((7, Token::Label("Takahe"))));
/// assert_eq!(tokenizer.next_spanned(), Some((13, Token::CloseParen)));
/// assert_eq!(tokenizer.next_spanned(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    /// The text being scanned
    input: &'a str,
    /// Current byte offset into `input`, always on a char boundary
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer positioned at the start of `input`.
    pub fn for_str(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the text being scanned.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Check if all input has been consumed.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Scans the next token and returns it with its starting byte offset,
    /// or `None` once only skippable characters remain.
    pub fn next_spanned(&mut self) -> Option<(usize, Token<'a>)> {
        loop {
            let c = self.peek()?;
            let start = self.pos;
            match c {
                OPEN_PAREN => {
                    self.pos += 1;
                    return Some((start, Token::OpenParen));
                }
                CLOSE_PAREN => {
                    self.pos += 1;
                    return Some((start, Token::CloseParen));
                }
                c if is_word_char(c) => {
                    return Some((start, Token::Label(self.consume_label())));
                }
                c => self.pos += c.len_utf8(),
            }
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consumes the maximal run of word characters at the current position.
    fn consume_label(&mut self) -> &'a str {
        let start = self.pos;
        let rest = &self.input[start..];
        let len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
        self.pos += len;
        &self.input[start..self.pos]
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_spanned().map(|(_, token)| token)
    }
}

/// Finds the first character that is neither part of a label, a paren,
/// nor a separator (comma or whitespace), together with its byte offset.
///
/// The tokenizer silently drops such characters; strict parsing uses this
/// to reject them instead.
pub fn find_unexpected_char(input: &str) -> Option<(usize, char)> {
    input
        .char_indices()
        .find(|&(_, c)| !(is_word_char(c) || c == OPEN_PAREN || c == CLOSE_PAREN || is_separator(c)))
}
