//! Error types for the Newick parser.
//!
//! This module provides [MalformedTreeError] and [MalformedTreeErrorType]
//! for representing and reporting structural problems found while parsing
//! a Newick string. Tokenizing and rendering never fail.

use std::error::Error;
use std::fmt;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 30;

// =#========================================================================#=
// MALFORMED TREE ERROR TYPE
// =#========================================================================€=
/// Structural violations that can occur during Newick parsing.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum MalformedTreeErrorType {
    /// A `)` without a corresponding `(`
    UnmatchedCloseParen,
    /// No token at all, so there is no tree
    EmptyInput,
    /// An unclosed `(`, or more than one top-level element
    UnbalancedOrMultipleRoots,
    /// Nesting deeper than the configured maximum depth
    DepthLimitExceeded(usize),
    /// Character outside of labels, parens, and separators (strict mode only)
    UnexpectedCharacter(char),
}

// =#========================================================================#=
// MALFORMED TREE ERROR
// =#========================================================================$=
/// Parsing error with contextual information (position and following text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedTreeError {
    kind: MalformedTreeErrorType,
    position: usize,
    context: String,
}

impl MalformedTreeError {
    /// Create a MalformedTreeError from an error type and the input text,
    /// with `position` being the byte offset the error refers to.
    pub fn from_input(kind: MalformedTreeErrorType, input: &str, position: usize) -> Self {
        Self {
            kind,
            position,
            context: context_at(input, position, DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnmatchedCloseParen
    pub fn unmatched_close_paren(input: &str, position: usize) -> Self {
        Self::from_input(MalformedTreeErrorType::UnmatchedCloseParen, input, position)
    }

    /// Convenience constructor for EmptyInput
    pub fn empty_input(input: &str) -> Self {
        Self::from_input(MalformedTreeErrorType::EmptyInput, input, 0)
    }

    /// Convenience constructor for UnbalancedOrMultipleRoots
    pub fn unbalanced_or_multiple_roots(input: &str, position: usize) -> Self {
        Self::from_input(MalformedTreeErrorType::UnbalancedOrMultipleRoots, input, position)
    }

    /// Convenience constructor for DepthLimitExceeded
    pub fn depth_limit_exceeded(input: &str, position: usize, limit: usize) -> Self {
        Self::from_input(MalformedTreeErrorType::DepthLimitExceeded(limit), input, position)
    }

    /// Convenience constructor for UnexpectedCharacter
    pub fn unexpected_character(input: &str, position: usize, c: char) -> Self {
        Self::from_input(MalformedTreeErrorType::UnexpectedCharacter(c), input, position)
    }

    /// Get the error kind
    pub fn kind(&self) -> &MalformedTreeErrorType {
        &self.kind
    }

    /// Get the byte offset where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the input text following the error position (possibly empty)
    pub fn context(&self) -> &str {
        &self.context
    }
}

/// Up to `k` characters of `input` starting at byte offset `position`.
fn context_at(input: &str, position: usize, k: usize) -> String {
    input
        .get(position..)
        .map(|rest| rest.chars().take(k).collect())
        .unwrap_or_default()
}

impl fmt::Display for MalformedTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Main error message
        match &self.kind {
            MalformedTreeErrorType::UnmatchedCloseParen => write!(f, "Malformed tree: unmatched close paren")?,
            MalformedTreeErrorType::EmptyInput => write!(f, "Malformed tree: empty input")?,
            MalformedTreeErrorType::UnbalancedOrMultipleRoots => write!(f, "Malformed tree: unbalanced or multiple roots")?,
            MalformedTreeErrorType::DepthLimitExceeded(limit) => write!(f, "Malformed tree: nesting exceeds maximum depth of {limit}")?,
            MalformedTreeErrorType::UnexpectedCharacter(c) => write!(f, "Malformed tree: unexpected character {c:?}")?,
        }

        // Additional position information
        write!(f, " at position {}", self.position)?;

        // Additional context if available
        if !self.context.is_empty() {
            write!(f, "\n  Context (next {} chars): {}", self.context.chars().count(), self.context)?;
        }

        Ok(())
    }
}

impl Error for MalformedTreeError {}
