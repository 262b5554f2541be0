//! Newick format parser and writer for tree topologies.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`tokenize`] - scans a string into [Token]s
//! * [`parse`] - parses a single string into a [Tree]
//! * [`render`] - writes a [Tree] back as a Newick string
//!
//! # Full API
//! For more control, configure a [NewickParser]:
//! * [`NewickParser::with_max_depth`] - bound the nesting depth
//! * [`NewickParser::with_strict_separators`] - reject stray characters
//!
//! # Format
//! Only the topology is considered, following the grammar:
//! * `tree ::= leaf | '(' tree (',' tree)* ')'`
//! * `leaf ::= word_char+`
//!
//! Furthermore:
//! * Word characters are Unicode letters, digits, and `_`
//! * Commas and whitespace separate elements
//! * Any other character is ignored (unless parsing strictly), so branch
//!   lengths, quotes, comments, and the terminating `;` are not supported
//! * An empty node `()` is accepted

pub(crate) mod defs;
pub mod parser;
pub mod writer;

pub use parser::NewickParser;
pub use writer::{render, render_into};

use crate::model::Tree;
use crate::parser::{MalformedTreeError, Token, Tokenizer};

// ============================================================================
// QUICK API (pub)
// ============================================================================
/// Scans a string into its [Token]s.
///
/// Never fails: characters that are neither word characters nor parens
/// are skipped, and unbalanced parens are left for the parser to detect.
///
/// # Example
/// ```
/// use newick_tree::newick::tokenize;
/// use newick_tree::parser::Token::{CloseParen, Label, OpenParen};
///
/// let tokens = tokenize("(A, (B, C))");
/// assert_eq!(
///     tokens,
///     [OpenParen, Label("A"), OpenParen, Label("B"), Label("C"), CloseParen, CloseParen]
/// );
/// ```
pub fn tokenize(newick: &str) -> Vec<Token<'_>> {
    Tokenizer::for_str(newick).collect()
}

/// Parses a single Newick string into a [Tree] using default settings.
///
/// # Arguments
/// * `newick` - The Newick format string to parse
///
/// # Returns
/// * [Tree] - Tree parsed from the string
/// * [MalformedTreeError] - If parens are unbalanced, the input holds no
///   token, or there is more than one top-level element
///
/// # Example
/// ```
/// use newick_tree::newick::parse;
///
/// let tree = parse("(Pukeko,(Weka,Takahe))")?;
/// assert_eq!(tree.num_leaves(), 3);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(newick: &str) -> Result<Tree, MalformedTreeError> {
    NewickParser::default().parse_str(newick)
}
