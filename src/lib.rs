//! Newick-tree is a small library to parse the topology of trees from
//! Newick strings and to write them back.
//!
//! Core functionality provided:
//! - Tokenizer: Scan a Newick string into parens and labels.
//! - Parser: Build a [Tree] from the tokens with an explicit stack,
//!   so parsing (and dropping) deeply nested input does not exhaust the
//!   call stack. Rendering and the derived comparisons still recurse.
//! - Renderer: Write a [Tree] as canonical Newick string.
//! - Configurability via [NewickParser](crate::newick::NewickParser):
//!   - Maximum nesting depth
//!   - Strict mode rejecting characters other than labels, parens,
//!     commas, and whitespace
//!
//! Limitations:
//! - Only topology and leaf labels (word characters) are considered
//! - No branch lengths, annotations, quoted labels, or comments
//!
//! # Usage patterns
//! 1. The functions [tokenize], [parse], and [render] use default settings.
//! 2. Configure a [NewickParser](crate::newick::NewickParser) for more control.
//!
//! ## Example
//! ```
//! use newick_tree::{Tree, parse, render};
//!
//! let tree = parse("(A, (B, C))").unwrap();
//! assert_eq!(
//!     tree,
//!     Tree::node(vec![
//!         Tree::leaf("A"),
//!         Tree::node(vec![Tree::leaf("B"), Tree::leaf("C")]),
//!     ])
//! );
//! assert_eq!(render(&tree), "(A,(B,C))");
//! ```

pub mod model;
pub mod newick;
pub mod parser;

pub use crate::model::Tree;
pub use crate::newick::NewickParser;
pub use crate::parser::{MalformedTreeError, MalformedTreeErrorType, Token};

// ============================================================================
// Quick API
// ============================================================================
/// Scans a Newick string into its tokens.
///
/// See [`newick::tokenize`] for full documentation.
pub fn tokenize(newick: &str) -> Vec<Token<'_>> {
    newick::tokenize(newick)
}

/// Parses a Newick string using default settings, returning a [Tree].
///
/// See [`newick::parse`] for full documentation.
pub fn parse(newick: &str) -> Result<Tree, MalformedTreeError> {
    newick::parse(newick)
}

/// Renders a [Tree] as Newick string.
///
/// See [`newick::render`] for full documentation.
pub fn render(tree: &Tree) -> String {
    newick::render(tree)
}
