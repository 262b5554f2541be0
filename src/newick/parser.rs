//! Stack machine turning Newick tokens into a [Tree].
//!
//! This module provides the [NewickParser] struct. It consumes the token
//! stream of a [Tokenizer] in a single loop without recursion, keeping
//! unfinished nodes on an explicit stack.

use crate::model::Tree;
use crate::parser::parsing_error::MalformedTreeError;
use crate::parser::tokenizer::{Token, Tokenizer, find_unexpected_char};
use tracing::{debug, trace};

// =#========================================================================#=
// NEWICK PARSER
// =#========================================================================$=
/// Parser (configuration) for Newick tree topologies.
///
/// # Construction
/// * [`new()`](Self::new) / [`default()`](Self::default) — lenient parser
///   without depth limit, as used by [`parse`](crate::parse)
///
/// # Configuration
/// * [`with_max_depth(max_depth)`](Self::with_max_depth)
///     - Rejects input whose parens nest deeper than `max_depth`.
/// * [`with_strict_separators()`](Self::with_strict_separators)
///     - Rejects characters other than labels, parens, commas, and
///       whitespace instead of silently skipping them.
///
/// # Parsing
/// * [`parse_str`](Self::parse_str) — Parse a single tree
///
/// # Example
/// ```
/// use newick_tree::newick::NewickParser;
/// use newick_tree::parser::MalformedTreeErrorType;
///
/// let parser = NewickParser::new().with_max_depth(2);
/// assert!(parser.parse_str("(Moa,(Kiwi,Emu))").is_ok());
///
/// let err = parser.parse_str("(Moa,(Kiwi,(Emu,Rhea)))").unwrap_err();
/// assert_eq!(err.kind(), &MalformedTreeErrorType::DepthLimitExceeded(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewickParser {
    max_depth: Option<usize>,
    strict_separators: bool,
}

/// Entry on the parse stack: an open paren still waiting for its `)`,
/// or a finished subtree. Both remember the byte offset they start at.
#[derive(Debug)]
enum StackEntry {
    Open { position: usize },
    Tree { tree: Tree, position: usize },
}

impl StackEntry {
    fn position(&self) -> usize {
        match self {
            StackEntry::Open { position } | StackEntry::Tree { position, .. } => *position,
        }
    }
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl NewickParser {
    /// Creates a lenient parser without depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of simultaneously open parens.
    ///
    /// A bare leaf has depth 0, `(A,B)` has depth 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Configures the parser to reject characters that are neither part of
    /// a label, a paren, a comma, nor whitespace.
    pub fn with_strict_separators(mut self) -> Self {
        self.strict_separators = true;
        self
    }

    /// Configured maximum depth, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Whether unexpected characters are rejected.
    pub fn is_strict(&self) -> bool {
        self.strict_separators
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl NewickParser {
    /// Parses a single Newick string into a [Tree].
    ///
    /// # Arguments
    /// * `newick` - The Newick text, e.g. `(A,(B,C))`
    ///
    /// # Returns
    /// * `Ok(Tree)` - Tree mirroring the nesting and child order of `newick`
    /// * `Err(MalformedTreeError)` - If a `)` has no matching `(`, there is no
    ///   token at all, a `(` stays unclosed, or there is more than one
    ///   top-level element (plus the configured depth and character checks)
    pub fn parse_str(&self, newick: &str) -> Result<Tree, MalformedTreeError> {
        if self.strict_separators {
            if let Some((position, c)) = find_unexpected_char(newick) {
                return Err(reject(MalformedTreeError::unexpected_character(newick, position, c)));
            }
        }

        let mut tokenizer = Tokenizer::for_str(newick);
        let mut stack: Vec<StackEntry> = Vec::new();
        let mut depth: usize = 0;
        let mut num_tokens: usize = 0;

        while let Some((position, token)) = tokenizer.next_spanned() {
            num_tokens += 1;
            match token {
                Token::OpenParen => {
                    depth += 1;
                    if let Some(limit) = self.max_depth {
                        if depth > limit {
                            return Err(reject(MalformedTreeError::depth_limit_exceeded(
                                newick, position, limit,
                            )));
                        }
                    }
                    stack.push(StackEntry::Open { position });
                }
                Token::CloseParen => {
                    let Some((start, node)) = close_node(&mut stack) else {
                        return Err(reject(MalformedTreeError::unmatched_close_paren(newick, position)));
                    };
                    depth -= 1;
                    stack.push(StackEntry::Tree { tree: node, position: start });
                }
                Token::Label(name) => {
                    stack.push(StackEntry::Tree { tree: Tree::leaf(name), position });
                }
            }
        }

        match stack.pop() {
            None => Err(reject(MalformedTreeError::empty_input(newick))),
            Some(StackEntry::Tree { tree, .. }) if stack.is_empty() => {
                trace!(num_tokens, "parsed Newick tree");
                Ok(tree)
            }
            Some(last) => {
                stack.push(last);
                let position = unbalanced_position(&stack);
                Err(reject(MalformedTreeError::unbalanced_or_multiple_roots(newick, position)))
            }
        }
    }
}

// ============================================================================
// Stack handling
// ============================================================================
/// Pops finished subtrees up to and including the innermost open paren and
/// returns the node they form, with the position of that paren.
///
/// Returns `None` if the stack runs empty without an open paren, in which
/// case all entries have been popped.
fn close_node(stack: &mut Vec<StackEntry>) -> Option<(usize, Tree)> {
    let mut children = Vec::new();
    loop {
        match stack.pop()? {
            StackEntry::Open { position } => {
                // Popped right to left
                children.reverse();
                return Some((position, Tree::node(children)));
            }
            StackEntry::Tree { tree, .. } => children.push(tree),
        }
    }
}

/// Position blamed for a final stack that is not a single tree:
/// the innermost unclosed `(` if any, otherwise the second top-level element.
fn unbalanced_position(stack: &[StackEntry]) -> usize {
    stack
        .iter()
        .rev()
        .find(|entry| matches!(entry, StackEntry::Open { .. }))
        .or_else(|| stack.get(1))
        .map(StackEntry::position)
        .unwrap_or_default()
}

fn reject(err: MalformedTreeError) -> MalformedTreeError {
    debug!(kind = ?err.kind(), position = err.position(), "rejected malformed Newick input");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_node_keeps_child_order() {
        let mut stack = vec![
            StackEntry::Tree { tree: Tree::leaf("Outer"), position: 0 },
            StackEntry::Open { position: 6 },
            StackEntry::Tree { tree: Tree::leaf("A"), position: 7 },
            StackEntry::Tree { tree: Tree::leaf("B"), position: 9 },
        ];
        let (position, node) = close_node(&mut stack).unwrap();
        assert_eq!(position, 6);
        assert_eq!(node, Tree::node(vec![Tree::leaf("A"), Tree::leaf("B")]));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_close_node_without_open_paren_drains_stack() {
        let mut stack = vec![StackEntry::Tree { tree: Tree::leaf("A"), position: 0 }];
        assert!(close_node(&mut stack).is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_unbalanced_position_prefers_innermost_open_paren() {
        let stack = vec![
            StackEntry::Open { position: 0 },
            StackEntry::Tree { tree: Tree::leaf("A"), position: 1 },
            StackEntry::Open { position: 3 },
            StackEntry::Tree { tree: Tree::leaf("B"), position: 4 },
        ];
        assert_eq!(unbalanced_position(&stack), 3);

        let stack = vec![
            StackEntry::Tree { tree: Tree::leaf("A"), position: 0 },
            StackEntry::Tree { tree: Tree::leaf("B"), position: 2 },
        ];
        assert_eq!(unbalanced_position(&stack), 2);
    }
}
