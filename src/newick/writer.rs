//! Newick string rendering of a [Tree].

use crate::model::Tree;
use crate::newick::defs::{CHILD_SEPARATOR, CLOSE_PAREN, OPEN_PAREN};

/// Returns the canonical Newick representation of a tree.
///
/// Leaves render as their name, internal nodes as their children in order,
/// comma-separated and enclosed in parentheses. No whitespace is inserted
/// and no terminating semicolon is added; an empty node renders as `()`.
///
/// # Example
/// ```
/// use newick_tree::{Tree, render};
///
/// let tree = Tree::node(vec![Tree::leaf("Tui"), Tree::node(vec![])]);
/// assert_eq!(render(&tree), "(Tui,())");
/// ```
pub fn render(tree: &Tree) -> String {
    let mut newick = String::new();
    render_into(tree, &mut newick);
    newick
}

/// Appends the Newick representation of `tree` to `newick`.
///
/// Useful for writing several trees into one buffer; see [render].
pub fn render_into(tree: &Tree, newick: &mut String) {
    // Recursive helper for building the Newick string
    fn build_newick(tree: &Tree, newick: &mut String) {
        match tree {
            Tree::Leaf { name } => newick.push_str(name),
            Tree::Node { children } => {
                newick.push(OPEN_PAREN);
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        newick.push(CHILD_SEPARATOR);
                    }
                    build_newick(child, newick);
                }
                newick.push(CLOSE_PAREN);
            }
        }
    }

    newick.reserve(newick_len(tree));
    build_newick(tree, newick);
}

/// Calculates the length in bytes of the rendered Newick string,
/// used to pre-allocate the output.
///
/// Each internal node contributes its two parens plus one comma between
/// each pair of consecutive children; each leaf contributes its label.
pub(crate) fn newick_len(tree: &Tree) -> usize {
    tree.iter()
        .map(|t| match t {
            Tree::Leaf { name } => name.len(),
            Tree::Node { children } => 2 + children.len().saturating_sub(1),
        })
        .sum()
}
