//! Provides the owned tree representation.
//!
//! * [Tree] - Leaf or internal node, recursively owning its children
//! * [Preorder] - Iterator over all subtrees in preorder
//! * [LeafNames] - Iterator over leaf labels from left to right

use crate::newick;
use crate::parser::MalformedTreeError;
use std::fmt;
use std::str::FromStr;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A tree topology as described by a Newick string.
///
/// Each [Node](Tree::Node) exclusively owns its children, so a tree has no
/// sharing and no cycles. Trees are built bottom-up and not mutated
/// afterwards.
///
/// # Example
/// ```
/// use newick_tree::Tree;
///
/// let tree = Tree::node(vec![
///     Tree::leaf("A"),
///     Tree::node(vec![Tree::leaf("B"), Tree::leaf("C")]),
/// ]);
/// assert_eq!(tree.num_leaves(), 3);
/// assert_eq!(tree.to_string(), "(A,(B,C))");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tree {
    /// Terminal vertex; `name` is the (non-empty) label text.
    Leaf { name: String },
    /// Internal vertex with children in left-to-right order.
    Node { children: Vec<Tree> },
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl Tree {
    /// Creates a leaf with the given label.
    pub fn leaf<S: Into<String>>(name: S) -> Self {
        Tree::Leaf { name: name.into() }
    }

    /// Creates an internal node with the given children (in order).
    pub fn node(children: Vec<Tree>) -> Self {
        Tree::Node { children }
    }

    /// Returns `true` if this is a [Leaf](Tree::Leaf).
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf { .. })
    }

    /// Returns `true` if this is an internal [Node](Tree::Node).
    pub fn is_node(&self) -> bool {
        matches!(self, Tree::Node { .. })
    }

    /// Label of a leaf, `None` for internal nodes.
    pub fn name(&self) -> Option<&str> {
        match self {
            Tree::Leaf { name } => Some(name),
            Tree::Node { .. } => None,
        }
    }

    /// Children of an internal node; a leaf has none.
    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Leaf { .. } => &[],
            Tree::Node { children } => children,
        }
    }

    /// Number of leaves in this (sub)tree.
    pub fn num_leaves(&self) -> usize {
        self.iter().filter(|t| t.is_leaf()).count()
    }

    /// Number of internal nodes in this (sub)tree, including itself.
    pub fn num_nodes(&self) -> usize {
        self.iter().filter(|t| t.is_node()).count()
    }

    /// Number of edges on the longest path from this vertex down to a
    /// vertex without children. A leaf (and an empty node) has height 0.
    pub fn height(&self) -> usize {
        let mut max_height = 0;
        let mut stack = vec![(self, 0)];
        while let Some((tree, depth)) = stack.pop() {
            max_height = max_height.max(depth);
            for child in tree.children() {
                stack.push((child, depth + 1));
            }
        }
        max_height
    }

    /// Iterates over this tree and all of its subtrees in preorder
    /// (parent before children, children left to right).
    pub fn iter(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// Iterates over the leaf labels from left to right.
    ///
    /// # Example
    /// ```
    /// use newick_tree::parse;
    ///
    /// let tree = parse("((Kea,Kaka),Kakapo)").unwrap();
    /// let names: Vec<&str> = tree.leaf_names().collect();
    /// assert_eq!(names, ["Kea", "Kaka", "Kakapo"]);
    /// ```
    pub fn leaf_names(&self) -> LeafNames<'_> {
        LeafNames { inner: self.iter() }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&newick::render(self))
    }
}

impl FromStr for Tree {
    type Err = MalformedTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        newick::parse(s)
    }
}

// Children are moved onto a worklist, so dropping a deeply nested tree
// does not recurse once per level
impl Drop for Tree {
    fn drop(&mut self) {
        let Tree::Node { children } = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut tree) = pending.pop() {
            if let Tree::Node { children } = &mut tree {
                pending.append(children);
            }
        }
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
/// Preorder iterator over all subtrees, see [Tree::iter].
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;
        // Reversed, so the leftmost child is popped next
        self.stack.extend(tree.children().iter().rev());
        Some(tree)
    }
}

/// Iterator over leaf labels, see [Tree::leaf_names].
#[derive(Debug, Clone)]
pub struct LeafNames<'a> {
    inner: Preorder<'a>,
}

impl<'a> Iterator for LeafNames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(Tree::name)
    }
}
