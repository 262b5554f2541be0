//! Data model for Newick tree topologies.
//!
//! # Tree representation
//! Trees are represented by [Tree], an owned sum type over two variants:
//! * `Leaf { name }` — a terminal vertex carrying its label
//! * `Node { children }` — an internal vertex owning its ordered children
//!
//! Child order is significant: two nodes with the same children in a
//! different order are different trees. A node without children (`()`)
//! is representable.
//!
//! # Building trees
//! Trees are typically constructed by the
//! [NewickParser](crate::newick::NewickParser), but can also be assembled
//! bottom-up with [Tree::leaf] and [Tree::node].

pub mod tree;

pub use tree::LeafNames;
pub use tree::Preorder;
pub use tree::Tree;
