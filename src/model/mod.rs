//! Data model for binary phylogenetic trees.
//!
//! # Tree representation
//! Trees are represented by the recursive [Tree] enum. A node is either a
//! `Leaf` or an `Internal` node whose two child slots each hold a boxed
//! subtree or are absent (`None`). Every node carries a [NodeValue]: a taxon
//! label or a number such as a distance or height.
//!
//! | Operation | Method |
//! |-----------|--------|
//! | node count | [`Tree::node_count`] |
//! | height | [`Tree::height`] |
//! | leaf count | [`Tree::leaf_count`] |
//! | leaf / node listing | [`Tree::leaf_list`], [`Tree::node_list`] |
//! | search | [`Tree::contains`], [`Tree::subtree`] |
//! | ancestry | [`Tree::descendant_nodes`], [`Tree::parent`] |
//! | transformation | [`Tree::scale`] |
//!
//! # Building trees
//! Build trees with [`Tree::leaf`], [`Tree::internal`] and
//! [`Tree::with_children`], or read them from tuple notation with
//! [`crate::parse_tree_str`], which validates the untyped literal first.

pub mod tree;
pub mod value;

pub use tree::Branch;
pub use tree::ParentLookup;
pub use tree::PreOrderIter;
pub use tree::Tree;
pub use value::NodeValue;
