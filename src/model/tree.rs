//! Provides the recursive tree representation and its algorithms.
//!
//! Core data structures for representing phylogenetic trees:
//! * [Tree] - rooted binary tree, either a leaf or an internal node with two
//!   (possibly absent) children
//! * [Branch] - side of a child slot
//! * [ParentLookup] - tagged result of a parent query
//! * [PreOrderIter] - stack based pre-order traversal
//!
//! All operations are pure: they never mutate a tree and
//! [`Tree::scale`] builds a new one.

use crate::literal::Literal;
use crate::model::value::NodeValue;
use std::fmt;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A rooted binary phylogenetic tree.
///
/// A node is either a [Leaf](Tree::Leaf) carrying only a value, or an
/// [Internal](Tree::Internal) node with a left and a right child slot. An
/// empty slot (`None`) means *absent*: there is no subtree there, which is
/// different from a present leaf.
///
/// Children are owned, so every node has at most one parent and trees are
/// acyclic by construction.
///
/// # Leaves
/// All algorithms treat a node without present children as a leaf, so an
/// `Internal` node whose slots are both absent behaves like a `Leaf`.
///
/// # Example
/// ```
/// use phylotuple::model::Tree;
///
/// // (5, (3, A, B), C)
/// let tree = Tree::internal(
///     5,
///     Tree::internal(3, Tree::leaf("A"), Tree::leaf("B")),
///     Tree::leaf("C"),
/// );
/// assert_eq!(tree.node_count(), 5);
/// assert_eq!(tree.leaf_list(), ["A", "B", "C"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    /// Node without children
    Leaf {
        /// Value of this node
        value: NodeValue,
    },
    /// Node with two child slots, each holding a subtree or absent
    Internal {
        /// Value of this node
        value: NodeValue,
        /// Left subtree, `None` if absent
        left: Option<Box<Tree>>,
        /// Right subtree, `None` if absent
        right: Option<Box<Tree>>,
    },
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl Tree {
    /// Creates a leaf.
    pub fn leaf<V: Into<NodeValue>>(value: V) -> Self {
        Tree::Leaf {
            value: value.into(),
        }
    }

    /// Creates an internal node with two present children.
    pub fn internal<V: Into<NodeValue>>(value: V, left: Tree, right: Tree) -> Self {
        Tree::with_children(value, Some(left), Some(right))
    }

    /// Creates an internal node where each child may be absent.
    ///
    /// # Arguments
    /// * `value` - Value of the new node
    /// * `left` - Left subtree or `None` if absent
    /// * `right` - Right subtree or `None` if absent
    pub fn with_children<V: Into<NodeValue>>(
        value: V,
        left: Option<Tree>,
        right: Option<Tree>,
    ) -> Self {
        Tree::Internal {
            value: value.into(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Returns the value of this node.
    pub fn value(&self) -> &NodeValue {
        match self {
            Tree::Leaf { value } | Tree::Internal { value, .. } => value,
        }
    }

    /// Returns the left subtree, or `None` if absent or this is a leaf.
    pub fn left(&self) -> Option<&Tree> {
        match self {
            Tree::Leaf { .. } => None,
            Tree::Internal { left, .. } => left.as_deref(),
        }
    }

    /// Returns the right subtree, or `None` if absent or this is a leaf.
    pub fn right(&self) -> Option<&Tree> {
        match self {
            Tree::Leaf { .. } => None,
            Tree::Internal { right, .. } => right.as_deref(),
        }
    }

    /// Returns the subtree on the given side, or `None` if absent or this is a leaf.
    pub fn child(&self, branch: Branch) -> Option<&Tree> {
        match branch {
            Branch::Left => self.left(),
            Branch::Right => self.right(),
        }
    }

    /// Returns both child slots as `(left, right)`.
    pub fn children(&self) -> (Option<&Tree>, Option<&Tree>) {
        (self.left(), self.right())
    }

    /// Returns `true` if this node has no present child.
    pub fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }

    /// Returns `true` if this node has at least one present child.
    pub fn is_internal(&self) -> bool {
        !self.is_leaf()
    }

    /// Present children, left before right.
    fn present_children(&self) -> impl Iterator<Item = &Tree> {
        self.left().into_iter().chain(self.right())
    }
}

// ============================================================================
// Metrics (pub)
// ============================================================================
impl Tree {
    /// Returns the number of nodes in this tree; absent slots are not counted.
    #[doc(alias = "nodeCount")]
    pub fn node_count(&self) -> usize {
        1 + self.present_children().map(Tree::node_count).sum::<usize>()
    }

    /// Returns the number of edges on the longest path from this node down
    /// to a leaf; 0 for a leaf.
    ///
    /// Absent children do not contribute, so a node with a single present
    /// child is one higher than that child.
    pub fn height(&self) -> usize {
        self.present_children()
            .map(Tree::height)
            .max()
            .map_or(0, |height| height + 1)
    }

    /// Returns the number of leaves in this tree.
    #[doc(alias = "leafCount")]
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.present_children().map(Tree::leaf_count).sum()
        }
    }

    /// Returns the number of nodes with at least one present child.
    pub fn internal_count(&self) -> usize {
        if self.is_leaf() {
            0
        } else {
            1 + self
                .present_children()
                .map(Tree::internal_count)
                .sum::<usize>()
        }
    }
}

// ============================================================================
// Listing and search (pub)
// ============================================================================
impl Tree {
    /// Returns the leaf values from left to right.
    #[doc(alias = "leafList")]
    pub fn leaf_list(&self) -> Vec<&NodeValue> {
        self.leaves().map(Tree::value).collect()
    }

    /// Returns the values of all nodes in pre-order
    /// (node, then its full left subtree, then its full right subtree).
    #[doc(alias = "nodeList")]
    pub fn node_list(&self) -> Vec<&NodeValue> {
        self.pre_order_iter().map(Tree::value).collect()
    }

    /// Returns `true` if some node of this tree carries a value equal to `target`.
    #[doc(alias = "find")]
    pub fn contains(&self, target: &NodeValue) -> bool {
        self.pre_order_iter().any(|node| node.value() == target)
    }

    /// Returns the subtree rooted at the first node (in pre-order) whose
    /// value equals `target`, or `None` if there is no such node.
    pub fn subtree(&self, target: &NodeValue) -> Option<&Tree> {
        self.pre_order_iter().find(|node| node.value() == target)
    }

    /// Returns the values of all descendants of the node found by
    /// [`Tree::subtree`], in pre-order and without that node itself.
    ///
    /// Empty if `target` is not in the tree or is a leaf.
    #[doc(alias = "descendantNodes")]
    pub fn descendant_nodes(&self, target: &NodeValue) -> Vec<&NodeValue> {
        self.subtree(target)
            .map(|subtree| subtree.node_list().into_iter().skip(1).collect())
            .unwrap_or_default()
    }

    /// Looks up the parent of the first node (in pre-order) whose value
    /// equals `target`.
    ///
    /// # Returns
    /// * [ParentLookup::Root] if `target` is the value of this (root) node
    /// * [ParentLookup::Found] with the parent's value
    /// * [ParentLookup::NotFound] if no node carries `target`
    ///
    /// # Example
    /// ```
    /// use phylotuple::model::{NodeValue, ParentLookup, Tree};
    ///
    /// let tree = Tree::internal("root", Tree::leaf("A"), Tree::leaf("B"));
    /// assert_eq!(tree.parent(&"B".into()), ParentLookup::Found(&NodeValue::label("root")));
    /// assert_eq!(tree.parent(&"root".into()), ParentLookup::Root);
    /// assert_eq!(tree.parent(&"Z".into()).value(), None);
    /// ```
    pub fn parent(&self, target: &NodeValue) -> ParentLookup<'_> {
        if self.value() == target {
            return ParentLookup::Root;
        }

        match self.parent_value_of(target) {
            Some(parent) => ParentLookup::Found(parent),
            None => ParentLookup::NotFound,
        }
    }

    /// Value of the node having the first pre-order match of `target` as child.
    fn parent_value_of(&self, target: &NodeValue) -> Option<&NodeValue> {
        for child in self.present_children() {
            if child.value() == target {
                return Some(self.value());
            }
            if let Some(parent) = child.parent_value_of(target) {
                return Some(parent);
            }
        }

        None
    }
}

// ============================================================================
// Transformation (pub)
// ============================================================================
impl Tree {
    /// Returns a new tree of identical shape in which every numeric value is
    /// multiplied by `factor`; labels are copied unchanged.
    pub fn scale(&self, factor: f64) -> Tree {
        fn scale_slot(slot: &Option<Box<Tree>>, factor: f64) -> Option<Box<Tree>> {
            slot.as_ref().map(|subtree| Box::new(subtree.scale(factor)))
        }

        match self {
            Tree::Leaf { value } => Tree::Leaf {
                value: value.scaled(factor),
            },
            Tree::Internal { value, left, right } => Tree::Internal {
                value: value.scaled(factor),
                left: scale_slot(left, factor),
                right: scale_slot(right, factor),
            },
        }
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
impl Tree {
    /// Returns an indented text rendering of the tree, one node per line.
    ///
    /// # Example Output
    /// ```text
    /// 5
    /// ├─ 3
    /// │  ├─ A
    /// │  └─ B
    /// └─ C
    /// ```
    pub fn outline(&self) -> String {
        let mut out = format!("{}\n", self.value());
        self.write_outline_children(&mut out, "");
        out
    }

    /// Prints [`Tree::outline`] to the console, preceded by a size summary.
    pub fn print_tree(&self) {
        println!(
            "Tree with {} leaves ({} nodes total):",
            self.leaf_count(),
            self.node_count()
        );
        print!("{}", self.outline());
    }

    /// Helper function to recursively write child slots of a node.
    fn write_outline_children(&self, out: &mut String, prefix: &str) {
        let Tree::Internal { left, right, .. } = self else {
            return;
        };

        for (slot, is_last) in [(left, false), (right, true)] {
            let connector = if is_last { "└─ " } else { "├─ " };
            match slot {
                Some(child) => {
                    out.push_str(&format!("{prefix}{connector}{}\n", child.value()));
                    let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
                    child.write_outline_children(out, &child_prefix);
                }
                None => out.push_str(&format!("{prefix}{connector}(absent)\n")),
            }
        }
    }
}

/// Writes the tree in tuple literal notation, e.g. `(5, ('A', (), ()), ('B', (), ()))`.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Literal::from(self))
    }
}

// =$========================================================================$=
// BRANCH
// =$========================================================================$=
/// Side of a child slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Left child slot
    Left,
    /// Right child slot
    Right,
}

impl Branch {
    /// Returns `"left"` or `"right"`.
    pub fn name(&self) -> &'static str {
        match self {
            Branch::Left => "left",
            Branch::Right => "right",
        }
    }
}

// =$========================================================================$=
// PARENT LOOKUP
// =$========================================================================$=
/// Result of [`Tree::parent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParentLookup<'a> {
    /// The queried value is the root, which has no parent
    Root,
    /// The queried value does not occur in the tree
    NotFound,
    /// Value of the parent node
    Found(&'a NodeValue),
}

impl<'a> ParentLookup<'a> {
    /// Returns the parent value, or `None` for both [ParentLookup::Root]
    /// and [ParentLookup::NotFound].
    pub fn value(&self) -> Option<&'a NodeValue> {
        match self {
            ParentLookup::Found(value) => Some(value),
            ParentLookup::Root | ParentLookup::NotFound => None,
        }
    }

    /// Returns `true` if a parent was found.
    pub fn is_found(&self) -> bool {
        matches!(self, ParentLookup::Found(_))
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl Tree {
    /// Returns an iterator over the nodes in pre-order (parents before
    /// children, left subtree before right subtree).
    ///
    /// # Example
    /// ```
    /// use phylotuple::model::Tree;
    ///
    /// let tree = Tree::internal("R", Tree::leaf("A"), Tree::leaf("B"));
    /// let values: Vec<String> = tree.pre_order_iter().map(|n| n.value().to_string()).collect();
    /// assert_eq!(values, ["R", "A", "B"]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter { stack: vec![self] }
    }

    /// Returns an iterator over the leaves from left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &Tree> {
        self.pre_order_iter().filter(|node| node.is_leaf())
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// Uses an explicit stack instead of recursion.
#[derive(Debug)]
pub struct PreOrderIter<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Push children onto stack (right first, so left is processed first)
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }

        Some(node)
    }
}
