//! Structural checks of tree literals.
//!
//! A literal is a well-formed tree if it is a tuple of
//! * 1 slot: `(value,)`, a leaf, or
//! * 3 slots: `(value, left, right)`, where each child slot is absent
//!   (`None` or `()`) or itself a well-formed tree,
//!
//! and every value is a label or a number. The check looks at arity and
//! container kind only; cycles cannot occur in owned literals.

use crate::literal::Literal;
use crate::model::Tree;
use crate::validator::error::{Branch, Issue, IssueCategory, TreePath, ValidationError};
use log::{debug, trace};

/// Validates `literal` and converts it into a typed [Tree].
///
/// A 3-slot tuple whose child slots are both absent becomes a [Tree::Leaf].
///
/// # Errors
/// The first violation found, in pre-order; nothing after it is checked.
///
/// # Example
/// ```
/// use phylotuple::literal::parse_literal;
/// use phylotuple::validator::build_tree;
///
/// let literal = parse_literal("(5, ('A',), ('B', (), ()))").unwrap();
/// let tree = build_tree(&literal).unwrap();
/// assert_eq!(tree.leaf_count(), 2);
/// ```
pub fn build_tree(literal: &Literal) -> Result<Tree, ValidationError> {
    let tree = build_node(literal, &TreePath::root())?;
    debug!("Validated tree with {} nodes", tree.node_count());
    Ok(tree)
}

/// Checks that `literal` is a well-formed tree, stopping at the first violation.
///
/// # Errors
/// * [ValidationError::Shape] if a node is not a tuple (or its value is
///   neither label nor number)
/// * [ValidationError::Structure] if a tuple has neither 1 nor 3 slots
pub fn validate_tree(literal: &Literal) -> Result<(), ValidationError> {
    build_tree(literal).map(|_| ())
}

/// Returns whether `literal` is a well-formed tree; never fails.
pub fn is_valid_tree(literal: &Literal) -> bool {
    validate_tree(literal).is_ok()
}

/// Checks the whole literal and returns every issue found, each tagged with
/// its location; empty if the literal is a well-formed tree.
///
/// Unlike [validate_tree] this does not stop at the first problem: issues in
/// unrelated branches are all reported. Below a node that is not a tuple of
/// admissible arity nothing is checked further.
pub fn collect_issues(literal: &Literal) -> Vec<Issue> {
    let mut issues = Vec::new();
    collect_node(literal, &TreePath::root(), &mut issues);
    trace!("Collected {} issues", issues.len());
    issues
}

impl TryFrom<&Literal> for Tree {
    type Error = ValidationError;

    fn try_from(literal: &Literal) -> Result<Self, Self::Error> {
        build_tree(literal)
    }
}

// ============================================================================
// Helpers (private)
// ============================================================================
/// Returns the slots of a node, or what is wrong with its container.
fn node_slots(literal: &Literal) -> Result<&[Literal], IssueCategory> {
    match literal {
        Literal::None => Err(IssueCategory::MissingTree),
        Literal::Tuple(items) if items.is_empty() => Err(IssueCategory::EmptyContainer),
        Literal::Tuple(items) if items.len() == 1 || items.len() == 3 => Ok(items.as_slice()),
        Literal::Tuple(items) => Err(IssueCategory::WrongArity { slots: items.len() }),
        other => Err(IssueCategory::WrongContainer {
            found: other.kind_name(),
        }),
    }
}

fn invalid_value(value: &Literal) -> IssueCategory {
    IssueCategory::InvalidValue {
        found: value.kind_name(),
    }
}

/// Child slots of a 3-slot node with their sides.
fn child_slots(slots: &[Literal]) -> [(&Literal, Branch); 2] {
    [(&slots[1], Branch::Left), (&slots[2], Branch::Right)]
}

fn build_node(literal: &Literal, path: &TreePath) -> Result<Tree, ValidationError> {
    let slots = node_slots(literal)
        .map_err(|category| ValidationError::new(path.clone(), category))?;
    let value = slots[0]
        .as_node_value()
        .ok_or_else(|| ValidationError::new(path.clone(), invalid_value(&slots[0])))?;

    if slots.len() == 1 {
        return Ok(Tree::Leaf { value });
    }

    let [(left, left_branch), (right, right_branch)] = child_slots(slots);
    let left = build_slot(left, &path.child(left_branch))?;
    let right = build_slot(right, &path.child(right_branch))?;

    Ok(match (left, right) {
        (None, None) => Tree::Leaf { value },
        (left, right) => Tree::with_children(value, left, right),
    })
}

fn build_slot(slot: &Literal, path: &TreePath) -> Result<Option<Tree>, ValidationError> {
    if slot.is_absent_marker() {
        Ok(None)
    } else {
        build_node(slot, path).map(Some)
    }
}

fn collect_node(literal: &Literal, path: &TreePath, issues: &mut Vec<Issue>) {
    let slots = match node_slots(literal) {
        Ok(slots) => slots,
        Err(category) => {
            issues.push(Issue::new(path.clone(), category));
            return;
        }
    };

    if slots[0].as_node_value().is_none() {
        issues.push(Issue::new(path.clone(), invalid_value(&slots[0])));
    }

    if slots.len() == 3 {
        for (slot, branch) in child_slots(slots) {
            if !slot.is_absent_marker() {
                collect_node(slot, &path.child(branch), issues);
            }
        }
    }
}
