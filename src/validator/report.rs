//! Reports built on top of the structural checks: a description of a
//! literal ([describe_tree]) and remediation hints for its issues
//! ([suggest_fixes]).

use crate::literal::Literal;
use crate::model::{NodeValue, Tree};
use crate::validator::check::{build_tree, collect_issues};
use crate::validator::error::{ErrorKind, Issue, IssueCategory};
use log::debug;
use std::fmt;

// =#========================================================================#=
// DESCRIPTION
// =#========================================================================$=
/// Metrics of a well-formed tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSummary {
    /// Value of the root
    pub root: NodeValue,
    /// Number of nodes
    pub node_count: usize,
    /// Height (edges on the longest root-to-leaf path)
    pub height: usize,
    /// Number of leaves
    pub leaf_count: usize,
    /// Leaf values from left to right
    pub leaf_values: Vec<NodeValue>,
}

impl TreeSummary {
    /// Computes the summary of a typed tree.
    pub fn of(tree: &Tree) -> Self {
        TreeSummary {
            root: tree.value().clone(),
            node_count: tree.node_count(),
            height: tree.height(),
            leaf_count: tree.leaf_count(),
            leaf_values: tree.leaf_list().into_iter().cloned().collect(),
        }
    }
}

/// Result of [describe_tree].
#[derive(Debug, Clone, PartialEq)]
pub enum TreeDescription {
    /// Literal is a well-formed tree
    Valid(TreeSummary),
    /// Literal is malformed; message and kind of the first error
    Invalid {
        /// Message of the first error
        message: String,
        /// Kind of the first error
        kind: ErrorKind,
    },
}

impl TreeDescription {
    /// Returns `true` for a well-formed tree.
    pub fn is_valid(&self) -> bool {
        matches!(self, TreeDescription::Valid(_))
    }

    /// Returns the metrics if the tree is well-formed.
    pub fn summary(&self) -> Option<&TreeSummary> {
        match self {
            TreeDescription::Valid(summary) => Some(summary),
            TreeDescription::Invalid { .. } => None,
        }
    }
}

impl fmt::Display for TreeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeDescription::Valid(summary) => {
                let leaves: Vec<String> =
                    summary.leaf_values.iter().map(ToString::to_string).collect();
                writeln!(f, "Valid: true")?;
                writeln!(f, "  Root: {}", summary.root)?;
                writeln!(f, "  Nodes: {}", summary.node_count)?;
                writeln!(f, "  Height: {}", summary.height)?;
                writeln!(f, "  Leaves: {}", summary.leaf_count)?;
                write!(f, "  Leaf names: {}", leaves.join(", "))
            }
            TreeDescription::Invalid { message, kind } => {
                writeln!(f, "Valid: false")?;
                write!(f, "  {kind}: {message}")
            }
        }
    }
}

/// Validates `literal` and describes it: metrics when well-formed,
/// otherwise message and kind of the first error.
pub fn describe_tree(literal: &Literal) -> TreeDescription {
    match build_tree(literal) {
        Ok(tree) => TreeDescription::Valid(TreeSummary::of(&tree)),
        Err(err) => {
            debug!("Describing invalid tree: {err}");
            TreeDescription::Invalid {
                message: err.to_string(),
                kind: err.kind(),
            }
        }
    }
}

// =#========================================================================#=
// FIX SUGGESTIONS
// =#========================================================================€=
/// Remediation hint for one issue.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// The issue addressed
    pub issue: Issue,
    /// Human-readable hint
    pub hint: String,
}

/// Result of [suggest_fixes].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixReport {
    issues: Vec<Issue>,
    suggestions: Vec<Suggestion>,
}

impl FixReport {
    /// Returns `true` if no issue was found.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns all issues found.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Returns the hints for the issues with a known remedy, in issue order.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }
}

/// Collects all issues of `literal` and pairs each recognized one with a hint.
///
/// Hints exist for wrong container kinds, empty containers and wrong arity.
/// Issues of other categories are reported but get no suggestion.
///
/// # Example
/// ```
/// use phylotuple::literal::parse_literal;
/// use phylotuple::validator::suggest_fixes;
///
/// let report = suggest_fixes(&parse_literal("('A', 'B', 'C', 'D')").unwrap());
/// assert!(!report.is_valid());
/// assert!(report.suggestions()[0].hint.contains("(value, left_subtree, right_subtree)"));
/// ```
pub fn suggest_fixes(literal: &Literal) -> FixReport {
    let issues = collect_issues(literal);
    let suggestions: Vec<Suggestion> = issues
        .iter()
        .filter_map(|issue| {
            hint_for(issue.category()).map(|hint| Suggestion {
                issue: issue.clone(),
                hint,
            })
        })
        .collect();

    debug!(
        "Found {} issues, {} with suggestions",
        issues.len(),
        suggestions.len()
    );
    FixReport {
        issues,
        suggestions,
    }
}

fn hint_for(category: &IssueCategory) -> Option<String> {
    match category {
        IssueCategory::WrongContainer { found } => Some(format!(
            "Use a tuple instead of a {found}: (value,) for a leaf or (value, left, right) for an internal node"
        )),
        IssueCategory::EmptyContainer => {
            Some("Add at least the node value to the tuple, e.g. ('A',)".to_string())
        }
        IssueCategory::WrongArity { .. } => Some(
            "For a leaf node, use: (value,)\nFor an internal node, use: (value, left_subtree, right_subtree)"
                .to_string(),
        ),
        IssueCategory::MissingTree | IssueCategory::InvalidValue { .. } => None,
    }
}
