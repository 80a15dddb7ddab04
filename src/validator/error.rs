//! Error and issue types of the tree validator.
//!
//! Every problem found in a literal is an [IssueCategory] at a [TreePath].
//! Fail-fast validation reports the first one as a [ValidationError], whose
//! variant is the [ErrorKind]; issue collection reports all of them as [Issue]s.

pub use crate::model::Branch;
use std::fmt;
use thiserror::Error;

// =#========================================================================#=
// TREE PATH
// =#========================================================================$=
/// Location of a node, as the branches taken from the root.
///
/// Displays as `tree`, `tree.left`, `tree.left.right`, ...
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreePath(Vec<Branch>);

impl TreePath {
    /// Path of the root.
    pub fn root() -> Self {
        TreePath(Vec::new())
    }

    /// Returns the path of the child on the given side.
    pub fn child(&self, branch: Branch) -> Self {
        let mut branches = self.0.clone();
        branches.push(branch);
        TreePath(branches)
    }

    /// Returns the branches taken from the root.
    pub fn branches(&self) -> &[Branch] {
        &self.0
    }

    /// Returns `true` if this is the path of the root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tree")?;
        for branch in &self.0 {
            write!(f, ".{}", branch.name())?;
        }
        Ok(())
    }
}

// =#========================================================================#=
// ERROR KIND & ISSUE CATEGORY
// =#========================================================================€=
/// Kind of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Value is not the expected container (or not an admissible node value)
    Shape,
    /// Container has a disallowed number of slots
    Structure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Shape => write!(f, "ShapeError"),
            ErrorKind::Structure => write!(f, "StructureError"),
        }
    }
}

/// What is wrong with a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueCategory {
    /// Node is the none marker where a tree is required (root only)
    MissingTree,
    /// Node is not a tuple
    WrongContainer {
        /// Kind name of what was found instead
        found: &'static str,
    },
    /// Node is the empty tuple where a tree is required (root only)
    EmptyContainer,
    /// Tuple has neither 1 nor 3 slots
    WrongArity {
        /// Number of slots found
        slots: usize,
    },
    /// First slot is neither a label nor a number
    InvalidValue {
        /// Kind name of what was found instead
        found: &'static str,
    },
}

impl IssueCategory {
    /// Returns the [ErrorKind] this category is reported as.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IssueCategory::MissingTree
            | IssueCategory::WrongContainer { .. }
            | IssueCategory::InvalidValue { .. } => ErrorKind::Shape,
            IssueCategory::EmptyContainer | IssueCategory::WrongArity { .. } => {
                ErrorKind::Structure
            }
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueCategory::MissingTree => write!(f, "cannot be none"),
            IssueCategory::WrongContainer { found } => write!(f, "must be a tuple, got {found}"),
            IssueCategory::EmptyContainer => write!(f, "cannot be empty"),
            IssueCategory::WrongArity { slots } => write!(
                f,
                "must have 1 (leaf) or 3 (internal) slots, got {slots}"
            ),
            IssueCategory::InvalidValue { found } => {
                write!(f, "value must be a label or a number, got {found}")
            }
        }
    }
}

// =#========================================================================#=
// VALIDATION ERROR
// =#========================================================================$=
/// First violation found by fail-fast validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value is not the expected container or node value
    #[error("{path} {category}")]
    Shape {
        /// Location of the offending node
        path: TreePath,
        /// What is wrong with it
        category: IssueCategory,
    },
    /// Container has a disallowed number of slots
    #[error("{path} {category}")]
    Structure {
        /// Location of the offending node
        path: TreePath,
        /// What is wrong with it
        category: IssueCategory,
    },
}

impl ValidationError {
    /// Creates the error variant matching the category's [ErrorKind].
    pub fn new(path: TreePath, category: IssueCategory) -> Self {
        match category.kind() {
            ErrorKind::Shape => ValidationError::Shape { path, category },
            ErrorKind::Structure => ValidationError::Structure { path, category },
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Shape { .. } => ErrorKind::Shape,
            ValidationError::Structure { .. } => ErrorKind::Structure,
        }
    }

    /// Returns the location of the offending node.
    pub fn path(&self) -> &TreePath {
        match self {
            ValidationError::Shape { path, .. } | ValidationError::Structure { path, .. } => path,
        }
    }

    /// Returns what is wrong with the offending node.
    pub fn category(&self) -> &IssueCategory {
        match self {
            ValidationError::Shape { category, .. }
            | ValidationError::Structure { category, .. } => category,
        }
    }
}

// =#========================================================================#=
// ISSUE
// =#========================================================================$=
/// A problem reported by [collect_issues](crate::validator::collect_issues).
///
/// Displays with one `left subtree: ` / `right subtree: ` prefix per branch
/// taken from the root, e.g. `left subtree: tree cannot be empty`.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    path: TreePath,
    category: IssueCategory,
}

impl Issue {
    /// Creates an issue at the given location.
    pub fn new(path: TreePath, category: IssueCategory) -> Self {
        Issue { path, category }
    }

    /// Returns the location of the offending node.
    pub fn path(&self) -> &TreePath {
        &self.path
    }

    /// Returns what is wrong.
    pub fn category(&self) -> &IssueCategory {
        &self.category
    }

    /// Returns the kind this issue would fail validation with.
    pub fn kind(&self) -> ErrorKind {
        self.category.kind()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for branch in self.path.branches() {
            write!(f, "{} subtree: ", branch.name())?;
        }
        write!(f, "tree {}", self.category)
    }
}

impl From<ValidationError> for Issue {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Shape { path, category }
            | ValidationError::Structure { path, category } => Issue { path, category },
        }
    }
}
