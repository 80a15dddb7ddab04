//! Structural validation of tree literals.
//!
//! The validator decides whether an untyped [Literal](crate::literal::Literal)
//! is a well-formed tree. It is stricter than the algorithms in
//! [crate::model], which only ever see typed trees.
//!
//! | Function | Behaviour |
//! |----------|-----------|
//! | [validate_tree] | fail fast, first [ValidationError] |
//! | [build_tree] | fail fast, typed [Tree](crate::model::Tree) on success |
//! | [is_valid_tree] | boolean, never fails |
//! | [collect_issues] | every [Issue], path-tagged |
//! | [describe_tree] | [TreeDescription] with metrics or first error |
//! | [suggest_fixes] | [FixReport] with hints for known issue categories |
//!
//! Errors come in two kinds ([ErrorKind]): *shape* errors for values that are
//! not the expected container (or not a label/number where a node value is
//! required) and *structure* errors for tuples with a disallowed slot count.

pub mod check;
pub mod error;
pub mod report;

pub use check::{build_tree, collect_issues, is_valid_tree, validate_tree};
pub use error::{Branch, ErrorKind, Issue, IssueCategory, TreePath, ValidationError};
pub use report::{FixReport, Suggestion, TreeDescription, TreeSummary, describe_tree, suggest_fixes};
