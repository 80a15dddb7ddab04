//! Phylotuple is a library for binary phylogenetic trees written as nested
//! tuples.
//!
//! A tree node is a tuple `(value, left, right)`: a leaf is `(value, (), ())`
//! (or the 1-tuple `(value,)`), and an absent child is the empty tuple `()`.
//! Node values are taxon labels or numbers, e.g. the height of an ancestor.
//! Core functionality provided:
//! - Literals: the untyped tuple values ([Literal]) and a reader for the tuple
//!   notation ([parse_literal]).
//! - Validation: checks whether a literal is a well-formed tree, fail fast or
//!   collecting every issue, with descriptions and fix suggestions.
//!   See [crate::validator].
//! - Tree model: the typed [Tree] with counting, listing, search, ancestry and
//!   scaling algorithms. See [crate::model].
//! - Drawing: turtle-style drawing routines against an explicit cursor.
//!   See [crate::draw].
//!
//! Limitations:
//! - Only binary trees
//! - Algorithms assume a valid tree; validate untrusted literals first
//!
//! # Usage patterns
//! 1. Parse and validate a tuple string in one go with [parse_tree_str].
//! 2. Build [Literal]s yourself and hand them to the functions of
//!    [crate::validator], or build [Tree]s directly.
//!
//! ## Example
//! ```
//! use phylotuple::parse_tree_str;
//!
//! let tree = parse_tree_str("(5, (3, ('A',(),()), ('B',(),())), ('C',(),()))").unwrap();
//! assert_eq!(tree.node_count(), 5);
//! assert_eq!(tree.leaf_list(), ["A", "B", "C"]);
//! ```
//!
//! ## Example Validation
//! ```
//! use phylotuple::literal::parse_literal;
//! use phylotuple::validator::{ErrorKind, collect_issues, validate_tree};
//!
//! let literal = parse_literal("('A', 'B', 'C', 'D')")?;
//! let err = validate_tree(&literal).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Structure);
//! assert_eq!(collect_issues(&literal).len(), 1);
//! # Ok::<(), phylotuple::parser::ParsingError>(())
//! ```

pub mod draw;
pub mod literal;
pub mod model;
pub mod parser;
pub mod validator;

pub use crate::literal::{Literal, parse_literal};
pub use crate::model::{NodeValue, Tree};
use crate::parser::parsing_error::ParsingError;
use crate::validator::ValidationError;
use thiserror::Error;

/// Failure to read a tree from tuple notation.
#[derive(Error, Debug)]
pub enum TreeError {
    /// Input is not valid tuple notation
    #[error("Parsing failed: {0}")]
    Parsing(#[from] ParsingError),
    /// Input is a literal, but not a well-formed tree
    #[error("Invalid tree: {0}")]
    Validation(#[from] ValidationError),
}

// ============================================================================
// Quick API
// ============================================================================
/// Parses a tree written in tuple notation and validates it,
/// returning the typed [Tree].
///
/// See [parse_literal] for the accepted notation and
/// [`validator::build_tree`] for the validation rules.
pub fn parse_tree_str<S: AsRef<str>>(input: S) -> Result<Tree, TreeError> {
    let literal = parse_literal(input)?;
    Ok(validator::build_tree(&literal)?)
}
