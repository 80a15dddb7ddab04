//! Untyped tree literals in nested tuple notation.
//!
//! A [Literal] is what a caller hands over before anything is known about its
//! shape: it may be a well-formed tree, a list instead of a tuple, a tuple
//! with the wrong number of slots, or not a container at all. The
//! [validator](crate::validator) decides whether a literal is a tree and turns
//! it into a typed [Tree].
//!
//! # Notation
//! * `('A',)` or `('A', (), ())` - leaf with value `'A'`
//! * `(5, left, right)` - internal node; `()` or `None` marks an absent child
//! * `[...]` - list (never a valid tree node)
//! * `'label'` / `"label"` - labels, backslash escapes the next character
//! * `3`, `-2.5`, `1e3` - integers and floats
//! * `(x)` without trailing comma is just `x` in parentheses, not a tuple
//!
//! Tuples and lists may nest at most [MAX_NESTING_DEPTH] levels deep.
//!
//! Use [parse_literal] to read the notation and [Literal]'s `Display` to write it.

mod parser;

pub use self::parser::{MAX_NESTING_DEPTH, parse_literal};

use crate::model::{NodeValue, Tree};
use std::fmt;

// =#========================================================================#=
// LITERAL
// =#========================================================================€=
/// Untyped nested value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The none marker; absent when in a child slot
    None,
    /// Quoted label
    Str(String),
    /// Integer number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Ordered fixed collection, the only container a tree node can be
    Tuple(Vec<Literal>),
    /// Ordered collection of the wrong container kind
    List(Vec<Literal>),
}

impl Literal {
    /// Creates a tuple literal.
    pub fn tuple<I: IntoIterator<Item = Literal>>(items: I) -> Self {
        Literal::Tuple(items.into_iter().collect())
    }

    /// Creates a label literal.
    pub fn str<S: Into<String>>(label: S) -> Self {
        Literal::Str(label.into())
    }

    /// Returns the empty tuple `()`, marking an absent child.
    pub fn empty() -> Self {
        Literal::Tuple(Vec::new())
    }

    /// Returns the tuple notation of a leaf, `(value, (), ())`.
    pub fn leaf<V: Into<Literal>>(value: V) -> Self {
        Literal::Tuple(vec![value.into(), Literal::empty(), Literal::empty()])
    }

    /// Returns the name of this literal's kind as used in messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::None => "none",
            Literal::Str(_) => "label",
            Literal::Int(_) => "integer",
            Literal::Float(_) => "float",
            Literal::Tuple(_) => "tuple",
            Literal::List(_) => "list",
        }
    }

    /// Returns `true` if this literal marks an absent child slot
    /// (`None` or the empty tuple).
    pub fn is_absent_marker(&self) -> bool {
        match self {
            Literal::None => true,
            Literal::Tuple(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Returns the node value this literal denotes, if it is a label or number.
    pub fn as_node_value(&self) -> Option<NodeValue> {
        match self {
            Literal::Str(label) => Some(NodeValue::Label(label.clone())),
            Literal::Int(number) => Some(NodeValue::Number(*number as f64)),
            Literal::Float(number) => Some(NodeValue::Number(*number)),
            _ => None,
        }
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::Str(v.to_string())
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::Int(v)
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Literal::Int(i64::from(v))
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Float(v)
    }
}

/// Integral numbers within `i64` range become [Literal::Int]. Infinite and
/// NaN numbers become the labels `'inf'`, `'-inf'` and `'NaN'`, since the
/// notation has no number form for them.
impl From<&NodeValue> for Literal {
    fn from(value: &NodeValue) -> Self {
        match value {
            NodeValue::Label(label) => Literal::Str(label.clone()),
            NodeValue::Number(number) if !number.is_finite() => {
                Literal::Str(number.to_string())
            }
            NodeValue::Number(number) => {
                let is_integral = number.fract() == 0.0
                    && *number >= i64::MIN as f64
                    && *number < i64::MAX as f64;
                if is_integral {
                    Literal::Int(*number as i64)
                } else {
                    Literal::Float(*number)
                }
            }
        }
    }
}

/// Leaves become `(value, (), ())` and absent slots `()`.
impl From<&Tree> for Literal {
    fn from(tree: &Tree) -> Self {
        fn slot(child: Option<&Tree>) -> Literal {
            child.map_or_else(Literal::empty, Literal::from)
        }

        let value = Literal::from(tree.value());
        match tree {
            Tree::Leaf { .. } => Literal::leaf(value),
            Tree::Internal { .. } => {
                Literal::Tuple(vec![value, slot(tree.left()), slot(tree.right())])
            }
        }
    }
}

/// Writes tuple notation that [parse_literal] reads back, except for a
/// [Literal::Float] that is infinite or NaN, which is written as `inf`,
/// `-inf` or `NaN` and rejected when read.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_items(f: &mut fmt::Formatter<'_>, items: &[Literal]) -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{item}")?;
            }
            Ok(())
        }

        match self {
            Literal::None => write!(f, "None"),
            Literal::Str(label) => {
                let escaped = label.replace('\\', "\\\\").replace('\'', "\\'");
                write!(f, "'{escaped}'")
            }
            Literal::Int(number) => write!(f, "{number}"),
            Literal::Float(number) => write!(f, "{number:?}"),
            Literal::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Literal::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_single_tuple_has_trailing_comma() {
        assert_eq!(Literal::tuple([Literal::str("A")]).to_string(), "('A',)");
        assert_eq!(Literal::empty().to_string(), "()");
    }

    #[test]
    fn test_display_escapes_quotes() {
        assert_eq!(Literal::str("Wilson's").to_string(), r"'Wilson\'s'");
    }

    #[test]
    fn test_tree_to_literal() {
        let tree = Tree::with_children(2.5, Some(Tree::leaf("A")), None);
        assert_eq!(Literal::from(&tree).to_string(), "(2.5, ('A', (), ()), ())");
        assert_eq!(tree.to_string(), "(2.5, ('A', (), ()), ())");
    }

    #[test]
    fn test_integral_numbers_written_as_integers() {
        let tree = Tree::internal(5, Tree::leaf("A"), Tree::leaf("B"));
        assert_eq!(tree.to_string(), "(5, ('A', (), ()), ('B', (), ()))");
    }

    #[test]
    fn test_non_finite_numbers_written_as_labels() {
        assert_eq!(Literal::from(&NodeValue::number(f64::INFINITY)), Literal::str("inf"));
        assert_eq!(
            Literal::from(&NodeValue::number(f64::NEG_INFINITY)),
            Literal::str("-inf")
        );
        assert_eq!(Literal::from(&NodeValue::number(f64::NAN)), Literal::str("NaN"));
        assert_eq!(Literal::Float(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn test_absent_markers() {
        assert!(Literal::None.is_absent_marker());
        assert!(Literal::empty().is_absent_marker());
        assert!(!Literal::List(vec![]).is_absent_marker());
        assert!(!Literal::leaf("A").is_absent_marker());
    }
}
