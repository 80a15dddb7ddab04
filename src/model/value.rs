//! Node values of phylogenetic trees.
//!
//! Provides [NodeValue], the value carried by every tree node: a taxon
//! [label](NodeValue::Label), typically at leaves, or a
//! [number](NodeValue::Number), typically a distance or height at internal nodes.

use std::fmt;
use std::str::FromStr;

// =#========================================================================#=
// NODE VALUE
// =#========================================================================€=
/// Value carried by a tree node.
///
/// Equality is exact: labels compare as strings, numbers as `f64`,
/// and a label never equals a number (`"3"` is not `3`).
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    /// Taxon or node name
    Label(String),
    /// Distance or height
    Number(f64),
}

impl NodeValue {
    /// Creates a label value.
    pub fn label<S: Into<String>>(label: S) -> Self {
        NodeValue::Label(label.into())
    }

    /// Creates a numeric value.
    pub fn number(number: f64) -> Self {
        NodeValue::Number(number)
    }

    /// Returns the label if this is a label value, else `None`.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            NodeValue::Label(label) => Some(label),
            NodeValue::Number(_) => None,
        }
    }

    /// Returns the number if this is a numeric value, else `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            NodeValue::Number(number) => Some(*number),
            NodeValue::Label(_) => None,
        }
    }

    /// Returns `true` if this is a numeric value.
    pub fn is_number(&self) -> bool {
        matches!(self, NodeValue::Number(_))
    }

    /// Returns this value multiplied by `factor` if numeric, else an unchanged copy.
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            NodeValue::Number(number) => NodeValue::Number(number * factor),
            NodeValue::Label(label) => NodeValue::Label(label.clone()),
        }
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeValue::Label(label) => write!(f, "{label}"),
            NodeValue::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Reads finite numbers as [NodeValue::Number] and anything else
/// (including `inf` and `NaN`) as [NodeValue::Label].
///
/// Surrounding whitespace is ignored. Text in single or double quotes is
/// always a label without its quotes, so `'3'` reads as the label `3`.
impl FromStr for NodeValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(label) = strip_quotes(s) {
            return Ok(NodeValue::Label(label.to_string()));
        }
        Ok(match s.parse::<f64>() {
            Ok(number) if number.is_finite() => NodeValue::Number(number),
            _ => NodeValue::Label(s.to_string()),
        })
    }
}

fn strip_quotes(s: &str) -> Option<&str> {
    ['\'', '"']
        .into_iter()
        .find_map(|quote| s.strip_prefix(quote)?.strip_suffix(quote))
}

impl PartialEq<str> for NodeValue {
    fn eq(&self, other: &str) -> bool {
        self.as_label() == Some(other)
    }
}

impl PartialEq<&str> for NodeValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_label() == Some(*other)
    }
}

impl PartialEq<f64> for NodeValue {
    fn eq(&self, other: &f64) -> bool {
        self.as_number() == Some(*other)
    }
}

impl From<&str> for NodeValue {
    fn from(v: &str) -> Self {
        NodeValue::Label(v.to_string())
    }
}

impl From<String> for NodeValue {
    fn from(v: String) -> Self {
        NodeValue::Label(v)
    }
}

impl From<f64> for NodeValue {
    fn from(v: f64) -> Self {
        NodeValue::Number(v)
    }
}

impl From<i32> for NodeValue {
    fn from(v: i32) -> Self {
        NodeValue::Number(f64::from(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_never_equals_number() {
        assert_ne!(NodeValue::label("3"), NodeValue::number(3.0));
        assert_eq!(NodeValue::from(3), NodeValue::number(3.0));
    }

    #[test]
    fn test_display_drops_integral_fraction() {
        assert_eq!(NodeValue::number(10.0).to_string(), "10");
        assert_eq!(NodeValue::number(2.5).to_string(), "2.5");
        assert_eq!(NodeValue::label("Kea").to_string(), "Kea");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("4.5".parse::<NodeValue>().unwrap(), NodeValue::number(4.5));
        assert_eq!("Tui".parse::<NodeValue>().unwrap(), NodeValue::label("Tui"));
        assert_eq!("inf".parse::<NodeValue>().unwrap(), NodeValue::label("inf"));
    }

    #[test]
    fn test_from_str_trims_labels() {
        assert_eq!(" Tui ".parse::<NodeValue>().unwrap(), NodeValue::label("Tui"));
        assert_eq!("\t2 ".parse::<NodeValue>().unwrap(), NodeValue::number(2.0));
    }

    #[test]
    fn test_from_str_quoted_is_label() {
        assert_eq!("'3'".parse::<NodeValue>().unwrap(), NodeValue::label("3"));
        assert_eq!(r#""4.5""#.parse::<NodeValue>().unwrap(), NodeValue::label("4.5"));
        assert_eq!(" 'Kea' ".parse::<NodeValue>().unwrap(), NodeValue::label("Kea"));
        // unmatched quotes stay part of the label
        assert_eq!("'3".parse::<NodeValue>().unwrap(), NodeValue::label("'3"));
        assert_eq!("'".parse::<NodeValue>().unwrap(), NodeValue::label("'"));
    }

    #[test]
    fn test_scaled_keeps_labels() {
        assert_eq!(NodeValue::number(3.0).scaled(2.0), NodeValue::number(6.0));
        assert_eq!(NodeValue::label("A").scaled(2.0), NodeValue::label("A"));
    }
}
