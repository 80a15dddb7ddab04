//! Cursor-based drawing of phylogenetic trees.
//!
//! Drawing routines talk to an explicit [Cursor] (a turtle-graphics style pen)
//! and never to a global one. [Turtle] is a headless cursor that records what
//! was drawn; a real renderer implements [Cursor] the same way.
//!
//! | Routine | Branch lengths |
//! |---------|----------------|
//! | [draw_phylo_tree] | fixed, shrinking per level ([DrawStyle]) |
//! | [draw_scaled_tree] | proportional to value differences |

pub mod cursor;
pub mod phylo;

pub use cursor::{Command, Cursor, Font, FontStyle, Point, Segment, TextMark, Turtle};
pub use phylo::{DrawStyle, SCALED_ANGLE, SCALED_CORRECTION, draw_phylo_tree, draw_scaled_tree};
