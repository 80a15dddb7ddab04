//! Drawing routines for phylogenetic trees.

use crate::draw::cursor::{Cursor, Font, FontStyle};
use crate::model::{Branch, NodeValue, Tree};
use log::debug;

/// Turning angle used by [draw_scaled_tree], in degrees.
pub const SCALED_ANGLE: f64 = 30.0;

/// Corrects a branch drawn at ±30° so its horizontal extent matches the
/// value difference (`1 / cos 30° ≈ 1.155`).
pub const SCALED_CORRECTION: f64 = 1.155;

// =#========================================================================#=
// DRAW STYLE
// =#========================================================================$=
/// Options of [draw_phylo_tree].
///
/// # Example
/// ```
/// use phylotuple::draw::DrawStyle;
///
/// let style = DrawStyle::new().with_branch_length(80.0).with_angle(45.0);
/// assert_eq!(style.branch_length(), 80.0);
/// assert_eq!(style.taper(), 0.8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    branch_length: f64,
    angle: f64,
    taper: f64,
    show_internal: bool,
    internal_offset: f64,
    leaf_font: Font,
    internal_font: Font,
}

impl Default for DrawStyle {
    fn default() -> Self {
        DrawStyle {
            branch_length: 50.0,
            angle: 30.0,
            taper: 0.8,
            show_internal: false,
            internal_offset: 10.0,
            leaf_font: Font::default(),
            internal_font: Font::new("Arial", 10, FontStyle::Italic),
        }
    }
}

impl DrawStyle {
    /// Creates the default style.
    pub fn new() -> Self {
        DrawStyle::default()
    }

    /// Sets the length of the branches leaving the root.
    pub fn with_branch_length(mut self, branch_length: f64) -> Self {
        self.branch_length = branch_length;
        self
    }

    /// Sets the turning angle in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the factor branch lengths shrink by per level.
    pub fn with_taper(mut self, taper: f64) -> Self {
        self.taper = taper;
        self
    }

    /// Writes internal node values too.
    pub fn with_show_internal(mut self, show_internal: bool) -> Self {
        self.show_internal = show_internal;
        self
    }

    /// Sets how far to step past an internal label before branching.
    pub fn with_internal_offset(mut self, internal_offset: f64) -> Self {
        self.internal_offset = internal_offset;
        self
    }

    /// Sets the font for leaf values.
    pub fn with_leaf_font(mut self, font: Font) -> Self {
        self.leaf_font = font;
        self
    }

    /// Sets the font for internal node values.
    pub fn with_internal_font(mut self, font: Font) -> Self {
        self.internal_font = font;
        self
    }

    pub fn branch_length(&self) -> f64 {
        self.branch_length
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn taper(&self) -> f64 {
        self.taper
    }

    pub fn show_internal(&self) -> bool {
        self.show_internal
    }

    pub fn internal_offset(&self) -> f64 {
        self.internal_offset
    }

    pub fn leaf_font(&self) -> &Font {
        &self.leaf_font
    }

    pub fn internal_font(&self) -> &Font {
        &self.internal_font
    }
}

// =#========================================================================#=
// DRAWING
// =#========================================================================$=
/// Draws `tree` with fixed, tapering branch lengths.
///
/// Leaves have their value written in the leaf font. Internal values are
/// written only with [`DrawStyle::with_show_internal`]. The left child is
/// reached by turning left, the right child by turning right. The cursor
/// pose is restored when the call returns.
///
/// # Example
/// ```
/// use phylotuple::draw::{DrawStyle, Turtle, draw_phylo_tree};
/// use phylotuple::model::Tree;
///
/// let tree = Tree::internal(5, Tree::leaf("A"), Tree::leaf("B"));
/// let mut turtle = Turtle::new();
/// draw_phylo_tree(&tree, &mut turtle, &DrawStyle::default());
///
/// let written: Vec<&str> = turtle.texts().iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(written, ["A", "B"]);
/// ```
pub fn draw_phylo_tree<C: Cursor>(tree: &Tree, cursor: &mut C, style: &DrawStyle) {
    debug!(
        "Drawing tree of {} nodes, branch length {}",
        tree.node_count(),
        style.branch_length
    );
    draw_node(tree, cursor, style, style.branch_length);
}

fn draw_node<C: Cursor>(tree: &Tree, cursor: &mut C, style: &DrawStyle, length: f64) {
    if tree.is_leaf() {
        cursor.write(&tree.value().to_string(), &style.leaf_font);
        return;
    }

    if style.show_internal {
        cursor.write(&tree.value().to_string(), &style.internal_font);
        cursor.forward(style.internal_offset);
    }

    for branch in [Branch::Left, Branch::Right] {
        if let Some(child) = tree.child(branch) {
            turn_towards(cursor, branch, style.angle);
            cursor.forward(length);
            draw_node(child, cursor, style, length * style.taper);
            cursor.backward(length);
            turn_back(cursor, branch, style.angle);
        }
    }

    if style.show_internal {
        cursor.backward(style.internal_offset);
    }
}

/// Draws `tree` with branch lengths proportional to value differences.
///
/// Every node value is written. The branch to a child has length
/// `(parent − child) · scale ·` [SCALED_CORRECTION], drawn at ±[SCALED_ANGLE];
/// a value that is not a number counts as `0`, so leaves labelled with taxa
/// hang at height zero. The cursor pose is restored when the call returns.
pub fn draw_scaled_tree<C: Cursor>(tree: &Tree, cursor: &mut C, scale: f64) {
    debug!(
        "Drawing scaled tree of {} nodes, scale {}",
        tree.node_count(),
        scale
    );
    draw_scaled_node(tree, cursor, scale, &Font::default());
}

fn draw_scaled_node<C: Cursor>(tree: &Tree, cursor: &mut C, scale: f64, font: &Font) {
    cursor.write(&tree.value().to_string(), font);

    let height = height_of(tree.value());
    for branch in [Branch::Left, Branch::Right] {
        if let Some(child) = tree.child(branch) {
            let distance = (height - height_of(child.value())) * scale * SCALED_CORRECTION;
            turn_towards(cursor, branch, SCALED_ANGLE);
            cursor.forward(distance);
            draw_scaled_node(child, cursor, scale, font);
            cursor.backward(distance);
            turn_back(cursor, branch, SCALED_ANGLE);
        }
    }
}

fn height_of(value: &NodeValue) -> f64 {
    value.as_number().unwrap_or(0.0)
}

fn turn_towards<C: Cursor>(cursor: &mut C, branch: Branch, angle: f64) {
    match branch {
        Branch::Left => cursor.left(angle),
        Branch::Right => cursor.right(angle),
    }
}

fn turn_back<C: Cursor>(cursor: &mut C, branch: Branch, angle: f64) {
    match branch {
        Branch::Left => cursor.right(angle),
        Branch::Right => cursor.left(angle),
    }
}
