//! The graphics cursor collaborator and a headless implementation.
//!
//! Provides:
//! * [Cursor] - stateful pen with a position and a heading
//! * [Font] - font specification for written text
//! * [Turtle] - cursor that tracks its pose and records everything it does

use log::trace;

// =#========================================================================#=
// CURSOR (Trait)
// =#========================================================================T=
/// Stateful drawing cursor with a position and a heading.
///
/// Angles are in degrees. Drawing routines pair every move and turn with its
/// inverse, so a cursor ends where it started after drawing a subtree.
pub trait Cursor {
    /// Moves `distance` along the current heading, drawing a line.
    fn forward(&mut self, distance: f64);

    /// Moves `distance` against the current heading, drawing a line.
    fn backward(&mut self, distance: f64);

    /// Turns counter-clockwise by `angle` degrees.
    fn left(&mut self, angle: f64);

    /// Turns clockwise by `angle` degrees.
    fn right(&mut self, angle: f64);

    /// Writes `text` at the current position.
    fn write(&mut self, text: &str, font: &Font);
}

// =#========================================================================#=
// FONT
// =#========================================================================$=
/// Style of a [Font].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    /// Upright
    #[default]
    Normal,
    /// Slanted
    Italic,
    /// Heavy
    Bold,
}

/// Font specification: family, point size and style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// Font family name
    pub family: String,
    /// Size in points
    pub size: u32,
    /// Style
    pub style: FontStyle,
}

impl Font {
    /// Creates a font.
    pub fn new<S: Into<String>>(family: S, size: u32, style: FontStyle) -> Self {
        Font {
            family: family.into(),
            size,
            style,
        }
    }
}

/// `Arial 12 normal`
impl Default for Font {
    fn default() -> Self {
        Font::new("Arial", 12, FontStyle::Normal)
    }
}

// =#========================================================================#=
// TURTLE
// =#========================================================================$=
/// Point in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing upwards
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Call received by a [Turtle], in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// [`Cursor::forward`]
    Forward(f64),
    /// [`Cursor::backward`]
    Backward(f64),
    /// [`Cursor::left`]
    Left(f64),
    /// [`Cursor::right`]
    Right(f64),
    /// [`Cursor::write`]
    Write {
        /// Written text
        text: String,
        /// Font used
        font: Font,
    },
}

/// Line drawn by a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start of the line
    pub from: Point,
    /// End of the line
    pub to: Point,
}

/// Text written at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMark {
    /// Position of the cursor when writing
    pub at: Point,
    /// Written text
    pub text: String,
    /// Font used
    pub font: Font,
}

/// Headless [Cursor] that tracks its pose and records every command,
/// the drawn segments and the written text.
///
/// Starts at the origin heading east (0°); headings grow counter-clockwise.
///
/// # Example
/// ```
/// use phylotuple::draw::{Cursor, Point, Turtle};
///
/// let mut turtle = Turtle::new();
/// turtle.left(90.0);
/// turtle.forward(10.0);
/// assert!(turtle.position().distance(&Point::new(0.0, 10.0)) < 1e-9);
/// assert_eq!(turtle.segments().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Turtle {
    position: Point,
    heading: f64,
    commands: Vec<Command>,
    segments: Vec<Segment>,
    texts: Vec<TextMark>,
}

impl Turtle {
    /// Creates a turtle at the origin heading east.
    pub fn new() -> Self {
        Turtle::default()
    }

    /// Places the turtle at `(x, y)` without drawing.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// Sets the initial heading in degrees.
    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading.rem_euclid(360.0);
        self
    }

    /// Returns the current position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the current heading in degrees, in `[0, 360)`.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Returns all commands received so far.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns all lines drawn so far.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns all text written so far.
    pub fn texts(&self) -> &[TextMark] {
        &self.texts
    }

    /// Moves along the heading by a signed distance, recording the segment.
    fn advance(&mut self, distance: f64) {
        let radians = self.heading.to_radians();
        let from = self.position;
        let to = Point::new(
            from.x + distance * radians.cos(),
            from.y + distance * radians.sin(),
        );
        self.segments.push(Segment { from, to });
        self.position = to;
    }

    fn turn(&mut self, angle: f64) {
        self.heading = (self.heading + angle).rem_euclid(360.0);
    }
}

impl Cursor for Turtle {
    fn forward(&mut self, distance: f64) {
        trace!("forward {distance}");
        self.commands.push(Command::Forward(distance));
        self.advance(distance);
    }

    fn backward(&mut self, distance: f64) {
        trace!("backward {distance}");
        self.commands.push(Command::Backward(distance));
        self.advance(-distance);
    }

    fn left(&mut self, angle: f64) {
        trace!("left {angle}");
        self.commands.push(Command::Left(angle));
        self.turn(angle);
    }

    fn right(&mut self, angle: f64) {
        trace!("right {angle}");
        self.commands.push(Command::Right(angle));
        self.turn(-angle);
    }

    fn write(&mut self, text: &str, font: &Font) {
        trace!("write {text:?}");
        self.commands.push(Command::Write {
            text: text.to_string(),
            font: font.clone(),
        });
        self.texts.push(TextMark {
            at: self.position,
            text: text.to_string(),
            font: font.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_wrap_around() {
        let mut turtle = Turtle::new();
        turtle.right(30.0);
        assert!((turtle.heading() - 330.0).abs() < 1e-9);
        turtle.left(30.0);
        assert!(turtle.heading().abs() < 1e-9);
    }

    #[test]
    fn test_backward_retraces_forward() {
        let mut turtle = Turtle::new().at(1.0, 2.0).with_heading(45.0);
        turtle.forward(5.0);
        turtle.backward(5.0);
        assert!(turtle.position().distance(&Point::new(1.0, 2.0)) < 1e-9);
        assert_eq!(turtle.commands(), [Command::Forward(5.0), Command::Backward(5.0)]);
    }

    #[test]
    fn test_write_records_position() {
        let mut turtle = Turtle::new();
        turtle.forward(3.0);
        turtle.write("Kea", &Font::default());
        assert_eq!(turtle.texts()[0].text, "Kea");
        assert!(turtle.texts()[0].at.distance(&Point::new(3.0, 0.0)) < 1e-9);
    }
}
