use phylotuple::draw::{
    Command, Cursor, DrawStyle, Font, FontStyle, Point, SCALED_CORRECTION, Turtle,
    draw_phylo_tree, draw_scaled_tree,
};
use phylotuple::model::Tree;
use rstest::{fixture, rstest};

const EPS: f64 = 1e-9;

/// `(5, (3, A, B), C)`
#[fixture]
fn my_tree() -> Tree {
    Tree::internal(
        5,
        Tree::internal(3, Tree::leaf("A"), Tree::leaf("B")),
        Tree::leaf("C"),
    )
}

/// `(A, (B, D, E), (C, F, G))`
#[fixture]
fn small_tree() -> Tree {
    Tree::internal(
        "A",
        Tree::internal("B", Tree::leaf("D"), Tree::leaf("E")),
        Tree::internal("C", Tree::leaf("F"), Tree::leaf("G")),
    )
}

/// `(4, (), (1, ('X',), ()))`
#[fixture]
fn one_sided() -> Tree {
    Tree::with_children(
        4,
        None,
        Some(Tree::with_children(1, Some(Tree::leaf("X")), None)),
    )
}

fn written(turtle: &Turtle) -> Vec<&str> {
    turtle.texts().iter().map(|mark| mark.text.as_str()).collect()
}

fn assert_pose(turtle: &Turtle, position: Point, heading: f64) {
    assert!(
        turtle.position().distance(&position) < EPS,
        "ended at {:?}",
        turtle.position()
    );
    let diff = (turtle.heading() - heading).rem_euclid(360.0);
    assert!(diff < EPS || 360.0 - diff < EPS, "ended heading {}", turtle.heading());
}

/// Cursor that checks every backward move undoes the latest open forward
/// move and every counter-turn undoes the turn right before it.
#[derive(Default)]
struct PairingCursor {
    open: Vec<Step>,
    writes: usize,
}

#[derive(Debug)]
enum Step {
    Move(f64),
    Turn(f64),
}

impl PairingCursor {
    fn turn(&mut self, angle: f64) {
        match self.open.last() {
            Some(Step::Turn(open)) if (open + angle).abs() < EPS => {
                self.open.pop();
            }
            _ => self.open.push(Step::Turn(angle)),
        }
    }

    fn assert_balanced(&self) {
        assert!(self.open.is_empty(), "unmatched steps {:?}", self.open);
    }
}

impl Cursor for PairingCursor {
    fn forward(&mut self, distance: f64) {
        self.open.push(Step::Move(distance));
    }

    fn backward(&mut self, distance: f64) {
        match self.open.pop() {
            Some(Step::Move(open)) => assert!((open - distance).abs() < EPS),
            other => panic!("backward {distance} after {other:?}"),
        }
    }

    fn left(&mut self, angle: f64) {
        self.turn(angle);
    }

    fn right(&mut self, angle: f64) {
        self.turn(-angle);
    }

    fn write(&mut self, _text: &str, _font: &Font) {
        self.writes += 1;
    }
}

#[rstest]
fn test_leaves_written_left_to_right(small_tree: Tree) {
    let mut turtle = Turtle::new();
    draw_phylo_tree(&small_tree, &mut turtle, &DrawStyle::default());

    assert_eq!(written(&turtle), ["D", "E", "F", "G"]);
    assert!(turtle.texts().iter().all(|mark| mark.font == Font::default()));
    // two branches per internal node, each drawn out and back
    assert_eq!(turtle.segments().len(), 12);
}

#[rstest]
fn test_internal_labels_in_pre_order(small_tree: Tree) {
    let mut turtle = Turtle::new();
    let style = DrawStyle::default().with_show_internal(true);
    draw_phylo_tree(&small_tree, &mut turtle, &style);

    assert_eq!(written(&turtle), ["A", "B", "D", "E", "C", "F", "G"]);
    let italic: Vec<&str> = turtle
        .texts()
        .iter()
        .filter(|mark| mark.font.style == FontStyle::Italic)
        .map(|mark| mark.text.as_str())
        .collect();
    assert_eq!(italic, ["A", "B", "C"]);

    assert!(matches!(turtle.commands()[0], Command::Write { .. }));
    assert_eq!(turtle.commands()[1], Command::Forward(10.0));
    assert_eq!(turtle.commands().last(), Some(&Command::Backward(10.0)));
}

#[rstest]
fn test_left_child_turns_left_first(my_tree: Tree) {
    let mut turtle = Turtle::new().with_heading(90.0);
    draw_phylo_tree(&my_tree, &mut turtle, &DrawStyle::default());

    assert_eq!(turtle.commands()[0], Command::Left(30.0));
    assert_eq!(turtle.commands()[1], Command::Forward(50.0));
    // first branch leans left of north
    let first = turtle.segments()[0];
    assert!(first.to.x < first.from.x);
    assert!(first.to.y > first.from.y);
}

#[rstest]
fn test_pose_restored(
    #[values(my_tree(), small_tree(), one_sided(), Tree::leaf("A"))] tree: Tree,
    #[values(
        DrawStyle::default(),
        DrawStyle::default().with_show_internal(true),
        DrawStyle::new().with_branch_length(80.0).with_angle(45.0).with_taper(0.5)
    )]
    style: DrawStyle,
) {
    let start = Point::new(0.0, -200.0);
    let mut turtle = Turtle::new().at(start.x, start.y).with_heading(90.0);
    draw_phylo_tree(&tree, &mut turtle, &style);
    assert_pose(&turtle, start, 90.0);

    let mut pairing = PairingCursor::default();
    draw_phylo_tree(&tree, &mut pairing, &style);
    pairing.assert_balanced();
    assert_eq!(pairing.writes, turtle.texts().len());
}

#[rstest]
fn test_absent_slot_draws_no_branch(one_sided: Tree) {
    let mut turtle = Turtle::new();
    draw_phylo_tree(&one_sided, &mut turtle, &DrawStyle::default());

    assert_eq!(written(&turtle), ["X"]);
    assert_eq!(
        &turtle.commands()[..2],
        [Command::Right(30.0), Command::Forward(50.0)]
    );
    assert_eq!(turtle.commands()[2], Command::Left(30.0));
    assert_eq!(turtle.commands()[3], Command::Forward(40.0));
}

#[rstest]
fn test_scaled_writes_every_node(my_tree: Tree) {
    let mut turtle = Turtle::new();
    draw_scaled_tree(&my_tree, &mut turtle, 10.0);
    assert_eq!(written(&turtle), ["5", "3", "A", "B", "C"]);
}

#[rstest]
fn test_scaled_branch_lengths(my_tree: Tree) {
    let mut turtle = Turtle::new();
    draw_scaled_tree(&my_tree, &mut turtle, 10.0);

    let forwards: Vec<f64> = turtle
        .commands()
        .iter()
        .filter_map(|command| match command {
            Command::Forward(distance) => Some(*distance),
            _ => None,
        })
        .collect();
    let expected = [2.0, 3.0, 3.0, 5.0].map(|diff| diff * 10.0 * SCALED_CORRECTION);
    assert_eq!(forwards.len(), expected.len());
    for (found, wanted) in forwards.iter().zip(expected) {
        assert!((found - wanted).abs() < EPS, "{found} != {wanted}");
    }
}

#[rstest]
fn test_scaled_pose_restored(
    #[values(my_tree(), small_tree(), one_sided())] tree: Tree,
    #[values(1.0, 12.5)] scale: f64,
) {
    let mut turtle = Turtle::new().at(10.0, 10.0);
    draw_scaled_tree(&tree, &mut turtle, scale);
    assert_pose(&turtle, Point::new(10.0, 10.0), 0.0);

    let mut pairing = PairingCursor::default();
    draw_scaled_tree(&tree, &mut pairing, scale);
    pairing.assert_balanced();
    assert_eq!(pairing.writes, tree.node_count());
}
