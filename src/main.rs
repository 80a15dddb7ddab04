use std::error::Error;

use clap::{Args as ClapArgs, Parser};
use log::info;

use phylotuple::draw::{Command, DrawStyle, Turtle, draw_phylo_tree, draw_scaled_tree};
use phylotuple::literal::{Literal, parse_literal};
use phylotuple::model::{NodeValue, ParentLookup};
use phylotuple::validator::{
    build_tree, collect_issues, describe_tree, is_valid_tree, suggest_fixes, validate_tree,
};

/// Validate, query and draw binary phylogenetic trees written as nested tuples,
/// e.g. "(5, (3, ('A',(),()), ('B',(),())), ('C',(),()))".
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Checks a tree literal, reporting the first error
    Validate(TreeArg),
    /// Prints size metrics and an outline of a tree literal
    Describe(TreeArg),
    /// Lists every issue of a tree literal with fix suggestions
    Issues(TreeArg),
    /// Looks up a node: membership, subtree, descendants and parent
    Query(Query),
    /// Multiplies all numeric node values by a factor
    Scale(Scale),
    /// Draws a tree with a headless turtle and prints the command log
    Draw(Draw),
    /// Walks example literals through the validator
    Demo,
}

impl Args {
    fn exec(self) -> Result<(), Box<dyn Error>> {
        match self {
            Self::Validate(e) => e.validate(),
            Self::Describe(e) => e.describe(),
            Self::Issues(e) => e.issues(),
            Self::Query(e) => e.exec(),
            Self::Scale(e) => e.exec(),
            Self::Draw(e) => e.exec(),
            Self::Demo => demo(),
        }
    }
}

#[derive(Debug, ClapArgs)]
struct TreeArg {
    /// Tree in tuple notation
    tree: String,
}

impl TreeArg {
    fn literal(&self) -> Result<Literal, Box<dyn Error>> {
        Ok(parse_literal(&self.tree)?)
    }

    fn validate(self) -> Result<(), Box<dyn Error>> {
        match validate_tree(&self.literal()?) {
            Ok(()) => println!("Valid tree"),
            Err(err) => println!("{}: {err}", err.kind()),
        }
        Ok(())
    }

    fn describe(self) -> Result<(), Box<dyn Error>> {
        let literal = self.literal()?;
        println!("{}", describe_tree(&literal));
        if let Ok(tree) = build_tree(&literal) {
            tree.print_tree();
        }
        Ok(())
    }

    fn issues(self) -> Result<(), Box<dyn Error>> {
        let report = suggest_fixes(&self.literal()?);
        if report.is_valid() {
            println!("No issues");
            return Ok(());
        }
        println!("Issues:");
        for issue in report.issues() {
            println!("  - {issue}");
        }
        if !report.suggestions().is_empty() {
            println!("Suggestions:");
            for suggestion in report.suggestions() {
                println!("  - {}", suggestion.hint);
            }
        }
        Ok(())
    }
}

#[derive(Debug, ClapArgs)]
struct Query {
    #[command(flatten)]
    input: TreeArg,
    /// Node value; numeric input is read as a number, anything else as a label.
    /// Quote numeric-looking labels, e.g. "'3'"
    node: String,
}

impl Query {
    fn exec(self) -> Result<(), Box<dyn Error>> {
        let tree = build_tree(&self.input.literal()?)?;
        let target: NodeValue = self.node.parse()?;

        println!("Contains {target}: {}", tree.contains(&target));
        if let Some(subtree) = tree.subtree(&target) {
            println!("Subtree: {subtree}");
        }
        let descendants: Vec<String> = tree
            .descendant_nodes(&target)
            .iter()
            .map(|value| value.to_string())
            .collect();
        println!("Descendants: [{}]", descendants.join(", "));
        match tree.parent(&target) {
            ParentLookup::Root => println!("Parent: none (root)"),
            ParentLookup::NotFound => println!("Parent: none (not found)"),
            ParentLookup::Found(parent) => println!("Parent: {parent}"),
        }
        Ok(())
    }
}

#[derive(Debug, ClapArgs)]
struct Scale {
    #[command(flatten)]
    input: TreeArg,
    /// Factor applied to every numeric node value
    #[clap(allow_hyphen_values = true)]
    factor: f64,
}

impl Scale {
    fn exec(self) -> Result<(), Box<dyn Error>> {
        let tree = build_tree(&self.input.literal()?)?;
        println!("{}", tree.scale(self.factor));
        Ok(())
    }
}

#[derive(Debug, ClapArgs)]
struct Draw {
    #[command(flatten)]
    input: TreeArg,
    /// Length of the branches leaving the root
    #[clap(short = 'l', long, default_value_t = 50.0)]
    branch_length: f64,
    /// Turning angle in degrees
    #[clap(short = 'a', long, default_value_t = 30.0)]
    angle: f64,
    /// Factor branch lengths shrink by per level
    #[clap(short = 't', long, default_value_t = 0.8)]
    taper: f64,
    /// Also write internal node values
    #[clap(short = 'i', long)]
    show_internal: bool,
    /// Draw branch lengths proportional to node value differences instead
    #[clap(short = 's', long, value_name = "SCALE")]
    scaled: Option<f64>,
}

impl Draw {
    fn exec(self) -> Result<(), Box<dyn Error>> {
        let tree = build_tree(&self.input.literal()?)?;
        let mut turtle = Turtle::new();
        match self.scaled {
            Some(scale) => draw_scaled_tree(&tree, &mut turtle, scale),
            None => {
                let style = DrawStyle::new()
                    .with_branch_length(self.branch_length)
                    .with_angle(self.angle)
                    .with_taper(self.taper)
                    .with_show_internal(self.show_internal);
                draw_phylo_tree(&tree, &mut turtle, &style);
            }
        }

        for command in turtle.commands() {
            match command {
                Command::Forward(d) => println!("forward {d:.3}"),
                Command::Backward(d) => println!("backward {d:.3}"),
                Command::Left(a) => println!("left {a}"),
                Command::Right(a) => println!("right {a}"),
                Command::Write { text, font } => {
                    println!("write {text:?} ({} {} {:?})", font.family, font.size, font.style)
                }
            }
        }
        let end = turtle.position();
        info!("Turtle ended at ({:.3}, {:.3}), heading {:.3}", end.x, end.y, turtle.heading());
        Ok(())
    }
}

fn demo() -> Result<(), Box<dyn Error>> {
    let rule = "-".repeat(60);
    println!("{}", "=".repeat(60));
    println!("Tree Validator - Example Usage");
    println!("{}", "=".repeat(60));

    println!("\n1. Valid trees:\n{rule}");
    for input in ["('A', (), ())", "('A', ('B', (), ()), ('C', (), ()))"] {
        let literal = parse_literal(input)?;
        println!("Tree: {literal}");
        println!("{}\n", describe_tree(&literal));
    }

    println!("\n2. Invalid trees:\n{rule}");
    for input in ["None", "[]", "()", "('A', 'B', 'C', 'D')", "('A', ('B',), [])"] {
        let literal = parse_literal(input)?;
        let valid = is_valid_tree(&literal);
        println!("Tree: {literal}");
        println!("  Valid: {valid}");
        if !valid {
            let issues: Vec<String> = collect_issues(&literal)
                .iter()
                .map(|issue| issue.to_string())
                .collect();
            println!("  Issues: {issues:?}");
            let report = suggest_fixes(&literal);
            if !report.suggestions().is_empty() {
                println!("  Suggestions:");
                for suggestion in report.suggestions() {
                    println!("    - {}", suggestion.hint);
                }
            }
        }
        println!();
    }

    println!("\n3. Textbook tree:\n{rule}");
    let small_tree = parse_literal(
        "('A', ('B', ('D', (), ()), ('E', (), ())), ('C', ('F', (), ()), ('G', (), ())))",
    )?;
    println!("{}", describe_tree(&small_tree));
    println!("\n{}", "=".repeat(60));
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    args.exec()
}
