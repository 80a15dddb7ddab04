use phylotuple::model::{NodeValue, ParentLookup, Tree};
use phylotuple::parse_tree_str;
use rstest::{fixture, rstest};

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

/// `(7, (), (2, (), (1, (), ())))`, only right children
#[fixture]
fn right_spine() -> Tree {
    Tree::with_children(
        7,
        None,
        Some(Tree::with_children(2, None, Some(Tree::leaf(1)))),
    )
}

/// `(1, (2, X, Y), (2, X, Z))`, values repeat across branches
#[fixture]
fn repeated_values() -> Tree {
    parse_tree_str("(1, (2, ('X',), ('Y',)), (2, ('X',), ('Z',)))").unwrap()
}

fn num(value: f64) -> NodeValue {
    NodeValue::number(value)
}

#[rstest]
fn test_counts_add_up(
    #[values(my_tree(), small_tree(), right_spine(), Tree::leaf("A"))] tree: Tree,
) {
    assert_eq!(tree.node_count(), tree.leaf_count() + tree.internal_count());
    assert_eq!(tree.node_list().len(), tree.node_count());
    assert_eq!(tree.leaf_list().len(), tree.leaf_count());
}

#[rstest]
fn test_my_tree_metrics(my_tree: Tree) {
    assert_eq!(my_tree.node_count(), 5);
    assert_eq!(my_tree.leaf_count(), 3);
    assert_eq!(my_tree.internal_count(), 2);
    assert_eq!(my_tree.height(), 2);
    assert_eq!(my_tree.leaf_list(), ["A", "B", "C"]);
}

#[rstest]
fn test_small_tree_listing(small_tree: Tree) {
    assert_eq!(small_tree.node_count(), 7);
    assert_eq!(small_tree.height(), 2);
    assert_eq!(small_tree.leaf_list(), ["D", "E", "F", "G"]);
    assert_eq!(small_tree.node_list(), ["A", "B", "D", "E", "C", "F", "G"]);
}

#[test]
fn test_height_of_small_shapes() {
    assert_eq!(Tree::leaf("A").height(), 0);
    assert_eq!(Tree::leaf("A").leaf_list(), ["A"]);
    let cherry = Tree::internal("R", Tree::leaf("A"), Tree::leaf("B"));
    assert_eq!(cherry.height(), 1);
}

#[rstest]
fn test_height_follows_right_children(right_spine: Tree) {
    assert_eq!(right_spine.height(), 2);
    assert_eq!(right_spine.leaf_count(), 1);
    assert_eq!(right_spine.leaf_list(), [&num(1.0)]);
}

#[rstest]
fn test_contains(my_tree: Tree) {
    assert!(my_tree.contains(&"B".into()));
    assert!(my_tree.contains(&num(3.0)));
    assert!(!my_tree.contains(&"Z".into()));
    assert!(!my_tree.contains(&"3".into()));
}

#[rstest]
fn test_subtree_and_descendants(my_tree: Tree) {
    let subtree = my_tree.subtree(&num(3.0)).unwrap();
    assert_eq!(subtree.value(), &num(3.0));
    assert_eq!(subtree.leaf_list(), ["A", "B"]);
    assert_eq!(my_tree.descendant_nodes(&num(3.0)), ["A", "B"]);

    assert!(my_tree.subtree(&"Z".into()).is_none());
    assert!(my_tree.descendant_nodes(&"Z".into()).is_empty());
    assert!(my_tree.descendant_nodes(&"A".into()).is_empty());
}

#[rstest]
fn test_subtree_of_root_is_whole_tree(small_tree: Tree) {
    assert_eq!(small_tree.subtree(&"A".into()), Some(&small_tree));
    assert_eq!(small_tree.descendant_nodes(&"A".into()).len(), 6);
}

#[rstest]
fn test_parent(my_tree: Tree) {
    let three = num(3.0);
    let five = num(5.0);
    assert_eq!(my_tree.parent(&"A".into()), ParentLookup::Found(&three));
    assert_eq!(my_tree.parent(&"C".into()), ParentLookup::Found(&five));
    assert_eq!(my_tree.parent(&three), ParentLookup::Found(&five));
    assert_eq!(my_tree.parent(&five), ParentLookup::Root);
    assert_eq!(my_tree.parent(&"Z".into()), ParentLookup::NotFound);

    // Root and not found look the same through `value`
    assert_eq!(my_tree.parent(&five).value(), None);
    assert_eq!(my_tree.parent(&"Z".into()).value(), None);
}

#[rstest]
fn test_parent_through_absent_slots(right_spine: Tree) {
    assert_eq!(right_spine.parent(&num(1.0)), ParentLookup::Found(&num(2.0)));
}

#[rstest]
fn test_first_match_is_leftmost_in_pre_order(repeated_values: Tree) {
    let two = num(2.0);
    let left = repeated_values.left().unwrap();

    let subtree = repeated_values.subtree(&two).unwrap();
    assert!(std::ptr::eq(subtree, left));
    assert_eq!(subtree.leaf_list(), ["X", "Y"]);
    assert_eq!(
        subtree.node_list(),
        [&two, &NodeValue::label("X"), &NodeValue::label("Y")]
    );
    assert_eq!(repeated_values.descendant_nodes(&two), ["X", "Y"]);

    assert!(repeated_values.contains(&"Z".into()));
    assert_eq!(repeated_values.parent(&"X".into()), ParentLookup::Found(&two));
    assert_eq!(repeated_values.parent(&"Z".into()), ParentLookup::Found(&two));
    assert_eq!(repeated_values.parent(&two), ParentLookup::Found(&num(1.0)));
}

#[test]
fn test_parent_of_repeated_leaf_comes_from_left_branch() {
    let tree = parse_tree_str("(1, (2, ('X',), ('Y',)), (3, ('X',), ('Z',)))").unwrap();
    assert_eq!(tree.parent(&"X".into()), ParentLookup::Found(&num(2.0)));
    assert_eq!(tree.parent(&"Z".into()), ParentLookup::Found(&num(3.0)));
}

#[test]
fn test_root_value_repeated_deeper_is_root() {
    let tree = Tree::internal(
        1,
        Tree::internal(1, Tree::leaf("A"), Tree::leaf("B")),
        Tree::leaf("C"),
    );
    assert_eq!(tree.parent(&num(1.0)), ParentLookup::Root);
    assert_eq!(tree.subtree(&num(1.0)), Some(&tree));
    assert_eq!(tree.descendant_nodes(&num(1.0)).len(), 4);
}

#[rstest]
fn test_scale_doubles_numbers(my_tree: Tree) {
    let original = my_tree.clone();
    let scaled = my_tree.scale(2.0);

    assert_eq!(scaled.value(), &num(10.0));
    assert_eq!(scaled.subtree(&num(6.0)).map(Tree::leaf_count), Some(2));
    assert_eq!(scaled.leaf_list(), ["A", "B", "C"]);
    assert_eq!(scaled.node_count(), original.node_count());
    assert_eq!(my_tree, original);
}

#[rstest]
fn test_scale_by_one_is_identity(
    #[values(my_tree(), small_tree(), right_spine())] tree: Tree,
) {
    assert_eq!(tree.scale(1.0), tree);
}

#[rstest]
#[case::negative(-1.0, -5.0)]
#[case::zero(0.0, 0.0)]
#[case::fraction(0.5, 2.5)]
fn test_scale_factors(my_tree: Tree, #[case] factor: f64, #[case] root: f64) {
    assert_eq!(my_tree.scale(factor).value(), &num(root));
}

#[rstest]
fn test_display_and_reparse(my_tree: Tree) {
    let written = my_tree.to_string();
    assert_eq!(written, "(5, (3, ('A', (), ()), ('B', (), ())), ('C', (), ()))");
    assert_eq!(parse_tree_str(&written).unwrap(), my_tree);
}

#[rstest]
fn test_outline(my_tree: Tree) {
    let expected = "5\n├─ 3\n│  ├─ A\n│  └─ B\n└─ C\n";
    assert_eq!(my_tree.outline(), expected);
}

#[rstest]
fn test_outline_marks_absent_slots(right_spine: Tree) {
    assert_eq!(
        right_spine.outline(),
        "7\n├─ (absent)\n└─ 2\n   ├─ (absent)\n   └─ 1\n"
    );
}
