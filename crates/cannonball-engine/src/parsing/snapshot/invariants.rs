use crate::parsing::tree::Node;

/// Validates the structural invariants of a parsed tree.
///
/// Asserts that:
/// - every node produced by the parser has a position
/// - each child's span lies inside its parent's span
/// - siblings do not overlap and appear in document order
/// - the root starts at `1:1`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(tree: &Node) {
    let Some(position) = tree.position else {
        panic!("root has no position");
    };
    assert_eq!(
        (position.start.line, position.start.column),
        (1, 1),
        "root must start at 1:1, got {position}"
    );
    check_node(tree);
}

fn check_node(node: &Node) {
    let Some(parent) = node.position else {
        panic!("{} node has no position", node.type_name());
    };
    let mut prev_end = None;
    for child in &node.children {
        let Some(span) = child.position else {
            panic!("{} node has no position", child.type_name());
        };
        assert!(
            span.start >= parent.start && span.end <= parent.end,
            "{} {span} escapes parent {} {parent}",
            child.type_name(),
            node.type_name()
        );
        if let Some(prev_end) = prev_end {
            assert!(
                span.start >= prev_end,
                "{} {span} overlaps previous sibling ending at {prev_end}",
                child.type_name()
            );
        }
        prev_end = Some(span.end);
        check_node(child);
    }
}
