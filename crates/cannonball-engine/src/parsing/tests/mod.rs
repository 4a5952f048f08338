//! Whole-document parser tests.
//!
//! Fixture-driven snapshots live in the crate's `tests/` directory; these
//! cover front matter, degenerate input and structural invariants.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    NodeKind, Point, Position, parse_document,
    snapshot::{dump_tree, invariants},
};

#[test]
fn empty_document() {
    let tree = parse_document("");
    assert!(tree.is_root());
    assert!(tree.children.is_empty());
    assert_eq!(
        tree.position,
        Some(Position::new(Point::START, Point::START))
    );
}

#[test]
fn blank_lines_only() {
    let tree = parse_document("\n\n\n");
    assert!(tree.children.is_empty());
    assert_eq!(tree.position.map(|p| p.end), Some(Point::new(4, 1)));
}

#[test]
fn front_matter_at_top() {
    let tree = parse_document("---\ntags: [a]\n---\n# Note\n");
    assert_eq!(tree.children.len(), 2);
    assert_eq!(
        tree.children[0].kind,
        NodeKind::Frontmatter {
            value: "tags: [a]".into()
        }
    );
    assert_eq!(
        tree.children[0].position,
        Some(Position::new(Point::new(1, 1), Point::new(3, 4)))
    );
    assert_eq!(tree.children[1].type_name(), "heading");
}

#[test]
fn unclosed_front_matter_is_a_thematic_break() {
    let tree = parse_document("---\ntext");
    let names: Vec<_> = tree.children.iter().map(|n| n.type_name()).collect();
    assert_eq!(names, vec!["thematicBreak", "paragraph"]);
}

#[test]
fn raw_zones_suppress_inline_parsing() {
    let tree = parse_document("`**not strong**`");
    let para = &tree.children[0];
    assert_eq!(para.children.len(), 1);
    assert_eq!(para.children[0].type_name(), "inlineCode");
}

#[test]
fn carriage_returns_are_not_content() {
    let tree = parse_document("# Title\r\nbody\r\n");
    assert_eq!(tree.children[0].text_content(), "Title");
    assert_eq!(tree.children[1].text_content(), "body");
}

#[rstest]
#[case::paragraphs("one\ntwo\n\nthree")]
#[case::nested_lists("- a\n\t- b\n\t\t- [ ] c\n\n\t  more\n- d\n")]
#[case::quote_with_list("> - a\n>   b\n> - c\n")]
#[case::fence_in_item("1. step\n   ```\n   code\n   ```\n2. next")]
#[case::setext("Title\n---\n\ntext")]
#[case::inline_mix("a *b **c** d* `e` _f_\nnext **line**")]
#[case::malformed("* * \n>\n```\n- [ \n#\n")]
#[case::unicode("é **ü** `ß`\n- 日本 [x]\n")]
fn parsed_trees_satisfy_invariants(#[case] text: &str) {
    let tree = parse_document(text);
    invariants(&tree);
    assert!(!dump_tree(&tree).is_empty());
}
