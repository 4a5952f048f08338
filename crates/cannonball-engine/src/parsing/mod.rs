//! # Parsing
//!
//! Markdown text to a positioned document tree, and back.
//!
//! - **`lines`** / **`position`**: physical lines and 1-based source points
//! - **`blocks`**: line classification and the recursive block builder
//! - **`inline`**: code spans, emphasis and text inside blocks
//! - **`tree`**: the `Node` / `NodeKind` document tree
//! - **`serialize`**: canonical markdown from a tree
//! - **`snapshot`**: tree dump and structural invariant checks

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod position;
pub mod serialize;
pub mod snapshot;
pub mod tree;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, kinds::FrontMatter};
use lines::{LineRef, split_lines};

pub use position::{CursorPos, Point, Position};
pub use serialize::{round_trip, serialize};
pub use tree::{Node, NodeKind};

/// Parses markdown into a document tree. Never fails; anything unrecognized
/// becomes paragraphs and text.
///
/// The root spans from `1:1` to just past the last character of the last
/// line. A trailing newline opens an empty final line.
pub fn parse_document(text: &str) -> Node {
    let lines = split_lines(text);
    let mut children = vec![];

    let body = match front_matter(&lines) {
        Some((node, consumed)) => {
            children.push(node);
            &lines[consumed..]
        }
        None => &lines[..],
    };
    children.extend(BlockBuilder::new(body).finish());

    let end = lines.last().map_or(Point::START, LineRef::raw_end_point);
    Node::with_children(NodeKind::Root, Position::new(Point::START, end), children)
}

/// Front matter on the first line, returning the node and the number of
/// lines it used. An unclosed fence is not front matter.
fn front_matter(lines: &[LineRef]) -> Option<(Node, usize)> {
    let open = lines.first()?;
    if !FrontMatter::is_fence(open.text) {
        return None;
    }
    let close = lines
        .iter()
        .skip(1)
        .position(|l| FrontMatter::is_fence(l.text))?
        + 1;
    let value = lines[1..close]
        .iter()
        .map(|l| l.text)
        .collect::<Vec<_>>()
        .join("\n");
    let node = Node::new(
        NodeKind::Frontmatter { value },
        Position::new(open.point_at(0), lines[close].end_point()),
    );
    Some((node, close + 1))
}
