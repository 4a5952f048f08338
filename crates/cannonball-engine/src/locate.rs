use crate::parsing::{CursorPos, Node, Point};

/// Finds the most specific node whose span contains the cursor.
///
/// Children are visited before their parent and a candidate only replaces
/// the current best when its [`area`](crate::parsing::Position::area) is
/// strictly smaller, so among equally sized spans the deepest node wins
/// (a `text` over the `paragraph` around it). Nodes without a position are
/// skipped but their children are still searched.
///
/// Returns `None` when no node contains the cursor.
pub fn find_node_at_cursor(tree: &Node, cursor: CursorPos) -> Option<&Node> {
    let point = Point::from(cursor);
    let mut best = None;
    visit(tree, point, &mut best);
    best.map(|(node, _)| node)
}

fn visit<'t>(node: &'t Node, point: Point, best: &mut Option<(&'t Node, usize)>) {
    for child in &node.children {
        visit(child, point, best);
    }
    if let Some(position) = node.position
        && position.contains(point)
    {
        let area = position.area();
        if best.is_none_or(|(_, best_area)| area < best_area) {
            *best = Some((node, area));
        }
    }
}
