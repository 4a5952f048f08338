use serde::Serialize;

use crate::{
    locate::find_node_at_cursor,
    parsing::{CursorPos, Node, parse_document},
};

/// The slice of a document sent to the model as context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextWindow {
    pub text: String,
    /// Zero-based document line the context starts on.
    pub first_line: usize,
}

impl ContextWindow {
    /// Moves a document cursor into the context's own line numbering.
    pub fn rebase(&self, cursor: CursorPos) -> CursorPos {
        CursorPos::new(cursor.line.saturating_sub(self.first_line), cursor.ch)
    }
}

/// Root-first chain of the nodes above `node`, ending at its parent.
///
/// Nodes are matched by identity, not by value. The chain is empty when
/// `node` is the root itself and `None` when `node` is not part of `tree`.
pub fn ancestors<'t>(tree: &'t Node, node: &Node) -> Option<Vec<&'t Node>> {
    let mut path = vec![];
    find_path(tree, node, &mut path).then_some(path)
}

fn find_path<'t>(current: &'t Node, target: &Node, path: &mut Vec<&'t Node>) -> bool {
    if std::ptr::eq(current, target) {
        return true;
    }
    path.push(current);
    if current
        .children
        .iter()
        .any(|child| find_path(child, target, path))
    {
        return true;
    }
    path.pop();
    false
}

/// The direct child of the root on the way down to `node`, which is `node`
/// itself when it already sits at the top level.
pub fn find_top_level_ancestor<'t>(tree: &'t Node, node: &Node) -> Option<&'t Node> {
    let chain = ancestors(tree, node)?;
    match chain.len() {
        0 => None,
        1 => tree.children.iter().find(|c| std::ptr::eq(*c, node)),
        _ => Some(chain[1]),
    }
}

/// Which part of the document a context covers.
enum Scope {
    Whole,
    /// Zero-based inclusive line range.
    Lines(usize, usize),
}

/// Source text around the located node.
///
/// - no node, or a node without a position: empty
/// - the root: the whole document
/// - a top-level block: its own lines
/// - anything deeper: the lines of its top-level ancestor
pub fn build_context(tree: &Node, located: Option<&Node>, raw_text: &str) -> String {
    match context_scope(tree, located) {
        Some(Scope::Whole) => raw_text.to_string(),
        Some(Scope::Lines(first, last)) => source_lines(raw_text, first, last),
        None => String::new(),
    }
}

fn context_scope(tree: &Node, located: Option<&Node>) -> Option<Scope> {
    let node = located?;
    node.position?;
    let chain = ancestors(tree, node)?;
    let scope = match chain.len() {
        0 => return Some(Scope::Whole),
        1 => node,
        _ => chain[1],
    };
    let position = scope.position?;
    Some(Scope::Lines(
        position.start.line.saturating_sub(1),
        position.end.line.saturating_sub(1),
    ))
}

fn source_lines(raw_text: &str, first: usize, last: usize) -> String {
    raw_text
        .split('\n')
        .skip(first)
        .take(last.saturating_sub(first) + 1)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses `raw_text`, locates the cursor and cuts out its context.
pub fn extract_context(raw_text: &str, cursor: CursorPos) -> ContextWindow {
    let tree = parse_document(raw_text);
    let located = find_node_at_cursor(&tree, cursor);
    let first_line = match context_scope(&tree, located) {
        Some(Scope::Lines(first, _)) => first,
        _ => 0,
    };
    ContextWindow {
        text: build_context(&tree, located, raw_text),
        first_line,
    }
}
