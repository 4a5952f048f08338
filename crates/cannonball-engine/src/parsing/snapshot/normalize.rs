use std::fmt::Write;

use crate::parsing::tree::{Node, NodeKind};

/// Renders a tree one node per line, children indented by two spaces:
///
/// ```text
/// root (1:1-2:1)
///   heading depth=1 (1:1-1:8)
///     text "Title" (1:3-1:8)
/// ```
pub fn dump_tree(node: &Node) -> String {
    let mut out = String::new();
    dump_node(node, 0, &mut out);
    out
}

fn dump_node(node: &Node, depth: usize, out: &mut String) {
    let _ = write!(out, "{}{}", "  ".repeat(depth), node.type_name());
    match &node.kind {
        NodeKind::Root | NodeKind::Paragraph | NodeKind::ThematicBreak => {}
        NodeKind::Blockquote | NodeKind::Emphasis | NodeKind::Strong => {}
        NodeKind::Heading { depth } => {
            let _ = write!(out, " depth={depth}");
        }
        NodeKind::List {
            ordered,
            start,
            spread,
        } => {
            let _ = write!(out, " ordered={ordered}");
            if let Some(start) = start {
                let _ = write!(out, " start={start}");
            }
            let _ = write!(out, " spread={spread}");
        }
        NodeKind::ListItem { spread } => {
            let _ = write!(out, " spread={spread}");
        }
        NodeKind::CustomTask { marker, spread } => {
            let _ = write!(out, " marker={marker:?} spread={spread}");
        }
        NodeKind::Code { lang, meta, value } => {
            if let Some(lang) = lang {
                let _ = write!(out, " lang={lang:?}");
            }
            if let Some(meta) = meta {
                let _ = write!(out, " meta={meta:?}");
            }
            let _ = write!(out, " {value:?}");
        }
        NodeKind::Frontmatter { value }
        | NodeKind::Text { value }
        | NodeKind::InlineCode { value } => {
            let _ = write!(out, " {value:?}");
        }
    }
    if let Some(position) = node.position {
        let _ = write!(out, " ({position})");
    }
    out.push('\n');
    for child in &node.children {
        dump_node(child, depth + 1, out);
    }
}
