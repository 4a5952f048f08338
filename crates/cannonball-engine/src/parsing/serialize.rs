use super::{
    blocks::{
        LineClass, MarkdownLineClassifier,
        kinds::{CodeFence, Setext, ThematicBreak, code_fence::longest_run},
    },
    lines::LineRef,
    parse_document,
    tree::{Node, NodeKind},
};

/// Bullet used for every unordered list.
const BULLET: &str = "-";
/// Prefix for list item continuation lines and nested lists.
const ITEM_INDENT: &str = "\t";
const EMPHASIS: &str = "_";
const STRONG: &str = "**";

/// Renders a tree as markdown in the canonical style.
///
/// Top-level blocks are separated by one blank line and the output ends with
/// a newline, unless there is nothing to render.
pub fn serialize(tree: &Node) -> String {
    let body = match tree.kind {
        NodeKind::Root => join_blocks(&tree.children, "\n\n"),
        _ => block(tree),
    };
    if body.is_empty() {
        body
    } else {
        body + "\n"
    }
}

/// Parses and re-serializes, normalizing `text` to the canonical style.
pub fn round_trip(text: &str) -> String {
    serialize(&parse_document(text))
}

fn join_blocks(nodes: &[Node], separator: &str) -> String {
    nodes.iter().map(block).collect::<Vec<_>>().join(separator)
}

fn block(node: &Node) -> String {
    match &node.kind {
        NodeKind::Root => join_blocks(&node.children, "\n\n"),
        NodeKind::Frontmatter { value } if value.is_empty() => "---\n---".to_string(),
        NodeKind::Frontmatter { value } => format!("---\n{value}\n---"),
        NodeKind::Heading { depth } => {
            let marks = "#".repeat(usize::from(*depth));
            let content = inlines(&node.children);
            if content.is_empty() {
                marks
            } else {
                format!("{marks} {content}")
            }
        }
        NodeKind::Paragraph => inlines(&node.children)
            .split('\n')
            .map(escape_line_start)
            .collect::<Vec<_>>()
            .join("\n"),
        NodeKind::ThematicBreak => ThematicBreak::CANONICAL.to_string(),
        NodeKind::Blockquote => prefix_lines(&join_blocks(&node.children, "\n\n"), "> ", ">"),
        NodeKind::List {
            ordered,
            start,
            spread,
        } => list(node, *ordered, start.unwrap_or(1), *spread),
        NodeKind::ListItem { .. } | NodeKind::CustomTask { .. } => list_item(node, BULLET),
        NodeKind::Code { lang, meta, value } => {
            let info = match (lang, meta) {
                (Some(lang), Some(meta)) => format!("{lang} {meta}"),
                (Some(lang), None) => lang.clone(),
                (None, _) => String::new(),
            };
            let fence = CodeFence::fence_for(value, &info);
            if value.is_empty() {
                format!("{fence}{info}\n{fence}")
            } else {
                format!("{fence}{info}\n{value}\n{fence}")
            }
        }
        NodeKind::Text { .. }
        | NodeKind::Emphasis
        | NodeKind::Strong
        | NodeKind::InlineCode { .. } => inline(node),
    }
}

/// Backslash-escapes a paragraph line that would parse back as a block
/// opener or a setext underline. Ordered markers are escaped at the
/// delimiter (`2\. x`), everything else at the first character.
fn escape_line_start(line: &str) -> String {
    let class = MarkdownLineClassifier::classify(&LineRef {
        number: 1,
        column: 1,
        text: line,
    });
    if !class.is_opener() && Setext::depth(line).is_none() {
        return line.to_string();
    }
    let at = match class {
        LineClass::ListItem(marker) if marker.is_ordered() => {
            line.chars().take_while(char::is_ascii_digit).count()
        }
        _ => 0,
    };
    format!("{}\\{}", &line[..at], &line[at..])
}

fn list(node: &Node, ordered: bool, start: u32, spread: bool) -> String {
    node.children
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = if ordered {
                format!("{}.", start as usize + i)
            } else {
                BULLET.to_string()
            };
            list_item(item, &marker)
        })
        .collect::<Vec<_>>()
        .join(if spread { "\n\n" } else { "\n" })
}

fn list_item(node: &Node, marker: &str) -> String {
    let (head, spread) = match node.kind {
        NodeKind::CustomTask { marker: c, spread } => (format!("{marker} [{c}]"), spread),
        NodeKind::ListItem { spread } => (marker.to_string(), spread),
        _ => (marker.to_string(), false),
    };
    let content = join_blocks(&node.children, if spread { "\n\n" } else { "\n" });
    if content.is_empty() {
        return head;
    }
    let mut out = String::new();
    for (i, line) in content.split('\n').enumerate() {
        if i == 0 {
            out.push_str(&head);
            out.push(' ');
        } else {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(ITEM_INDENT);
            }
        }
        out.push_str(line);
    }
    out
}

fn prefix_lines(text: &str, prefix: &str, blank: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                blank.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn inlines(nodes: &[Node]) -> String {
    nodes.iter().map(inline).collect()
}

fn inline(node: &Node) -> String {
    match &node.kind {
        NodeKind::Text { value } => value.clone(),
        NodeKind::Emphasis => format!("{EMPHASIS}{}{EMPHASIS}", inlines(&node.children)),
        NodeKind::Strong => format!("{STRONG}{}{STRONG}", inlines(&node.children)),
        NodeKind::InlineCode { value } => inline_code(value),
        _ => block(node),
    }
}

fn inline_code(value: &str) -> String {
    let ticks = "`".repeat(longest_run(value, '`') + 1);
    let padded = value.starts_with('`')
        || value.ends_with('`')
        || (value.starts_with(' ') && value.ends_with(' ') && !value.trim().is_empty());
    if padded {
        format!("{ticks} {value} {ticks}")
    } else {
        format!("{ticks}{value}{ticks}")
    }
}
