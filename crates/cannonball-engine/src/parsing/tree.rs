use serde::Serialize;

use super::position::Position;

/// The kind of a document tree node together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    Root,
    /// YAML front matter between `---` fences at the very top of the file.
    Frontmatter {
        value: String,
    },
    Heading {
        depth: u8,
    },
    Paragraph,
    ThematicBreak,
    Blockquote,
    List {
        ordered: bool,
        /// First number of an ordered list.
        start: Option<u32>,
        /// Items or their children are separated by blank lines.
        spread: bool,
    },
    ListItem {
        spread: bool,
    },
    /// A list item opened with a `[c]` checkbox; `marker` is the `c`.
    CustomTask {
        marker: char,
        spread: bool,
    },
    Code {
        lang: Option<String>,
        meta: Option<String>,
        value: String,
    },
    Text {
        value: String,
    },
    Emphasis,
    Strong,
    InlineCode {
        value: String,
    },
}

/// A node of the document tree.
///
/// Parser output always carries a position; trees assembled by hand may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Node {
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Self {
            kind,
            children: vec![],
            position: Some(position),
        }
    }

    pub fn with_children(kind: NodeKind, position: Position, children: Vec<Node>) -> Self {
        Self {
            kind,
            children,
            position: Some(position),
        }
    }

    /// The mdast-style type name (`root`, `listItem`, `customTask`, ...).
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Root => "root",
            NodeKind::Frontmatter { .. } => "frontmatter",
            NodeKind::Heading { .. } => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::ThematicBreak => "thematicBreak",
            NodeKind::Blockquote => "blockquote",
            NodeKind::List { .. } => "list",
            NodeKind::ListItem { .. } => "listItem",
            NodeKind::CustomTask { .. } => "customTask",
            NodeKind::Code { .. } => "code",
            NodeKind::Text { .. } => "text",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Strong => "strong",
            NodeKind::InlineCode { .. } => "inlineCode",
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind, NodeKind::Root)
    }

    /// Concatenated text of all descendant text-bearing leaves.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text { value } | NodeKind::InlineCode { value } => out.push_str(value),
            _ => {
                for child in &self.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first pre-order walk over this node and all descendants.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
