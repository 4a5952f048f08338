use crate::parsing::{
    inline::parse_inline,
    lines::{LineRef, TAB_STOP},
    position::Position,
    tree::{Node, NodeKind},
};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{AtxHeading, BlockQuote, CodeFence, FenceSig, ListMarker, Setext, TaskMarker},
};

/// Builds block nodes from the lines of one container.
///
/// Containers (blockquotes, list items) collect their lines, strip their
/// prefix from each, and hand the narrowed lines to a fresh builder.
pub struct BlockBuilder<'s, 'a> {
    lines: &'s [LineRef<'a>],
    idx: usize,
    out: Vec<Node>,
}

impl<'s, 'a> BlockBuilder<'s, 'a> {
    pub fn new(lines: &'s [LineRef<'a>]) -> Self {
        Self {
            lines,
            idx: 0,
            out: vec![],
        }
    }

    pub fn finish(mut self) -> Vec<Node> {
        while self.idx < self.lines.len() {
            self.step();
        }
        self.out
    }

    fn step(&mut self) {
        let line = self.lines[self.idx];
        match MarkdownLineClassifier::classify(&line) {
            LineClass::Blank => self.idx += 1,
            LineClass::Fence(sig) => self.fence(sig),
            LineClass::Heading(heading) => self.atx_heading(heading),
            LineClass::ThematicBreak => {
                self.idx += 1;
                let rest = line.trim_start();
                self.out.push(Node::new(
                    NodeKind::ThematicBreak,
                    Position::new(rest.point_at(0), line.end_point()),
                ));
            }
            LineClass::Quote => self.blockquote(),
            LineClass::ListItem(marker) => self.list(marker),
            LineClass::Text => self.paragraph(),
        }
    }

    fn fence(&mut self, sig: FenceSig) {
        let lines = self.lines;
        let open = lines[self.idx];
        let indent = open.indent_width();
        let start = open.trim_start().point_at(0);
        let mut end = open.end_point();
        let mut body = vec![];
        let mut closed = false;
        self.idx += 1;

        while let Some(line) = lines.get(self.idx) {
            self.idx += 1;
            if line.indent_width() < TAB_STOP
                && CodeFence::closes(&sig, CodeFence::sig(line.trim_start().text).as_ref())
            {
                end = line.end_point();
                closed = true;
                break;
            }
            body.push(*line);
        }

        // Unterminated: the block ends at its last non-blank line.
        if !closed {
            while body.last().is_some_and(LineRef::is_blank) {
                body.pop();
            }
            if let Some(last) = body.last() {
                end = last.end_point();
            }
        }

        let value = body
            .iter()
            .map(|l| l.strip_indent(indent).text)
            .collect::<Vec<_>>()
            .join("\n");
        let (lang, meta) = CodeFence::split_info(&sig.info);
        self.out.push(Node::new(
            NodeKind::Code { lang, meta, value },
            Position::new(start, end),
        ));
    }

    fn atx_heading(&mut self, heading: AtxHeading) {
        let line = self.lines[self.idx];
        self.idx += 1;
        let rest = line.trim_start();
        let content = rest
            .skip_chars(heading.content_start)
            .take_chars(heading.content_end - heading.content_start);
        let children = if content.text.is_empty() {
            vec![]
        } else {
            parse_inline(&[content])
        };
        self.out.push(Node::with_children(
            NodeKind::Heading {
                depth: heading.depth,
            },
            Position::new(rest.point_at(0), line.end_point()),
            children,
        ));
    }

    fn paragraph(&mut self) {
        let lines = self.lines;
        let mut content = vec![lines[self.idx].trim_start().trim_end()];
        let mut end = lines[self.idx].end_point();
        let mut setext = None;
        self.idx += 1;

        while let Some(line) = lines.get(self.idx) {
            if line.indent_width() < TAB_STOP
                && let Some(depth) = Setext::depth(line.trim_start().text)
            {
                setext = Some(depth);
                end = line.end_point();
                self.idx += 1;
                break;
            }
            let continues = match MarkdownLineClassifier::classify(line) {
                LineClass::Text => true,
                LineClass::ListItem(marker) => !marker.can_interrupt_paragraph(),
                _ => false,
            };
            if !continues {
                break;
            }
            content.push(line.trim_start().trim_end());
            end = line.end_point();
            self.idx += 1;
        }

        let kind = match setext {
            Some(depth) => NodeKind::Heading { depth },
            None => NodeKind::Paragraph,
        };
        self.out.push(Node::with_children(
            kind,
            Position::new(content[0].point_at(0), end),
            parse_inline(&content),
        ));
    }

    fn blockquote(&mut self) {
        let lines = self.lines;
        let start = lines[self.idx].trim_start().point_at(0);
        let mut end = start;
        let mut inner: Vec<LineRef<'a>> = vec![];

        while let Some(line) = lines.get(self.idx) {
            let rest = line.trim_start();
            if line.indent_width() < TAB_STOP
                && let Some(n) = BlockQuote::prefix_len(rest.text)
            {
                inner.push(rest.skip_chars(n));
            } else if is_lazy_continuation(line, inner.last()) {
                inner.push(*line);
            } else {
                break;
            }
            end = line.end_point();
            self.idx += 1;
        }

        let children = BlockBuilder::new(&inner).finish();
        self.out.push(Node::with_children(
            NodeKind::Blockquote,
            Position::new(start, end),
            children,
        ));
    }

    fn list(&mut self, first: ListMarker) {
        let lines = self.lines;
        let mut items = vec![];
        let mut marker = first;
        let mut blank_between_items = false;

        loop {
            items.push(self.list_item(marker));

            let mut next = self.idx;
            while lines.get(next).is_some_and(LineRef::is_blank) {
                next += 1;
            }
            match lines.get(next).map(MarkdownLineClassifier::classify) {
                Some(LineClass::ListItem(m)) if m.same_list(&first) => {
                    blank_between_items |= next > self.idx;
                    self.idx = next;
                    marker = m;
                }
                _ => break,
            }
        }

        let spread = blank_between_items
            || items.iter().any(|item| {
                matches!(
                    item.kind,
                    NodeKind::ListItem { spread: true } | NodeKind::CustomTask { spread: true, .. }
                )
            });
        let first_pos = items.first().and_then(|i| i.position);
        let last_pos = items.last().and_then(|i| i.position);
        let (Some(first_pos), Some(last_pos)) = (first_pos, last_pos) else {
            return;
        };
        self.out.push(Node::with_children(
            NodeKind::List {
                ordered: first.is_ordered(),
                start: first.start(),
                spread,
            },
            Position::new(first_pos.start, last_pos.end),
            items,
        ));
    }

    /// Consumes one list item starting at the current (marker) line.
    fn list_item(&mut self, marker: ListMarker) -> Node {
        let lines = self.lines;
        let line = lines[self.idx];
        let rest = line.trim_start();
        let content_col = line.indent_width() + marker.content_offset;
        let start = rest.point_at(0);
        let mut end = line.end_point();

        let mut first = rest.skip_chars(marker.content_offset);
        let task = TaskMarker::parse(first.text).map(|(c, skip)| {
            first = first.skip_chars(skip);
            c
        });

        let mut inner = vec![first];
        self.idx += 1;

        while let Some(line) = lines.get(self.idx) {
            if line.is_blank() {
                // Blank lines belong to the item only if indented content follows.
                let mut next = self.idx;
                while lines.get(next).is_some_and(LineRef::is_blank) {
                    next += 1;
                }
                if !lines
                    .get(next)
                    .is_some_and(|l| l.indent_width() >= content_col)
                {
                    break;
                }
                inner.extend(
                    lines[self.idx..next]
                        .iter()
                        .map(|l| l.strip_indent(content_col)),
                );
                self.idx = next;
                continue;
            }
            if line.indent_width() >= content_col {
                inner.push(line.strip_indent(content_col));
            } else if is_lazy_continuation(line, inner.last()) {
                inner.push(*line);
            } else {
                break;
            }
            end = line.end_point();
            self.idx += 1;
        }

        let children = BlockBuilder::new(&inner).finish();
        let spread = children.windows(2).any(|w| blank_between(&w[0], &w[1]));
        let kind = match task {
            Some(marker) => NodeKind::CustomTask { marker, spread },
            None => NodeKind::ListItem { spread },
        };
        Node::with_children(kind, Position::new(start, end), children)
    }
}

/// A plain text line directly after paragraph text continues that paragraph
/// even without the container's prefix or indentation.
fn is_lazy_continuation(line: &LineRef, prev: Option<&LineRef>) -> bool {
    let Some(prev) = prev else {
        return false;
    };
    if prev.is_blank() {
        return false;
    }
    let prev_is_text = !matches!(
        MarkdownLineClassifier::classify(prev),
        LineClass::Fence(_) | LineClass::Heading(_) | LineClass::ThematicBreak
    );
    prev_is_text && MarkdownLineClassifier::classify(line) == LineClass::Text
}

fn blank_between(a: &Node, b: &Node) -> bool {
    match (a.position, b.position) {
        (Some(a), Some(b)) => b.start.line > a.end.line + 1,
        _ => false,
    }
}
