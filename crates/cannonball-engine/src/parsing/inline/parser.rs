use crate::parsing::{
    lines::LineRef,
    tree::{Node, NodeKind},
};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis},
    source::InlineSource,
};

/// Parses the inline content of one block into positioned nodes.
///
/// `lines` are the block's content lines with leading and trailing
/// whitespace already removed; they are joined with `\n`.
///
/// Code spans are checked first and suppress all other parsing inside them.
/// Text between constructs is emitted as `Text` nodes, so the children
/// cover the whole input.
pub fn parse_inline(lines: &[LineRef]) -> Vec<Node> {
    let src = InlineSource::from_lines(lines);
    parse_range(&src, 0, src.len())
}

fn parse_range(src: &InlineSource, from: usize, to: usize) -> Vec<Node> {
    let mut cur = Cursor::new(src.chars(), from, to);
    let mut out = vec![];
    let mut text_start = from;

    while let Some(c) = cur.peek() {
        let start = cur.pos();
        let node = match c {
            '\\' => {
                skip_escape(&mut cur);
                continue;
            }
            CodeSpan::TICK => try_parse_code_span(src, &mut cur),
            c if Emphasis::is_marker(c) => try_parse_emphasis(src, &mut cur),
            _ => {
                cur.bump();
                continue;
            }
        };
        match node {
            Some(node) => {
                flush_text(src, &mut out, text_start, start);
                text_start = cur.pos();
                out.push(node);
            }
            // Skip the whole run so a shorter tail can't match later.
            None => cur.bump_n(cur.run_len(c)),
        }
    }

    flush_text(src, &mut out, text_start, to);
    out
}

fn flush_text(src: &InlineSource, out: &mut Vec<Node>, start: usize, end: usize) {
    if end > start {
        out.push(Node::new(
            NodeKind::Text {
                value: src.slice(start, end),
            },
            src.position(start, end),
        ));
    }
}

/// Backslash escapes stay in the text verbatim; they only stop the escaped
/// punctuation from acting as a delimiter.
fn skip_escape(cur: &mut Cursor<'_>) {
    cur.bump();
    if cur.peek().is_some_and(|c| c.is_ascii_punctuation()) {
        cur.bump();
    }
}

/// Attempts to parse a code span starting at the current position.
///
/// The closing run must have exactly as many backticks as the opening one.
/// On failure the cursor position is restored.
fn try_parse_code_span(src: &InlineSource, cur: &mut Cursor<'_>) -> Option<Node> {
    let saved = cur.clone();
    let start = cur.pos();
    let ticks = cur.run_len(CodeSpan::TICK);
    cur.bump_n(ticks);
    let inner_start = cur.pos();

    while let Some(c) = cur.peek() {
        if c != CodeSpan::TICK {
            cur.bump();
            continue;
        }
        let run = cur.run_len(CodeSpan::TICK);
        if run == ticks {
            let inner_end = cur.pos();
            cur.bump_n(run);
            return Some(Node::new(
                NodeKind::InlineCode {
                    value: CodeSpan::normalize(&src.slice(inner_start, inner_end)),
                },
                src.position(start, cur.pos()),
            ));
        }
        cur.bump_n(run);
    }

    *cur = saved;
    None
}

/// Attempts to parse emphasis (one marker) or strong (two markers).
fn try_parse_emphasis(src: &InlineSource, cur: &mut Cursor<'_>) -> Option<Node> {
    let marker = cur.peek()?;
    let n = cur.run_len(marker);
    let kind = match n {
        1 => NodeKind::Emphasis,
        Emphasis::STRONG_LEN => NodeKind::Strong,
        _ => return None,
    };
    if !Emphasis::can_open(marker, cur.prev(), cur.peek_at(n)) {
        return None;
    }

    let start = cur.pos();
    let close = find_closer(src, start + n, cur.end, marker, n)?;
    let children = parse_range(src, start + n, close);
    cur.bump_n(close + n - start);
    Some(Node::with_children(
        kind,
        src.position(start, close + n),
        children,
    ))
}

/// Finds the start of a closing run of exactly `n` markers in `[from, to)`,
/// stepping over code spans, escapes and runs of other lengths.
fn find_closer(src: &InlineSource, from: usize, to: usize, marker: char, n: usize) -> Option<usize> {
    let mut cur = Cursor::new(src.chars(), from, to);
    while let Some(c) = cur.peek() {
        if c == '\\' {
            skip_escape(&mut cur);
        } else if c == CodeSpan::TICK {
            if try_parse_code_span(src, &mut cur).is_none() {
                cur.bump_n(cur.run_len(CodeSpan::TICK));
            }
        } else if c == marker {
            let run = cur.run_len(marker);
            if run == n && cur.pos() > from && Emphasis::can_close(marker, cur.prev(), cur.peek_at(n)) {
                return Some(cur.pos());
            }
            cur.bump_n(run);
        } else {
            cur.bump();
        }
    }
    None
}
