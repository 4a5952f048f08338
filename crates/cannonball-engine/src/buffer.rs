use xi_rope::{LinesMetric, Rope};

use crate::parsing::CursorPos;

/// An editable note held in a rope, addressed by zero-based line and
/// character positions the way an editor host addresses its buffer.
#[derive(Clone)]
pub struct NoteBuffer {
    rope: Rope,
}

impl NoteBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from(text),
        }
    }

    /// The whole note.
    pub fn get_value(&self) -> String {
        self.rope.to_string()
    }

    pub fn line_count(&self) -> usize {
        self.rope.measure::<LinesMetric>() + 1
    }

    /// Text of one line without its line ending.
    pub fn get_line(&self, line: usize) -> Option<String> {
        if line >= self.line_count() {
            return None;
        }
        let start = self.rope.offset_of_line(line);
        let end = self.rope.offset_of_line(line + 1);
        let text = self.rope.slice_to_cow(start..end);
        Some(text.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Byte offset of `pos`, clamped to the last line and to its length.
    pub fn offset_of(&self, pos: CursorPos) -> usize {
        let line = pos.line.min(self.line_count() - 1);
        let start = self.rope.offset_of_line(line);
        let text = self.get_line(line).unwrap_or_default();
        let within = text
            .char_indices()
            .nth(pos.ch)
            .map_or(text.len(), |(b, _)| b);
        start + within
    }

    /// Replaces the text between `from` and `to` (in either order).
    pub fn replace_range(&mut self, replacement: &str, from: CursorPos, to: CursorPos) {
        let a = self.offset_of(from);
        let b = self.offset_of(to);
        self.rope.edit(a.min(b)..a.max(b), replacement);
    }

    pub fn insert_at(&mut self, pos: CursorPos, text: &str) {
        self.replace_range(text, pos, pos);
    }
}

/// Replaces the text between two cursor positions of `text`, clamping both.
pub fn replace_range(text: &str, from: CursorPos, to: CursorPos, replacement: &str) -> String {
    let mut buffer = NoteBuffer::new(text);
    buffer.replace_range(replacement, from, to);
    buffer.get_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lines_and_value() {
        let buffer = NoteBuffer::new("one\r\ntwo\n");
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.get_line(0).as_deref(), Some("one"));
        assert_eq!(buffer.get_line(1).as_deref(), Some("two"));
        assert_eq!(buffer.get_line(2).as_deref(), Some(""));
        assert_eq!(buffer.get_line(3), None);
        assert_eq!(buffer.get_value(), "one\r\ntwo\n");
    }

    #[test]
    fn insert_at_cursor() {
        let mut buffer = NoteBuffer::new("- [ ] a\n- [ ] ");
        buffer.insert_at(CursorPos::new(1, 6), "b");
        assert_eq!(buffer.get_value(), "- [ ] a\n- [ ] b");
    }

    #[test]
    fn removes_trigger_span() {
        assert_eq!(
            replace_range("note !!ask", CursorPos::new(0, 5), CursorPos::new(0, 10), ""),
            "note "
        );
    }

    #[test]
    fn clamps_out_of_range_positions() {
        assert_eq!(
            replace_range("ab\ncd", CursorPos::new(9, 9), CursorPos::new(9, 9), "!"),
            "ab\ncd!"
        );
        assert_eq!(
            replace_range("ab\ncd", CursorPos::new(0, 99), CursorPos::new(1, 0), " "),
            "ab cd"
        );
    }

    #[test]
    fn multibyte_columns() {
        assert_eq!(
            replace_range("ééé", CursorPos::new(0, 1), CursorPos::new(0, 2), "x"),
            "éxé"
        );
    }
}
