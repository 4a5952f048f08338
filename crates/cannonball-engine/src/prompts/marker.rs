use crate::parsing::CursorPos;

/// Placeholder the model sees where the user's cursor is.
pub const CURSOR_MARKER: &str = "<CURSOR>";

/// Inserts [`CURSOR_MARKER`] at `cursor`.
///
/// The line is clamped to the last line and the character offset to the
/// length of that line, so any cursor lands somewhere in the text.
pub fn insert_cursor_marker(text: &str, cursor: CursorPos) -> String {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let line = cursor.line.min(lines.len() - 1);
    let target = &mut lines[line];
    let byte = target
        .char_indices()
        .nth(cursor.ch)
        .map_or(target.len(), |(b, _)| b);
    target.insert_str(byte, CURSOR_MARKER);
    lines.join("\n")
}

/// Removes the first [`CURSOR_MARKER`], undoing [`insert_cursor_marker`].
pub fn remove_cursor_marker(text: &str) -> String {
    text.replacen(CURSOR_MARKER, "", 1)
}
