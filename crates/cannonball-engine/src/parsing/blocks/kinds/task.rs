/// The `[c]` checkbox that turns a list item into a custom task.
pub struct TaskMarker;

impl TaskMarker {
    /// Marker characters understood as tasks: todo, done, in progress,
    /// cancelled, question and decision.
    pub const MARKERS: [char; 8] = [' ', 'x', 'X', '/', '-', '?', 'd', 'D'];

    /// Parses a checkbox at the start of list item content.
    ///
    /// Returns the marker character and how many characters to skip to reach
    /// the task text (the checkbox plus following whitespace).
    pub fn parse(content: &str) -> Option<(char, usize)> {
        let chars: Vec<char> = content.chars().take(3).collect();
        let [open, marker, close] = chars[..] else {
            return None;
        };
        if open != '[' || close != ']' || !Self::MARKERS.contains(&marker) {
            return None;
        }
        let rest = &content[open.len_utf8() + marker.len_utf8() + close.len_utf8()..];
        let padding = rest.chars().take_while(|c| matches!(c, ' ' | '\t')).count();
        if padding == 0 && !rest.is_empty() {
            return None;
        }
        Some((marker, 3 + padding))
    }
}
