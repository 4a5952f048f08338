use serde::Serialize;

use crate::parsing::CursorPos;

/// A trigger phrase typed before the cursor, and what follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerInfo {
    /// Where the phrase starts.
    pub start: CursorPos,
    /// The cursor itself.
    pub end: CursorPos,
    /// Text between the phrase and the cursor.
    pub query: String,
}

/// Looks for the last `phrase` in `line_text` before the cursor.
///
/// `line_text` is the text of the cursor's line. Returns `None` when the
/// phrase is empty or does not occur before the cursor.
pub fn detect_trigger(line_text: &str, cursor: CursorPos, phrase: &str) -> Option<TriggerInfo> {
    if phrase.is_empty() {
        return None;
    }
    let cut = line_text
        .char_indices()
        .nth(cursor.ch)
        .map_or(line_text.len(), |(b, _)| b);
    let before = &line_text[..cut];
    let at = before.rfind(phrase)?;
    Some(TriggerInfo {
        start: CursorPos::new(cursor.line, before[..at].chars().count()),
        end: cursor,
        query: before[at + phrase.len()..].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_phrase_and_query() {
        let info = detect_trigger("- [ ] !!plan the trip", CursorPos::new(4, 21), "!!").unwrap();
        assert_eq!(
            info,
            TriggerInfo {
                start: CursorPos::new(4, 6),
                end: CursorPos::new(4, 21),
                query: "plan the trip".into(),
            }
        );
    }

    #[test]
    fn uses_last_occurrence_before_cursor() {
        let info = detect_trigger("!!one !!two !!three", CursorPos::new(0, 11), "!!").unwrap();
        assert_eq!(info.start.ch, 6);
        assert_eq!(info.query, "two");
    }

    #[test]
    fn phrase_after_cursor_is_ignored() {
        assert_eq!(detect_trigger("text !!", CursorPos::new(0, 4), "!!"), None);
    }

    #[test]
    fn empty_phrase_never_triggers() {
        assert_eq!(detect_trigger("anything", CursorPos::new(0, 8), ""), None);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let info = detect_trigger("héllo ;;ask", CursorPos::new(0, 11), ";;").unwrap();
        assert_eq!(info.start.ch, 6);
        assert_eq!(info.query, "ask");
    }
}
