use crate::parsing::lines::{LineRef, TAB_STOP};

use super::kinds::{AtxHeading, BlockQuote, CodeFence, FenceSig, ListMarker, ThematicBreak};

/// What a single line could open, judged from the line alone.
///
/// This is phase 1 of block parsing. Context-dependent decisions (setext
/// underlines, lazy continuation, whether a list marker may interrupt a
/// paragraph) are left to the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Fence(FenceSig),
    Heading(AtxHeading),
    ThematicBreak,
    Quote,
    ListItem(ListMarker),
    Text,
}

impl LineClass {
    /// Whether this line starts a new block regardless of what precedes it.
    pub fn is_opener(&self) -> bool {
        !matches!(self, LineClass::Blank | LineClass::Text)
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line relative to the container it sits in.
    ///
    /// Openers only count when indented less than one tab stop; anything
    /// deeper is plain text.
    pub fn classify(line: &LineRef) -> LineClass {
        if line.is_blank() {
            return LineClass::Blank;
        }
        if line.indent_width() >= TAB_STOP {
            return LineClass::Text;
        }
        let rest = line.trim_start().text;

        if let Some(sig) = CodeFence::sig(rest) {
            return LineClass::Fence(sig);
        }
        if let Some(heading) = AtxHeading::parse(rest) {
            return LineClass::Heading(heading);
        }
        // Checked before lists so `- - -` and `* * *` are breaks.
        if ThematicBreak::matches(rest) {
            return LineClass::ThematicBreak;
        }
        if BlockQuote::prefix_len(rest).is_some() {
            return LineClass::Quote;
        }
        if let Some(marker) = ListMarker::parse(rest) {
            return LineClass::ListItem(marker);
        }
        LineClass::Text
    }
}
