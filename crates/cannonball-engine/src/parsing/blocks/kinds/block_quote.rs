/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Number of characters making up one quote prefix at the start of `s`
    /// (`>` plus one optional following space or tab), or `None` if `s`
    /// does not start with `>`.
    ///
    /// Only one level is stripped; nested quotes are handled by recursing
    /// on the remainder.
    pub fn prefix_len(s: &str) -> Option<usize> {
        let mut chars = s.chars();
        if chars.next()? != Self::PREFIX {
            return None;
        }
        match chars.next() {
            Some(' ' | '\t') => Some(2),
            _ => Some(1),
        }
    }
}
