/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    /// Turns the raw characters between the backtick runs into the span's value.
    ///
    /// Line endings become spaces, and one space is stripped from each side
    /// when both sides have one and the content is not all spaces.
    pub fn normalize(raw: &str) -> String {
        let value = raw.replace('\n', " ");
        let padded = value.len() >= 2 && value.starts_with(' ') && value.ends_with(' ');
        if padded && !value.chars().all(|c| c == ' ') {
            value[1..value.len() - 1].to_string()
        } else {
            value
        }
    }
}
