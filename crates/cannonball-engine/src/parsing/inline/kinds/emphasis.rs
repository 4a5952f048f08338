/// Emphasis and strong delimiters.
///
/// A run of one marker opens emphasis, a run of two opens strong. Longer runs
/// are left as text.
pub struct Emphasis;

impl Emphasis {
    pub const MARKERS: [char; 2] = ['*', '_'];
    pub const STRONG_LEN: usize = 2;

    pub fn is_marker(c: char) -> bool {
        Self::MARKERS.contains(&c)
    }

    /// Whether a run of `marker` between `before` and `after` may open.
    ///
    /// The run must be followed by non-whitespace; `_` may not open inside a word.
    pub fn can_open(marker: char, before: Option<char>, after: Option<char>) -> bool {
        after.is_some_and(|c| !c.is_whitespace())
            && (marker != '_' || !before.is_some_and(char::is_alphanumeric))
    }

    /// Mirror image of [`Emphasis::can_open`].
    pub fn can_close(marker: char, before: Option<char>, after: Option<char>) -> bool {
        before.is_some_and(|c| !c.is_whitespace())
            && (marker != '_' || !after.is_some_and(char::is_alphanumeric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_opens_anywhere_before_text() {
        assert!(Emphasis::can_open('*', Some('a'), Some('b')));
        assert!(!Emphasis::can_open('*', None, Some(' ')));
        assert!(!Emphasis::can_open('*', None, None));
    }

    #[test]
    fn underscore_is_not_intraword() {
        assert!(!Emphasis::can_open('_', Some('a'), Some('b')));
        assert!(Emphasis::can_open('_', Some(' '), Some('b')));
        assert!(!Emphasis::can_close('_', Some('b'), Some('c')));
        assert!(Emphasis::can_close('_', Some('b'), Some('.')));
    }
}
