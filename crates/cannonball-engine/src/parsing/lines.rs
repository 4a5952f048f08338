use super::position::Point;

/// Width of a tab stop when measuring indentation.
pub const TAB_STOP: usize = 4;

/// A borrowed slice of one physical source line.
///
/// Containers strip their prefixes by producing narrower `LineRef`s, so
/// `column` is where `text` begins in the original line. That keeps every
/// node position exact however deep the nesting goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based line number in the document.
    pub number: usize,
    /// 1-based column of the first character of `text`.
    pub column: usize,
    /// Line text without the newline (and without a trailing `\r`).
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Point of the `idx`-th character of `text`.
    pub fn point_at(&self, idx: usize) -> Point {
        Point::new(self.number, self.column + idx)
    }

    /// Point just past the last non-whitespace character.
    pub fn end_point(&self) -> Point {
        self.point_at(self.text.trim_end().chars().count())
    }

    /// Point just past the last character, trailing whitespace included.
    pub fn raw_end_point(&self) -> Point {
        self.point_at(self.text.chars().count())
    }

    /// Drops the first `n` characters (or all of them if the line is shorter).
    pub fn skip_chars(&self, n: usize) -> LineRef<'a> {
        let byte = self
            .text
            .char_indices()
            .nth(n)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len());
        let skipped = self.text[..byte].chars().count();
        LineRef {
            number: self.number,
            column: self.column + skipped,
            text: &self.text[byte..],
        }
    }

    /// Keeps only the first `n` characters.
    pub fn take_chars(&self, n: usize) -> LineRef<'a> {
        let byte = self
            .text
            .char_indices()
            .nth(n)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len());
        LineRef {
            text: &self.text[..byte],
            ..*self
        }
    }

    /// Drops trailing spaces and tabs.
    pub fn trim_end(&self) -> LineRef<'a> {
        LineRef {
            text: self.text.trim_end_matches([' ', '\t']),
            ..*self
        }
    }

    /// Drops all leading spaces and tabs.
    pub fn trim_start(&self) -> LineRef<'a> {
        self.skip_chars(self.indent_chars())
    }

    /// Number of leading space/tab characters.
    pub fn indent_chars(&self) -> usize {
        self.text.chars().take_while(|c| matches!(c, ' ' | '\t')).count()
    }

    /// Visual width of the leading whitespace, with tabs advancing to the next stop.
    pub fn indent_width(&self) -> usize {
        let mut width = 0;
        for c in self.text.chars() {
            match c {
                ' ' => width += 1,
                '\t' => width += TAB_STOP - width % TAB_STOP,
                _ => break,
            }
        }
        width
    }

    /// Removes leading whitespace worth `width` columns.
    ///
    /// A tab that straddles the boundary is removed entirely.
    pub fn strip_indent(&self, width: usize) -> LineRef<'a> {
        let mut seen = 0;
        let mut chars = 0;
        for c in self.text.chars() {
            if seen >= width {
                break;
            }
            match c {
                ' ' => seen += 1,
                '\t' => seen += TAB_STOP - seen % TAB_STOP,
                _ => break,
            }
            chars += 1;
        }
        self.skip_chars(chars)
    }
}

/// Splits text into physical lines. A trailing newline yields a final empty line.
pub fn split_lines(text: &str) -> Vec<LineRef<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(i, raw)| LineRef {
            number: i + 1,
            column: 1,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        })
        .collect()
}
