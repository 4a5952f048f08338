/// A cursor for character-by-character inline parsing.
///
/// Walks a window `[i, end)` of a shared character buffer. Indices are
/// absolute into the buffer, so nested parses share one coordinate space.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The whole buffer being parsed.
    pub s: &'a [char],
    /// Current index into `s`.
    pub i: usize,
    /// Exclusive end of the window.
    pub end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a [char], start: usize, end: usize) -> Self {
        Self { s, i: start, end }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.end
    }

    /// Current character, or `None` at the end of the window.
    pub fn peek(&self) -> Option<char> {
        if self.eof() {
            None
        } else {
            self.s.get(self.i).copied()
        }
    }

    /// Character `offset` ahead in the buffer, ignoring the window end.
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.s.get(self.i + offset).copied()
    }

    /// Character just before the cursor in the buffer, ignoring the window start.
    pub fn prev(&self) -> Option<char> {
        self.i.checked_sub(1).and_then(|p| self.s.get(p).copied())
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += 1;
        Some(c)
    }

    /// Advances by `n` characters, stopping at the window end.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.end.max(self.i));
    }

    /// Length of the run of `c` starting at the cursor, within the window.
    pub fn run_len(&self, c: char) -> usize {
        self.s[self.i.min(self.end)..self.end]
            .iter()
            .take_while(|&&x| x == c)
            .count()
    }
}
