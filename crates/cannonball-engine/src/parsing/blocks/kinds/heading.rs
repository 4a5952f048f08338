/// An ATX heading line: `#` to `######` followed by a space or end of line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtxHeading {
    pub depth: u8,
    /// Char offset of the content inside the line (after `#`s and spaces).
    pub content_start: usize,
    /// Char offset just past the content (closing `#` run and spaces removed).
    pub content_end: usize,
}

impl AtxHeading {
    pub const MARKER: char = '#';
    pub const MAX_DEPTH: usize = 6;

    /// Parses a heading from a line whose indentation is already removed.
    pub fn parse(s: &str) -> Option<AtxHeading> {
        let chars: Vec<char> = s.trim_end().chars().collect();
        let depth = chars.iter().take_while(|&&c| c == Self::MARKER).count();
        if depth == 0 || depth > Self::MAX_DEPTH {
            return None;
        }
        if let Some(c) = chars.get(depth)
            && !matches!(c, ' ' | '\t')
        {
            return None;
        }

        let mut start = depth;
        while start < chars.len() && matches!(chars[start], ' ' | '\t') {
            start += 1;
        }

        // Optional closing sequence: a run of `#` preceded by whitespace.
        let mut end = chars.len();
        let mut hashes = end;
        while hashes > start && chars[hashes - 1] == Self::MARKER {
            hashes -= 1;
        }
        if hashes < end && (hashes == start || matches!(chars[hashes - 1], ' ' | '\t')) {
            end = hashes;
        }
        while end > start && matches!(chars[end - 1], ' ' | '\t') {
            end -= 1;
        }

        Some(AtxHeading {
            depth: depth as u8,
            content_start: start,
            content_end: end,
        })
    }
}

/// A setext underline (`===` or `---`) that turns the paragraph above into a heading.
pub struct Setext;

impl Setext {
    /// Heading depth for an underline, or `None` if the line is not one.
    pub fn depth(s: &str) -> Option<u8> {
        let t = s.trim_end();
        let first = t.chars().next()?;
        let depth = match first {
            '=' => 1,
            '-' => 2,
            _ => return None,
        };
        t.chars().all(|c| c == first).then_some(depth)
    }
}
