use crate::parsing::{
    lines::LineRef,
    position::{Point, Position},
};

/// The characters of an inline run (one or more lines joined by `\n`) with
/// the document point of every character.
///
/// A joining `\n` sits at the end point of the line before it, so a node
/// ending just before a line break ends where that line's text ends.
#[derive(Debug, Clone)]
pub struct InlineSource {
    chars: Vec<char>,
    points: Vec<Point>,
    end: Point,
}

impl InlineSource {
    pub fn from_lines(lines: &[LineRef]) -> Self {
        let mut chars = vec![];
        let mut points = vec![];
        let mut end = lines.first().map_or(Point::START, |l| l.point_at(0));
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                chars.push('\n');
                points.push(end);
            }
            for (j, c) in line.text.chars().enumerate() {
                chars.push(c);
                points.push(line.point_at(j));
            }
            end = line.raw_end_point();
        }
        Self { chars, points, end }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Point of the character at `idx`, or the end point past the last one.
    pub fn point(&self, idx: usize) -> Point {
        self.points.get(idx).copied().unwrap_or(self.end)
    }

    pub fn position(&self, start: usize, end: usize) -> Position {
        Position::new(self.point(start), self.point(end))
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }
}
