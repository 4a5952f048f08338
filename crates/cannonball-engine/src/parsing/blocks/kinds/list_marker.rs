/// Bullet or ordered list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Bullet(char),
    Ordered { number: u32, delimiter: char },
}

/// A list item marker at the start of a line (indentation already removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub kind: MarkerKind,
    /// Characters from the marker start to the item content.
    pub content_offset: usize,
    /// Nothing follows the marker on its line.
    pub is_empty: bool,
}

impl ListMarker {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const DELIMITERS: [char; 2] = ['.', ')'];
    /// Ordered list numbers have at most nine digits.
    pub const MAX_DIGITS: usize = 9;
    /// More whitespace than this after the marker means the content starts one column in.
    const MAX_PADDING: usize = 4;

    pub fn parse(s: &str) -> Option<ListMarker> {
        let chars: Vec<char> = s.chars().collect();
        let first = *chars.first()?;

        let (kind, width) = if Self::BULLETS.contains(&first) {
            (MarkerKind::Bullet(first), 1)
        } else {
            let digits = chars.iter().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 || digits > Self::MAX_DIGITS {
                return None;
            }
            let delimiter = *chars.get(digits)?;
            if !Self::DELIMITERS.contains(&delimiter) {
                return None;
            }
            let number: String = chars[..digits].iter().collect();
            let number = number.parse().ok()?;
            (MarkerKind::Ordered { number, delimiter }, digits + 1)
        };

        let rest = &chars[width..];
        let padding = rest.iter().take_while(|c| matches!(c, ' ' | '\t')).count();
        let is_empty = padding == rest.len();
        if padding == 0 && !is_empty {
            return None;
        }

        let content_offset = if is_empty || padding > Self::MAX_PADDING {
            width + 1
        } else {
            width + padding
        };

        Some(ListMarker {
            kind,
            content_offset,
            is_empty,
        })
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self.kind, MarkerKind::Ordered { .. })
    }

    pub fn start(&self) -> Option<u32> {
        match self.kind {
            MarkerKind::Ordered { number, .. } => Some(number),
            MarkerKind::Bullet(_) => None,
        }
    }

    /// Whether `other` continues the same list as `self`.
    pub fn same_list(&self, other: &ListMarker) -> bool {
        match (self.kind, other.kind) {
            (MarkerKind::Bullet(a), MarkerKind::Bullet(b)) => a == b,
            (
                MarkerKind::Ordered { delimiter: a, .. },
                MarkerKind::Ordered { delimiter: b, .. },
            ) => a == b,
            _ => false,
        }
    }

    /// Whether a line with this marker may interrupt a paragraph.
    pub fn can_interrupt_paragraph(&self) -> bool {
        !self.is_empty && self.start().is_none_or(|n| n == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_markers() {
        let m = ListMarker::parse("- item").unwrap();
        assert_eq!(m.kind, MarkerKind::Bullet('-'));
        assert_eq!(m.content_offset, 2);
        assert!(!m.is_empty);

        let m = ListMarker::parse("*   wide").unwrap();
        assert_eq!(m.content_offset, 4);
    }

    #[test]
    fn ordered_markers() {
        let m = ListMarker::parse("12. twelve").unwrap();
        assert_eq!(
            m.kind,
            MarkerKind::Ordered {
                number: 12,
                delimiter: '.'
            }
        );
        assert_eq!(m.content_offset, 4);
        assert_eq!(m.start(), Some(12));
    }

    #[test]
    fn empty_item_content_starts_one_past_marker() {
        let m = ListMarker::parse("-").unwrap();
        assert!(m.is_empty);
        assert_eq!(m.content_offset, 2);
    }

    #[test]
    fn not_markers() {
        assert_eq!(ListMarker::parse("-item"), None);
        assert_eq!(ListMarker::parse("1.5 apples"), None);
        assert_eq!(ListMarker::parse("text"), None);
        assert_eq!(ListMarker::parse(""), None);
        assert_eq!(ListMarker::parse("1234567890. big"), None);
    }

    #[test]
    fn same_list_requires_same_bullet_or_delimiter() {
        let dash = ListMarker::parse("- a").unwrap();
        assert!(dash.same_list(&ListMarker::parse("- b").unwrap()));
        assert!(!dash.same_list(&ListMarker::parse("* b").unwrap()));
        let dot = ListMarker::parse("1. a").unwrap();
        assert!(dot.same_list(&ListMarker::parse("7. b").unwrap()));
        assert!(!dot.same_list(&ListMarker::parse("2) b").unwrap()));
    }

    #[test]
    fn only_first_ordered_item_interrupts_paragraph() {
        assert!(ListMarker::parse("1. a").unwrap().can_interrupt_paragraph());
        assert!(!ListMarker::parse("2. a").unwrap().can_interrupt_paragraph());
        assert!(!ListMarker::parse("-").unwrap().can_interrupt_paragraph());
    }
}
