pub struct ThematicBreak;

impl ThematicBreak {
    /// What the serializer writes.
    pub const CANONICAL: &'static str = "***";

    /// Three or more `*`, `-` or `_` (all the same), optionally separated by spaces.
    pub fn matches(s: &str) -> bool {
        let mut marker = None;
        let mut count = 0;
        for c in s.trim_end().chars() {
            match c {
                ' ' | '\t' => continue,
                '*' | '-' | '_' => {
                    if marker.is_some_and(|m| m != c) {
                        return false;
                    }
                    marker = Some(c);
                    count += 1;
                }
                _ => return false,
            }
        }
        count >= 3
    }
}
