/// The character a fence is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn char(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// What a line looks like if it is a fence: kind, run length and info string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
    pub info: String,
}

pub struct CodeFence;

impl CodeFence {
    /// Shortest run of fence characters that opens a block.
    pub const MIN_LEN: usize = 3;

    /// Detects a fence at the start of `remainder` (indentation already removed).
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let kind = match remainder.chars().next()? {
            '`' => FenceKind::Backticks,
            '~' => FenceKind::Tildes,
            _ => return None,
        };
        let len = remainder.chars().take_while(|&c| c == kind.char()).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = remainder[len..].trim();
        // A backtick fence's info string may not contain backticks.
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            info: info.to_string(),
        })
    }

    /// Whether `sig` closes a fence opened as `open`.
    pub fn closes(open: &FenceSig, sig: Option<&FenceSig>) -> bool {
        matches!(sig, Some(s) if s.kind == open.kind && s.len >= open.len && s.info.is_empty())
    }

    /// Splits an info string into language and the rest.
    pub fn split_info(info: &str) -> (Option<String>, Option<String>) {
        let info = info.trim();
        if info.is_empty() {
            return (None, None);
        }
        match info.split_once(char::is_whitespace) {
            Some((lang, meta)) => {
                let meta = meta.trim();
                (
                    Some(lang.to_string()),
                    (!meta.is_empty()).then(|| meta.to_string()),
                )
            }
            None => (Some(info.to_string()), None),
        }
    }

    /// A fence long enough to wrap `value` safely. Backticks unless the info
    /// string contains one, which only a tilde fence can carry.
    pub fn fence_for(value: &str, info: &str) -> String {
        let kind = if info.contains(FenceKind::Backticks.char()) {
            FenceKind::Tildes
        } else {
            FenceKind::Backticks
        };
        let longest = longest_run(value, kind.char());
        kind.char().to_string().repeat(Self::MIN_LEN.max(longest + 1))
    }
}

/// Length of the longest run of `c` in `s`.
pub fn longest_run(s: &str, c: char) -> usize {
    let mut best = 0;
    let mut cur = 0;
    for ch in s.chars() {
        if ch == c {
            cur += 1;
            best = best.max(cur);
        } else {
            cur = 0;
        }
    }
    best
}
