use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parsing::CursorPos;

/// Structural kind of the content at or near the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SemanticLabel {
    TaskList,
    Question,
    Decision,
    BulletList,
    #[default]
    GenericText,
}

impl SemanticLabel {
    pub const ALL: [SemanticLabel; 5] = [
        SemanticLabel::TaskList,
        SemanticLabel::Question,
        SemanticLabel::Decision,
        SemanticLabel::BulletList,
        SemanticLabel::GenericText,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SemanticLabel::TaskList => "TASK_LIST",
            SemanticLabel::Question => "QUESTION",
            SemanticLabel::Decision => "DECISION",
            SemanticLabel::BulletList => "BULLET_LIST",
            SemanticLabel::GenericText => "GENERIC_TEXT",
        }
    }

    /// Unknown names fall back to [`SemanticLabel::GenericText`].
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for SemanticLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown semantic label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for SemanticLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemanticLabel::ALL
            .into_iter()
            .find(|label| label.name() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Lines above and below the cursor searched when its own line has no match.
pub const WINDOW_RADIUS: usize = 3;

struct Rule {
    label: SemanticLabel,
    pattern: Regex,
}

impl Rule {
    fn matches(&self, line: &str) -> bool {
        let Some(found) = self.pattern.captures(line) else {
            return false;
        };
        if self.label != SemanticLabel::BulletList {
            return true;
        }
        // A bullet is only plain if no way of splitting the whitespace after
        // `-` leaves a `[` next: one space before `[` is a checkbox.
        let gap = found.get(1).map_or("", |m| m.as_str());
        let rest = &line[found.get(0).map_or(0, |m| m.end())..];
        gap.chars().count() > 1 || !rest.starts_with('[')
    }
}

/// The recognition rules in priority order. Task, question and decision are
/// special cases of a bullet and must be tried first.
fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (SemanticLabel::TaskList, r"^\s*-\s*\[\s*[ xX/-]\s*\]"),
            (SemanticLabel::Question, r"^\s*-\s*\[\s*\?\s*\]"),
            (SemanticLabel::Decision, r"^\s*-\s*\[\s*[dD]\s*\]"),
            (SemanticLabel::BulletList, r"^\s*-(\s+)"),
        ]
        .into_iter()
        .filter_map(|(label, pattern)| {
            Regex::new(pattern)
                .inspect_err(|e| log::error!("invalid {label} pattern: {e}"))
                .ok()
                .map(|pattern| Rule { label, pattern })
        })
        .collect()
    })
}

/// Labels the cursor's surroundings. CRLF line endings are treated like LF.
///
/// Each rule is tried against the cursor's own line first (an out-of-range
/// line counts as empty). If none matches, each rule in turn is tried
/// against every line within [`WINDOW_RADIUS`] of the cursor and the first
/// rule with any matching line wins.
pub fn classify(raw_text: &str, cursor: CursorPos) -> SemanticLabel {
    let lines: Vec<&str> = raw_text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let current = lines.get(cursor.line).copied().unwrap_or("");

    if let Some(rule) = rules().iter().find(|rule| rule.matches(current)) {
        return rule.label;
    }

    let lo = cursor.line.saturating_sub(WINDOW_RADIUS).min(lines.len());
    let hi = (cursor.line + WINDOW_RADIUS + 1).min(lines.len());
    let window = &lines[lo..hi.max(lo)];
    rules()
        .iter()
        .find(|rule| window.iter().any(|line| rule.matches(line)))
        .map_or(SemanticLabel::GenericText, |rule| rule.label)
}
