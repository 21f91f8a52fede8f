use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub meaning: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self { word: word.into(), meaning: meaning.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub count: u32,
}

impl Level {
    pub fn new(id: impl Into<String>, name: impl Into<String>, count: u32) -> Self {
        Self { id: id.into(), name: name.into(), count }
    }
}

/// A 1-based inclusive interval of word positions within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        (self.end as usize + 1).saturating_sub(self.start as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, position: u32) -> bool {
        (self.start..=self.end).contains(&position)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self { start: 1, end: 500 }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationMode {
    #[default]
    Full,
    WordOnly,
    MeaningOnly,
}

impl PresentationMode {
    pub const ALL: [PresentationMode; 3] =
        [PresentationMode::Full, PresentationMode::WordOnly, PresentationMode::MeaningOnly];

    pub fn label(&self) -> &'static str {
        match self {
            PresentationMode::Full => "word list",
            PresentationMode::WordOnly => "quiz (word → meaning)",
            PresentationMode::MeaningOnly => "quiz (meaning → word)",
        }
    }

    pub fn shows_word(&self) -> bool {
        !matches!(self, PresentationMode::MeaningOnly)
    }

    pub fn shows_meaning(&self) -> bool {
        !matches!(self, PresentationMode::WordOnly)
    }

    /// Whether words and meanings come from independent ranges.
    pub fn is_dual_range(&self) -> bool {
        matches!(self, PresentationMode::Full)
    }
}

/// One composed table row. `None` marks a cell left blank for the student to fill in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub number: u32,
    pub word: Option<String>,
    pub meaning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub level_id: String,
    pub level_name: String,
    pub word_range: Range,
    pub meaning_range: Range,
    pub mode: PresentationMode,
    #[serde(default)]
    pub answer_key: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HistoryEntry {
    pub fn format_timestamp(&self) -> String {
        let local_time = self.timestamp.with_timezone(&chrono::Local);
        local_time.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn summary(&self) -> String {
        let kind = if self.answer_key { "answer sheet" } else { self.mode.label() };
        if self.mode.is_dual_range() {
            format!("{} {} (words {}, meanings {})", self.level_name, kind, self.word_range, self.meaning_range)
        } else {
            format!("{} {} ({})", self.level_name, kind, self.word_range)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongAnswer {
    pub word: String,
    pub meaning: String,
    pub user_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_length_and_membership() {
        let range = Range::new(3, 7);
        assert_eq!(range.len(), 5);
        assert!(range.contains(3));
        assert!(range.contains(7));
        assert!(!range.contains(8));
        assert!(Range::new(5, 4).is_empty());
    }

    #[test]
    fn presentation_mode_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&PresentationMode::MeaningOnly).unwrap();
        assert_eq!(json, "\"meaning-only\"");
        let mode: PresentationMode = serde_json::from_str("\"word-only\"").unwrap();
        assert_eq!(mode, PresentationMode::WordOnly);
    }

    #[test]
    fn word_entry_ignores_extra_wire_fields() {
        let entry: WordEntry =
            serde_json::from_str(r#"{"no": 4, "word": "cat", "meaning": "n. 고양이"}"#).unwrap();
        assert_eq!(entry, WordEntry::new("cat", "n. 고양이"));
    }

    #[test]
    fn history_entry_defaults_answer_key() {
        let json = r#"{
            "levelId": "a",
            "levelName": "A",
            "wordRange": {"start": 1, "end": 10},
            "meaningRange": {"start": 1, "end": 10},
            "mode": "full",
            "timestamp": "2024-03-01T10:00:00Z"
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.answer_key);
        assert_eq!(entry.summary(), "A word list (words 1-10, meanings 1-10)");
    }
}
