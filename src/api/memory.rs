use super::{
    WordQuery,
    WordSource,
};
use crate::core::{
    models::{
        Level,
        WordEntry,
    },
    WordsheetError,
};

/// A fixed in-memory catalog answering with the backend's count/range semantics.
#[derive(Debug, Clone, Default)]
pub struct MemoryWordSource {
    levels: Vec<(Level, Vec<WordEntry>)>,
}

impl MemoryWordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        words: Vec<WordEntry>,
    ) -> Self {
        let level = Level::new(id, name, words.len() as u32);
        self.levels.push((level, words));
        self
    }

    fn words_for(&self, level_id: &str) -> Result<&[WordEntry], WordsheetError> {
        self.levels
            .iter()
            .find(|(level, _)| level.id == level_id)
            .map(|(_, words)| words.as_slice())
            .ok_or_else(|| WordsheetError::Api(format!("Unknown level: {level_id}")))
    }
}

impl WordSource for MemoryWordSource {
    async fn fetch_levels(&self) -> Result<Vec<Level>, WordsheetError> {
        Ok(self.levels.iter().map(|(level, _)| level.clone()).collect())
    }

    async fn fetch_words(
        &self,
        level_id: &str,
        query: WordQuery,
    ) -> Result<Vec<WordEntry>, WordsheetError> {
        let words = self.words_for(level_id)?;
        let selected = match query {
            WordQuery::Count(count) => words.iter().take(count as usize).cloned().collect(),
            WordQuery::Range(range) => words
                .iter()
                .enumerate()
                .filter(|(index, _)| range.contains(*index as u32 + 1))
                .map(|(_, entry)| entry.clone())
                .collect(),
        };
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Range;

    fn numbered(count: usize) -> Vec<WordEntry> {
        (1..=count).map(|i| WordEntry::new(format!("w{i}"), format!("m{i}"))).collect()
    }

    #[tokio::test]
    async fn range_positions_are_one_based_and_inclusive() {
        let source = MemoryWordSource::new().with_level("a", "A", numbered(10));
        let words = source.fetch_words("a", WordQuery::Range(Range::new(3, 5))).await.unwrap();
        let names: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(names, ["w3", "w4", "w5"]);
    }

    #[tokio::test]
    async fn over_range_returns_what_exists() {
        let source = MemoryWordSource::new().with_level("a", "A", numbered(4));
        let words = source.fetch_words("a", WordQuery::Range(Range::new(3, 9))).await.unwrap();
        assert_eq!(words.len(), 2);
        let counted = source.fetch_words("a", WordQuery::Count(100)).await.unwrap();
        assert_eq!(counted.len(), 4);
    }

    #[tokio::test]
    async fn unknown_level_is_an_api_error() {
        let source = MemoryWordSource::new();
        assert!(matches!(
            source.fetch_words("nope", WordQuery::Count(1)).await,
            Err(WordsheetError::Api(_))
        ));
    }
}
