pub mod compose;
pub mod html;

pub use compose::{
    compose,
    SheetDocument,
    PLACEHOLDER,
};
pub use html::render_html;

use crate::{
    api::{
        WordQuery,
        WordSource,
    },
    core::{
        models::{
            HistoryEntry,
            Level,
            PresentationMode,
            Range,
        },
        WordsheetError,
    },
};

/// A validated worksheet request, ready to fetch and compose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintRequest {
    pub level_id: String,
    pub level_name: String,
    pub mode: PresentationMode,
    pub word_range: Range,
    pub meaning_range: Range,
    pub answer_key: bool,
}

impl PrintRequest {
    pub fn new(level: &Level, mode: PresentationMode, word_range: Range, meaning_range: Range) -> Self {
        Self {
            level_id: level.id.clone(),
            level_name: level.name.clone(),
            mode,
            word_range,
            meaning_range,
            answer_key: false,
        }
    }

    pub fn with_answer_key(mut self, answer_key: bool) -> Self {
        self.answer_key = answer_key;
        self
    }

    pub fn to_history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            level_id: self.level_id.clone(),
            level_name: self.level_name.clone(),
            word_range: self.word_range,
            meaning_range: self.meaning_range,
            mode: self.mode,
            answer_key: self.answer_key,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn from_history_entry(entry: &HistoryEntry) -> Self {
        Self {
            level_id: entry.level_id.clone(),
            level_name: entry.level_name.clone(),
            mode: entry.mode,
            word_range: entry.word_range,
            meaning_range: entry.meaning_range,
            answer_key: entry.answer_key,
        }
    }
}

/// Fetches the slices a request needs and composes them.
///
/// Only `Full` sheets read a separate meaning range, and identical ranges are
/// fetched once.
pub async fn build_sheet<S: WordSource>(
    source: &S,
    request: &PrintRequest,
) -> Result<SheetDocument, WordsheetError> {
    let words = source.fetch_words(&request.level_id, WordQuery::Range(request.word_range)).await?;

    let meanings = if !request.mode.is_dual_range() {
        Vec::new()
    } else if request.meaning_range == request.word_range {
        words.clone()
    } else {
        source.fetch_words(&request.level_id, WordQuery::Range(request.meaning_range)).await?
    };

    let document = compose(
        &request.level_name,
        request.word_range,
        request.meaning_range,
        request.mode,
        &words,
        &meanings,
        request.answer_key,
    );
    log::info!("Composed \"{}\" with {} rows", document.title, document.rows.len());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        api::MemoryWordSource,
        core::models::WordEntry,
    };

    struct CountingSource {
        inner: MemoryWordSource,
        calls: Cell<usize>,
    }

    impl WordSource for CountingSource {
        async fn fetch_levels(&self) -> Result<Vec<Level>, WordsheetError> {
            self.inner.fetch_levels().await
        }

        async fn fetch_words(
            &self,
            level_id: &str,
            query: WordQuery,
        ) -> Result<Vec<WordEntry>, WordsheetError> {
            self.calls.set(self.calls.get() + 1);
            self.inner.fetch_words(level_id, query).await
        }
    }

    fn source(count: usize) -> CountingSource {
        let words = (1..=count).map(|i| WordEntry::new(format!("w{i}"), format!("m{i}"))).collect();
        CountingSource { inner: MemoryWordSource::new().with_level("a", "Alpha", words), calls: Cell::new(0) }
    }

    fn level() -> Level {
        Level::new("a", "Alpha", 20)
    }

    #[tokio::test]
    async fn dual_range_fetches_both_slices() {
        let source = source(20);
        let request =
            PrintRequest::new(&level(), PresentationMode::Full, Range::new(1, 5), Range::new(11, 13));

        let sheet = build_sheet(&source, &request).await.unwrap();
        assert_eq!(source.calls.get(), 2);
        assert_eq!(sheet.rows.len(), 5);
        assert_eq!(sheet.rows[0].meaning.as_deref(), Some("m11"));
        assert_eq!(sheet.rows[3].meaning.as_deref(), Some(PLACEHOLDER));
    }

    #[tokio::test]
    async fn identical_ranges_are_fetched_once() {
        let source = source(20);
        let range = Range::new(2, 4);
        let request = PrintRequest::new(&level(), PresentationMode::Full, range, range);

        let sheet = build_sheet(&source, &request).await.unwrap();
        assert_eq!(source.calls.get(), 1);
        assert_eq!(sheet.rows[0].word.as_deref(), Some("w2"));
        assert_eq!(sheet.rows[0].meaning.as_deref(), Some("m2"));
    }

    #[tokio::test]
    async fn single_range_ignores_meaning_range() {
        let source = source(20);
        let request = PrintRequest::new(
            &level(),
            PresentationMode::MeaningOnly,
            Range::new(6, 8),
            Range::new(1, 20),
        );

        let sheet = build_sheet(&source, &request).await.unwrap();
        assert_eq!(source.calls.get(), 1);
        let numbers: Vec<u32> = sheet.rows.iter().map(|row| row.number).collect();
        assert_eq!(numbers, [6, 7, 8]);
    }

    #[tokio::test]
    async fn fetch_failure_is_propagated() {
        let source = MemoryWordSource::new();
        let request =
            PrintRequest::new(&level(), PresentationMode::Full, Range::new(1, 2), Range::new(1, 2));
        assert!(matches!(build_sheet(&source, &request).await, Err(WordsheetError::Api(_))));
    }

    #[test]
    fn history_entry_round_trips_request() {
        let request =
            PrintRequest::new(&level(), PresentationMode::WordOnly, Range::new(3, 9), Range::new(1, 2))
                .with_answer_key(true);
        assert_eq!(PrintRequest::from_history_entry(&request.to_history_entry()), request);
    }
}
