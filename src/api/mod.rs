//! Access to the word/level backend and the answer-checking collaborator.

pub mod http;
pub mod local_check;
pub mod memory;
pub mod types;

pub use http::HttpWordSource;
pub use local_check::LocalAnswerChecker;
pub use memory::MemoryWordSource;
use serde::Serialize;

use crate::core::{
    models::{
        Level,
        Range,
        WordEntry,
    },
    WordsheetError,
};

/// How many words to pull from a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordQuery {
    /// The first N entries, N capped by the server.
    Count(u32),
    /// Entries whose 1-based position lies in the range.
    Range(Range),
}

#[allow(async_fn_in_trait)]
pub trait WordSource {
    async fn fetch_levels(&self) -> Result<Vec<Level>, WordsheetError>;

    async fn fetch_words(
        &self,
        level_id: &str,
        query: WordQuery,
    ) -> Result<Vec<WordEntry>, WordsheetError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRequest {
    pub word: String,
    pub answer: String,
    #[serde(rename = "correct")]
    pub expected: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
}

#[allow(async_fn_in_trait)]
pub trait AnswerChecker {
    async fn check(&self, request: &CheckRequest) -> Result<CheckOutcome, WordsheetError>;
}
