use crate::{
    api::CheckOutcome,
    core::{
        models::{
            Level,
            WordEntry,
        },
        state::Ticket,
        WordsheetError,
    },
    quiz::PendingCheck,
    sheet::{
        PrintRequest,
        SheetDocument,
    },
};

/// Completed background work, handed back to the UI thread.
#[derive(Debug)]
pub enum TaskResult {
    LevelsLoaded {
        ticket: Ticket,
        result: Result<Vec<Level>, WordsheetError>,
    },
    QuizWordsLoaded {
        ticket: Ticket,
        level: Level,
        result: Result<Vec<WordEntry>, WordsheetError>,
    },
    AnswerChecked {
        pending: PendingCheck,
        result: Result<CheckOutcome, WordsheetError>,
    },
    SheetGenerated {
        ticket: Ticket,
        request: PrintRequest,
        result: Result<SheetDocument, WordsheetError>,
    },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::LevelsLoaded { .. } => "levels",
            TaskResult::QuizWordsLoaded { .. } => "quiz_words",
            TaskResult::AnswerChecked { .. } => "answer_check",
            TaskResult::SheetGenerated { .. } => "sheet",
        }
    }
}
