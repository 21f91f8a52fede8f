use super::{
    models::{
        HistoryEntry,
        Level,
        PresentationMode,
        Range,
        WordEntry,
    },
    range::RangeSelector,
    WordsheetError,
};
use crate::{
    history::HistoryStore,
    quiz::QuizEngine,
    sheet::{
        PrintRequest,
        SheetDocument,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks the latest outstanding request of one kind so older results can be dropped.
#[derive(Debug, Default)]
pub struct RequestSlot {
    latest: u64,
}

impl RequestSlot {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// Raw worksheet form input as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintForm {
    pub level_id: String,
    pub mode: PresentationMode,
    pub word_start: String,
    pub word_end: String,
    pub meaning_start: String,
    pub meaning_end: String,
    pub answer_key: bool,
}

impl PrintForm {
    pub fn with_defaults(defaults: Range) -> Self {
        Self {
            level_id: String::new(),
            mode: PresentationMode::Full,
            word_start: defaults.start.to_string(),
            word_end: defaults.end.to_string(),
            meaning_start: defaults.start.to_string(),
            meaning_end: defaults.end.to_string(),
            answer_key: false,
        }
    }

    pub fn from_history(entry: &HistoryEntry) -> Self {
        Self {
            level_id: entry.level_id.clone(),
            mode: entry.mode,
            word_start: entry.word_range.start.to_string(),
            word_end: entry.word_range.end.to_string(),
            meaning_start: entry.meaning_range.start.to_string(),
            meaning_end: entry.meaning_range.end.to_string(),
            answer_key: entry.answer_key,
        }
    }

    /// Single-range modes reuse the word range for meanings.
    pub fn to_request(
        &self,
        levels: &[Level],
        selector: &RangeSelector,
    ) -> Result<PrintRequest, WordsheetError> {
        let level = levels
            .iter()
            .find(|level| level.id == self.level_id)
            .ok_or_else(|| WordsheetError::Validation("Choose a level first".to_string()))?;

        let selector = selector.clone().with_level_count(Some(level.count));
        let word_range = selector.validate(&self.word_start, &self.word_end)?;
        let meaning_range = if self.mode.is_dual_range() {
            selector.validate(&self.meaning_start, &self.meaning_end)?
        } else {
            word_range
        };

        Ok(PrintRequest::new(level, self.mode, word_range, meaning_range)
            .with_answer_key(self.answer_key))
    }
}

/// Everything the UI mutates, owned in one place.
pub struct AppState {
    levels: Vec<Level>,
    selector: RangeSelector,
    quiz: QuizEngine,
    history: HistoryStore,
    print_form: PrintForm,
    document: Option<SheetDocument>,
    levels_slot: RequestSlot,
    quiz_slot: RequestSlot,
    sheet_slot: RequestSlot,
}

impl AppState {
    pub fn new(history: HistoryStore, default_range: Range) -> Self {
        Self {
            levels: Vec::new(),
            selector: RangeSelector::new(default_range),
            quiz: QuizEngine::new(),
            history,
            print_form: PrintForm::with_defaults(default_range),
            document: None,
            levels_slot: RequestSlot::default(),
            quiz_slot: RequestSlot::default(),
            sheet_slot: RequestSlot::default(),
        }
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, level_id: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.id == level_id)
    }

    pub fn selector(&self) -> &RangeSelector {
        &self.selector
    }

    pub fn set_default_range(&mut self, default_range: Range) {
        self.selector = RangeSelector::new(default_range);
    }

    pub fn begin_levels_load(&mut self) -> Ticket {
        self.levels_slot.issue()
    }

    pub fn finish_levels_load(&mut self, ticket: Ticket, levels: Vec<Level>) -> bool {
        if !self.levels_slot.is_current(ticket) {
            log::warn!("Discarding stale level list");
            return false;
        }
        log::info!("Loaded {} levels", levels.len());
        self.levels = levels;
        if self.level(&self.print_form.level_id).is_none() {
            self.print_form.level_id = self.levels.first().map(|l| l.id.clone()).unwrap_or_default();
        }
        true
    }

    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizEngine {
        &mut self.quiz
    }

    /// Validates quiz input and issues a ticket for the word fetch.
    pub fn begin_quiz_load(
        &mut self,
        level_id: &str,
        count_input: &str,
    ) -> Result<(Ticket, Level, u32), WordsheetError> {
        let level = self
            .level(level_id)
            .cloned()
            .ok_or_else(|| WordsheetError::Validation(format!("Unknown level: {level_id}")))?;
        let count = self.selector.validate_count(count_input)?;
        Ok((self.quiz_slot.issue(), level, count))
    }

    /// Returns `Ok(false)` when a newer quiz request superseded this one.
    pub fn finish_quiz_load(
        &mut self,
        ticket: Ticket,
        level: Level,
        words: Vec<WordEntry>,
    ) -> Result<bool, WordsheetError> {
        if !self.quiz_slot.is_current(ticket) {
            log::warn!("Discarding stale quiz words for {}", level.id);
            return Ok(false);
        }
        self.quiz.start(level, words)?;
        Ok(true)
    }

    pub fn restart_quiz(&mut self) {
        self.quiz_slot.invalidate();
        self.quiz.restart();
    }

    pub fn print_form(&self) -> &PrintForm {
        &self.print_form
    }

    pub fn print_form_mut(&mut self) -> &mut PrintForm {
        &mut self.print_form
    }

    pub fn document(&self) -> Option<&SheetDocument> {
        self.document.as_ref()
    }

    /// Validates the print form; no request is issued when it is invalid.
    pub fn begin_sheet(&mut self) -> Result<(Ticket, PrintRequest), WordsheetError> {
        let request = self.print_form.to_request(&self.levels, &self.selector)?;
        Ok((self.sheet_slot.issue(), request))
    }

    /// Shows the composed sheet and records its request in the history.
    pub fn finish_sheet(
        &mut self,
        ticket: Ticket,
        request: &PrintRequest,
        document: SheetDocument,
    ) -> Result<bool, WordsheetError> {
        if !self.sheet_slot.is_current(ticket) {
            log::warn!("Discarding stale sheet \"{}\"", document.title);
            return Ok(false);
        }
        self.document = Some(document);
        self.history.record(request.to_history_entry())?;
        Ok(true)
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn clear_history(&mut self) -> Result<(), WordsheetError> {
        self.history.clear()
    }

    /// Restores the print form from a history entry.
    pub fn load_from_history(&mut self, index: usize) -> Result<(), WordsheetError> {
        let entry = self.history.load_entry(index)?;
        self.print_form = PrintForm::from_history(entry);
        Ok(())
    }
}
