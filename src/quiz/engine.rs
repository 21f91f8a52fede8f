use rand::seq::SliceRandom;

use super::summary::QuizSummary;
use crate::{
    api::{
        AnswerChecker,
        CheckOutcome,
        CheckRequest,
        WordQuery,
        WordSource,
    },
    core::{
        models::{
            Level,
            WordEntry,
            WrongAnswer,
        },
        WordsheetError,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    Showing(usize),
    /// An answer for question `i` is out for checking.
    Checking(usize),
    Answered(usize),
    Finished,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    pub level: Level,
    pub words: Vec<WordEntry>,
    pub index: usize,
    pub score: u32,
    pub wrong_answers: Vec<WrongAnswer>,
}

/// Identifies the question a pending check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket {
    generation: u64,
    index: usize,
}

#[derive(Debug, Clone)]
pub struct PendingCheck {
    pub ticket: CheckTicket,
    pub request: CheckRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub correct_answer: String,
    pub user_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, or no question waiting for an answer.
    Ignored,
    /// The check finished after the quiz had moved on.
    Stale,
    Answered(AnswerFeedback),
}

pub struct QuizEngine {
    phase: QuizPhase,
    session: Option<QuizSession>,
    feedback: Option<AnswerFeedback>,
    generation: u64,
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEngine {
    pub fn new() -> Self {
        Self { phase: QuizPhase::Idle, session: None, feedback: None, generation: 0 }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Feedback for the question currently in `Answered`.
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        match self.phase {
            QuizPhase::Answered(_) => self.feedback.as_ref(),
            _ => None,
        }
    }

    pub fn current_word(&self) -> Option<&WordEntry> {
        let index = match self.phase {
            QuizPhase::Showing(i) | QuizPhase::Checking(i) | QuizPhase::Answered(i) => i,
            QuizPhase::Idle | QuizPhase::Finished => return None,
        };
        self.session.as_ref()?.words.get(index)
    }

    /// 1-based question number and total.
    pub fn progress(&self) -> Option<(usize, usize)> {
        let session = self.session.as_ref()?;
        match self.phase {
            QuizPhase::Idle | QuizPhase::Finished => None,
            _ => Some((session.index + 1, session.words.len())),
        }
    }

    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(0, |session| session.score)
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.phase, QuizPhase::Checking(_))
    }

    pub fn start(&mut self, level: Level, words: Vec<WordEntry>) -> Result<(), WordsheetError> {
        if words.is_empty() {
            return Err(WordsheetError::Validation(format!(
                "No words available for {}",
                level.name
            )));
        }

        log::info!("Starting quiz on {} with {} words", level.id, words.len());
        self.generation += 1;
        self.session =
            Some(QuizSession { level, words, index: 0, score: 0, wrong_answers: Vec::new() });
        self.feedback = None;
        self.phase = QuizPhase::Showing(0);
        Ok(())
    }

    /// Fetches `count` words and starts once they arrive; a failed fetch leaves
    /// the engine untouched.
    pub async fn start_from<S: WordSource>(
        &mut self,
        source: &S,
        level: Level,
        count: u32,
        shuffle: bool,
    ) -> Result<(), WordsheetError> {
        let mut words = source.fetch_words(&level.id, WordQuery::Count(count)).await?;
        if shuffle {
            shuffle_words(&mut words);
        }
        self.start(level, words)
    }

    pub fn begin_submit(&mut self, answer: &str) -> Option<PendingCheck> {
        let QuizPhase::Showing(index) = self.phase else {
            return None;
        };

        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }

        let entry = self.session.as_ref()?.words.get(index)?;
        let request = CheckRequest {
            word: entry.word.clone(),
            answer: answer.to_string(),
            expected: entry.meaning.clone(),
        };

        self.phase = QuizPhase::Checking(index);
        Some(PendingCheck { ticket: CheckTicket { generation: self.generation, index }, request })
    }

    pub fn complete_submit(
        &mut self,
        pending: &PendingCheck,
        result: Result<CheckOutcome, WordsheetError>,
    ) -> Result<SubmitOutcome, WordsheetError> {
        let ticket = pending.ticket;
        if ticket.generation != self.generation || self.phase != QuizPhase::Checking(ticket.index)
        {
            log::warn!("Discarding stale answer check for question {}", ticket.index + 1);
            return Ok(SubmitOutcome::Stale);
        }

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                self.phase = QuizPhase::Showing(ticket.index);
                return Err(e);
            }
        };

        let Some(session) = self.session.as_mut() else {
            return Ok(SubmitOutcome::Stale);
        };

        if outcome.is_correct {
            session.score += 1;
        } else {
            session.wrong_answers.push(WrongAnswer {
                word: pending.request.word.clone(),
                meaning: pending.request.expected.clone(),
                user_answer: pending.request.answer.clone(),
            });
        }

        let feedback = AnswerFeedback {
            is_correct: outcome.is_correct,
            correct_answer: outcome.correct_answer,
            user_answer: pending.request.answer.clone(),
        };
        self.feedback = Some(feedback.clone());
        self.phase = QuizPhase::Answered(ticket.index);
        Ok(SubmitOutcome::Answered(feedback))
    }

    pub async fn submit<C: AnswerChecker>(
        &mut self,
        checker: &C,
        answer: &str,
    ) -> Result<SubmitOutcome, WordsheetError> {
        let Some(pending) = self.begin_submit(answer) else {
            return Ok(SubmitOutcome::Ignored);
        };
        let result = checker.check(&pending.request).await;
        self.complete_submit(&pending, result)
    }

    /// Moves past an answered question. Returns false when nothing was answered.
    pub fn advance(&mut self) -> bool {
        let QuizPhase::Answered(index) = self.phase else {
            return false;
        };
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        self.feedback = None;
        if index + 1 >= session.words.len() {
            session.index = index;
            self.phase = QuizPhase::Finished;
            log::info!("Quiz finished: {}/{}", session.score, session.words.len());
        } else {
            session.index = index + 1;
            self.phase = QuizPhase::Showing(index + 1);
        }
        true
    }

    pub fn summary(&self) -> Option<QuizSummary> {
        if self.phase != QuizPhase::Finished {
            return None;
        }
        let session = self.session.as_ref()?;
        Some(QuizSummary {
            score: session.score,
            total: session.words.len() as u32,
            wrong_answers: session.wrong_answers.clone(),
        })
    }

    pub fn restart(&mut self) {
        self.generation += 1;
        self.session = None;
        self.feedback = None;
        self.phase = QuizPhase::Idle;
    }
}

pub fn shuffle_words(words: &mut [WordEntry]) {
    words.shuffle(&mut rand::rng());
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::{
        LocalAnswerChecker,
        MemoryWordSource,
    };

    /// Replays scripted check results and records what it was asked.
    struct ScriptedChecker {
        responses: RefCell<Vec<Result<CheckOutcome, WordsheetError>>>,
        seen: RefCell<Vec<CheckRequest>>,
    }

    impl ScriptedChecker {
        fn new(responses: Vec<Result<CheckOutcome, WordsheetError>>) -> Self {
            Self { responses: RefCell::new(responses), seen: RefCell::new(Vec::new()) }
        }
    }

    impl AnswerChecker for ScriptedChecker {
        async fn check(&self, request: &CheckRequest) -> Result<CheckOutcome, WordsheetError> {
            self.seen.borrow_mut().push(request.clone());
            self.responses.borrow_mut().remove(0)
        }
    }

    fn correct(answer: &str) -> Result<CheckOutcome, WordsheetError> {
        Ok(CheckOutcome { is_correct: true, correct_answer: answer.to_string() })
    }

    fn wrong(answer: &str) -> Result<CheckOutcome, WordsheetError> {
        Ok(CheckOutcome { is_correct: false, correct_answer: answer.to_string() })
    }

    fn animals() -> MemoryWordSource {
        MemoryWordSource::new().with_level(
            "a",
            "Animals",
            vec![
                WordEntry::new("cat", "고양이"),
                WordEntry::new("dog", "개"),
                WordEntry::new("fish", "물고기"),
            ],
        )
    }

    async fn started() -> QuizEngine {
        let mut engine = QuizEngine::new();
        engine.start_from(&animals(), Level::new("a", "Animals", 3), 3, false).await.unwrap();
        engine
    }

    #[tokio::test]
    async fn first_correct_answer_scores_and_waits_for_advance() {
        let mut engine = started().await;
        let session = engine.session().unwrap();
        let order: Vec<_> = session.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, ["cat", "dog", "fish"]);
        assert_eq!(engine.phase(), QuizPhase::Showing(0));

        let checker = ScriptedChecker::new(vec![correct("고양이")]);
        let outcome = engine.submit(&checker, "고양이").await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Answered(ref f) if f.is_correct));
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.phase(), QuizPhase::Answered(0));

        let seen = checker.seen.borrow();
        assert_eq!(seen[0].word, "cat");
        assert_eq!(seen[0].answer, "고양이");
        assert_eq!(seen[0].expected, "고양이");
    }

    #[tokio::test]
    async fn blank_answers_are_ignored() {
        let mut engine = started().await;
        let checker = ScriptedChecker::new(Vec::new());

        assert_eq!(engine.submit(&checker, "   ").await.unwrap(), SubmitOutcome::Ignored);
        assert_eq!(engine.phase(), QuizPhase::Showing(0));
        assert!(checker.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn double_submission_is_a_no_op() {
        let mut engine = started().await;
        let checker = ScriptedChecker::new(vec![correct("고양이"), correct("고양이")]);

        engine.submit(&checker, "고양이").await.unwrap();
        let second = engine.submit(&checker, "고양이").await.unwrap();

        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(engine.score(), 1);
        assert_eq!(checker.seen.borrow().len(), 1);
    }

    #[tokio::test]
    async fn submit_is_refused_while_a_check_is_outstanding() {
        let mut engine = started().await;
        let pending = engine.begin_submit("고양이").unwrap();
        assert!(engine.is_checking());
        assert!(engine.begin_submit("고양이").is_none());

        engine.complete_submit(&pending, correct("고양이")).unwrap();
        assert_eq!(engine.phase(), QuizPhase::Answered(0));
    }

    #[tokio::test]
    async fn failed_check_returns_to_the_question() {
        let mut engine = started().await;
        let checker =
            ScriptedChecker::new(vec![Err(WordsheetError::Api("check failed".to_string()))]);

        assert!(engine.submit(&checker, "고양이").await.is_err());
        assert_eq!(engine.phase(), QuizPhase::Showing(0));
        assert_eq!(engine.score(), 0);
    }

    #[tokio::test]
    async fn check_completing_after_restart_is_discarded() {
        let mut engine = started().await;
        let pending = engine.begin_submit("고양이").unwrap();

        engine.restart();
        engine.start(Level::new("a", "Animals", 3), vec![WordEntry::new("cat", "고양이")]).unwrap();

        let outcome = engine.complete_submit(&pending, correct("고양이")).unwrap();
        assert_eq!(outcome, SubmitOutcome::Stale);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.phase(), QuizPhase::Showing(0));
    }

    #[tokio::test]
    async fn full_run_reports_summary_and_wrong_answers() {
        let mut engine = started().await;
        let checker = ScriptedChecker::new(vec![correct("고양이"), wrong("개"), correct("물고기")]);

        assert!(!engine.advance());
        for answer in ["고양이", "고양이", "물고기"] {
            engine.submit(&checker, answer).await.unwrap();
            assert!(engine.advance());
        }

        assert_eq!(engine.phase(), QuizPhase::Finished);
        assert!(engine.current_word().is_none());

        let summary = engine.summary().unwrap();
        assert_eq!((summary.score, summary.total), (2, 3));
        assert_eq!(summary.percentage(), 67);
        assert_eq!(
            summary.wrong_answers,
            vec![WrongAnswer {
                word: "dog".to_string(),
                meaning: "개".to_string(),
                user_answer: "고양이".to_string(),
            }]
        );

        engine.restart();
        assert_eq!(engine.phase(), QuizPhase::Idle);
        assert!(engine.session().is_none());
    }

    #[tokio::test]
    async fn progress_and_feedback_track_the_question() {
        let mut engine = started().await;
        assert_eq!(engine.progress(), Some((1, 3)));
        assert!(engine.feedback().is_none());

        engine.submit(&LocalAnswerChecker, "n. 고양이").await.unwrap();
        let feedback = engine.feedback().unwrap();
        assert!(feedback.is_correct);
        assert_eq!(feedback.user_answer, "n. 고양이");

        engine.advance();
        assert_eq!(engine.progress(), Some((2, 3)));
        assert_eq!(engine.current_word().unwrap().word, "dog");
        assert!(engine.feedback().is_none());
    }

    #[tokio::test]
    async fn empty_level_does_not_start() {
        let mut engine = QuizEngine::new();
        let source = MemoryWordSource::new().with_level("e", "Empty", Vec::new());
        let result = engine.start_from(&source, Level::new("e", "Empty", 0), 10, false).await;

        assert!(result.unwrap_err().is_validation());
        assert_eq!(engine.phase(), QuizPhase::Idle);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_state() {
        let mut engine = started().await;
        let result =
            engine.start_from(&MemoryWordSource::new(), Level::new("x", "X", 1), 10, false).await;

        assert!(result.is_err());
        assert_eq!(engine.phase(), QuizPhase::Showing(0));
        assert_eq!(engine.session().unwrap().words.len(), 3);
    }

    #[tokio::test]
    async fn shuffle_keeps_the_same_words() {
        let mut engine = QuizEngine::new();
        engine.start_from(&animals(), Level::new("a", "Animals", 3), 3, true).await.unwrap();

        let mut words: Vec<_> =
            engine.session().unwrap().words.iter().map(|w| w.word.clone()).collect();
        words.sort();
        assert_eq!(words, ["cat", "dog", "fish"]);
    }
}
