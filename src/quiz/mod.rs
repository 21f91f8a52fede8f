pub mod engine;
pub mod summary;

pub use engine::{
    AnswerFeedback,
    CheckTicket,
    PendingCheck,
    QuizEngine,
    QuizPhase,
    QuizSession,
    SubmitOutcome,
};
pub use summary::{
    FeedbackTier,
    QuizSummary,
};
