use crate::core::models::WrongAnswer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Perfect,
    Excellent,
    Good,
    Fair,
    KeepStudying,
}

impl FeedbackTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => FeedbackTier::Perfect,
            80..=99 => FeedbackTier::Excellent,
            60..=79 => FeedbackTier::Good,
            40..=59 => FeedbackTier::Fair,
            _ => FeedbackTier::KeepStudying,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Perfect => "🎉 Perfect! Every answer was right!",
            FeedbackTier::Excellent => "👏 Excellent! Just a little more for a perfect score!",
            FeedbackTier::Good => "👍 Well done! Review the words you missed.",
            FeedbackTier::Fair => "💪 Not bad! Keep studying steadily.",
            FeedbackTier::KeepStudying => "📚 Let's study a bit harder!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: u32,
    pub total: u32,
    pub wrong_answers: Vec<WrongAnswer>,
}

impl QuizSummary {
    /// `score / total * 100`, rounded half up.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.score * 200 + self.total) / (self.total * 2)
    }

    pub fn tier(&self) -> FeedbackTier {
        FeedbackTier::from_percentage(self.percentage())
    }

    pub fn message(&self) -> &'static str {
        self.tier().message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(score: u32, total: u32) -> QuizSummary {
        QuizSummary { score, total, wrong_answers: Vec::new() }
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(summary(1, 3).percentage(), 33);
        assert_eq!(summary(2, 3).percentage(), 67);
        assert_eq!(summary(1, 8).percentage(), 13);
        assert_eq!(summary(10, 10).percentage(), 100);
        assert_eq!(summary(0, 0).percentage(), 0);
    }

    #[test]
    fn tiers_break_at_thresholds() {
        assert_eq!(summary(10, 10).tier(), FeedbackTier::Perfect);
        assert_eq!(summary(8, 10).tier(), FeedbackTier::Excellent);
        assert_eq!(summary(79, 100).tier(), FeedbackTier::Good);
        assert_eq!(summary(6, 10).tier(), FeedbackTier::Good);
        assert_eq!(summary(4, 10).tier(), FeedbackTier::Fair);
        assert_eq!(summary(39, 100).tier(), FeedbackTier::KeepStudying);
    }

    #[test]
    fn tier_uses_the_rounded_percentage() {
        // 199/200 rounds to 100.
        let s = summary(199, 200);
        assert_eq!(s.percentage(), 100);
        assert_eq!(s.tier(), FeedbackTier::Perfect);
    }
}
