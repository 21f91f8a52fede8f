use super::{
    models::Range,
    WordsheetError,
};

/// Upper bound applied to range ends and quiz counts when the level size is unknown.
pub const RANGE_UPPER_BOUND: u32 = 2000;
pub const DEFAULT_QUIZ_COUNT: u32 = 10;

/// Validates user-entered ranges and counts against a level's word count.
#[derive(Debug, Clone)]
pub struct RangeSelector {
    defaults: Range,
    level_count: Option<u32>,
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::new(Range::default())
    }
}

impl RangeSelector {
    pub fn new(defaults: Range) -> Self {
        Self { defaults, level_count: None }
    }

    pub fn with_level_count(mut self, level_count: Option<u32>) -> Self {
        self.level_count = level_count;
        self
    }

    pub fn defaults(&self) -> Range {
        self.defaults
    }

    /// Absent or non-numeric fields fall back to the defaults; the end is clamped,
    /// never rejected, for being past the level's size.
    pub fn validate(&self, start: &str, end: &str) -> Result<Range, WordsheetError> {
        self.validate_numbers(parse_field(start), parse_field(end))
    }

    pub fn validate_numbers(
        &self,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<Range, WordsheetError> {
        let start = start.unwrap_or(self.defaults.start as i64);
        let end = end.unwrap_or_else(|| (self.defaults.end as i64).max(start));

        if start < 1 {
            return Err(WordsheetError::Validation(format!(
                "Start must be at least 1 (got {start})"
            )));
        }
        if end < start {
            return Err(WordsheetError::Validation(format!(
                "End ({end}) must not be before start ({start})"
            )));
        }

        let bound = self.bound();
        if start > bound as i64 {
            return Err(WordsheetError::Validation(match self.level_count {
                Some(count) => format!("Start ({start}) is past the last word ({count})"),
                None => format!("Start ({start}) is past the limit of {bound}"),
            }));
        }

        Ok(Range::new(start as u32, end.min(bound as i64) as u32))
    }

    pub fn validate_count(&self, input: &str) -> Result<u32, WordsheetError> {
        let count = parse_field(input).unwrap_or(DEFAULT_QUIZ_COUNT as i64);
        if count < 1 {
            return Err(WordsheetError::Validation(format!(
                "Word count must be at least 1 (got {count})"
            )));
        }
        Ok(count.min(RANGE_UPPER_BOUND as i64) as u32)
    }

    fn bound(&self) -> u32 {
        self.level_count.unwrap_or(RANGE_UPPER_BOUND)
    }
}

fn parse_field(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_range() {
        let selector = RangeSelector::default();
        assert_eq!(selector.validate("10", "40").unwrap(), Range::new(10, 40));
        assert_eq!(selector.validate(" 7 ", "7").unwrap(), Range::new(7, 7));
    }

    #[test]
    fn rejects_start_below_one_and_inverted_ranges() {
        let selector = RangeSelector::default();
        assert!(selector.validate("0", "10").unwrap_err().is_validation());
        assert!(selector.validate("-3", "10").unwrap_err().is_validation());
        assert!(selector.validate("20", "10").unwrap_err().is_validation());
    }

    #[test]
    fn falls_back_to_defaults_for_missing_or_garbage_input() {
        let selector = RangeSelector::default();
        assert_eq!(selector.validate("", "").unwrap(), Range::new(1, 500));
        assert_eq!(selector.validate("abc", "x1").unwrap(), Range::new(1, 500));
        assert_eq!(selector.validate("50", "").unwrap(), Range::new(50, 500));
        // An absent end never lands before the start.
        assert_eq!(selector.validate("700", "").unwrap(), Range::new(700, 700));
    }

    #[test]
    fn clamps_end_to_level_count_or_upper_bound() {
        let selector = RangeSelector::default().with_level_count(Some(120));
        assert_eq!(selector.validate("100", "300").unwrap(), Range::new(100, 120));

        let unknown = RangeSelector::default();
        assert_eq!(unknown.validate("1", "99999").unwrap(), Range::new(1, RANGE_UPPER_BOUND));
    }

    #[test]
    fn rejects_start_past_level_end() {
        let selector = RangeSelector::default().with_level_count(Some(30));
        let err = selector.validate("31", "40").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn validates_quiz_count() {
        let selector = RangeSelector::default();
        assert_eq!(selector.validate_count("").unwrap(), DEFAULT_QUIZ_COUNT);
        assert_eq!(selector.validate_count("25").unwrap(), 25);
        assert_eq!(selector.validate_count("5000").unwrap(), RANGE_UPPER_BOUND);
        assert!(selector.validate_count("0").is_err());
    }
}
