use super::{
    AnswerChecker,
    CheckOutcome,
    CheckRequest,
};
use crate::core::WordsheetError;

const PART_OF_SPEECH_PREFIXES: &[&str] =
    &["n.", "v.", "a.", "ad.", "adv.", "prep.", "conj.", "int.", "pron."];

/// Grades answers without a server round-trip, using the backend's matching rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAnswerChecker;

/// Trims and drops one leading part-of-speech marker such as `n.` or `adv.`.
pub fn normalize_answer(answer: &str) -> &str {
    let answer = answer.trim();
    for prefix in PART_OF_SPEECH_PREFIXES {
        let matches = answer
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if matches {
            return answer[prefix.len()..].trim();
        }
    }
    answer
}

pub fn is_correct(answer: &str, expected: &str) -> bool {
    let answer = normalize_answer(answer);
    let expected = normalize_answer(expected);
    expected.split(',').map(str::trim).any(|meaning| meaning == answer) || answer == expected
}

impl AnswerChecker for LocalAnswerChecker {
    async fn check(&self, request: &CheckRequest) -> Result<CheckOutcome, WordsheetError> {
        Ok(CheckOutcome {
            is_correct: is_correct(&request.answer, &request.expected),
            correct_answer: request.expected.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_part_of_speech_prefix() {
        assert_eq!(normalize_answer("  n. 사진 "), "사진");
        assert_eq!(normalize_answer("Adv. 빨리"), "빨리");
        assert_eq!(normalize_answer("prep.~위에"), "~위에");
        assert_eq!(normalize_answer("사진"), "사진");
    }

    #[test]
    fn only_the_first_prefix_is_removed() {
        assert_eq!(normalize_answer("v. n. 달리다"), "n. 달리다");
    }

    #[test]
    fn any_comma_separated_meaning_is_accepted() {
        assert!(is_correct("달리다", "v. 달리다, 운영하다"));
        assert!(is_correct("운영하다", "v. 달리다, 운영하다"));
        assert!(is_correct("n. 사진", "n. 사진"));
        assert!(!is_correct("걷다", "v. 달리다, 운영하다"));
    }

    #[tokio::test]
    async fn reports_trimmed_expected_meaning() {
        let outcome = LocalAnswerChecker
            .check(&CheckRequest {
                word: "photo".to_string(),
                answer: "사진".to_string(),
                expected: " n. 사진 ".to_string(),
            })
            .await
            .unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.correct_answer, "n. 사진");
    }
}
