use serde::Deserialize;

use crate::core::{
    models::{
        Level,
        WordEntry,
    },
    WordsheetError,
};

/// The `{ success, ..., error? }` envelope every endpoint answers with.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, WordsheetError> {
        if self.success {
            Ok(self.payload)
        } else {
            let message = self.error.unwrap_or_else(|| "The server reported a failure".to_string());
            Err(WordsheetError::Api(message))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LevelsPayload {
    #[serde(default)]
    pub levels: Vec<Level>,
}

#[derive(Debug, Deserialize)]
pub struct WordsPayload {
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CheckPayload {
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub correct_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_payload() {
        let json = r#"{"success": true, "levels": [{"id": "JP_단어장", "name": "JP (초급)", "count": 812}]}"#;
        let response: ApiResponse<LevelsPayload> = serde_json::from_str(json).unwrap();
        let levels = response.into_result().unwrap().levels;
        assert_eq!(levels, vec![Level::new("JP_단어장", "JP (초급)", 812)]);
    }

    #[test]
    fn failure_envelope_carries_server_message() {
        let json = r#"{"success": false, "error": "존재하지 않는 레벨입니다: X"}"#;
        let response: ApiResponse<WordsPayload> = serde_json::from_str(json).unwrap();
        match response.into_result() {
            Err(WordsheetError::Api(message)) => assert!(message.contains("X")),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn failure_without_message_still_fails() {
        let response: ApiResponse<CheckPayload> =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(matches!(response.into_result(), Err(WordsheetError::Api(_))));
    }
}
