use std::time::Duration;

use reqwest::{
    Client,
    Response,
    Url,
};
use serde::de::DeserializeOwned;

use super::{
    types::{
        ApiResponse,
        CheckPayload,
        LevelsPayload,
        WordsPayload,
    },
    AnswerChecker,
    CheckOutcome,
    CheckRequest,
    WordQuery,
    WordSource,
};
use crate::core::{
    models::{
        Level,
        WordEntry,
    },
    WordsheetError,
};

/// Client for the `/api/levels`, `/api/words/:level` and `/api/check` endpoints.
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    client: Client,
    base_url: Url,
}

impl HttpWordSource {
    pub fn new(base_url: &str) -> Result<Self, WordsheetError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| WordsheetError::Config(format!("Invalid API URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(WordsheetError::Config(format!("Invalid API URL {base_url}")));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| WordsheetError::Config(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, WordsheetError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| WordsheetError::Config(format!("Invalid API URL {}", self.base_url)))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, WordsheetError> {
    let status = response.status();
    let body = response.text().await?;

    let envelope: ApiResponse<T> = serde_json::from_str(&body).map_err(|e| {
        WordsheetError::Api(format!("Unexpected response from server (HTTP {status}): {e}"))
    })?;

    envelope.into_result()
}

impl WordSource for HttpWordSource {
    async fn fetch_levels(&self) -> Result<Vec<Level>, WordsheetError> {
        let url = self.endpoint(&["api", "levels"])?;
        log::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let payload: LevelsPayload = read_envelope(response).await?;
        Ok(payload.levels)
    }

    async fn fetch_words(
        &self,
        level_id: &str,
        query: WordQuery,
    ) -> Result<Vec<WordEntry>, WordsheetError> {
        let url = self.endpoint(&["api", "words", level_id])?;
        let request = match query {
            WordQuery::Count(count) => self.client.get(url).query(&[("count", count)]),
            WordQuery::Range(range) => {
                self.client.get(url).query(&[("start", range.start), ("end", range.end)])
            }
        };
        log::debug!("GET words for {level_id} ({query:?})");

        let response = request.send().await?;
        let payload: WordsPayload = read_envelope(response).await?;
        Ok(payload.words)
    }
}

impl AnswerChecker for HttpWordSource {
    async fn check(&self, request: &CheckRequest) -> Result<CheckOutcome, WordsheetError> {
        let url = self.endpoint(&["api", "check"])?;
        log::debug!("POST {url} for {:?}", request.word);

        let response = self.client.post(url).json(request).send().await?;
        let payload: CheckPayload = read_envelope(response).await?;
        Ok(CheckOutcome { is_correct: payload.is_correct, correct_answer: payload.correct_answer })
    }
}
