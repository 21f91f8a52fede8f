use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordsheetError {
    #[error("Could not reach the server: {0}")]
    Network(Box<reqwest::Error>),

    #[error("{0}")]
    Api(String),

    #[error("{0}")]
    Validation(String),

    #[error("History entry {0} not found")]
    NotFound(usize),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WordsheetError {
    /// Short heading used when the error is surfaced to the user.
    pub fn title(&self) -> &'static str {
        match self {
            WordsheetError::Network(_) => "Connection Failed",
            WordsheetError::Api(_) => "Server Error",
            WordsheetError::Validation(_) => "Invalid Input",
            WordsheetError::NotFound(_) => "Not Found",
            WordsheetError::Io(_) | WordsheetError::Json(_) => "Storage Error",
            WordsheetError::Config(_) => "Configuration Error",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, WordsheetError::Validation(_))
    }
}

impl From<std::io::Error> for WordsheetError {
    fn from(error: std::io::Error) -> Self {
        WordsheetError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for WordsheetError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            WordsheetError::Api(format!("Malformed response: {error}"))
        } else {
            WordsheetError::Network(Box::new(error))
        }
    }
}
