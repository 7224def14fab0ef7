use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to access inference API: {0}")]
    InferenceError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to render page: {0}")]
    TemplateError(String),
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        SummaryError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for SummaryError {
    fn from(error: anyhow::Error) -> Self {
        SummaryError::InferenceError(error.to_string())
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::ParseError(error.to_string())
    }
}

impl From<minijinja::Error> for SummaryError {
    fn from(error: minijinja::Error) -> Self {
        SummaryError::TemplateError(error.to_string())
    }
}
