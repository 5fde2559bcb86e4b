use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    pub code: Option<StatusCode>,
    pub message: String,
}
