use super::models::request_error::RequestError;

#[derive(Debug)]
pub enum DefaultRequestError {
    Unreachable,
    MalformedResponse,
}

impl DefaultRequestError {
    pub fn value(&self) -> RequestError {
        match *self {
            Self::Unreachable => RequestError {
                code: None,
                message: "Failed to reach the transactions api.".to_string(),
            },
            Self::MalformedResponse => RequestError {
                code: None,
                message: "Failed to deserialize response.".to_string(),
            },
        }
    }
}
