use crate::app::models::request_error::RequestError;

#[derive(Debug)]
pub enum TransactionsRequestError {
    FetchFailed,
    CreateFailed,
    ClientBuildFailed,
}

impl TransactionsRequestError {
    pub fn value(&self) -> RequestError {
        match *self {
            Self::FetchFailed => RequestError {
                code: None,
                message: "Failed to get transactions.".to_string(),
            },
            Self::CreateFailed => RequestError {
                code: None,
                message: "Failed to create transaction.".to_string(),
            },
            Self::ClientBuildFailed => RequestError {
                code: None,
                message: "Failed to build http client.".to_string(),
            },
        }
    }
}
