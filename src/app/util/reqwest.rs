use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::app::{errors::DefaultRequestError, models::request_error::RequestError};

/// Turns a sent request into a decoded body.
///
/// Transport failures and undecodable bodies become canned errors, a non-2xx
/// status becomes `on_status` carrying the status code that was received.
pub async fn read_json<T: DeserializeOwned>(
    result: Result<Response, reqwest::Error>,
    on_status: RequestError,
) -> Result<T, RequestError> {
    let res = match result {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultRequestError::Unreachable.value());
        }
    };

    let status = res.status();
    if !status.is_success() {
        tracing::error!("{} {:?}", status, res.text().await);
        return Err(RequestError {
            code: Some(status),
            ..on_status
        });
    }

    match res.text().await {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(body) => Ok(body),
            Err(e) => {
                tracing::error!(%e, %text);
                Err(RequestError {
                    code: Some(status),
                    ..DefaultRequestError::MalformedResponse.value()
                })
            }
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultRequestError::Unreachable.value())
        }
    }
}
