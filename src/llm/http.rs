//! HTTP helpers shared by the backend clients

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::llm::core::error::LlmError;

/// Create the HTTP client used by a backend
///
/// No request timeout is set; the transport defaults apply.
pub fn build_client() -> Result<Client, LlmError> {
    Client::builder()
        .user_agent(concat!("portfolio-chat/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| LlmError::HttpError {
            status: 0,
            body: format!("Failed to create HTTP client: {}", e),
        })
}

/// A decoded JSON response together with its status and raw body
#[derive(Debug)]
pub struct JsonResponse<T> {
    pub status: StatusCode,
    pub text: String,
    pub body: T,
}

/// Read a response body and decode it as JSON
///
/// A body that fails to decode is reported as `HttpError` when the status was
/// not a success, and as `SerializationError` otherwise.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<JsonResponse<T>, LlmError> {
    let status = response.status();
    let text = response.text().await?;

    match serde_json::from_str::<T>(&text) {
        Ok(body) => Ok(JsonResponse { status, text, body }),
        Err(_) if !status.is_success() => Err(LlmError::HttpError {
            status: status.as_u16(),
            body: text,
        }),
        Err(e) => Err(e.into()),
    }
}
