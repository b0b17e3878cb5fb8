//! Errors returned by remote calls.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {message}")]
    Request { message: String },
    #[error("reading response failed: {message}")]
    Read { message: String },
    #[error("server returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("could not encode request body: {message}")]
    Encode { message: String },
    #[error("could not decode response body: {message}")]
    Decode { message: String },
}

/// Map a non-2xx response into an `ApiError::Http`
pub fn format_http_error(status: u16, body: &[u8]) -> ApiError {
    let body = String::from_utf8_lossy(body).trim().to_string();
    let body = if body.is_empty() {
        "<empty>".to_string()
    } else {
        body
    };
    ApiError::Http { status, body }
}
