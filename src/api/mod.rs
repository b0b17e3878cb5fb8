//! Remote API access.
//!
//! - `client`: the credential-bound `ApiClient` and its operations
//! - `transport`: the HTTP seam and its `reqwest` implementation
//! - `error`: remote failure types

mod client;
mod error;
mod transport;

pub use client::ApiClient;
pub use error::{ApiError, format_http_error};
pub use transport::{HttpTransport, ReqwestTransport};
#[cfg(test)]
pub use transport::{HttpRequest, HttpResponse, Method};
