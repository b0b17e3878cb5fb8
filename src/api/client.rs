//! Credential-bound client for the Watchsac service.
//!
//! One `ApiClient` holds one username/password pair for its whole life.
//! Every authenticated call made through it uses those credentials, not
//! whatever the login form currently contains.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::transport::{HttpRequest, HttpTransport, Method};
use super::{ApiError, format_http_error};
use crate::codec::search_terms_to_wire;
use crate::models::{ActivationRequest, Alert, AlertPayload, ForecastResult, NewAccountRequest};

pub const ACCOUNTS_PATH: &str = "/accounts";
pub const ALERTS_PATH: &str = "/alerts";
pub const SPELLCHECK_PATH: &str = "/spellcheck";
pub const FORECAST_PATH: &str = "/forecast";

/// Credentials used by clients that only make unauthenticated calls
const PLACEHOLDER_CREDENTIAL: &str = "anonymous";

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    username: String,
    password: String,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
            transport,
        }
    }

    /// Client with placeholder credentials for the account endpoints
    pub fn anonymous(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(base_url, PLACEHOLDER_CREDENTIAL, PLACEHOLDER_CREDENTIAL, transport)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `Basic base64(username:password)`
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }

    pub fn alert_path(alert_id: i64) -> String {
        format!("{}?id={}", ALERTS_PATH, alert_id)
    }

    /// `POST /accounts` with this client's credentials
    pub async fn save_new_account(&self, phone_number: &str, key: &str) -> Result<(), ApiError> {
        let body = NewAccountRequest {
            u: self.username.clone(),
            p: self.password.clone(),
            pn: phone_number.to_string(),
            key: key.to_string(),
        };
        self.send(Method::Post, ACCOUNTS_PATH, false, Some(encode(&body)?))
            .await?;
        info!(username = %self.username, "new account saved");
        Ok(())
    }

    /// `PUT /accounts`
    pub async fn activate_account(
        &self,
        username: &str,
        phone_number: &str,
        activation_key: &str,
    ) -> Result<(), ApiError> {
        let body = ActivationRequest {
            u: username.to_string(),
            pn: phone_number.to_string(),
            conf_key: activation_key.to_string(),
        };
        self.send(Method::Put, ACCOUNTS_PATH, false, Some(encode(&body)?))
            .await?;
        info!(username = %username, "account activated");
        Ok(())
    }

    /// `GET /alerts`
    pub async fn get_all_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        let bytes = self.send(Method::Get, ALERTS_PATH, true, None).await?;
        let alerts: Vec<Alert> = decode(&bytes)?;
        debug!(count = alerts.len(), "alerts loaded");
        Ok(alerts)
    }

    /// `POST /alerts` (create when the payload has no id, update otherwise)
    pub async fn save_alert(&self, payload: &AlertPayload) -> Result<(), ApiError> {
        self.send(Method::Post, ALERTS_PATH, true, Some(encode(payload)?))
            .await?;
        Ok(())
    }

    /// `DELETE /alerts?id={alert_id}`
    pub async fn delete_alert(&self, alert_id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, &Self::alert_path(alert_id), true, None)
            .await?;
        Ok(())
    }

    /// `POST /spellcheck`, returning the corrected terms
    pub async fn check_spelling(&self, comma_separated: &str) -> Result<Vec<String>, ApiError> {
        let body = encode(&search_terms_to_wire(comma_separated))?;
        let bytes = self
            .send(Method::Post, SPELLCHECK_PATH, true, Some(body))
            .await?;
        decode(&bytes)
    }

    /// `POST /forecast`. POST rather than GET keeps the terms out of the URL.
    pub async fn get_forecast(&self, comma_separated: &str) -> Result<ForecastResult, ApiError> {
        let body = encode(&search_terms_to_wire(comma_separated))?;
        let bytes = self
            .send(Method::Post, FORECAST_PATH, true, Some(body))
            .await?;
        decode(&bytes)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        authenticated: bool,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, ApiError> {
        let request = HttpRequest {
            method,
            url: self.endpoint(path),
            authorization: authenticated.then(|| self.basic_auth_header()),
            body,
        };
        debug!(method = method.as_str(), url = %request.url, "sending request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(method = method.as_str(), path, %error, "request failed");
                return Err(error);
            }
        };
        if !response.is_success() {
            let error = format_http_error(response.status, &response.body);
            warn!(method = method.as_str(), path, %error, "request rejected");
            return Err(error);
        }
        Ok(response.body)
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|error| ApiError::Encode {
        message: error.to_string(),
    })
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|error| ApiError::Decode {
        message: error.to_string(),
    })
}
