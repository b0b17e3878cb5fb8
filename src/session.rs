//! Session state: the single active `ApiClient`.
//!
//! The session is absent before the first login, created at login and
//! replaced wholesale by every later login. Each login and logout starts a
//! new generation so results of calls made by an earlier session can be
//! told apart and dropped.

use std::sync::Arc;

use tracing::info;

use crate::api::{ApiClient, HttpTransport};

pub struct Session {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    active: Option<ApiClient>,
    generation: u64,
}

impl Session {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            active: None,
            generation: 0,
        }
    }

    /// Replace the active client with one bound to these credentials
    pub fn log_in(&mut self, username: &str, password: &str) -> ApiClient {
        let client = self.client_for(username, password);
        info!(username = %username, replaced = self.active.is_some(), "session started");
        self.active = Some(client.clone());
        self.generation += 1;
        client
    }

    pub fn log_out(&mut self) {
        if let Some(client) = self.active.take() {
            info!(username = %client.username(), "session ended");
        }
        self.generation += 1;
    }

    /// Changes on every login and logout
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn active(&self) -> Option<&ApiClient> {
        self.active.as_ref()
    }

    /// A client for one-off calls that does not touch the active session
    pub fn client_for(&self, username: &str, password: &str) -> ApiClient {
        ApiClient::new(
            self.base_url.clone(),
            username,
            password,
            self.transport.clone(),
        )
    }

    pub fn anonymous(&self) -> ApiClient {
        ApiClient::anonymous(self.base_url.clone(), self.transport.clone())
    }
}
