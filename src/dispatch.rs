//! Running remote calls off the UI thread.
//!
//! Handlers describe the calls they want as `Request`s. The `Dispatcher`
//! spawns each one as an independent task; the resulting `Outcome` comes
//! back over a channel, tagged with the session generation that issued it,
//! and the event loop applies it. There is no cancellation, deduplication
//! or ordering between requests.

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::api::{ApiClient, ApiError};
use crate::models::{Alert, AlertPayload, ForecastResult};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    SaveNewAccount {
        phone_number: String,
        key: String,
    },
    ActivateAccount {
        username: String,
        phone_number: String,
        activation_key: String,
    },
    GetAllAlerts,
    SaveAlert(AlertPayload),
    DeleteAlert(i64),
    CheckSpelling(String),
    GetForecast(String),
}

impl ApiCall {
    pub fn name(&self) -> &'static str {
        match self {
            ApiCall::SaveNewAccount { .. } => "save_new_account",
            ApiCall::ActivateAccount { .. } => "activate_account",
            ApiCall::GetAllAlerts => "get_all_alerts",
            ApiCall::SaveAlert(_) => "save_alert",
            ApiCall::DeleteAlert(_) => "delete_alert",
            ApiCall::CheckSpelling(_) => "check_spelling",
            ApiCall::GetForecast(_) => "get_forecast",
        }
    }
}

/// A call bound to the client that will make it
#[derive(Debug, Clone)]
pub struct Request {
    pub client: ApiClient,
    pub call: ApiCall,
    /// Session generation current when the call was issued
    pub generation: u64,
}

impl Request {
    pub fn new(client: ApiClient, call: ApiCall, generation: u64) -> Self {
        Self {
            client,
            call,
            generation,
        }
    }

    pub async fn execute(self) -> Outcome {
        let client = self.client;
        match self.call {
            ApiCall::SaveNewAccount { phone_number, key } => {
                Outcome::AccountSaved(client.save_new_account(&phone_number, &key).await)
            }
            ApiCall::ActivateAccount {
                username,
                phone_number,
                activation_key,
            } => Outcome::AccountActivated(
                client
                    .activate_account(&username, &phone_number, &activation_key)
                    .await,
            ),
            ApiCall::GetAllAlerts => Outcome::AlertsLoaded(client.get_all_alerts().await),
            ApiCall::SaveAlert(payload) => Outcome::AlertSaved(client.save_alert(&payload).await),
            ApiCall::DeleteAlert(id) => Outcome::AlertDeleted(client.delete_alert(id).await),
            ApiCall::CheckSpelling(terms) => {
                Outcome::SpellingChecked(client.check_spelling(&terms).await)
            }
            ApiCall::GetForecast(terms) => {
                Outcome::ForecastLoaded(client.get_forecast(&terms).await)
            }
        }
    }
}

/// Result of one remote call, delivered to the event loop
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    AccountSaved(Result<(), ApiError>),
    AccountActivated(Result<(), ApiError>),
    AlertsLoaded(Result<Vec<Alert>, ApiError>),
    AlertSaved(Result<(), ApiError>),
    AlertDeleted(Result<(), ApiError>),
    SpellingChecked(Result<Vec<String>, ApiError>),
    ForecastLoaded(Result<ForecastResult, ApiError>),
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        match self {
            Outcome::AccountSaved(r)
            | Outcome::AccountActivated(r)
            | Outcome::AlertSaved(r)
            | Outcome::AlertDeleted(r) => r.is_ok(),
            Outcome::AlertsLoaded(r) => r.is_ok(),
            Outcome::SpellingChecked(r) => r.is_ok(),
            Outcome::ForecastLoaded(r) => r.is_ok(),
        }
    }

    /// Outcomes that only make sense for the session that asked for them
    pub fn is_session_bound(&self) -> bool {
        !matches!(
            self,
            Outcome::AccountSaved(_) | Outcome::AccountActivated(_)
        )
    }
}

/// An outcome with the session generation of the request that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Completed {
    pub generation: u64,
    pub outcome: Outcome,
}

pub struct Dispatcher {
    handle: Handle,
    tx: UnboundedSender<Completed>,
}

impl Dispatcher {
    /// Create a dispatcher spawning onto `handle`, and the receiving end
    /// the event loop drains
    pub fn new(handle: Handle) -> (Self, UnboundedReceiver<Completed>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { handle, tx }, rx)
    }

    pub fn dispatch(&self, request: Request) {
        let tx = self.tx.clone();
        let name = request.call.name();
        let generation = request.generation;
        debug!(call = name, generation, "dispatching");
        self.handle.spawn(async move {
            let outcome = request.execute().await;
            debug!(call = name, ok = outcome.is_ok(), "call finished");
            // receiver is gone only when the app is shutting down
            let _ = tx.send(Completed {
                generation,
                outcome,
            });
        });
    }
}
