//! Alert data structures
//!
//! `Alert` is what the service returns from `GET /alerts`; `AlertPayload`
//! is what the client sends to `POST /alerts`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Alert as stored by the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    /// Display message sent with the notification
    pub name: String,
    pub search_terms: Vec<String>,
}

impl Alert {
    /// Search terms in their comma separated UI form
    pub fn search_terms_display(&self) -> String {
        crate::codec::search_terms_from_wire(&self.search_terms)
    }
}

/// Body of an alert save request (id present = update, absent = create)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub search_terms: Vec<String>,
}

/// Search term to forecast frequency, rebuilt on every forecast call
pub type ForecastResult = BTreeMap<String, f64>;
