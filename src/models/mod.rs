//! Data models for the Watchsac TUI
//!
//! This module contains the core data structures:
//! - Alert and forecast types exchanged with the service
//! - Account request bodies
//! - Page, field and button identifiers

pub mod account;
pub mod alert;
pub mod enums;

// Re-exports for convenient access
pub use account::{ActivationRequest, NewAccountRequest};
pub use alert::{Alert, AlertPayload, ForecastResult};
pub use enums::{ButtonId, Element, FieldId, Page};
