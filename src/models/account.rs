//! Account request bodies

use serde::Serialize;

/// Body of `POST /accounts`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAccountRequest {
    pub u: String,
    pub p: String,
    pub pn: String,
    pub key: String,
}

/// Body of `PUT /accounts`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivationRequest {
    pub u: String,
    pub pn: String,
    pub conf_key: String,
}
