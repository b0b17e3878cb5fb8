//! Handlers binding form interactions to validation, the API client and
//! the router.
//!
//! Handlers never do I/O. They read and clear form fields, validate, update
//! app state, and return the remote calls to issue. `apply_completed` is the
//! continuation run when one of those calls completes.

use tracing::{debug, info, warn};

use crate::app::App;
use crate::codec::{build_alert_payload, search_terms_from_wire};
use crate::dispatch::{ApiCall, Completed, Outcome, Request};
use crate::models::{ButtonId, FieldId, Page};
use crate::validate::{
    activation_key_valid, credential_valid, credentials_valid, message_valid, passwords_match,
    phone_number_valid, search_terms_valid,
};

pub const MSG_BAD_CREDENTIALS: &str = "Your username and password were not formatted correctly";
pub const MSG_BAD_NEW_ACCOUNT: &str =
    "Your new account setup information was not formatted correctly.";
pub const MSG_BAD_ACTIVATION: &str =
    "Your account activation information was not formatted correctly.";
pub const MSG_BAD_ALERT: &str = "Alert fields are formatted incorrectly.";
pub const MSG_BAD_SEARCH_TERMS: &str = "Search terms are formatted incorrectly.";
pub const MSG_NOT_LOGGED_IN: &str = "Please log in first.";
pub const MSG_ACCOUNT_SAVE_FAILED: &str =
    "A server error occurred saving your new account - please try again.";
pub const MSG_ACTIVATION_FAILED: &str = "Account activation failed.";
pub const MSG_LOAD_ALERTS_FAILED: &str = "Failed to load alerts.";
pub const MSG_SAVE_ALERT_FAILED: &str = "Save failed.";
pub const MSG_DELETE_ALERT_FAILED: &str = "Delete failed.";
pub const MSG_SPELLCHECK_FAILED: &str = "Spellcheck failed.";
pub const MSG_FORECAST_FAILED: &str = "Forecast failed.";

/// Wrap `call` in a request on the active client, or send the user back
/// to the login page when there is no session
fn authenticated(app: &mut App, call: ApiCall) -> Vec<Request> {
    if let Some(client) = app.session.active().cloned() {
        return vec![Request::new(client, call, app.session.generation())];
    }
    warn!(call = call.name(), "no active session");
    app.notify(MSG_NOT_LOGGED_IN);
    app.navigate_to(Page::Login);
    Vec::new()
}

pub fn handle_log_in(app: &mut App) -> Vec<Request> {
    let username = app.forms.take(FieldId::Username);
    let password = app.forms.take(FieldId::Password);

    if !credentials_valid(&username, &password) {
        debug!("login rejected by validation");
        app.notify(MSG_BAD_CREDENTIALS);
        app.navigate_to(Page::Login);
        return Vec::new();
    }

    let client = app.session.log_in(&username, &password);
    app.navigate_to(Page::Alerts);
    vec![Request::new(
        client,
        ApiCall::GetAllAlerts,
        app.session.generation(),
    )]
}

/// Submit the new-account form. On success the user is taken to the
/// account activation page rather than back to login, since a new account
/// must be activated before it can log in.
pub fn handle_set_up_new_account(app: &mut App) -> Vec<Request> {
    let username = app.forms.take(FieldId::NewUsername);
    let password = app.forms.take(FieldId::NewPassword);
    let password_confirm = app.forms.take(FieldId::NewPasswordConfirm);
    let phone_number = app.forms.take(FieldId::PhoneNumber);
    let key = app.forms.take(FieldId::NewAccountKey);

    let valid = passwords_match(&password, &password_confirm)
        && credentials_valid(&username, &password)
        && phone_number_valid(&phone_number);
    if !valid {
        debug!("new account rejected by validation");
        app.notify(MSG_BAD_NEW_ACCOUNT);
        return Vec::new();
    }

    let client = app.session.client_for(&username, &password);
    app.navigate_to(Page::AccountActivation);
    vec![Request::new(
        client,
        ApiCall::SaveNewAccount { phone_number, key },
        app.session.generation(),
    )]
}

pub fn handle_activate_account(app: &mut App) -> Vec<Request> {
    let username = app.forms.take(FieldId::ActivationUsername);
    let phone_number = app.forms.take(FieldId::ActivationPhoneNumber);
    let activation_key = app.forms.take(FieldId::ActivationKey);

    let valid = credential_valid(&username)
        && phone_number_valid(&phone_number)
        && activation_key_valid(&activation_key);
    if !valid {
        debug!("activation rejected by validation");
        app.notify(MSG_BAD_ACTIVATION);
        return Vec::new();
    }

    vec![Request::new(
        app.session.anonymous(),
        ApiCall::ActivateAccount {
            username,
            phone_number,
            activation_key,
        },
        app.session.generation(),
    )]
}

pub fn handle_save_new_alert(app: &mut App) -> Vec<Request> {
    let message = app.forms.take(FieldId::AlertMessage);
    let terms = app.forms.take(FieldId::SearchTerms);

    if !(message_valid(&message) && search_terms_valid(&terms)) {
        debug!("alert rejected by validation");
        app.notify(MSG_BAD_ALERT);
        return Vec::new();
    }

    let payload = build_alert_payload(None, &message, &terms);
    authenticated(app, ApiCall::SaveAlert(payload))
}

/// Re-fetch alerts and show the alerts page. Navigation happens whether
/// or not the fetch later succeeds.
pub fn handle_refresh_alerts(app: &mut App) -> Vec<Request> {
    let requests = authenticated(app, ApiCall::GetAllAlerts);
    if !requests.is_empty() {
        app.navigate_to(Page::Alerts);
    }
    requests
}

pub fn handle_delete_alert(app: &mut App, alert_id: i64) -> Vec<Request> {
    authenticated(app, ApiCall::DeleteAlert(alert_id))
}

pub fn handle_delete_selected_alert(app: &mut App) -> Vec<Request> {
    match app.selected_alert().map(|alert| alert.id) {
        Some(id) => handle_delete_alert(app, id),
        None => Vec::new(),
    }
}

/// Search terms for a lookup call; the field is left untouched
fn lookup_terms(app: &mut App) -> Option<String> {
    let terms = app.forms.value(FieldId::SearchTerms).to_string();
    if search_terms_valid(&terms) {
        Some(terms)
    } else {
        app.notify(MSG_BAD_SEARCH_TERMS);
        None
    }
}

pub fn handle_check_spelling(app: &mut App) -> Vec<Request> {
    match lookup_terms(app) {
        Some(terms) => authenticated(app, ApiCall::CheckSpelling(terms)),
        None => Vec::new(),
    }
}

pub fn handle_get_forecast(app: &mut App) -> Vec<Request> {
    match lookup_terms(app) {
        Some(terms) => authenticated(app, ApiCall::GetForecast(terms)),
        None => Vec::new(),
    }
}

pub fn handle_log_out(app: &mut App) -> Vec<Request> {
    app.session.log_out();
    app.set_alerts(Vec::new());
    app.forecast.clear();
    app.navigate_to(Page::Login);
    Vec::new()
}

/// Fire the handler bound to a button
pub fn handle_button(app: &mut App, button: ButtonId) -> Vec<Request> {
    debug!(button = button.as_str(), "button pressed");
    match button {
        ButtonId::LoginSubmit => handle_log_in(app),
        ButtonId::NewAccountSetupSubmit => handle_set_up_new_account(app),
        ButtonId::ActivateAccountSubmit => handle_activate_account(app),
        ButtonId::SaveAlertSubmit => handle_save_new_alert(app),
        ButtonId::RefreshAlertsSubmit => handle_refresh_alerts(app),
        ButtonId::CheckSpelling => handle_check_spelling(app),
        ButtonId::Forecast => handle_get_forecast(app),
        ButtonId::LogOutNav => handle_log_out(app),
        ButtonId::SignUpNav => navigate(app, Page::NewAccountSetup),
        ButtonId::ActivateNav => navigate(app, Page::AccountActivation),
        ButtonId::BackToLoginNav => navigate(app, Page::Login),
        ButtonId::NewAlertSetupNav => navigate(app, Page::NewAlert),
        ButtonId::BackToAlertsNav => navigate(app, Page::Alerts),
        ButtonId::BackToNewAlertNav => navigate(app, Page::NewAlert),
    }
}

fn navigate(app: &mut App, page: Page) -> Vec<Request> {
    app.navigate_to(page);
    Vec::new()
}

/// Apply a completed call unless it belongs to a session that has since
/// ended or been replaced
pub fn apply_completed(app: &mut App, completed: Completed) -> Vec<Request> {
    let current = app.session.generation();
    if completed.outcome.is_session_bound() && completed.generation != current {
        debug!(
            issued = completed.generation,
            current, "dropping outcome from an earlier session"
        );
        return Vec::new();
    }
    apply_outcome(app, completed.outcome)
}

/// Continuation for a completed call. May return follow-up calls.
pub fn apply_outcome(app: &mut App, outcome: Outcome) -> Vec<Request> {
    match outcome {
        Outcome::AccountSaved(Ok(())) => {
            info!("new account saved");
            Vec::new()
        }
        Outcome::AccountSaved(Err(error)) => {
            warn!(%error, "saving new account failed");
            app.notify(MSG_ACCOUNT_SAVE_FAILED);
            app.navigate_to(Page::NewAccountSetup);
            Vec::new()
        }
        Outcome::AccountActivated(Ok(())) => {
            app.navigate_to(Page::Login);
            Vec::new()
        }
        Outcome::AccountActivated(Err(error)) => {
            warn!(%error, "account activation failed");
            app.notify(MSG_ACTIVATION_FAILED);
            Vec::new()
        }
        Outcome::AlertsLoaded(Ok(alerts)) => {
            app.set_alerts(alerts);
            Vec::new()
        }
        Outcome::AlertsLoaded(Err(error)) => {
            warn!(%error, "loading alerts failed");
            app.notify(MSG_LOAD_ALERTS_FAILED);
            Vec::new()
        }
        Outcome::AlertSaved(Ok(())) | Outcome::AlertDeleted(Ok(())) => handle_refresh_alerts(app),
        Outcome::AlertSaved(Err(error)) => {
            warn!(%error, "saving alert failed");
            app.notify(MSG_SAVE_ALERT_FAILED);
            Vec::new()
        }
        Outcome::AlertDeleted(Err(error)) => {
            warn!(%error, "deleting alert failed");
            app.notify(MSG_DELETE_ALERT_FAILED);
            Vec::new()
        }
        Outcome::SpellingChecked(Ok(terms)) => {
            app.forms
                .set(FieldId::SearchTerms, search_terms_from_wire(&terms));
            Vec::new()
        }
        Outcome::SpellingChecked(Err(error)) => {
            warn!(%error, "spellcheck failed");
            app.notify(MSG_SPELLCHECK_FAILED);
            Vec::new()
        }
        Outcome::ForecastLoaded(Ok(forecast)) => {
            app.forecast = forecast;
            app.navigate_to(Page::ForecastingResults);
            Vec::new()
        }
        Outcome::ForecastLoaded(Err(error)) => {
            warn!(%error, "forecast failed");
            app.notify(MSG_FORECAST_FAILED);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::api::{ApiError, Method};
    use crate::models::{Alert, ForecastResult};
    use std::sync::Arc;

    fn app() -> App {
        App::new("http://localhost:8080", Arc::new(RecordingTransport::new()))
    }

    fn logged_in_app() -> App {
        let mut app = app();
        app.forms.set(FieldId::Username, "user1");
        app.forms.set(FieldId::Password, "pass1");
        handle_log_in(&mut app);
        app
    }

    fn server_error() -> ApiError {
        ApiError::Http {
            status: 500,
            body: "<empty>".to_string(),
        }
    }

    fn calls(requests: &[Request]) -> Vec<ApiCall> {
        requests.iter().map(|r| r.call.clone()).collect()
    }

    #[test]
    fn test_login_valid_fetches_alerts_once_and_shows_alerts() {
        let mut app = app();
        app.forms.set(FieldId::Username, "user1");
        app.forms.set(FieldId::Password, "pass1");

        let requests = handle_log_in(&mut app);

        assert_eq!(calls(&requests), vec![ApiCall::GetAllAlerts]);
        assert_eq!(requests[0].client.username(), "user1");
        assert_eq!(app.current_page(), Page::Alerts);
        assert_eq!(app.forms.value(FieldId::Username), "");
        assert_eq!(app.forms.value(FieldId::Password), "");
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_login_invalid_notifies_and_clears() {
        let mut app = app();
        app.forms.set(FieldId::Username, "a:b");
        app.forms.set(FieldId::Password, "pass1");

        let requests = handle_log_in(&mut app);

        assert!(requests.is_empty());
        assert_eq!(app.current_page(), Page::Login);
        assert_eq!(app.notices.front().map(String::as_str), Some(MSG_BAD_CREDENTIALS));
        assert_eq!(app.forms.value(FieldId::Username), "");
        assert!(app.session.active().is_none());
    }

    #[test]
    fn test_second_login_replaces_session() {
        let mut app = logged_in_app();
        app.forms.set(FieldId::Username, "other");
        app.forms.set(FieldId::Password, "pass2");
        let requests = handle_log_in(&mut app);
        assert_eq!(requests[0].client.username(), "other");
        assert_eq!(app.session.active().map(|c| c.username()), Some("other"));
    }

    #[test]
    fn test_new_account_valid() {
        let mut app = app();
        app.navigate_to(Page::NewAccountSetup);
        app.forms.set(FieldId::NewUsername, "newuser");
        app.forms.set(FieldId::NewPassword, "secret1");
        app.forms.set(FieldId::NewPasswordConfirm, "secret1");
        app.forms.set(FieldId::PhoneNumber, "+11234567890");
        app.forms.set(FieldId::NewAccountKey, "signup-key");

        let requests = handle_set_up_new_account(&mut app);

        assert_eq!(
            calls(&requests),
            vec![ApiCall::SaveNewAccount {
                phone_number: "+11234567890".to_string(),
                key: "signup-key".to_string(),
            }]
        );
        assert_eq!(requests[0].client.username(), "newuser");
        assert!(app.session.active().is_none());
        assert_eq!(app.current_page(), Page::AccountActivation);
        for field in Page::NewAccountSetup.fields() {
            assert_eq!(app.forms.value(field), "");
        }
    }

    #[test]
    fn test_new_account_password_mismatch() {
        let mut app = app();
        app.navigate_to(Page::NewAccountSetup);
        app.forms.set(FieldId::NewUsername, "newuser");
        app.forms.set(FieldId::NewPassword, "secret1");
        app.forms.set(FieldId::NewPasswordConfirm, "secret2");
        app.forms.set(FieldId::PhoneNumber, "+11234567890");

        let requests = handle_set_up_new_account(&mut app);

        assert!(requests.is_empty());
        assert_eq!(app.notices.front().map(String::as_str), Some(MSG_BAD_NEW_ACCOUNT));
        assert_eq!(app.current_page(), Page::NewAccountSetup);
        assert_eq!(app.forms.value(FieldId::NewUsername), "");
    }

    #[test]
    fn test_account_save_failure_returns_to_setup() {
        let mut app = app();
        app.navigate_to(Page::AccountActivation);
        apply_outcome(&mut app, Outcome::AccountSaved(Err(server_error())));
        assert_eq!(app.current_page(), Page::NewAccountSetup);
        assert_eq!(app.notices.front().map(String::as_str), Some(MSG_ACCOUNT_SAVE_FAILED));
    }

    #[test]
    fn test_activation_valid() {
        let mut app = app();
        app.navigate_to(Page::AccountActivation);
        app.forms.set(FieldId::ActivationUsername, "newuser");
        app.forms.set(FieldId::ActivationPhoneNumber, "+11234567890");
        app.forms.set(FieldId::ActivationKey, "abcdefghijklmnopqrst");

        let requests = handle_activate_account(&mut app);

        assert_eq!(
            calls(&requests),
            vec![ApiCall::ActivateAccount {
                username: "newuser".to_string(),
                phone_number: "+11234567890".to_string(),
                activation_key: "abcdefghijklmnopqrst".to_string(),
            }]
        );
        assert_eq!(app.forms.value(FieldId::ActivationKey), "");
    }

    #[test]
    fn test_activation_short_key_rejected() {
        let mut app = app();
        app.forms.set(FieldId::ActivationUsername, "newuser");
        app.forms.set(FieldId::ActivationPhoneNumber, "+11234567890");
        app.forms.set(FieldId::ActivationKey, "short");

        assert!(handle_activate_account(&mut app).is_empty());
        assert_eq!(app.notices.front().map(String::as_str), Some(MSG_BAD_ACTIVATION));
    }

    #[test]
    fn test_activation_outcomes() {
        let mut app = app();
        app.navigate_to(Page::AccountActivation);
        apply_outcome(&mut app, Outcome::AccountActivated(Err(server_error())));
        assert_eq!(app.current_page(), Page::AccountActivation);
        assert_eq!(app.notices.len(), 1);

        apply_outcome(&mut app, Outcome::AccountActivated(Ok(())));
        assert_eq!(app.current_page(), Page::Login);
    }

    #[test]
    fn test_save_alert_with_short_message_sends_nothing() {
        let mut app = logged_in_app();
        app.navigate_to(Page::NewAlert);
        app.forms.set(FieldId::AlertMessage, "h");
        app.forms.set(FieldId::SearchTerms, "wool,sweater");

        let requests = handle_save_new_alert(&mut app);

        assert!(requests.is_empty());
        assert_eq!(app.notices.front().map(String::as_str), Some(MSG_BAD_ALERT));
        assert_eq!(app.forms.value(FieldId::SearchTerms), "");
    }

    #[test]
    fn test_save_alert_builds_payload() {
        let mut app = logged_in_app();
        app.navigate_to(Page::NewAlert);
        app.forms.set(FieldId::AlertMessage, "hi");
        app.forms.set(FieldId::SearchTerms, "a,b");

        let requests = handle_save_new_alert(&mut app);

        assert_eq!(
            calls(&requests),
            vec![ApiCall::SaveAlert(build_alert_payload(None, "hi", "a,b"))]
        );
    }

    #[test]
    fn test_save_alert_without_session() {
        let mut app = app();
        app.navigate_to(Page::NewAlert);
        app.forms.set(FieldId::AlertMessage, "hi");
        app.forms.set(FieldId::SearchTerms, "a,b");

        assert!(handle_save_new_alert(&mut app).is_empty());
        assert_eq!(app.current_page(), Page::Login);
        assert_eq!(app.notices.front().map(String::as_str), Some(MSG_NOT_LOGGED_IN));
    }

    #[test]
    fn test_save_and_delete_success_refresh() {
        let mut app = logged_in_app();
        app.navigate_to(Page::NewAlert);

        let follow_up = apply_outcome(&mut app, Outcome::AlertSaved(Ok(())));
        assert_eq!(calls(&follow_up), vec![ApiCall::GetAllAlerts]);
        assert_eq!(app.current_page(), Page::Alerts);

        let follow_up = apply_outcome(&mut app, Outcome::AlertDeleted(Ok(())));
        assert_eq!(calls(&follow_up), vec![ApiCall::GetAllAlerts]);
    }

    #[test]
    fn test_save_and_delete_failure_do_not_refresh() {
        let mut app = logged_in_app();
        app.navigate_to(Page::NewAlert);

        assert!(apply_outcome(&mut app, Outcome::AlertSaved(Err(server_error()))).is_empty());
        assert!(apply_outcome(&mut app, Outcome::AlertDeleted(Err(server_error()))).is_empty());
        assert_eq!(app.current_page(), Page::NewAlert);
        assert_eq!(
            app.notices.iter().map(String::as_str).collect::<Vec<_>>(),
            vec![MSG_SAVE_ALERT_FAILED, MSG_DELETE_ALERT_FAILED]
        );
    }

    #[test]
    fn test_refresh_navigates_even_if_fetch_fails() {
        let mut app = logged_in_app();
        app.navigate_to(Page::NewAlert);

        let requests = handle_refresh_alerts(&mut app);
        assert_eq!(calls(&requests), vec![ApiCall::GetAllAlerts]);
        assert_eq!(app.current_page(), Page::Alerts);

        apply_outcome(&mut app, Outcome::AlertsLoaded(Err(server_error())));
        assert_eq!(app.current_page(), Page::Alerts);
        assert_eq!(app.notices.front().map(String::as_str), Some(MSG_LOAD_ALERTS_FAILED));
    }

    #[test]
    fn test_alerts_loaded_replaces_list() {
        let mut app = logged_in_app();
        app.set_alerts(vec![Alert {
            id: 1,
            name: "old".to_string(),
            search_terms: vec![],
        }]);
        let fresh = vec![Alert {
            id: 9,
            name: "new".to_string(),
            search_terms: vec!["wool".to_string()],
        }];
        apply_outcome(&mut app, Outcome::AlertsLoaded(Ok(fresh.clone())));
        assert_eq!(app.alerts, fresh);
    }

    #[test]
    fn test_delete_selected_alert() {
        let mut app = logged_in_app();
        app.set_alerts(vec![
            Alert {
                id: 4,
                name: "a".to_string(),
                search_terms: vec![],
            },
            Alert {
                id: 8,
                name: "b".to_string(),
                search_terms: vec![],
            },
        ]);
        app.select_next_alert();
        assert_eq!(
            calls(&handle_delete_selected_alert(&mut app)),
            vec![ApiCall::DeleteAlert(8)]
        );
    }

    #[test]
    fn test_delete_with_no_alerts_is_noop() {
        let mut app = logged_in_app();
        assert!(handle_delete_selected_alert(&mut app).is_empty());
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_check_spelling_keeps_field_and_overwrites_on_success() {
        let mut app = logged_in_app();
        app.navigate_to(Page::NewAlert);
        app.forms.set(FieldId::SearchTerms, "sweeter,wol");

        let requests = handle_check_spelling(&mut app);
        assert_eq!(
            calls(&requests),
            vec![ApiCall::CheckSpelling("sweeter,wol".to_string())]
        );
        assert_eq!(app.forms.value(FieldId::SearchTerms), "sweeter,wol");

        apply_outcome(
            &mut app,
            Outcome::SpellingChecked(Ok(vec!["sweater".to_string(), "wool".to_string()])),
        );
        assert_eq!(app.forms.value(FieldId::SearchTerms), "sweater,wool");
    }

    #[test]
    fn test_check_spelling_rejects_short_terms() {
        let mut app = logged_in_app();
        app.forms.set(FieldId::SearchTerms, "a");
        assert!(handle_check_spelling(&mut app).is_empty());
        assert_eq!(app.notices.front().map(String::as_str), Some(MSG_BAD_SEARCH_TERMS));
    }

    #[test]
    fn test_forecast_success_shows_results() {
        let mut app = logged_in_app();
        app.navigate_to(Page::NewAlert);
        app.forms.set(FieldId::SearchTerms, "wool,sweater");

        let requests = handle_get_forecast(&mut app);
        assert_eq!(
            calls(&requests),
            vec![ApiCall::GetForecast("wool,sweater".to_string())]
        );

        let mut forecast = ForecastResult::new();
        forecast.insert("wool".to_string(), 0.5);
        apply_outcome(&mut app, Outcome::ForecastLoaded(Ok(forecast.clone())));
        assert_eq!(app.forecast, forecast);
        assert_eq!(app.current_page(), Page::ForecastingResults);
    }

    #[test]
    fn test_forecast_failure_stays_put() {
        let mut app = logged_in_app();
        app.navigate_to(Page::NewAlert);
        apply_outcome(&mut app, Outcome::ForecastLoaded(Err(server_error())));
        assert_eq!(app.current_page(), Page::NewAlert);
        assert_eq!(app.notices.front().map(String::as_str), Some(MSG_FORECAST_FAILED));
    }

    #[test]
    fn test_log_out_drops_session() {
        let mut app = logged_in_app();
        handle_button(&mut app, ButtonId::LogOutNav);
        assert!(app.session.active().is_none());
        assert_eq!(app.current_page(), Page::Login);
        assert!(app.alerts.is_empty());
    }

    #[test]
    fn test_nav_buttons() {
        let mut app = app();
        handle_button(&mut app, ButtonId::SignUpNav);
        assert_eq!(app.current_page(), Page::NewAccountSetup);
        handle_button(&mut app, ButtonId::BackToLoginNav);
        assert_eq!(app.current_page(), Page::Login);
        handle_button(&mut app, ButtonId::ActivateNav);
        assert_eq!(app.current_page(), Page::AccountActivation);
    }

    fn completed(app: &App, outcome: Outcome) -> Completed {
        Completed {
            generation: app.session.generation(),
            outcome,
        }
    }

    #[test]
    fn test_alerts_from_ended_session_are_dropped() {
        let mut app = logged_in_app();
        let issued = app.session.generation();
        handle_log_out(&mut app);

        let late = Completed {
            generation: issued,
            outcome: Outcome::AlertsLoaded(Ok(vec![Alert {
                id: 1,
                name: "first user alert".to_string(),
                search_terms: vec!["wool".to_string()],
            }])),
        };
        assert!(apply_completed(&mut app, late).is_empty());
        assert!(app.alerts.is_empty());

        app.forms.set(FieldId::Username, "user2");
        app.forms.set(FieldId::Password, "pass2");
        handle_log_in(&mut app);
        let failed = completed(&app, Outcome::AlertsLoaded(Err(server_error())));
        apply_completed(&mut app, failed);

        assert_eq!(app.current_page(), Page::Alerts);
        assert!(app.alerts.is_empty());
        assert!(handle_delete_selected_alert(&mut app).is_empty());
    }

    #[test]
    fn test_outcomes_from_replaced_session_are_dropped() {
        let mut app = logged_in_app();
        let issued = app.session.generation();
        app.navigate_to(Page::NewAlert);
        app.forms.set(FieldId::SearchTerms, "wool");
        app.forms.set(FieldId::Username, "user2");
        app.forms.set(FieldId::Password, "pass2");
        handle_log_in(&mut app);
        app.navigate_to(Page::NewAlert);
        app.forms.set(FieldId::SearchTerms, "wool");

        let stale = |outcome| Completed {
            generation: issued,
            outcome,
        };
        assert!(apply_completed(&mut app, stale(Outcome::AlertSaved(Ok(())))).is_empty());
        assert!(apply_completed(&mut app, stale(Outcome::AlertDeleted(Ok(())))).is_empty());
        apply_completed(
            &mut app,
            stale(Outcome::SpellingChecked(Ok(vec!["other".to_string()]))),
        );
        apply_completed(
            &mut app,
            stale(Outcome::ForecastLoaded(Ok(ForecastResult::new()))),
        );
        apply_completed(&mut app, stale(Outcome::AlertsLoaded(Err(server_error()))));

        assert_eq!(app.current_page(), Page::NewAlert);
        assert_eq!(app.forms.value(FieldId::SearchTerms), "wool");
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_account_outcomes_apply_across_sessions() {
        let mut app = app();
        app.navigate_to(Page::AccountActivation);
        let issued = app.session.generation();
        app.session.log_in("user1", "pass1");
        app.session.log_out();

        apply_completed(
            &mut app,
            Completed {
                generation: issued,
                outcome: Outcome::AccountActivated(Ok(())),
            },
        );
        assert_eq!(app.current_page(), Page::Login);
    }

    #[test]
    fn test_current_session_outcome_is_applied() {
        let mut app = logged_in_app();
        let fresh = vec![Alert {
            id: 5,
            name: "mine".to_string(),
            search_terms: vec![],
        }];
        let done = completed(&app, Outcome::AlertsLoaded(Ok(fresh.clone())));
        apply_completed(&mut app, done);
        assert_eq!(app.alerts, fresh);
    }

    #[tokio::test]
    async fn test_login_request_uses_login_credentials() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond(200, "[]");
        let mut app = App::new("http://localhost:8080", transport.clone());
        app.forms.set(FieldId::Username, "user1");
        app.forms.set(FieldId::Password, "pass1");

        let mut requests = handle_log_in(&mut app);
        // typing into the form afterwards must not affect the session
        app.forms.set(FieldId::Username, "someone");

        let outcome = requests.remove(0).execute().await;
        assert_eq!(outcome, Outcome::AlertsLoaded(Ok(Vec::new())));
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.authorization.as_deref(), Some("Basic dXNlcjE6cGFzczE="));
    }
}
