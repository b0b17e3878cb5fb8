//! Enums used throughout the Watchsac TUI
//!
//! Pages, form fields and buttons each carry a stable string identifier.
//! These identifiers are the only schema the view layer exposes, so they
//! must not change when the rendering changes.

use std::fmt;
use std::str::FromStr;

/// One of the mutually exclusive views of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Page {
    Login,
    NewAccountSetup,
    AccountActivation,
    Alerts,
    NewAlert,
    ForecastingResults,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Login,
        Page::NewAccountSetup,
        Page::AccountActivation,
        Page::Alerts,
        Page::NewAlert,
        Page::ForecastingResults,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Login => "login_page",
            Page::NewAccountSetup => "new_account_setup_page",
            Page::AccountActivation => "account_activation_page",
            Page::Alerts => "alerts_page",
            Page::NewAlert => "new_alert_page",
            Page::ForecastingResults => "forecasting_results_page",
        }
    }

    /// Human readable title shown in the header bar
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Log In",
            Page::NewAccountSetup => "New Account Setup",
            Page::AccountActivation => "Account Activation",
            Page::Alerts => "Your Alerts",
            Page::NewAlert => "New Alert",
            Page::ForecastingResults => "Forecast",
        }
    }

    /// Focusable elements of the page, in tab order
    pub fn elements(&self) -> &'static [Element] {
        use ButtonId as B;
        use Element::{Button, Field};
        use FieldId as F;
        match self {
            Page::Login => &[
                Field(F::Username),
                Field(F::Password),
                Button(B::LoginSubmit),
                Button(B::SignUpNav),
                Button(B::ActivateNav),
            ],
            Page::NewAccountSetup => &[
                Field(F::NewUsername),
                Field(F::NewPassword),
                Field(F::NewPasswordConfirm),
                Field(F::PhoneNumber),
                Field(F::NewAccountKey),
                Button(B::NewAccountSetupSubmit),
                Button(B::BackToLoginNav),
            ],
            Page::AccountActivation => &[
                Field(F::ActivationUsername),
                Field(F::ActivationPhoneNumber),
                Field(F::ActivationKey),
                Button(B::ActivateAccountSubmit),
                Button(B::BackToLoginNav),
            ],
            Page::Alerts => &[
                Button(B::RefreshAlertsSubmit),
                Button(B::NewAlertSetupNav),
                Button(B::LogOutNav),
            ],
            Page::NewAlert => &[
                Field(F::AlertMessage),
                Field(F::SearchTerms),
                Button(B::SaveAlertSubmit),
                Button(B::CheckSpelling),
                Button(B::Forecast),
                Button(B::BackToAlertsNav),
            ],
            Page::ForecastingResults => &[Button(B::BackToNewAlertNav)],
        }
    }

    /// Fields that belong to this page
    pub fn fields(self) -> impl Iterator<Item = FieldId> {
        self.elements().iter().filter_map(|e| match e {
            Element::Field(id) => Some(*id),
            Element::Button(_) => None,
        })
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown page: {}", s))
    }
}

/// Text input identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Username,
    Password,
    NewUsername,
    NewPassword,
    NewPasswordConfirm,
    PhoneNumber,
    NewAccountKey,
    ActivationUsername,
    ActivationPhoneNumber,
    ActivationKey,
    AlertMessage,
    SearchTerms,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Username => "username_input",
            FieldId::Password => "password_input",
            FieldId::NewUsername => "new_username_input",
            FieldId::NewPassword => "new_password_input",
            FieldId::NewPasswordConfirm => "new_password_input_2",
            FieldId::PhoneNumber => "phone_number_input",
            FieldId::NewAccountKey => "new_account_key_input",
            FieldId::ActivationUsername => "activation_username_input",
            FieldId::ActivationPhoneNumber => "activation_phone_number_input",
            FieldId::ActivationKey => "activation_key_input",
            FieldId::AlertMessage => "alert_message_input",
            FieldId::SearchTerms => "search_terms_input",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Username | FieldId::NewUsername | FieldId::ActivationUsername => "Username",
            FieldId::Password | FieldId::NewPassword => "Password",
            FieldId::NewPasswordConfirm => "Confirm password",
            FieldId::PhoneNumber | FieldId::ActivationPhoneNumber => "Phone number (+1XXXXXXXXXX)",
            FieldId::NewAccountKey => "New account key",
            FieldId::ActivationKey => "Activation key",
            FieldId::AlertMessage => "Alert message",
            FieldId::SearchTerms => "Search terms (comma separated)",
        }
    }

    /// Whether the value is rendered masked
    pub fn is_secret(&self) -> bool {
        matches!(
            self,
            FieldId::Password | FieldId::NewPassword | FieldId::NewPasswordConfirm
        )
    }
}

/// Button identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    LoginSubmit,
    SignUpNav,
    ActivateNav,
    NewAccountSetupSubmit,
    ActivateAccountSubmit,
    BackToLoginNav,
    RefreshAlertsSubmit,
    NewAlertSetupNav,
    LogOutNav,
    SaveAlertSubmit,
    CheckSpelling,
    Forecast,
    BackToAlertsNav,
    BackToNewAlertNav,
}

impl ButtonId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonId::LoginSubmit => "login_submit_button",
            ButtonId::SignUpNav => "sign_up_nav_button",
            ButtonId::ActivateNav => "activate_nav_button",
            ButtonId::NewAccountSetupSubmit => "new_account_setup_submit_button",
            ButtonId::ActivateAccountSubmit => "activate_account_submit_button",
            ButtonId::BackToLoginNav => "back_to_login_nav_button",
            ButtonId::RefreshAlertsSubmit => "refresh_alerts_submit_button",
            ButtonId::NewAlertSetupNav => "new_alert_setup_nav_button",
            ButtonId::LogOutNav => "log_out_nav_button",
            ButtonId::SaveAlertSubmit => "save_alert_submit_button",
            ButtonId::CheckSpelling => "check_spelling_button",
            ButtonId::Forecast => "forecast_button",
            ButtonId::BackToAlertsNav => "back_to_alerts_nav_button",
            ButtonId::BackToNewAlertNav => "back_to_new_alert_nav_button",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ButtonId::LoginSubmit => "Log In",
            ButtonId::SignUpNav => "Sign Up",
            ButtonId::ActivateNav => "Activate Account",
            ButtonId::NewAccountSetupSubmit => "Create Account",
            ButtonId::ActivateAccountSubmit => "Activate",
            ButtonId::BackToLoginNav => "Back",
            ButtonId::RefreshAlertsSubmit => "Refresh",
            ButtonId::NewAlertSetupNav => "New Alert",
            ButtonId::LogOutNav => "Log Out",
            ButtonId::SaveAlertSubmit => "Save",
            ButtonId::CheckSpelling => "Check Spelling",
            ButtonId::Forecast => "Forecast",
            ButtonId::BackToAlertsNav => "Back",
            ButtonId::BackToNewAlertNav => "Back",
        }
    }
}

/// A focusable element on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Field(FieldId),
    Button(ButtonId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_identifier_roundtrip() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn test_page_unknown_identifier() {
        assert!("settings_page".parse::<Page>().is_err());
    }

    #[test]
    fn test_every_page_has_a_focusable_element() {
        for page in Page::ALL {
            assert!(!page.elements().is_empty(), "{} has no elements", page);
        }
    }

    #[test]
    fn test_field_ids_are_unique() {
        let mut ids: Vec<&str> = Page::ALL
            .iter()
            .flat_map(|p| p.fields())
            .map(|f| f.as_str())
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_only_password_fields_are_secret() {
        assert!(FieldId::Password.is_secret());
        assert!(FieldId::NewPasswordConfirm.is_secret());
        assert!(!FieldId::Username.is_secret());
        assert!(!FieldId::ActivationKey.is_secret());
    }
}
