//! Application state and core logic for the Watchsac TUI.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: page routing, form inputs, the active session,
//! the last loaded alerts and forecast, and pending user notices.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use crate::api::HttpTransport;
use crate::dispatch::{Completed, Request};
use crate::forms::Forms;
use crate::handlers;
use crate::models::{Alert, Element, ForecastResult, Page};
use crate::router::Router;
use crate::session::Session;

/// Application state
pub struct App {
    pub router: Router,
    pub forms: Forms,
    pub session: Session,
    /// Alerts as last returned by the service
    pub alerts: Vec<Alert>,
    /// Highlighted row in the alerts table
    pub selected_alert: usize,
    pub forecast: ForecastResult,
    /// Messages waiting for the user to acknowledge, oldest first
    pub notices: VecDeque<String>,
    /// Index into the current page's focusable elements
    pub focus: usize,
    /// Requests dispatched whose outcome has not arrived yet
    pub in_flight: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(api_url: &str, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            router: Router::with_all_pages(Page::Login),
            forms: Forms::new(),
            session: Session::new(api_url, transport),
            alerts: Vec::new(),
            selected_alert: 0,
            forecast: ForecastResult::new(),
            notices: VecDeque::new(),
            focus: 0,
            in_flight: 0,
            should_quit: false,
        }
    }

    pub fn current_page(&self) -> Page {
        self.router.current().unwrap_or(Page::Login)
    }

    /// Show `page` and reset focus to its first element
    pub fn navigate_to(&mut self, page: Page) {
        match self.router.navigate_to(page) {
            Ok(()) => self.focus = 0,
            Err(error) => warn!(%error, "navigation failed"),
        }
    }

    /// Queue a user-facing message
    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(notice = %message, "notifying user");
        self.notices.push_back(message);
    }

    pub fn dismiss_notice(&mut self) -> Option<String> {
        self.notices.pop_front()
    }

    pub fn focused_element(&self) -> Option<Element> {
        self.current_page().elements().get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.current_page().elements().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.current_page().elements().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Replace the alert list, keeping the selection in range
    pub fn set_alerts(&mut self, alerts: Vec<Alert>) {
        self.alerts = alerts;
        if self.selected_alert >= self.alerts.len() {
            self.selected_alert = self.alerts.len().saturating_sub(1);
        }
    }

    pub fn selected_alert(&self) -> Option<&Alert> {
        self.alerts.get(self.selected_alert)
    }

    pub fn select_next_alert(&mut self) {
        if self.selected_alert + 1 < self.alerts.len() {
            self.selected_alert += 1;
        }
    }

    pub fn select_prev_alert(&mut self) {
        self.selected_alert = self.selected_alert.saturating_sub(1);
    }

    /// Count `requests` as in flight; call right before dispatching them
    pub fn mark_in_flight(&mut self, requests: &[Request]) {
        self.in_flight += requests.len();
    }

    /// Apply every completed call waiting on `completed`, in arrival order.
    /// Returns the follow-up requests, already counted as in flight.
    pub fn drain_completed(
        &mut self,
        completed: &mut UnboundedReceiver<Completed>,
    ) -> Vec<Request> {
        let mut follow_ups = Vec::new();
        while let Ok(done) = completed.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            follow_ups.extend(handlers::apply_completed(self, done));
        }
        self.mark_in_flight(&follow_ups);
        follow_ups
    }
}
