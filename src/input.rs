//! Keyboard input routing.
//!
//! Converts crossterm key events into form edits, focus moves and button
//! presses for the current page. Returns the remote calls a button press
//! produced.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::dispatch::Request;
use crate::handlers::{handle_button, handle_delete_selected_alert};
use crate::models::{ButtonId, Element, FieldId, Page};

/// Button fired by Esc on each page
fn back_button(page: Page) -> Option<ButtonId> {
    match page {
        Page::NewAccountSetup | Page::AccountActivation => Some(ButtonId::BackToLoginNav),
        Page::NewAlert => Some(ButtonId::BackToAlertsNav),
        Page::ForecastingResults => Some(ButtonId::BackToNewAlertNav),
        Page::Login | Page::Alerts => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Vec<Request> {
    if key.kind == KeyEventKind::Release {
        return Vec::new();
    }

    // Ctrl+C quits from anywhere, even with a notice open
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Vec::new();
    }

    // A pending notice swallows the next key
    if app.dismiss_notice().is_some() {
        return Vec::new();
    }

    let page = app.current_page();
    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return Vec::new();
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return Vec::new();
        }
        KeyCode::Esc => {
            return match back_button(page) {
                Some(button) => handle_button(app, button),
                None => Vec::new(),
            };
        }
        _ => {}
    }

    if page == Page::Alerts {
        match key.code {
            KeyCode::Up => {
                app.select_prev_alert();
                return Vec::new();
            }
            KeyCode::Down => {
                app.select_next_alert();
                return Vec::new();
            }
            KeyCode::Delete | KeyCode::Char('x') => return handle_delete_selected_alert(app),
            _ => {}
        }
    }

    match app.focused_element() {
        Some(Element::Field(field)) => {
            edit_field(app, field, key);
            Vec::new()
        }
        Some(Element::Button(button)) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => handle_button(app, button),
            KeyCode::Down | KeyCode::Right => {
                app.focus_next();
                Vec::new()
            }
            KeyCode::Up | KeyCode::Left => {
                app.focus_prev();
                Vec::new()
            }
            _ => Vec::new(),
        },
        None => Vec::new(),
    }
}

fn edit_field(app: &mut App, field: FieldId, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Down => app.focus_next(),
        KeyCode::Up => app.focus_prev(),
        KeyCode::Char(c) => {
            // Ctrl/Alt chords are not text
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                app.forms.input_mut(field).insert(c);
            }
        }
        KeyCode::Backspace => app.forms.input_mut(field).backspace(),
        KeyCode::Delete => app.forms.input_mut(field).delete(),
        KeyCode::Left => app.forms.input_mut(field).move_left(),
        KeyCode::Right => app.forms.input_mut(field).move_right(),
        KeyCode::Home => app.forms.input_mut(field).move_home(),
        KeyCode::End => app.forms.input_mut(field).move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::dispatch::ApiCall;
    use crate::models::Alert;
    use std::sync::Arc;

    fn app() -> App {
        App::new("http://localhost:8080", Arc::new(RecordingTransport::new()))
    }

    fn press(app: &mut App, code: KeyCode) -> Vec<Request> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = app();
        type_text(&mut app, "user1");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "pass1");
        assert_eq!(app.forms.value(FieldId::Username), "user1");
        assert_eq!(app.forms.value(FieldId::Password), "pass1");
    }

    #[test]
    fn test_login_through_keyboard() {
        let mut app = app();
        type_text(&mut app, "user1");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pass1");
        press(&mut app, KeyCode::Tab);
        let requests = press(&mut app, KeyCode::Enter);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].call, ApiCall::GetAllAlerts);
        assert_eq!(app.current_page(), Page::Alerts);
    }

    #[test]
    fn test_notice_swallows_next_key() {
        let mut app = app();
        app.notify("hello");
        press(&mut app, KeyCode::Char('a'));
        assert!(app.notices.is_empty());
        assert_eq!(app.forms.value(FieldId::Username), "");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.notify("pending");
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_goes_back() {
        let mut app = app();
        app.navigate_to(Page::AccountActivation);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_page(), Page::Login);
    }

    #[test]
    fn test_alerts_page_delete_key() {
        let mut app = app();
        app.session.log_in("user1", "pass1");
        app.navigate_to(Page::Alerts);
        app.set_alerts(vec![
            Alert {
                id: 1,
                name: "a".to_string(),
                search_terms: vec![],
            },
            Alert {
                id: 2,
                name: "b".to_string(),
                search_terms: vec![],
            },
        ]);
        press(&mut app, KeyCode::Down);
        let requests = press(&mut app, KeyCode::Char('x'));
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].call, ApiCall::DeleteAlert(2));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.forms.value(FieldId::Username), "");
    }
}
