//! Top level page rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::forms::{render_buttons, render_field, FIELD_HEIGHT};
use super::helpers::{centered_rect, to_u16, wrap_text};
use super::tables::{render_alerts_table, render_forecast_table};
use crate::app::App;
use crate::models::{ButtonId, Element, Page};
use crate::theme::{
    AMBER_WARNING, BG_PRIMARY, BG_SECONDARY, CYAN_PRIMARY, RED_ERROR, ROUNDED_BORDERS,
    TEXT_MUTED, TEXT_PRIMARY,
};

const NOTICE_WIDTH: u16 = 50;

/// Draw the visible page, the bottom bar and any pending notice
pub fn render_app(app: &App, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Page body
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_header(app, layout[0], frame);
    render_page(app, layout[1], frame);
    render_bottom_bar(app, layout[2], frame);

    if let Some(notice) = app.notices.front() {
        render_notice(notice, area, frame);
    }
}

fn render_header(app: &App, area: Rect, frame: &mut Frame) {
    let page = app.current_page();
    let user = app
        .session
        .active()
        .map(|client| format!("  [{}]", client.username()))
        .unwrap_or_default();
    let header = Line::from(vec![
        Span::styled(
            " WATCHSAC ",
            Style::default()
                .fg(BG_PRIMARY)
                .bg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", page.title()), Style::default().fg(TEXT_PRIMARY)),
        Span::styled(user, Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_page(app: &App, area: Rect, frame: &mut Frame) {
    let page = app.current_page();
    let focused = app.focused_element();

    let fields: Vec<_> = page.fields().collect();
    let buttons: Vec<(ButtonId, bool)> = page
        .elements()
        .iter()
        .filter_map(|e| match e {
            Element::Button(id) => Some((*id, focused == Some(*e))),
            Element::Field(_) => None,
        })
        .collect();

    let body = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(CYAN_PRIMARY))
        .title(format!(" {} ", page.title()))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = body.inner(area);
    frame.render_widget(body, area);

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    let content_index = constraints.len();
    constraints.push(Constraint::Min(0)); // Table / spacer
    constraints.push(Constraint::Length(1)); // Buttons

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        let is_focused = focused == Some(Element::Field(*field));
        render_field(rows[i], &app.forms, *field, is_focused, frame);
    }

    match page {
        Page::Alerts => {
            render_alerts_table(rows[content_index], &app.alerts, app.selected_alert, frame)
        }
        Page::ForecastingResults => render_forecast_table(rows[content_index], &app.forecast, frame),
        _ => {}
    }

    render_buttons(rows[content_index + 1], &buttons, frame);
}

fn key_hints(page: Page) -> &'static str {
    match page {
        Page::Alerts => " ↑/↓: Select | x/Del: Remove | Tab: Focus | Enter: Press | Ctrl-C: Quit ",
        Page::Login => " Tab: Next | Enter: Next/Press | Ctrl-C: Quit ",
        _ => " Tab: Next | Enter: Next/Press | Esc: Back | Ctrl-C: Quit ",
    }
}

fn render_bottom_bar(app: &App, area: Rect, frame: &mut Frame) {
    let mut spans = vec![Span::styled(
        key_hints(app.current_page()),
        Style::default().fg(Color::Black).bg(CYAN_PRIMARY),
    )];
    if app.in_flight > 0 {
        spans.push(Span::styled(
            format!(" ⟳ {} pending ", app.in_flight),
            Style::default().fg(AMBER_WARNING),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_notice(notice: &str, area: Rect, frame: &mut Frame) {
    let inner_width = NOTICE_WIDTH.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = wrap_text(notice, inner_width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(TEXT_PRIMARY))))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "press any key",
        Style::default().fg(TEXT_MUTED),
    )));

    let height = to_u16(lines.len()).saturating_add(2);
    let popup = centered_rect(NOTICE_WIDTH, height, area);
    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(RED_ERROR))
        .style(Style::default().bg(BG_SECONDARY));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}
