//! Alert and forecast table rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::helpers::format_frequency;
use crate::models::{Alert, ForecastResult};
use crate::theme::{
    BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};

fn table_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(CYAN_PRIMARY)))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
}

fn header(labels: &[&'static str]) -> Row<'static> {
    Row::new(labels.iter().map(|l| Cell::from(*l)))
        .style(Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD))
}

/// Render the alert list with the selected row highlighted
pub fn render_alerts_table(area: Rect, alerts: &[Alert], selected: usize, frame: &mut Frame) {
    if alerts.is_empty() {
        let empty = Paragraph::new("No alerts yet. Create one with New Alert.")
            .style(Style::default().fg(TEXT_MUTED))
            .block(table_block(" Alerts "));
        frame.render_widget(empty, area);
        return;
    }

    let rows = alerts.iter().map(|alert| {
        Row::new(vec![
            Cell::from(alert.name.clone()).style(Style::default().fg(TEXT_PRIMARY)),
            Cell::from(alert.search_terms_display()).style(Style::default().fg(TEXT_SECONDARY)),
        ])
    });

    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .header(header(&["Message", "Search terms"]))
        .block(table_block(" Alerts "))
        .row_highlight_style(Style::default().bg(BG_TERTIARY).fg(CYAN_PRIMARY))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected.min(alerts.len() - 1)));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Render forecast results, one row per term, sorted by term
pub fn render_forecast_table(area: Rect, forecast: &ForecastResult, frame: &mut Frame) {
    let rows = forecast.iter().map(|(term, frequency)| {
        Row::new(vec![
            Cell::from(term.clone()).style(Style::default().fg(TEXT_PRIMARY)),
            Cell::from(format_frequency(*frequency)).style(Style::default().fg(CYAN_PRIMARY)),
        ])
    });

    let table = Table::new(rows, [Constraint::Percentage(70), Constraint::Percentage(30)])
        .header(header(&["Search term", "Forecast frequency"]))
        .block(table_block(" Forecast "));
    frame.render_widget(table, area);
}
