//! Form field and button rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::{mask, to_u16};
use crate::forms::Forms;
use crate::models::{ButtonId, FieldId};
use crate::theme::{
    button_style, focus_border, BG_SECONDARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
};

/// Height of one rendered input (border + value + border)
pub const FIELD_HEIGHT: u16 = 3;

/// Render a single text input. When focused, the terminal cursor is placed
/// at the input's cursor position.
pub fn render_field(area: Rect, forms: &Forms, field: FieldId, focused: bool, frame: &mut Frame) {
    let value = forms.value(field);
    let shown = if field.is_secret() {
        mask(value)
    } else {
        value.to_string()
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", field.label()),
            Style::default().fg(TEXT_MUTED),
        ))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(focus_border(focused))
        .style(Style::default().bg(BG_SECONDARY));

    // Keep the cursor visible by scrolling long values horizontally
    let inner_width = area.width.saturating_sub(2);
    let cursor = to_u16(forms.input(field).map_or(0, |input| input.cursor()));
    let scroll = cursor.saturating_sub(inner_width.saturating_sub(1));

    let paragraph = Paragraph::new(shown)
        .style(Style::default().fg(TEXT_PRIMARY))
        .scroll((0, scroll))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused {
        frame.set_cursor_position(Position::new(
            area.x + 1 + cursor.saturating_sub(scroll),
            area.y + 1,
        ));
    }
}

/// Render a row of buttons, highlighting the focused one
pub fn render_buttons(area: Rect, buttons: &[(ButtonId, bool)], frame: &mut Frame) {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (button, focused) in buttons {
        spans.push(Span::styled(
            format!(" {} ", button.label()),
            button_style(*focused),
        ));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
