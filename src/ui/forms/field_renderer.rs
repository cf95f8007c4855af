//! Field rendering utilities for forms

use crate::state::{Field, Form, FormButton, FormState};
use crate::ui::components::render_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Rows taken by one field (borders + value)
pub const FIELD_HEIGHT: u16 = 3;

/// Bordered block for a field; a recorded error turns it red and shows below
fn field_block<'a>(field: Field, is_active: bool, error: Option<&'a str>) -> Block<'a> {
    let border_color = match (error, is_active) {
        (Some(_), _) => Color::Red,
        (None, true) => Color::Cyan,
        (None, false) => Color::DarkGray,
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a free-text input with a cursor when focused
pub fn draw_input(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    value: &str,
    placeholder: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let line = if value.is_empty() && !is_active {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        )];
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(line).block(field_block(field, is_active, error)),
        area,
    );
}

/// Draw a selector whose value is cycled with the arrow keys
pub fn draw_selector(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    value: &str,
    has_value: bool,
    is_active: bool,
    error: Option<&str>,
) {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if has_value {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(value.to_string(), value_style),
        Span::styled(" ▶", arrow_style),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(field_block(field, is_active, error)),
        area,
    );
}

/// Draw a slider as a gauge labelled with the formatted value
pub fn draw_slider(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    value: u32,
    range: (u32, u32),
    label: String,
    is_active: bool,
) {
    let (min, max) = range;
    let ratio = if max > min {
        f64::from(value.saturating_sub(min)) / f64::from(max - min)
    } else {
        0.0
    };
    let gauge_color = if is_active { Color::Cyan } else { Color::Blue };

    let gauge = Gauge::default()
        .block(field_block(field, is_active, None))
        .gauge_style(Style::default().fg(gauge_color).bg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(Span::styled(
            label,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(gauge, area);
}

/// Draw the buttons row of a step form, right-aligned
pub fn draw_buttons_row(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    is_enabled: impl Fn(FormButton) -> bool,
) {
    let Some(buttons) = form.as_form().map(|f| f.buttons()) else {
        return;
    };
    let row_active = form.is_buttons_row_active();
    let selected = form.selected_button();

    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(
        buttons
            .iter()
            .map(|b| Constraint::Length(b.label().len() as u16 + 6)),
    );
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, button) in buttons.iter().enumerate() {
        let accent = match button {
            FormButton::Back => None,
            FormButton::Next | FormButton::Submit => Some(Color::Green),
        };
        render_button(
            frame,
            chunks[i + 1],
            button.label(),
            row_active && selected == Some(*button),
            is_enabled(*button),
            accent,
        );
    }
}
