//! Step 3: loan amount and term

use super::field_renderer::{draw_buttons_row, draw_slider, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{
    format_amount, format_term, Field, FormButton, Step, AMOUNT_MAX, AMOUNT_MIN, TERM_MAX,
    TERM_MIN,
};
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_loan(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", Step::Loan.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Amount
            Constraint::Length(FIELD_HEIGHT),  // Term
            Constraint::Length(1),             // Summary
            Constraint::Length(1),             // Submission status
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let form = &app.state.form;
    let data = app.store.snapshot();
    let loan = &data.loan;

    draw_slider(
        frame,
        chunks[0],
        Field::Amount,
        loan.amount,
        (AMOUNT_MIN, AMOUNT_MAX),
        format_amount(loan.amount),
        form.is_focused(Field::Amount),
    );
    draw_slider(
        frame,
        chunks[1],
        Field::Term,
        loan.term,
        (TERM_MIN, TERM_MAX),
        format_term(loan.term),
        form.is_focused(Field::Term),
    );

    let highlight = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let summary = Line::from(vec![
        Span::raw("You are applying for "),
        Span::styled(format_amount(loan.amount), highlight),
        Span::raw(" for "),
        Span::styled(format_term(loan.term), highlight),
    ]);
    frame.render_widget(Paragraph::new(summary), chunks[2]);

    let status = if app.state.submitting {
        Some(Span::styled(
            "Submitting application...",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        app.state
            .submit_error
            .as_deref()
            .map(|err| Span::styled(err, Style::default().fg(Color::Red)))
    };
    if let Some(status) = status {
        frame.render_widget(Paragraph::new(Line::from(status)), chunks[3]);
    }

    let submitting = app.state.submitting;
    draw_buttons_row(frame, chunks[4], form, |button| match button {
        FormButton::Back | FormButton::Submit => !submitting,
        FormButton::Next => true,
    });
}
