//! Step 1: personal information

use super::field_renderer::{draw_buttons_row, draw_input, draw_selector, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Field, Step};
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub fn draw_personal(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", Step::Personal.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Phone
            Constraint::Length(FIELD_HEIGHT),  // First name
            Constraint::Length(FIELD_HEIGHT),  // Last name
            Constraint::Length(FIELD_HEIGHT),  // Gender
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let form = &app.state.form;
    let data = app.store.snapshot();
    let personal = &data.personal;

    draw_input(
        frame,
        chunks[0],
        Field::Phone,
        &personal.phone,
        "0XXX XXX XXX",
        form.is_focused(Field::Phone),
        form.error(Field::Phone),
    );
    draw_input(
        frame,
        chunks[1],
        Field::FirstName,
        &personal.first_name,
        "Enter your first name",
        form.is_focused(Field::FirstName),
        form.error(Field::FirstName),
    );
    draw_input(
        frame,
        chunks[2],
        Field::LastName,
        &personal.last_name,
        "Enter your last name",
        form.is_focused(Field::LastName),
        form.error(Field::LastName),
    );
    draw_selector(
        frame,
        chunks[3],
        Field::Gender,
        personal.gender.label(),
        personal.gender.is_set(),
        form.is_focused(Field::Gender),
        form.error(Field::Gender),
    );

    draw_buttons_row(frame, chunks[4], form, |_| true);
}
