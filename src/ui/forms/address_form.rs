//! Step 2: workplace and home address

use super::field_renderer::{draw_buttons_row, draw_input, draw_selector, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::DISMISS_SHORTCUT;
use crate::state::{Field, Step};
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_address(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", Step::Address.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Advisory
            Constraint::Length(FIELD_HEIGHT),  // Workplace
            Constraint::Length(FIELD_HEIGHT),  // Address
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    if let Some(advisory) = &app.state.category_advisory {
        let notice = Line::from(vec![
            Span::styled(format!("⚠ {advisory}"), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("  {DISMISS_SHORTCUT}:dismiss"),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(notice), chunks[0]);
    }

    let form = &app.state.form;
    let data = app.store.snapshot();
    let address = &data.address;

    let (workplace, has_value) = if app.state.categories_loading {
        ("Loading workplaces...", false)
    } else if address.workplace.is_empty() {
        ("Select workplace", false)
    } else {
        (address.workplace.as_str(), true)
    };
    draw_selector(
        frame,
        chunks[1],
        Field::Workplace,
        workplace,
        has_value,
        form.is_focused(Field::Workplace),
        form.error(Field::Workplace),
    );
    draw_input(
        frame,
        chunks[2],
        Field::Address,
        &address.address,
        "Enter your home address",
        form.is_focused(Field::Address),
        form.error(Field::Address),
    );

    draw_buttons_row(frame, chunks[3], form, |_| true);
}
