//! Layout components (header, progress indicator, status bar)

use crate::app::App;
use crate::platform::RELOAD_SHORTCUT;
use crate::state::Step;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Application title shown in the header
pub const APP_TITLE: &str = "Loan Application";

/// Rows taken by the header (title + progress + bottom border)
const HEADER_HEIGHT: u16 = 3;

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Build the progress indicator line for the current step
pub fn progress_line(current: Step) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, step) in Step::form_steps().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let (marker, style) = if step.number() < current.number() {
            ("✓".to_string(), Style::default().fg(Color::Green))
        } else if step == current {
            (
                step.number().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (step.number().to_string(), Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("[{marker}] {}", step.title()), style));
    }
    Line::from(spans)
}

/// Draw the header with title and progress indicator
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let content = vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        progress_line(app.state.current_step()),
    ];

    let header = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    // Activity indicator
    if app.state.categories_loading {
        spans.push(Span::styled("⟳ ", Style::default().fg(Color::Yellow)));
    } else if app.state.submitting {
        spans.push(Span::styled("⇪ ", Style::default().fg(Color::Yellow)));
    }

    // Step-specific hints
    let hints = get_step_hints(app.state.current_step(), app.state.submitting);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current step
fn get_step_hints(step: Step, submitting: bool) -> String {
    match step {
        Step::Personal => "Tab:next  ←/→:gender  Enter:next".to_string(),
        Step::Address => {
            format!("Tab:next  ←/→:workplace  Enter:next  Esc:back  {RELOAD_SHORTCUT}:reload")
        }
        Step::Loan if submitting => "Submitting...".to_string(),
        Step::Loan => "Tab:next  ←/→:adjust  Enter:submit  Esc:back".to_string(),
        Step::Success => "Enter:new application".to_string(),
    }
}
