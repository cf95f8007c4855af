//! Approval summary shown after a successful submission

use super::base::{key_hint, render_dialog, wrap_text, DialogConfig};
use crate::api::Acknowledgment;
use crate::state::{format_amount, format_term, FormData};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the success dialog for the submitted application
pub fn render_success_dialog(frame: &mut Frame, data: &FormData, ack: Option<&Acknowledgment>) {
    let mut config = DialogConfig {
        title: "Application Approved!",
        accent: Color::Green,
        hint: Some(key_hint("start a new application")),
        max_width: 64,
        ..Default::default()
    };
    let width = config.text_width();
    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default().fg(Color::White);

    let greeting = format!(
        "Congratulations, {} {}!",
        data.personal.last_name, data.personal.first_name
    );
    let mut body: Vec<Line> = wrap_text(&greeting, width)
        .into_iter()
        .map(|chunk| {
            Line::from(Span::styled(
                chunk,
                Style::default().add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    body.extend([
        Line::from(vec![
            Span::raw("You have been approved for "),
            Span::styled(
                format_amount(data.loan.amount),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" for "),
            Span::styled(
                format_term(data.loan.term),
                Style::default().fg(Color::Green),
            ),
            Span::raw("."),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Application details",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
    ]);

    let details = [
        ("Phone", data.personal.phone.clone()),
        ("Gender", data.personal.gender.label().to_string()),
        ("Workplace", data.address.workplace.clone()),
        ("Address", data.address.address.clone()),
    ];
    for (label, value) in details {
        let prefix = format!("{label}: ");
        let wrapped = wrap_text(&value, width.saturating_sub(prefix.len()).max(1));
        for (i, chunk) in wrapped.into_iter().enumerate() {
            let head = if i == 0 {
                prefix.clone()
            } else {
                " ".repeat(prefix.len())
            };
            body.push(Line::from(vec![
                Span::styled(head, label_style),
                Span::styled(chunk, value_style),
            ]));
        }
    }

    if let Some(ack) = ack {
        body.push(Line::from(""));
        body.push(Line::from(vec![
            Span::styled("Application ID: ", label_style),
            Span::styled(format!("#{}", ack.id), Style::default().fg(Color::Cyan)),
        ]));
    }

    config.body = body;
    render_dialog(frame, config);
}
