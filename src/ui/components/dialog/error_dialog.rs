//! Error dialog component

use super::base::{key_hint, render_dialog, wrap_text, DialogConfig};
use ratatui::{style::Color, text::Line, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let mut config = DialogConfig {
        title: "Error",
        accent: Color::Red,
        hint: Some(key_hint("dismiss")),
        ..Default::default()
    };
    config.body = wrap_text(error_message, config.text_width())
        .into_iter()
        .map(Line::from)
        .collect();

    render_dialog(frame, config);
}
