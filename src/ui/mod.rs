//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Step;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current step
    match app.state.current_step() {
        Step::Personal => forms::draw_personal(frame, main_area, app),
        Step::Address => forms::draw_address(frame, main_area, app),
        // The approval dialog sits on top of the loan details
        Step::Loan | Step::Success => forms::draw_loan(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    if app.state.current_step() == Step::Success {
        let data = app.store.snapshot();
        components::render_success_dialog(frame, &data, app.state.acknowledgment.as_ref());
    }

    // Error dialog is modal and drawn last
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Acknowledgment, MockCatalogApi};
    use crate::state::{AddressPatch, Field, Gender, PersonalPatch, ValidationErrors};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn test_app() -> App {
        App::with_api(Arc::new(MockCatalogApi::new()))
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(90, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_personal_step_renders_fields_and_progress() {
        let app = test_app();
        let screen = render(&app);
        assert!(screen.contains("Loan Application"));
        assert!(screen.contains("[1] Personal Info"));
        assert!(screen.contains("Phone"));
        assert!(screen.contains("First Name"));
        assert!(screen.contains("Select gender"));
        assert!(screen.contains("Next"));
    }

    #[test]
    fn test_field_error_is_shown() {
        let mut app = test_app();
        let mut errors = ValidationErrors::new();
        errors.insert(Field::FirstName, "First name is required");
        app.state.form.set_errors(errors);
        let screen = render(&app);
        assert!(screen.contains("First name is required"));
    }

    #[test]
    fn test_address_step_shows_loading_and_advisory() {
        let mut app = test_app();
        app.store.update_personal(PersonalPatch {
            phone: Some("0999 123 456".to_string()),
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            gender: Some(Gender::Female),
        });
        let data = app.store.snapshot().clone();
        app.state.navigator.advance(&data).unwrap();
        app.state.form = crate::state::FormState::for_step(Step::Address);
        app.state.categories_loading = true;
        app.state.category_advisory =
            Some("Failed to load workplaces. Using the fallback list.".to_string());

        let screen = render(&app);
        assert!(screen.contains("Loading workplaces..."));
        assert!(screen.contains("Failed to load workplaces. Using the fallback list."));
        assert!(screen.contains("[✓] Personal Info"));
    }

    fn approved_app(first_name: &str, last_name: &str) -> App {
        let mut app = test_app();
        app.store.update_personal(PersonalPatch {
            phone: Some("0999 123 456".to_string()),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            gender: Some(Gender::Female),
        });
        app.store.update_address(AddressPatch {
            workplace: Some("Shoe Store".to_string()),
            address: Some("Main St 1".to_string()),
        });
        let data = app.store.snapshot().clone();
        app.state.navigator.advance(&data).unwrap();
        app.state.navigator.advance(&data).unwrap();
        app.state.navigator.complete_submission().unwrap();
        app.state.form = crate::state::FormState::for_step(Step::Success);
        app.state.acknowledgment = Some(Acknowledgment {
            id: 195,
            title: "Jane Doe".to_string(),
            extra: Default::default(),
        });
        app
    }

    #[test]
    fn test_success_dialog_shows_summary() {
        let app = approved_app("Jane", "Doe");

        let screen = render(&app);
        assert!(screen.contains("Application Approved!"));
        assert!(screen.contains("Congratulations, Doe Jane!"));
        assert!(screen.contains("$200"));
        assert!(screen.contains("10 days"));
        assert!(screen.contains("Shoe Store"));
        assert!(screen.contains("#195"));
    }

    #[test]
    fn test_long_greeting_wraps_inside_dialog() {
        let app = approved_app("Alexandra-Josephine", "Montgomery-Wellington-Smythe");

        let screen = render(&app);
        assert!(screen.contains("Congratulations, Montgomery-Wellington-Smythe"));
        assert!(screen.contains("Alexandra-Josephine!"));
    }

    #[test]
    fn test_error_dialog_drawn_on_top() {
        let mut app = test_app();
        app.push_error("Something went wrong");
        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Something went wrong"));
    }
}
