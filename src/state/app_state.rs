//! Application state definitions

use super::forms::FormState;
use super::model::ProductCategory;
use super::navigator::{Step, StepNavigator};
use crate::api::Acknowledgment;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub navigator: StepNavigator,
    pub form: FormState,

    // Step 2: workplace categories
    pub categories: Vec<ProductCategory>,
    pub categories_loading: bool,
    /// Non-blocking notice shown when the fallback list is in use
    pub category_advisory: Option<String>,

    // Step 3: submission
    pub submitting: bool,
    pub submit_error: Option<String>,
    pub acknowledgment: Option<Acknowledgment>,

    // Error dialog queue
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: FormState::for_step(Step::Personal),
            ..Default::default()
        }
    }

    pub fn current_step(&self) -> Step {
        self.navigator.current()
    }

    /// Queue a message for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Message currently shown in the error dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn dismiss_advisory(&mut self) {
        self.category_advisory = None;
    }

    /// Whether the Back button/shortcut is usable on the current step
    pub fn can_go_back(&self) -> bool {
        matches!(self.current_step(), Step::Address | Step::Loan) && !self.submitting
    }
}
