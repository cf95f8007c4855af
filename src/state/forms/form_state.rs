//! Form state management and per-step form structs

use crate::state::navigator::Step;
use crate::state::validation::{Field, ValidationErrors};

/// Buttons shown under a step form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Back,
    Next,
    Submit,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            FormButton::Back => "Back",
            FormButton::Next => "Next",
            FormButton::Submit => "Submit Application",
        }
    }
}

/// Trait for common form operations
pub trait Form {
    fn fields(&self) -> &'static [Field];
    fn buttons(&self) -> &'static [FormButton];
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn errors(&self) -> &ValidationErrors;
    fn errors_mut(&mut self) -> &mut ValidationErrors;

    /// Number of focus positions: every field plus the buttons row
    fn field_count(&self) -> usize {
        self.fields().len() + 1
    }
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// Field under focus, `None` on the buttons row
    fn focused_field(&self) -> Option<Field> {
        self.fields().get(self.active_field()).copied()
    }
    fn is_buttons_row_active(&self) -> bool {
        self.active_field() == self.fields().len()
    }
}

/// Shared focus/error state of a step form
#[derive(Debug, Clone, Default)]
pub struct StepForm {
    pub active_field_index: usize,
    pub selected_button: usize,
    pub errors: ValidationErrors,
}

macro_rules! step_form {
    ($name:ident, $fields:expr, $buttons:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            pub inner: StepForm,
        }

        impl $name {
            pub const FIELDS: &'static [Field] = $fields;
            pub const BUTTONS: &'static [FormButton] = $buttons;

            pub fn new() -> Self {
                Self {
                    inner: StepForm {
                        // Primary action is the last button
                        selected_button: Self::BUTTONS.len() - 1,
                        ..Default::default()
                    },
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Form for $name {
            fn fields(&self) -> &'static [Field] {
                Self::FIELDS
            }
            fn buttons(&self) -> &'static [FormButton] {
                Self::BUTTONS
            }
            fn active_field(&self) -> usize {
                self.inner.active_field_index
            }
            fn set_active_field(&mut self, index: usize) {
                self.inner.active_field_index = index.min(Self::FIELDS.len());
            }
            fn errors(&self) -> &ValidationErrors {
                &self.inner.errors
            }
            fn errors_mut(&mut self) -> &mut ValidationErrors {
                &mut self.inner.errors
            }
        }
    };
}

step_form!(
    PersonalForm,
    &[Field::Phone, Field::FirstName, Field::LastName, Field::Gender],
    &[FormButton::Next]
);

step_form!(
    AddressForm,
    &[Field::Workplace, Field::Address],
    &[FormButton::Back, FormButton::Next]
);

step_form!(
    LoanForm,
    &[Field::Amount, Field::Term],
    &[FormButton::Back, FormButton::Submit]
);

/// Form state for the active step
#[derive(Debug, Clone, Default)]
pub enum FormState {
    /// Success screen: no editable form
    #[default]
    None,
    Personal(PersonalForm),
    Address(AddressForm),
    Loan(LoanForm),
}

impl FormState {
    /// Fresh form for a step; errors never carry over between visits
    pub fn for_step(step: Step) -> Self {
        match step {
            Step::Personal => FormState::Personal(PersonalForm::new()),
            Step::Address => FormState::Address(AddressForm::new()),
            Step::Loan => FormState::Loan(LoanForm::new()),
            Step::Success => FormState::None,
        }
    }

    pub fn as_form(&self) -> Option<&dyn Form> {
        match self {
            FormState::None => None,
            FormState::Personal(f) => Some(f),
            FormState::Address(f) => Some(f),
            FormState::Loan(f) => Some(f),
        }
    }

    pub fn as_form_mut(&mut self) -> Option<&mut dyn Form> {
        match self {
            FormState::None => None,
            FormState::Personal(f) => Some(f),
            FormState::Address(f) => Some(f),
            FormState::Loan(f) => Some(f),
        }
    }

    fn step_form_mut(&mut self) -> Option<&mut StepForm> {
        match self {
            FormState::None => None,
            FormState::Personal(f) => Some(&mut f.inner),
            FormState::Address(f) => Some(&mut f.inner),
            FormState::Loan(f) => Some(&mut f.inner),
        }
    }

    pub fn next_field(&mut self) {
        if let Some(f) = self.as_form_mut() {
            f.next_field();
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(f) = self.as_form_mut() {
            f.prev_field();
        }
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.as_form().and_then(|f| f.focused_field())
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.as_form().is_some_and(|f| f.is_buttons_row_active())
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused_field() == Some(field)
    }

    /// Move focus directly to a field of this form
    pub fn focus(&mut self, field: Field) {
        if let Some(f) = self.as_form_mut() {
            if let Some(index) = f.fields().iter().position(|x| *x == field) {
                f.set_active_field(index);
            }
        }
    }

    pub fn selected_button(&self) -> Option<FormButton> {
        match self {
            FormState::None => None,
            FormState::Personal(f) => f.buttons().get(f.inner.selected_button).copied(),
            FormState::Address(f) => f.buttons().get(f.inner.selected_button).copied(),
            FormState::Loan(f) => f.buttons().get(f.inner.selected_button).copied(),
        }
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        let count = self.as_form().map(|f| f.buttons().len()).unwrap_or(0);
        if let Some(inner) = self.step_form_mut() {
            if count > 0 {
                inner.selected_button = (inner.selected_button + 1) % count;
            }
        }
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        let count = self.as_form().map(|f| f.buttons().len()).unwrap_or(0);
        if let Some(inner) = self.step_form_mut() {
            if count > 0 {
                inner.selected_button = if inner.selected_button == 0 {
                    count - 1
                } else {
                    inner.selected_button - 1
                };
            }
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.as_form().and_then(|f| f.errors().get(field))
    }

    /// Record the result of a failed validation and focus the first bad field
    pub fn set_errors(&mut self, errors: ValidationErrors) {
        let first = self
            .as_form()
            .and_then(|f| errors.fields().find(|x| f.fields().contains(x)));
        if let Some(f) = self.as_form_mut() {
            *f.errors_mut() = errors;
        }
        if let Some(field) = first {
            self.focus(field);
        }
    }

    /// Optimistically drop the error of an edited field
    pub fn clear_error(&mut self, field: Field) {
        if let Some(f) = self.as_form_mut() {
            f.errors_mut().clear_field(field);
        }
    }
}
