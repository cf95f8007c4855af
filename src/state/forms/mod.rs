//! Form editing layer
//!
//! Focus, button selection and per-field errors of the active step, plus the
//! input rules that turn key presses into store updates.

mod field;
mod form_state;

pub use field::{edit_field, FieldInput};
pub use form_state::{Form, FormButton, FormState};
