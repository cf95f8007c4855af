//! Form rendering module
//!
//! This module contains UI components for rendering the wizard steps:
//! - `field_renderer`: Inputs, selectors, sliders and the buttons row
//! - `personal_form`: Step 1
//! - `address_form`: Step 2
//! - `loan_form`: Step 3

mod address_form;
mod field_renderer;
mod loan_form;
mod personal_form;

pub use address_form::draw_address;
pub use loan_form::draw_loan;
pub use personal_form::draw_personal;
