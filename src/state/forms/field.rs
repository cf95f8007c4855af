//! Field input rules
//!
//! Text fields take characters, selectors and sliders take the arrow keys.
//! Editing produces a patch for the store instead of mutating data in place.

use crate::state::model::{
    clamp_amount, clamp_term, AddressPatch, FormData, LoanPatch, PersonalPatch, ProductCategory,
    AMOUNT_STEP, TERM_STEP,
};
use crate::state::validation::{Field, PHONE_DIGITS};
use crate::state::FormStore;

/// A key press translated for field editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Char(char),
    Backspace,
    /// Right arrow: next option / step up
    Increase,
    /// Left arrow: previous option / step down
    Decrease,
}

/// Store update produced by an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Personal(PersonalPatch),
    Address(AddressPatch),
    Loan(LoanPatch),
}

impl FieldUpdate {
    pub fn apply_to(self, store: &FormStore) {
        match self {
            FieldUpdate::Personal(patch) => store.update_personal(patch),
            FieldUpdate::Address(patch) => store.update_address(patch),
            FieldUpdate::Loan(patch) => store.update_loan(patch),
        }
    }
}

/// Group phone digits as `0000 000 000`
pub fn format_phone_mask(digits: &str) -> String {
    let mut masked = String::with_capacity(digits.len() + 2);
    for (i, c) in digits.chars().enumerate() {
        if i == 4 || i == 7 {
            masked.push(' ');
        }
        masked.push(c);
    }
    masked
}

fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Compute the store update for an input on `field`.
///
/// Returns `None` when the input does not change the value.
pub fn edit_field(
    field: Field,
    input: FieldInput,
    data: &FormData,
    workplaces: &[ProductCategory],
) -> Option<FieldUpdate> {
    match field {
        Field::Phone => {
            let mut digits = phone_digits(&data.personal.phone);
            match input {
                FieldInput::Char(c) if c.is_ascii_digit() && digits.len() < PHONE_DIGITS => {
                    digits.push(c)
                }
                FieldInput::Backspace if !digits.is_empty() => {
                    digits.pop();
                }
                _ => return None,
            }
            Some(FieldUpdate::Personal(PersonalPatch {
                phone: Some(format_phone_mask(&digits)),
                ..Default::default()
            }))
        }
        Field::FirstName => edit_text(&data.personal.first_name, input).map(|v| {
            FieldUpdate::Personal(PersonalPatch {
                first_name: Some(v),
                ..Default::default()
            })
        }),
        Field::LastName => edit_text(&data.personal.last_name, input).map(|v| {
            FieldUpdate::Personal(PersonalPatch {
                last_name: Some(v),
                ..Default::default()
            })
        }),
        Field::Address => edit_text(&data.address.address, input).map(|v| {
            FieldUpdate::Address(AddressPatch {
                address: Some(v),
                ..Default::default()
            })
        }),
        Field::Gender => {
            let current = data.personal.gender;
            let gender = match input {
                FieldInput::Increase => current.next(),
                FieldInput::Decrease => current.prev(),
                FieldInput::Char('m') | FieldInput::Char('M') => crate::state::Gender::Male,
                FieldInput::Char('f') | FieldInput::Char('F') => crate::state::Gender::Female,
                _ => return None,
            };
            (gender != current).then(|| {
                FieldUpdate::Personal(PersonalPatch {
                    gender: Some(gender),
                    ..Default::default()
                })
            })
        }
        Field::Workplace => {
            let name = cycle_workplace(&data.address.workplace, input, workplaces)?;
            (name != data.address.workplace).then(|| {
                FieldUpdate::Address(AddressPatch {
                    workplace: Some(name),
                    ..Default::default()
                })
            })
        }
        Field::Amount => {
            let current = data.loan.amount as i64;
            let amount = match input {
                FieldInput::Increase => clamp_amount(current + AMOUNT_STEP as i64),
                FieldInput::Decrease => clamp_amount(current - AMOUNT_STEP as i64),
                _ => return None,
            };
            (amount != data.loan.amount).then_some(FieldUpdate::Loan(LoanPatch {
                amount: Some(amount),
                ..Default::default()
            }))
        }
        Field::Term => {
            let current = data.loan.term as i64;
            let term = match input {
                FieldInput::Increase => clamp_term(current + TERM_STEP as i64),
                FieldInput::Decrease => clamp_term(current - TERM_STEP as i64),
                _ => return None,
            };
            (term != data.loan.term).then_some(FieldUpdate::Loan(LoanPatch {
                term: Some(term),
                ..Default::default()
            }))
        }
    }
}

fn edit_text(current: &str, input: FieldInput) -> Option<String> {
    let mut value = current.to_string();
    match input {
        FieldInput::Char(c) => value.push(c),
        FieldInput::Backspace if !value.is_empty() => {
            value.pop();
        }
        _ => return None,
    }
    Some(value)
}

/// Next/previous display name in the category list, wrapping around
fn cycle_workplace(
    current: &str,
    input: FieldInput,
    workplaces: &[ProductCategory],
) -> Option<String> {
    if workplaces.is_empty() {
        return None;
    }
    let last = workplaces.len() - 1;
    let position = workplaces.iter().position(|c| c.name == current);
    let index = match (input, position) {
        (FieldInput::Increase, None) => 0,
        (FieldInput::Increase, Some(i)) => (i + 1) % workplaces.len(),
        (FieldInput::Decrease, None) | (FieldInput::Decrease, Some(0)) => last,
        (FieldInput::Decrease, Some(i)) => i - 1,
        _ => return None,
    };
    Some(workplaces[index].name.clone())
}
