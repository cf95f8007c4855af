//! Per-step field validators
//!
//! Validators are pure and run on demand when the user tries to leave a step.

use super::model::{AddressData, LoanData, PersonalData};
use std::collections::BTreeMap;
use std::fmt;

/// Fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Phone,
    FirstName,
    LastName,
    Gender,
    Workplace,
    Address,
    Amount,
    Term,
}

impl Field {
    /// Wire/field name as used in the form
    pub fn name(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Gender => "gender",
            Self::Workplace => "workplace",
            Self::Address => "address",
            Self::Amount => "amount",
            Self::Term => "term",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Gender => "Gender",
            Self::Workplace => "Workplace",
            Self::Address => "Home Address",
            Self::Amount => "Loan Amount",
            Self::Term => "Loan Term",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const PHONE_DIGITS: usize = 10;

const PHONE_MESSAGE: &str = "Enter a valid phone number in the format 0XXX XXX XXX";
const FIRST_NAME_MESSAGE: &str = "First name is required";
const LAST_NAME_MESSAGE: &str = "Last name is required";
const GENDER_MESSAGE: &str = "Select a gender";
const WORKPLACE_MESSAGE: &str = "Select a workplace";
const ADDRESS_MESSAGE: &str = "Home address is required";

/// Field → message mapping; a missing key means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drop the error for one field, keeping the rest
    pub fn clear_field(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in form order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Count the digits in a (possibly masked) phone string
pub fn phone_digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Step 1: phone, names and gender
pub fn validate_personal(data: &PersonalData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if phone_digit_count(&data.phone) != PHONE_DIGITS {
        errors.insert(Field::Phone, PHONE_MESSAGE);
    }
    if data.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, FIRST_NAME_MESSAGE);
    }
    if data.last_name.trim().is_empty() {
        errors.insert(Field::LastName, LAST_NAME_MESSAGE);
    }
    if !data.gender.is_set() {
        errors.insert(Field::Gender, GENDER_MESSAGE);
    }

    errors
}

/// Step 2: workplace and home address
pub fn validate_address(data: &AddressData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if data.workplace.trim().is_empty() {
        errors.insert(Field::Workplace, WORKPLACE_MESSAGE);
    }
    if data.address.trim().is_empty() {
        errors.insert(Field::Address, ADDRESS_MESSAGE);
    }

    errors
}

/// Step 3: the sliders keep amount and term inside their domains
pub fn validate_loan(_data: &LoanData) -> ValidationErrors {
    ValidationErrors::new()
}
