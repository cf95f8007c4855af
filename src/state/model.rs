//! Applicant data model

use serde::{Deserialize, Serialize};

/// Smallest loan amount offered
pub const AMOUNT_MIN: u32 = 200;
/// Largest loan amount offered
pub const AMOUNT_MAX: u32 = 1000;
/// Amount slider increment
pub const AMOUNT_STEP: u32 = 100;
/// Shortest loan term in days
pub const TERM_MIN: u32 = 10;
/// Longest loan term in days
pub const TERM_MAX: u32 = 30;
/// Term slider increment
pub const TERM_STEP: u32 = 1;

/// Applicant gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    #[serde(rename = "")]
    Unset,
    Male,
    Female,
}

impl Gender {
    /// Cycle forward through the selector options (unset → male → female → unset)
    pub fn next(&self) -> Self {
        match self {
            Self::Unset => Self::Male,
            Self::Male => Self::Female,
            Self::Female => Self::Unset,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Unset => Self::Female,
            Self::Male => Self::Unset,
            Self::Female => Self::Male,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "Select gender",
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Step 1 data group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalData {
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
}

/// Step 2 data group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressData {
    pub workplace: String,
    pub address: String,
}

/// Step 3 data group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanData {
    pub amount: u32,
    pub term: u32,
}

impl Default for LoanData {
    fn default() -> Self {
        Self {
            amount: AMOUNT_MIN,
            term: TERM_MIN,
        }
    }
}

/// All data collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormData {
    pub personal: PersonalData,
    pub address: AddressData,
    pub loan: LoanData,
}

impl FormData {
    /// Title sent to the submission endpoint: "<firstName> <lastName>"
    pub fn applicant_title(&self) -> String {
        format!("{} {}", self.personal.first_name, self.personal.last_name)
    }
}

/// Partial update for [`PersonalData`]; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalPatch {
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
}

/// Partial update for [`AddressData`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPatch {
    pub workplace: Option<String>,
    pub address: Option<String>,
}

/// Partial update for [`LoanData`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoanPatch {
    pub amount: Option<u32>,
    pub term: Option<u32>,
}

impl PersonalData {
    pub fn merge(&mut self, patch: PersonalPatch) {
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
    }
}

impl AddressData {
    pub fn merge(&mut self, patch: AddressPatch) {
        if let Some(workplace) = patch.workplace {
            self.workplace = workplace;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
    }
}

impl LoanData {
    pub fn merge(&mut self, patch: LoanPatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(term) = patch.term {
            self.term = term;
        }
    }
}

/// Snap an arbitrary amount onto the slider domain
pub fn clamp_amount(raw: i64) -> u32 {
    let clamped = raw.clamp(AMOUNT_MIN as i64, AMOUNT_MAX as i64) as u32;
    let offset = clamped - AMOUNT_MIN;
    let snapped = AMOUNT_MIN + ((offset + AMOUNT_STEP / 2) / AMOUNT_STEP) * AMOUNT_STEP;
    snapped.min(AMOUNT_MAX)
}

/// Snap an arbitrary term onto the slider domain
pub fn clamp_term(raw: i64) -> u32 {
    raw.clamp(TERM_MIN as i64, TERM_MAX as i64) as u32
}

/// Format an amount for display (`$200`)
pub fn format_amount(amount: u32) -> String {
    format!("${amount}")
}

/// Format a term for display (`10 days`)
pub fn format_term(term: u32) -> String {
    if term == 1 {
        format!("{term} day")
    } else {
        format!("{term} days")
    }
}

/// Selectable workplace category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    /// Stable identifier
    pub slug: String,
    /// Human-readable name, stored in [`AddressData::workplace`] when chosen
    pub name: String,
    /// Informational source URL (empty for fallback entries)
    pub url: String,
}

impl ProductCategory {
    pub fn new(slug: &str, name: &str, url: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}
