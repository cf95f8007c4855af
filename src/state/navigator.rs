//! Wizard step state machine
//!
//! Transitions are strictly linear:
//! `Personal -> Address -> Loan -> Success -> Personal`, plus `back` from
//! `Address` and `Loan`. Forward moves out of `Personal` and `Address` are
//! gated by the step validators, `Loan -> Success` by a successful submission.

use super::model::FormData;
use super::store::FormStore;
use super::validation::{validate_address, validate_loan, validate_personal, ValidationErrors};

/// Wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Personal,
    Address,
    Loan,
    Success,
}

impl Step {
    /// 1-based position in the progress indicator (Success sits past the end)
    pub fn number(&self) -> usize {
        match self {
            Self::Personal => 1,
            Self::Address => 2,
            Self::Loan => 3,
            Self::Success => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Info",
            Self::Address => "Address & Work",
            Self::Loan => "Loan Details",
            Self::Success => "Approved",
        }
    }

    /// Optional route-style path for the step
    pub fn path(&self) -> &'static str {
        match self {
            Self::Personal => "/personal",
            Self::Address => "/address",
            Self::Loan => "/loan",
            Self::Success => "/success",
        }
    }

    /// The three steps shown in the progress indicator
    pub fn form_steps() -> [Step; 3] {
        [Self::Personal, Self::Address, Self::Loan]
    }

    /// Validate the data group owned by this step
    pub fn validate(&self, data: &FormData) -> ValidationErrors {
        match self {
            Self::Personal => validate_personal(&data.personal),
            Self::Address => validate_address(&data.address),
            Self::Loan => validate_loan(&data.loan),
            Self::Success => ValidationErrors::new(),
        }
    }
}

/// Why a transition was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("cannot {action} from {from:?}")]
    InvalidTransition { from: Step, action: &'static str },
}

/// Current position in the wizard
#[derive(Debug, Clone, Default)]
pub struct StepNavigator {
    step: Step,
}

impl StepNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        self.step
    }

    /// Validate the current step and move forward when it passes.
    ///
    /// `Loan` never advances here; it needs [`StepNavigator::complete_submission`].
    pub fn advance(&mut self, data: &FormData) -> Result<Step, NavigationError> {
        let next = match self.step {
            Step::Personal => Step::Address,
            Step::Address => Step::Loan,
            from => {
                return Err(NavigationError::InvalidTransition {
                    from,
                    action: "advance",
                })
            }
        };

        let errors = self.step.validate(data);
        if !errors.is_empty() {
            return Err(NavigationError::Validation(errors));
        }

        tracing::info!("Step {} -> {}", self.step.path(), next.path());
        self.step = next;
        Ok(next)
    }

    /// Move one step back; never validates
    pub fn back(&mut self) -> Result<Step, NavigationError> {
        let prev = match self.step {
            Step::Address => Step::Personal,
            Step::Loan => Step::Address,
            from => {
                return Err(NavigationError::InvalidTransition {
                    from,
                    action: "go back",
                })
            }
        };
        tracing::info!("Step {} -> {}", self.step.path(), prev.path());
        self.step = prev;
        Ok(prev)
    }

    /// Record a successful submission from the loan step
    pub fn complete_submission(&mut self) -> Result<Step, NavigationError> {
        if self.step != Step::Loan {
            return Err(NavigationError::InvalidTransition {
                from: self.step,
                action: "complete submission",
            });
        }
        tracing::info!("Step {} -> {}", Step::Loan.path(), Step::Success.path());
        self.step = Step::Success;
        Ok(Step::Success)
    }

    /// Dismiss the success screen: reset the store and start over
    pub fn acknowledge(&mut self, store: &FormStore) -> Result<Step, NavigationError> {
        if self.step != Step::Success {
            return Err(NavigationError::InvalidTransition {
                from: self.step,
                action: "acknowledge",
            });
        }
        store.reset();
        tracing::info!("Step {} -> {}", Step::Success.path(), Step::Personal.path());
        self.step = Step::Personal;
        Ok(Step::Personal)
    }
}
