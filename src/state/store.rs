//! Central form-state store
//!
//! The store is the single writer of [`FormData`]. Every update replaces the
//! value inside a `watch` channel, so readers either borrow the current
//! snapshot or hold a receiver and get notified of changes.

use super::model::{AddressPatch, FormData, LoanPatch, PersonalPatch};
use tokio::sync::watch;

/// Owner of the wizard's applicant data for one session
#[derive(Debug)]
pub struct FormStore {
    tx: watch::Sender<FormData>,
}

impl FormStore {
    /// Create a store holding the default form
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FormData::default());
        Self { tx }
    }

    /// Borrow the current snapshot
    pub fn snapshot(&self) -> watch::Ref<'_, FormData> {
        self.tx.borrow()
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> watch::Receiver<FormData> {
        self.tx.subscribe()
    }

    pub fn update_personal(&self, patch: PersonalPatch) {
        self.tx.send_modify(|data| data.personal.merge(patch));
    }

    pub fn update_address(&self, patch: AddressPatch) {
        self.tx.send_modify(|data| data.address.merge(patch));
    }

    pub fn update_loan(&self, patch: LoanPatch) {
        self.tx.send_modify(|data| data.loan.merge(patch));
    }

    /// Replace the whole form with the defaults
    pub fn reset(&self) {
        self.tx.send_replace(FormData::default());
        tracing::debug!("Form store reset to defaults");
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
