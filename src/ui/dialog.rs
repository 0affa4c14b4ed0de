use crate::enums::dialog_state::DialogState;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::traits::dialog_form::DialogForm;

/// A modal form: `Closed → Open → Submitting → Closed | Failed`.
///
/// Fields can only be edited while the dialog is visible and not
/// submitting. A failed submission keeps the fields so the user can fix
/// and resubmit.
#[derive(Debug, Default)]
pub struct FormDialog<F: DialogForm> {
    state: DialogState,
    form: F,
}

impl<F: DialogForm> FormDialog<F> {
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
            form: F::default(),
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self.state {
            DialogState::Open | DialogState::Failed(_) => Some(&mut self.form),
            DialogState::Closed | DialogState::Submitting => None,
        }
    }

    /// Opens the dialog with fresh fields.
    pub fn open(&mut self) {
        if self.state.is_submitting() {
            log::warn!("Ignoring open request while a submission is pending");
            return;
        }
        self.form = F::default();
        self.state = DialogState::Open;
    }

    /// Returns false while a submission is pending.
    pub fn close(&mut self) -> bool {
        if self.state.is_submitting() {
            return false;
        }
        self.state = DialogState::Closed;
        true
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.state, DialogState::Open | DialogState::Failed(_)) && self.form.validate().is_ok()
    }

    /// Validates the fields and moves to `Submitting`. A validation failure
    /// leaves the dialog open with the error and nothing is submitted.
    pub fn begin_submit(&mut self) -> ConsoleResult<F::Request> {
        match self.state {
            DialogState::Submitting => return Err(ConsoleError::in_flight("dialog submission")),
            DialogState::Closed => {
                return Err(ConsoleError::validation_error("dialog", "closed", "Open the dialog before submitting"))
            }
            DialogState::Open | DialogState::Failed(_) => {}
        }

        match self.form.validate() {
            Ok(request) => {
                self.state = DialogState::Submitting;
                Ok(request)
            }
            Err(error) => {
                self.state = DialogState::Failed(error.user_message());
                Err(error)
            }
        }
    }

    /// Settles a submission started by `begin_submit`.
    pub fn finish<T>(&mut self, result: &ConsoleResult<T>) {
        if !self.state.is_submitting() {
            log::warn!("Ignoring submission result for a dialog that is not submitting");
            return;
        }
        match result {
            Ok(_) => {
                self.form = F::default();
                self.state = DialogState::Closed;
            }
            Err(error) => {
                log::error!("Dialog submission failed: {}", error);
                self.state = DialogState::Failed(error.user_message());
            }
        }
    }
}
