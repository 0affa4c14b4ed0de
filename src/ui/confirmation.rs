use crate::enums::confirmation_state::ConfirmationState;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::services::scan_console::ScanConsole;
use crate::structs::entity_id::{ProjectId, ScanId};

/// Explicit consent step in front of a destructive action. Only `confirm`
/// hands the target over; `decline` has no side effect.
#[derive(Debug)]
pub struct ConfirmationDialog<T: Clone> {
    state: ConfirmationState<T>,
}

impl<T: Clone> Default for ConfirmationDialog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ConfirmationDialog<T> {
    pub fn new() -> Self {
        Self {
            state: ConfirmationState::Closed,
        }
    }

    pub fn state(&self) -> &ConfirmationState<T> {
        &self.state
    }

    /// Asks the user to confirm acting on `target`. Returns false while
    /// another confirmed action is still running.
    pub fn request(&mut self, target: T) -> bool {
        if self.state.is_submitting() {
            return false;
        }
        self.state = ConfirmationState::AwaitingConfirmation(target);
        true
    }

    pub fn decline(&mut self) {
        if self.state.is_submitting() {
            return;
        }
        self.state = ConfirmationState::Closed;
    }

    /// Moves to `Submitting` and yields the target. A failed action can be
    /// confirmed again.
    pub fn confirm(&mut self) -> Option<T> {
        let target = match &self.state {
            ConfirmationState::AwaitingConfirmation(target) => target.clone(),
            ConfirmationState::Failed { target, .. } => target.clone(),
            ConfirmationState::Closed | ConfirmationState::Submitting(_) => return None,
        };
        self.state = ConfirmationState::Submitting(target.clone());
        Some(target)
    }

    pub fn finish<R>(&mut self, result: &ConsoleResult<R>) {
        let target = match &self.state {
            ConfirmationState::Submitting(target) => target.clone(),
            _ => {
                log::warn!("Ignoring result for a confirmation that is not submitting");
                return;
            }
        };
        self.state = match result {
            Ok(_) => ConfirmationState::Closed,
            Err(error) => ConfirmationState::Failed {
                target,
                message: error.user_message(),
            },
        };
    }

    fn confirmed(&mut self) -> ConsoleResult<T> {
        self.confirm().ok_or_else(|| {
            ConsoleError::validation_error("confirmation", "none", "Nothing is awaiting confirmation")
        })
    }
}

pub type DeleteProjectConfirmation = ConfirmationDialog<ProjectId>;
pub type DeleteScanConfirmation = ConfirmationDialog<ScanId>;

impl ConfirmationDialog<ProjectId> {
    pub async fn submit(&mut self, console: &ScanConsole) -> ConsoleResult<()> {
        let project_id = self.confirmed()?;
        let result = console.delete_project(&project_id).await;
        self.finish(&result);
        result
    }
}

impl ConfirmationDialog<ScanId> {
    pub async fn submit(&mut self, console: &ScanConsole) -> ConsoleResult<()> {
        let scan_id = self.confirmed()?;
        let result = console.delete_scan(&scan_id).await;
        self.finish(&result);
        result
    }
}
