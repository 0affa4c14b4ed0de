use crate::errors::ConsoleResult;

/// Field state behind a dialog. `Default` is the freshly opened form.
pub trait DialogForm: Default {
    type Request;

    /// Checks the fields and builds the request to submit.
    fn validate(&self) -> ConsoleResult<Self::Request>;
}
