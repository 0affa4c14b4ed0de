/// Lifecycle of a destructive action waiting on the user's consent.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub enum ConfirmationState<T> {
    #[default]
    Closed,
    AwaitingConfirmation(T),
    Submitting(T),
    /// The confirmed action failed; the target is kept so it can be retried.
    Failed { target: T, message: String },
}

impl<T> ConfirmationState<T> {
    pub fn target(&self) -> Option<&T> {
        match self {
            Self::Closed => None,
            Self::AwaitingConfirmation(target) | Self::Submitting(target) => Some(target),
            Self::Failed { target, .. } => Some(target),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
