#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
    Submitting,
    /// Open again after a failed submission, showing the message.
    Failed(String),
}

impl DialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
