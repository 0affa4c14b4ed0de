use serde::Deserialize;

/// List payloads arrive either as a bare array or wrapped in a
/// `{ "data": [...] }` envelope. An object without `data` is not a list
/// payload and fails to decode.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Bare(Vec<T>),
    Envelope {
        data: Vec<T>,
        message: Option<String>,
    },
}

impl<T> ApiResponse<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            Self::Bare(records) | Self::Envelope { data: records, .. } => records,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Bare(_) => None,
            Self::Envelope { message, .. } => message.as_deref(),
        }
    }
}
