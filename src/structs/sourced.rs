use serde::{Deserialize, Serialize};
use crate::enums::provenance::Provenance;

/// A field value tagged with whether the backend sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sourced<T> {
    pub value: T,
    pub provenance: Provenance,
}

impl<T> Sourced<T> {
    pub fn reported(value: T) -> Self {
        Self { value, provenance: Provenance::Reported }
    }

    pub fn derived(value: T) -> Self {
        Self { value, provenance: Provenance::Derived }
    }

    pub fn is_reported(&self) -> bool {
        self.provenance == Provenance::Reported
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}
