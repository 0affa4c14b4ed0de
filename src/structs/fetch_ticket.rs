use crate::enums::entity_kind::EntityKind;

/// Issued when a list fetch starts; hands its sequence number back to the
/// store together with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub kind: EntityKind,
    pub seq: u64,
}
