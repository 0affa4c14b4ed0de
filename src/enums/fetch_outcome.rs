/// What an entity store did with a fetch result.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FetchOutcome {
    /// The records replaced the collection.
    Applied,
    /// The fetch failed; the previous snapshot was kept.
    Failed,
    /// A later-issued fetch had already been applied.
    Discarded,
}
