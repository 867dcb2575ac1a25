/// Source of fresh block identifiers for pasted and synced blocks.
pub trait BlockIdGeneratorPort: Send + Sync {
    /// Returns an identifier usable as a usage key block id.
    fn next_block_id(&self) -> String;
}
