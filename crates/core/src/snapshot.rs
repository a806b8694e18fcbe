/// Read-only summary of the deck partition for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeckSnapshot {
    pub active_len: usize,
    pub practice_len: usize,
    pub memorized_len: usize,
    pub generation: u64,
    /// Whether the reset affordance is enabled.
    pub can_reset: bool,
}

impl DeckSnapshot {
    /// Nothing left to judge in this generation.
    pub fn finished(&self) -> bool {
        self.active_len == 0
    }
}
