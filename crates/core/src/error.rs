use std::fmt;

/// Contract violations between the renderer and the deck controller.
///
/// There is no recovery path for a desynchronized deck, so callers are expected
/// to propagate these rather than swallow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// The index does not address a card in the current active deck.
    IndexOutOfRange { index: usize, len: usize },
    /// The gesture was started against a deck that has since been rebuilt.
    StaleGeneration { ticket: u64, current: u64 },
}

impl DeckError {
    pub fn code(self) -> &'static str {
        match self {
            DeckError::IndexOutOfRange { .. } => "index_out_of_range",
            DeckError::StaleGeneration { .. } => "stale_generation",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DeckError::IndexOutOfRange { .. } => "card index is not in the active deck",
            DeckError::StaleGeneration { .. } => "gesture belongs to a previous deck generation",
        }
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DeckError::IndexOutOfRange { index, len } => {
                write!(f, "{} (index {}, active len {})", self.message(), index, len)
            }
            DeckError::StaleGeneration { ticket, current } => {
                write!(
                    f,
                    "{} (ticket generation {}, current {})",
                    self.message(),
                    ticket,
                    current
                )
            }
        }
    }
}

impl std::error::Error for DeckError {}
