//! Deck controller - owns the three-way partition of cards
//!
//! Every card in play is in exactly one of `active`, `practice_queue` or
//! `memorized`. Index 0 of `active` is the top of the stack. Both piles keep
//! append order.

use crate::error::DeckError;
use crate::snapshot::DeckSnapshot;
use crate::types::{Card, Outcome};

/// A gesture's claim on one card, captured when the drag starts.
///
/// Only valid while the controller's generation still matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureTicket {
    pub generation: u64,
    pub index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckController {
    active: Vec<Card>,
    practice_queue: Vec<Card>,
    memorized: Vec<Card>,
    /// Incremented on every deck rebuild (reset or more practice).
    generation: u64,
}

impl DeckController {
    /// Create a controller already initialized with `cards`.
    pub fn new(cards: Vec<Card>) -> Self {
        let mut deck = Self::default();
        deck.initialize(cards);
        deck
    }

    /// Start a session: all cards active, both piles empty, generation 0.
    pub fn initialize(&mut self, cards: Vec<Card>) {
        self.active = cards;
        self.practice_queue.clear();
        self.memorized.clear();
        self.generation = 0;
    }

    pub fn active(&self) -> &[Card] {
        &self.active
    }

    pub fn practice_queue(&self) -> &[Card] {
        &self.practice_queue
    }

    pub fn memorized(&self) -> &[Card] {
        &self.memorized
    }

    pub fn practice_len(&self) -> usize {
        self.practice_queue.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The card on top of the stack, if any.
    pub fn top(&self) -> Option<&Card> {
        self.active.first()
    }

    /// Number of cards in play across all three sequences.
    pub fn total(&self) -> usize {
        self.active.len() + self.practice_queue.len() + self.memorized.len()
    }

    /// Whether `reset` would do anything.
    pub fn can_reset(&self) -> bool {
        !self.practice_queue.is_empty()
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            active_len: self.active.len(),
            practice_len: self.practice_queue.len(),
            memorized_len: self.memorized.len(),
            generation: self.generation,
            can_reset: self.can_reset(),
        }
    }

    /// Capture a ticket for a gesture starting on `index`.
    ///
    /// Returns `None` when there is no card at that index.
    pub fn ticket(&self, index: usize) -> Option<GestureTicket> {
        (index < self.active.len()).then_some(GestureTicket {
            generation: self.generation,
            index,
        })
    }

    pub fn is_current(&self, ticket: GestureTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a finalized gesture to the card at `index`.
    ///
    /// Swipes remove the card (stable removal) and append it to the matching
    /// pile; the moved card is returned. `Cancelled` leaves the deck untouched.
    /// An out-of-range index is a contract violation for every outcome.
    pub fn on_gesture_finalized(
        &mut self,
        index: usize,
        outcome: Outcome,
    ) -> Result<Option<Card>, DeckError> {
        if index >= self.active.len() {
            return Err(DeckError::IndexOutOfRange {
                index,
                len: self.active.len(),
            });
        }

        let pile = match outcome {
            Outcome::SwipeLeft => &mut self.practice_queue,
            Outcome::SwipeRight => &mut self.memorized,
            Outcome::Cancelled => return Ok(None),
        };
        let card = self.active.remove(index);
        pile.push(card.clone());
        Ok(Some(card))
    }

    /// Apply a finalized gesture through the ticket captured at drag start.
    pub fn apply_ticket(
        &mut self,
        ticket: GestureTicket,
        outcome: Outcome,
    ) -> Result<Option<Card>, DeckError> {
        if !self.is_current(ticket) {
            return Err(DeckError::StaleGeneration {
                ticket: ticket.generation,
                current: self.generation,
            });
        }
        self.on_gesture_finalized(ticket.index, outcome)
    }

    /// Rebuild the deck as practice queue followed by memorized pile.
    ///
    /// No-op (generation unchanged) while the practice queue is empty.
    /// Returns whether the deck was rebuilt.
    pub fn reset(&mut self) -> bool {
        if self.practice_queue.is_empty() {
            return false;
        }

        let mut rebuilt = std::mem::take(&mut self.practice_queue);
        rebuilt.append(&mut self.memorized);
        rebuilt.append(&mut self.active);
        self.active = rebuilt;
        self.generation += 1;
        true
    }

    /// Rebuild the deck from the practice queue alone; memorized cards stay put.
    ///
    /// Always permitted. An empty practice queue leaves an empty active deck.
    pub fn more_practice(&mut self) {
        let mut rebuilt = std::mem::take(&mut self.practice_queue);
        rebuilt.append(&mut self.active);
        self.active = rebuilt;
        self.generation += 1;
    }

    /// Append a newly authored card to the bottom of the active stack.
    pub fn add_card(&mut self, card: Card) {
        self.active.push(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> Card {
        Card::new(name, format!("{name}-answer"))
    }

    fn questions(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.question.as_str()).collect()
    }

    #[test]
    fn initialize_puts_everything_in_active() {
        let mut deck = DeckController::new(vec![card("A"), card("B")]);
        deck.on_gesture_finalized(0, Outcome::SwipeLeft).unwrap();
        deck.more_practice();
        assert_eq!(deck.generation(), 1);

        deck.initialize(vec![card("C")]);
        assert_eq!(questions(deck.active()), vec!["C"]);
        assert!(deck.practice_queue().is_empty());
        assert!(deck.memorized().is_empty());
        assert_eq!(deck.generation(), 0);
    }

    #[test]
    fn swipe_left_appends_to_practice_queue() {
        let mut deck = DeckController::new(vec![card("A"), card("B")]);
        let moved = deck.on_gesture_finalized(0, Outcome::SwipeLeft).unwrap();
        assert_eq!(moved, Some(card("A")));
        assert_eq!(questions(deck.active()), vec!["B"]);
        assert_eq!(questions(deck.practice_queue()), vec!["A"]);
        assert!(deck.memorized().is_empty());

        deck.on_gesture_finalized(0, Outcome::SwipeLeft).unwrap();
        assert_eq!(questions(deck.practice_queue()), vec!["A", "B"]);
    }

    #[test]
    fn swipe_right_appends_to_memorized() {
        let mut deck = DeckController::new(vec![card("A"), card("B"), card("C")]);
        deck.on_gesture_finalized(1, Outcome::SwipeRight).unwrap();
        assert_eq!(questions(deck.active()), vec!["A", "C"]);
        assert_eq!(questions(deck.memorized()), vec!["B"]);
    }

    #[test]
    fn removal_is_stable() {
        let mut deck = DeckController::new(vec![card("A"), card("B"), card("C"), card("D")]);
        deck.on_gesture_finalized(1, Outcome::SwipeLeft).unwrap();
        assert_eq!(questions(deck.active()), vec!["A", "C", "D"]);
    }

    #[test]
    fn cancelled_leaves_deck_untouched() {
        let mut deck = DeckController::new(vec![card("A"), card("B")]);
        let before = deck.clone();
        assert_eq!(deck.on_gesture_finalized(1, Outcome::Cancelled).unwrap(), None);
        assert_eq!(deck, before);
    }

    #[test]
    fn out_of_range_index_fails_fast() {
        let mut deck = DeckController::new(vec![card("A")]);
        let before = deck.clone();
        for outcome in [Outcome::SwipeLeft, Outcome::SwipeRight, Outcome::Cancelled] {
            let err = deck.on_gesture_finalized(1, outcome).unwrap_err();
            assert_eq!(err, DeckError::IndexOutOfRange { index: 1, len: 1 });
        }
        assert_eq!(deck, before);

        let mut empty = DeckController::new(Vec::new());
        assert!(empty.on_gesture_finalized(0, Outcome::SwipeRight).is_err());
    }

    #[test]
    fn reset_puts_practice_before_memorized() {
        let mut deck = DeckController::new(vec![card("A"), card("C"), card("B")]);
        deck.on_gesture_finalized(0, Outcome::SwipeLeft).unwrap();
        deck.on_gesture_finalized(0, Outcome::SwipeRight).unwrap();
        deck.on_gesture_finalized(0, Outcome::SwipeLeft).unwrap();
        assert!(deck.active().is_empty());

        assert!(deck.reset());
        assert_eq!(questions(deck.active()), vec!["A", "B", "C"]);
        assert!(deck.practice_queue().is_empty());
        assert!(deck.memorized().is_empty());
        assert_eq!(deck.generation(), 1);
    }

    #[test]
    fn reset_with_empty_practice_queue_is_noop() {
        let mut deck = DeckController::new(vec![card("A"), card("B")]);
        deck.on_gesture_finalized(0, Outcome::SwipeRight).unwrap();
        let before = deck.clone();

        assert!(!deck.can_reset());
        assert!(!deck.reset());
        assert_eq!(deck, before);
        assert_eq!(deck.generation(), 0);
    }

    #[test]
    fn reset_keeps_unjudged_cards() {
        let mut deck = DeckController::new(vec![card("A"), card("B"), card("C")]);
        deck.on_gesture_finalized(0, Outcome::SwipeLeft).unwrap();
        assert!(deck.reset());
        assert_eq!(questions(deck.active()), vec!["A", "B", "C"]);
        assert_eq!(deck.total(), 3);
    }

    #[test]
    fn more_practice_keeps_memorized() {
        let mut deck = DeckController::new(vec![card("A"), card("C")]);
        deck.on_gesture_finalized(0, Outcome::SwipeLeft).unwrap();
        deck.on_gesture_finalized(0, Outcome::SwipeRight).unwrap();

        deck.more_practice();
        assert_eq!(questions(deck.active()), vec!["A"]);
        assert!(deck.practice_queue().is_empty());
        assert_eq!(questions(deck.memorized()), vec!["C"]);
        assert_eq!(deck.generation(), 1);
    }

    #[test]
    fn more_practice_with_empty_queue_empties_deck() {
        let mut deck = DeckController::new(vec![card("A")]);
        deck.on_gesture_finalized(0, Outcome::SwipeRight).unwrap();

        deck.more_practice();
        assert!(deck.active().is_empty());
        assert_eq!(questions(deck.memorized()), vec!["A"]);
        assert_eq!(deck.generation(), 1);

        deck.more_practice();
        assert_eq!(deck.generation(), 2);
    }

    #[test]
    fn added_cards_go_to_the_bottom() {
        let mut deck = DeckController::new(vec![card("A"), card("B")]);
        deck.add_card(card("N"));
        assert_eq!(questions(deck.active()), vec!["A", "B", "N"]);
        assert_eq!(deck.top(), Some(&card("A")));
        assert_eq!(deck.generation(), 0);

        deck.add_card(Card::new("", ""));
        assert_eq!(deck.active().len(), 4);
    }

    #[test]
    fn stale_ticket_is_rejected() {
        let mut deck = DeckController::new(vec![card("A"), card("B")]);
        let ticket = deck.ticket(0).unwrap();
        deck.on_gesture_finalized(0, Outcome::SwipeLeft).unwrap();
        deck.more_practice();

        let err = deck.apply_ticket(ticket, Outcome::SwipeRight).unwrap_err();
        assert_eq!(err, DeckError::StaleGeneration { ticket: 0, current: 1 });
        assert_eq!(questions(deck.active()), vec!["A"]);
        assert!(deck.memorized().is_empty());
    }

    #[test]
    fn current_ticket_applies() {
        let mut deck = DeckController::new(vec![card("A"), card("B")]);
        assert_eq!(deck.ticket(2), None);
        let ticket = deck.ticket(1).unwrap();
        assert!(deck.is_current(ticket));
        deck.apply_ticket(ticket, Outcome::SwipeRight).unwrap();
        assert_eq!(questions(deck.memorized()), vec!["B"]);
    }

    #[test]
    fn snapshot_reports_counts() {
        let mut deck = DeckController::new(vec![card("A"), card("B"), card("C")]);
        deck.on_gesture_finalized(0, Outcome::SwipeLeft).unwrap();
        deck.on_gesture_finalized(0, Outcome::SwipeRight).unwrap();
        let snap = deck.snapshot();
        assert_eq!(snap.active_len, 1);
        assert_eq!(snap.practice_len, 1);
        assert_eq!(snap.memorized_len, 1);
        assert_eq!(snap.generation, 0);
        assert!(snap.can_reset);
    }
}
