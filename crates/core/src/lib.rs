//! Core deck logic - pure, deterministic, and testable
//!
//! This crate contains the decision logic of the flashcard session. It has
//! **no dependencies** on UI, terminal I/O or timing, so the whole state machine
//! can be driven from tests without a display surface.
//!
//! # Module Structure
//!
//! - [`gesture`]: pure classifier from a drag translation to visual feedback and an [`Outcome`](crate::types::Outcome)
//! - [`deck`]: the active / practice / memorized partition and its commands
//! - [`snapshot`]: read-only counts for renderers
//! - [`seed`]: the built-in starting deck
//! - [`error`]: contract violations between renderer and controller
//!
//! # Control Flow
//!
//! The renderer reports drag translations to [`GestureClassifier::visual`] every
//! frame and calls [`GestureClassifier::finalize`] once on release. Only the
//! finalized outcome reaches the [`DeckController`], which moves the card into a
//! pile. Reset and more-practice rebuild the active deck and bump its
//! generation; gestures captured under an older generation must be dropped.
//!
//! # Example
//!
//! ```
//! use tui_flashcards_core::{seed_deck, DeckController, GestureClassifier};
//! use tui_flashcards_types::{Outcome, Translation};
//!
//! let classifier = GestureClassifier::default();
//! let mut deck = DeckController::new(seed_deck());
//!
//! let ticket = deck.ticket(0).unwrap();
//! let outcome = classifier.finalize(Translation::new(-240.0, 12.0));
//! assert_eq!(outcome, Outcome::SwipeLeft);
//!
//! deck.apply_ticket(ticket, outcome).unwrap();
//! assert_eq!(deck.practice_len(), 1);
//!
//! assert!(deck.reset());
//! assert_eq!(deck.generation(), 1);
//! assert_eq!(deck.active().len(), 5);
//! ```

pub mod deck;
pub mod error;
pub mod gesture;
pub mod seed;
pub mod snapshot;

pub use tui_flashcards_types as types;

pub use deck::{DeckController, GestureTicket};
pub use error::DeckError;
pub use gesture::GestureClassifier;
pub use seed::seed_deck;
pub use snapshot::DeckSnapshot;
