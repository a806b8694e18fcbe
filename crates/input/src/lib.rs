//! Terminal input module (deck-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key events
//! into [`crate::types::DeckAction`], turns mouse press/drag/release into drag
//! translations via [`DragTracker`], and edits new cards in a [`CardForm`].

pub mod drag;
pub mod form;
pub mod map;

pub use tui_flashcards_types as types;

pub use drag::{DragEvent, DragTracker, TAP_SLOP_CELLS};
pub use form::{CardForm, FormField, FormResult};
pub use map::{handle_key_event, should_quit};
