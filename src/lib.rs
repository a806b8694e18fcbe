//! Terminal flashcards (workspace facade crate).
//!
//! The swipe-driven deck logic lives in dedicated crates under `crates/` and is
//! re-exported here as `tui_flashcards::{core, input, term, types}`. This crate
//! adds the renderer-side session ([`app`]), configuration and the session log.

pub mod app;
pub mod config;
pub mod session_log;

pub use tui_flashcards_core as core;
pub use tui_flashcards_input as input;
pub use tui_flashcards_term as term;
pub use tui_flashcards_types as types;

pub use app::App;
pub use config::FlashcardConfig;
pub use session_log::{SessionEvent, SessionLog};
