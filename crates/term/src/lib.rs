//! Terminal renderer for the flashcard session.
//!
//! Like a small game renderer, it avoids widget/layout libraries: views draw
//! into a plain framebuffer, and the renderer flushes only what changed.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so layouts can be asserted on in tests
//! - Approximate card tilt and fades with shears and colour blending

pub mod deck_view;
pub mod fb;
pub mod render_throttle;
pub mod renderer;

pub use tui_flashcards_core as core;
pub use tui_flashcards_types as types;

pub use deck_view::{wrap_lines, AnchorY, DeckView, FormView, SessionFrame, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
