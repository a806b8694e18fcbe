//! Core types module - shared data structures and constants
//!
//! This module defines the value types passed between the deck core, the input
//! layer and the terminal renderer. Apart from serde derives for the session log,
//! they are plain data with no behavior tied to any display surface.
//!
//! # Gesture Constants
//!
//! Drag translations are measured in abstract "units" (the renderer decides how
//! many units one terminal column is worth):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SWIPE_THRESHOLD` | 200 | Horizontal distance a drag must exceed to count as a swipe |
//! | `ROTATION_DIVISOR` | 20 | Tilt in degrees is `dx / ROTATION_DIVISOR` |
//! | `OVERALL_FADE_RATE` | 3 | Whole-card opacity falls 3x faster than its linear ramp |
//! | `STACK_TILT_DEGREES` | -5 | Resting tilt per card below the top of the stack |
//!
//! # Timing
//!
//! - `TICK_MS`: 16ms fixed timestep used for the return-to-rest animation
//! - `RETURN_DECAY`: fraction of the offset kept after each tick while returning
//! - `REST_EPSILON`: offsets smaller than this snap to zero
//!
//! # Examples
//!
//! ```
//! use tui_flashcards_types::{Card, DeckAction, Outcome, SWIPE_THRESHOLD};
//!
//! let card = Card::new("What does CPU stand for?", "Central Processing Unit");
//! assert_eq!(card, Card::new("What does CPU stand for?", "Central Processing Unit"));
//!
//! assert_eq!(Outcome::from_str("swipeLeft"), Some(Outcome::SwipeLeft));
//! assert_eq!(DeckAction::from_str("morePractice"), Some(DeckAction::MorePractice));
//! assert_eq!(SWIPE_THRESHOLD, 200.0);
//! ```

use serde::Serialize;

/// Horizontal drag distance (in units) a release must strictly exceed to swipe.
pub const SWIPE_THRESHOLD: f64 = 200.0;

/// Card tilt in degrees is the horizontal drag divided by this.
pub const ROTATION_DIVISOR: f64 = 20.0;

/// Multiplier applied to the linear fade for the whole-card opacity.
pub const OVERALL_FADE_RATE: f64 = 3.0;

/// Resting tilt, in degrees, applied per level of depth in the stack.
pub const STACK_TILT_DEGREES: f64 = -5.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fraction of the drag offset kept after one tick of the return-to-rest animation.
pub const RETURN_DECAY: f64 = 0.7;

/// Offsets (in units) below this magnitude are considered at rest.
pub const REST_EPSILON: f64 = 0.5;


/// A flashcard: an immutable question/answer pair.
///
/// Equality is structural. Empty strings are valid content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Finalized classification of a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// Dragged past the threshold to the left: needs more practice.
    SwipeLeft,
    /// Dragged past the threshold to the right: memorized.
    SwipeRight,
    /// Released inside the threshold; the card returns to rest.
    Cancelled,
}

impl Outcome {
    /// Parse outcome from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_flashcards_types::Outcome;
    ///
    /// assert_eq!(Outcome::from_str("SWIPERIGHT"), Some(Outcome::SwipeRight));
    /// assert_eq!(Outcome::from_str("cancelled"), Some(Outcome::Cancelled));
    /// assert_eq!(Outcome::from_str("up"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "swipeleft" => Some(Outcome::SwipeLeft),
            "swiperight" => Some(Outcome::SwipeRight),
            "cancelled" => Some(Outcome::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::SwipeLeft => "swipeLeft",
            Outcome::SwipeRight => "swipeRight",
            Outcome::Cancelled => "cancelled",
        }
    }

    /// Whether this outcome moves the card out of the active deck.
    pub fn is_swipe(&self) -> bool {
        !matches!(self, Outcome::Cancelled)
    }
}

/// A 2D drag translation in units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub dx: f64,
    pub dy: f64,
}

impl Translation {
    pub const ZERO: Translation = Translation { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Qualitative colour hint for the layer behind the card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentTint {
    /// Dragging left.
    Reject,
    /// Dragging right (or not at all).
    Accept,
}

/// Rendering values derived from the current drag translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualFeedback {
    /// Horizontal card offset; follows the drag 1:1.
    pub offset_x: f64,
    /// Opacity of the front face, in `[0, 1]`.
    pub fade: f64,
    /// Opacity of the whole card including the accent layer, in `[0, 1]`.
    pub overall_opacity: f64,
    /// Card tilt in degrees.
    pub rotation_degrees: f64,
    pub accent_tint: AccentTint,
}

impl VisualFeedback {
    /// Feedback for a card at rest.
    pub const REST: VisualFeedback = VisualFeedback {
        offset_x: 0.0,
        fade: 1.0,
        overall_opacity: 1.0,
        rotation_degrees: 0.0,
        accent_tint: AccentTint::Accept,
    };
}

/// Discrete user commands produced by the input layer.
///
/// Drag motion itself is continuous and handled by the drag tracker; these
/// actions cover keyboard drags and the deck commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckAction {
    /// Move the in-flight drag one step left (starting one if needed)
    NudgeLeft,
    /// Move the in-flight drag one step right (starting one if needed)
    NudgeRight,
    /// Release the in-flight drag where it is
    Release,
    /// Release the in-flight drag at rest
    CancelDrag,
    /// Drag past the threshold to the left and release in one step
    QuickSwipeLeft,
    /// Drag past the threshold to the right and release in one step
    QuickSwipeRight,
    /// Toggle question/answer on the top card
    Flip,
    /// Rebuild the deck from both piles (only when the practice queue is non-empty)
    Reset,
    /// Rebuild the deck from the practice queue alone
    MorePractice,
    /// Open the card authoring form
    NewCard,
}

impl DeckAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_flashcards_types::DeckAction;
    ///
    /// assert_eq!(DeckAction::from_str("nudgeLeft"), Some(DeckAction::NudgeLeft));
    /// assert_eq!(DeckAction::from_str("reset"), Some(DeckAction::Reset));
    /// assert_eq!(DeckAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nudgeleft" => Some(DeckAction::NudgeLeft),
            "nudgeright" => Some(DeckAction::NudgeRight),
            "release" => Some(DeckAction::Release),
            "canceldrag" => Some(DeckAction::CancelDrag),
            "quickswipeleft" => Some(DeckAction::QuickSwipeLeft),
            "quickswiperight" => Some(DeckAction::QuickSwipeRight),
            "flip" => Some(DeckAction::Flip),
            "reset" => Some(DeckAction::Reset),
            "morepractice" => Some(DeckAction::MorePractice),
            "newcard" => Some(DeckAction::NewCard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeckAction::NudgeLeft => "nudgeLeft",
            DeckAction::NudgeRight => "nudgeRight",
            DeckAction::Release => "release",
            DeckAction::CancelDrag => "cancelDrag",
            DeckAction::QuickSwipeLeft => "quickSwipeLeft",
            DeckAction::QuickSwipeRight => "quickSwipeRight",
            DeckAction::Flip => "flip",
            DeckAction::Reset => "reset",
            DeckAction::MorePractice => "morePractice",
            DeckAction::NewCard => "newCard",
        }
    }
}
