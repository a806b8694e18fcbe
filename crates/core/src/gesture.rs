//! Gesture classifier - maps a drag translation to visual feedback and a swipe outcome
//!
//! The classifier is a pure function of the current translation. It keeps no
//! memory between calls, so `visual` can be called at any frame rate and
//! `finalize` exactly once when the drag ends.

use crate::types::{
    AccentTint, Outcome, Translation, VisualFeedback, OVERALL_FADE_RATE, ROTATION_DIVISOR,
    SWIPE_THRESHOLD,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureClassifier {
    threshold: f64,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl GestureClassifier {
    /// Create a classifier with the given swipe threshold.
    ///
    /// Non-finite or non-positive thresholds fall back to [`SWIPE_THRESHOLD`].
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() && threshold > 0.0 {
            threshold
        } else {
            SWIPE_THRESHOLD
        };
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Derive rendering values for the current translation.
    ///
    /// Only the horizontal component matters; `dy` is ignored.
    pub fn visual(&self, t: Translation) -> VisualFeedback {
        let ratio = t.dx.abs() / self.threshold;
        VisualFeedback {
            offset_x: t.dx,
            fade: (1.0 - ratio).clamp(0.0, 1.0),
            overall_opacity: (OVERALL_FADE_RATE - ratio * OVERALL_FADE_RATE).clamp(0.0, 1.0),
            rotation_degrees: t.dx / ROTATION_DIVISOR,
            accent_tint: if t.dx < 0.0 {
                AccentTint::Reject
            } else {
                AccentTint::Accept
            },
        }
    }

    /// Classify a completed drag.
    ///
    /// The comparison is strict: a release exactly at `±threshold` is `Cancelled`.
    pub fn finalize(&self, t: Translation) -> Outcome {
        if t.dx > self.threshold {
            Outcome::SwipeRight
        } else if t.dx < -self.threshold {
            Outcome::SwipeLeft
        } else {
            Outcome::Cancelled
        }
    }
}
