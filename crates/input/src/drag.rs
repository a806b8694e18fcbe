//! Pointer drag tracking for terminal mice.
//!
//! Terminals report mouse motion in whole cells. The tracker converts the
//! distance from the press position into a [`Translation`] in drag units and
//! tells taps apart from drags.

use arrayvec::ArrayVec;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Translation;

/// A press and release that never moved further than this many cells is a tap.
pub const TAP_SLOP_CELLS: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Left button pressed; a drag may follow.
    Started,
    /// Current translation from the press position.
    Moved(Translation),
    /// Button released after a drag, with the final translation.
    Released(Translation),
    /// Button released without leaving the tap slop.
    Tapped,
}

#[derive(Debug, Clone)]
pub struct DragTracker {
    origin: Option<(u16, u16)>,
    dragging: bool,
    units_per_column: f64,
    units_per_row: f64,
}

impl DragTracker {
    pub fn new(units_per_column: f64, units_per_row: f64) -> Self {
        Self {
            origin: None,
            dragging: false,
            units_per_column,
            units_per_row,
        }
    }

    /// Whether a button press is currently being tracked.
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Forget any tracked press (e.g. when a modal opens over the deck).
    pub fn clear(&mut self) {
        self.origin = None;
        self.dragging = false;
    }

    pub fn handle_mouse(&mut self, ev: MouseEvent) -> ArrayVec<DragEvent, 2> {
        let mut out = ArrayVec::<DragEvent, 2>::new();

        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((ev.column, ev.row));
                self.dragging = false;
                out.push(DragEvent::Started);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(origin) = self.origin else {
                    return out;
                };
                if self.dragging || outside_slop(origin, (ev.column, ev.row)) {
                    self.dragging = true;
                    out.push(DragEvent::Moved(self.translation(origin, ev.column, ev.row)));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(origin) = self.origin.take() else {
                    return out;
                };
                let dragged =
                    std::mem::take(&mut self.dragging) || outside_slop(origin, (ev.column, ev.row));
                if dragged {
                    let t = self.translation(origin, ev.column, ev.row);
                    out.push(DragEvent::Moved(t));
                    out.push(DragEvent::Released(t));
                } else {
                    out.push(DragEvent::Tapped);
                }
            }
            _ => {}
        }

        out
    }

    fn translation(&self, origin: (u16, u16), column: u16, row: u16) -> Translation {
        let dc = column as f64 - origin.0 as f64;
        let dr = row as f64 - origin.1 as f64;
        Translation::new(dc * self.units_per_column, dr * self.units_per_row)
    }
}

fn outside_slop(origin: (u16, u16), at: (u16, u16)) -> bool {
    origin.0.abs_diff(at.0) > TAP_SLOP_CELLS || origin.1.abs_diff(at.1) > TAP_SLOP_CELLS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn press_and_release_in_place_is_a_tap() {
        let mut t = DragTracker::new(10.0, 20.0);
        let ev = t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 10));
        assert_eq!(ev.as_slice(), &[DragEvent::Started]);
        assert!(t.is_active());

        let ev = t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 41, 10));
        assert_eq!(ev.as_slice(), &[DragEvent::Tapped]);
        assert!(!t.is_active());
    }

    #[test]
    fn drag_reports_translation_in_units() {
        let mut t = DragTracker::new(10.0, 20.0);
        t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 10));

        let ev = t.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 41, 10));
        assert!(ev.is_empty(), "inside slop");

        let ev = t.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 25, 12));
        assert_eq!(
            ev.as_slice(),
            &[DragEvent::Moved(Translation::new(-150.0, 40.0))]
        );

        // Once dragging, moving back near the origin still reports motion.
        let ev = t.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 10));
        assert_eq!(ev.as_slice(), &[DragEvent::Moved(Translation::ZERO)]);

        let ev = t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 62, 10));
        let end = Translation::new(220.0, 0.0);
        assert_eq!(
            ev.as_slice(),
            &[DragEvent::Moved(end), DragEvent::Released(end)]
        );
    }

    #[test]
    fn events_without_a_press_are_ignored() {
        let mut t = DragTracker::new(10.0, 20.0);
        assert!(t
            .handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 3, 3))
            .is_empty());
        assert!(t
            .handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 3, 3))
            .is_empty());
        assert!(t
            .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 3, 3))
            .is_empty());
    }

    #[test]
    fn clear_drops_tracked_press() {
        let mut t = DragTracker::new(10.0, 20.0);
        t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 5));
        t.clear();
        assert!(t
            .handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 50, 5))
            .is_empty());
    }
}
