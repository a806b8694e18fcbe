//! Renderer-side session state.
//!
//! [`App`] sits between terminal input and the deck core. It owns everything
//! the core deliberately does not: per-card flip state, the in-flight drag and
//! the return-to-rest animation. All of it is scoped to a deck generation and
//! thrown away whenever the deck is rebuilt.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::FlashcardConfig;
use crate::core::{DeckController, GestureClassifier, GestureTicket};
use crate::input::{handle_key_event, should_quit, CardForm, DragEvent, DragTracker, FormField, FormResult};
use crate::session_log::{SessionEvent, SessionLog};
use crate::term::{DeckView, FormView, SessionFrame, Viewport};
use crate::types::{Card, DeckAction, Outcome, Translation, VisualFeedback, REST_EPSILON, RETURN_DECAY, TICK_MS};

/// A drag in flight, tied to the deck generation it started in.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    ticket: GestureTicket,
    translation: Translation,
}

pub struct App {
    classifier: GestureClassifier,
    deck: DeckController,
    /// `showing_question` per active card, parallel to `deck.active()`.
    faces: Vec<bool>,
    drag: Option<Drag>,
    /// Offset of a cancelled card on its way back to rest.
    settling: Option<Translation>,
    tracker: DragTracker,
    view: DeckView,
    viewport: Viewport,
    form: Option<CardForm>,
    key_step: f64,
    log: SessionLog,
    status: Option<String>,
    quit: bool,
}

impl App {
    pub fn new(config: &FlashcardConfig, cards: Vec<Card>, log: SessionLog) -> Self {
        let faces = vec![true; cards.len()];
        Self {
            classifier: GestureClassifier::new(config.swipe_threshold),
            deck: DeckController::new(cards),
            faces,
            drag: None,
            settling: None,
            tracker: DragTracker::new(config.units_per_column, config.units_per_row),
            view: DeckView::new(config.units_per_column),
            viewport: Viewport::new(80, 24),
            form: None,
            key_step: config.key_step,
            log,
            status: None,
            quit: false,
        }
    }

    pub fn deck(&self) -> &DeckController {
        &self.deck
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    pub fn view(&self) -> &DeckView {
        &self.view
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Track the terminal size so pointer presses can be hit-tested.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn showing_question(&self) -> &[bool] {
        &self.faces
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// A drag is in flight.
    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Something is moving on screen that needs per-frame redraws.
    pub fn is_animating(&self) -> bool {
        self.settling.is_some()
    }

    /// Offset of the top card as it should be drawn right now.
    ///
    /// A drag captured under an older generation contributes nothing: its card
    /// is no longer the one on top.
    pub fn top_offset(&self) -> Translation {
        match (self.drag, self.settling) {
            (Some(drag), _) if self.deck.is_current(drag.ticket) => drag.translation,
            (_, Some(settling)) => settling,
            _ => Translation::ZERO,
        }
    }

    pub fn top_visual(&self) -> VisualFeedback {
        self.classifier.visual(self.top_offset())
    }

    pub fn frame(&self) -> SessionFrame<'_> {
        SessionFrame {
            active: self.deck.active(),
            showing_question: &self.faces,
            top: self.top_visual(),
            deck: self.deck.snapshot(),
            form: self.form.as_ref().map(|form| FormView {
                question: form.question(),
                answer: form.answer(),
                editing_answer: form.focus() == FormField::Answer,
            }),
            status: self.status.as_deref(),
        }
    }

    /// Hash of everything visible, for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.deck.snapshot().hash(&mut h);
        self.faces.hash(&mut h);
        let offset = self.top_offset();
        offset.dx.to_bits().hash(&mut h);
        offset.dy.to_bits().hash(&mut h);
        self.form.as_ref().map(|f| (f.question(), f.answer(), f.focus() == FormField::Answer)).hash(&mut h);
        self.status.hash(&mut h);
        h.finish()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(form) = self.form.as_mut() {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.quit = true;
                return Ok(());
            }
            match form.handle_key(key) {
                FormResult::Editing => {}
                FormResult::Dismiss => self.form = None,
                FormResult::Submit(card) => {
                    self.form = None;
                    self.add_card(card)?;
                }
            }
            return Ok(());
        }

        if should_quit(key) {
            self.quit = true;
            return Ok(());
        }
        match handle_key_event(key) {
            Some(action) => self.apply_action(action),
            None => Ok(()),
        }
    }

    pub fn handle_mouse(&mut self, ev: MouseEvent) -> Result<()> {
        if self.form.is_some() {
            return Ok(());
        }
        // Presses off the top card neither drag nor flip it.
        if ev.kind == MouseEventKind::Down(MouseButton::Left)
            && !self.view.hit_top(self.viewport, ev.column, ev.row)
        {
            self.tracker.clear();
            return Ok(());
        }
        if !self.tracker.is_active() && ev.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        for event in self.tracker.handle_mouse(ev) {
            match event {
                DragEvent::Started => {
                    self.discard_drag()?;
                    self.begin_drag()?;
                }
                DragEvent::Moved(t) => {
                    if let Some(drag) = self.drag.as_mut() {
                        drag.translation = t;
                    }
                }
                DragEvent::Released(t) => self.release(t)?,
                DragEvent::Tapped => {
                    self.drag = None;
                    self.flip();
                }
            }
        }
        Ok(())
    }

    pub fn apply_action(&mut self, action: DeckAction) -> Result<()> {
        match action {
            DeckAction::NudgeLeft => self.nudge(-self.key_step)?,
            DeckAction::NudgeRight => self.nudge(self.key_step)?,
            DeckAction::Release => {
                if let Some(drag) = self.drag {
                    self.release(drag.translation)?;
                }
            }
            DeckAction::CancelDrag => self.cancel_drag()?,
            DeckAction::QuickSwipeLeft => self.quick_swipe(-1.0)?,
            DeckAction::QuickSwipeRight => self.quick_swipe(1.0)?,
            DeckAction::Flip => self.flip(),
            DeckAction::Reset => {
                if self.deck.reset() {
                    self.rebuilt();
                    self.log.record(
                        self.deck.generation(),
                        SessionEvent::Reset {
                            active_len: self.deck.active().len(),
                        },
                    )?;
                    self.status = Some("Deck reset".to_string());
                } else {
                    self.log.record(self.deck.generation(), SessionEvent::ResetIgnored)?;
                    self.status = Some("Nothing to reset: practice pile is empty".to_string());
                }
            }
            DeckAction::MorePractice => {
                self.deck.more_practice();
                self.rebuilt();
                self.log.record(
                    self.deck.generation(),
                    SessionEvent::MorePractice {
                        active_len: self.deck.active().len(),
                    },
                )?;
                self.status = Some(format!("Practicing {} card(s)", self.deck.active().len()));
            }
            DeckAction::NewCard => {
                self.tracker.clear();
                self.cancel_drag()?;
                self.form = Some(CardForm::new());
            }
        }
        Ok(())
    }

    /// Advance the return-to-rest animation by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        let Some(offset) = self.settling else {
            return;
        };
        let factor = RETURN_DECAY.powf(elapsed_ms as f64 / TICK_MS as f64);
        let next = Translation::new(offset.dx * factor, offset.dy * factor);
        self.settling = if next.dx.abs() < REST_EPSILON && next.dy.abs() < REST_EPSILON {
            None
        } else {
            Some(next)
        };
    }

    pub fn add_card(&mut self, card: Card) -> Result<()> {
        self.log.record(
            self.deck.generation(),
            SessionEvent::CardAdded {
                question: &card.question,
            },
        )?;
        self.deck.add_card(card);
        self.faces.push(true);
        self.status = Some("Card added".to_string());
        Ok(())
    }

    fn flip(&mut self) {
        if let Some(face) = self.faces.first_mut() {
            *face = !*face;
        }
    }

    /// Start a drag on the top card unless one is already in flight.
    fn begin_drag(&mut self) -> Result<()> {
        if self.drag.is_some() {
            return Ok(());
        }
        self.settling = None;
        self.drag = self.deck.ticket(0).map(|ticket| Drag {
            ticket,
            translation: Translation::ZERO,
        });
        Ok(())
    }

    /// Drop an in-flight drag whose generation has been superseded.
    fn discard_drag(&mut self) -> Result<()> {
        match self.drag {
            Some(drag) if !self.deck.is_current(drag.ticket) => {
                self.drag = None;
                self.dropped_stale(drag.ticket)
            }
            Some(_) => {
                self.drag = None;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Release the in-flight drag at rest and animate it back from where it was.
    fn cancel_drag(&mut self) -> Result<()> {
        let Some(drag) = self.drag else {
            return Ok(());
        };
        self.release(Translation::ZERO)?;
        if self.deck.is_current(drag.ticket) {
            self.settling = Some(drag.translation);
        }
        Ok(())
    }

    fn nudge(&mut self, step: f64) -> Result<()> {
        if let Some(drag) = self.drag {
            if !self.deck.is_current(drag.ticket) {
                self.discard_drag()?;
            }
        }
        self.begin_drag()?;
        if let Some(drag) = self.drag.as_mut() {
            drag.translation.dx += step;
        }
        Ok(())
    }

    fn quick_swipe(&mut self, sign: f64) -> Result<()> {
        self.discard_drag()?;
        self.begin_drag()?;
        if self.drag.is_some() {
            let dx = sign * (self.classifier.threshold() + self.key_step);
            self.release(Translation::new(dx, 0.0))?;
        }
        Ok(())
    }

    /// Finish the in-flight drag at `t`.
    fn release(&mut self, t: Translation) -> Result<()> {
        let Some(drag) = self.drag.take() else {
            return Ok(());
        };
        if !self.deck.is_current(drag.ticket) {
            return self.dropped_stale(drag.ticket);
        }

        let outcome = self.classifier.finalize(t);
        match self.deck.apply_ticket(drag.ticket, outcome)? {
            Some(card) => {
                self.faces.remove(drag.ticket.index);
                self.settling = None;
                self.log.record(
                    self.deck.generation(),
                    SessionEvent::Swipe {
                        outcome,
                        question: &card.question,
                    },
                )?;
                self.status = Some(match outcome {
                    Outcome::SwipeLeft => "Needs practice".to_string(),
                    _ => "Memorized".to_string(),
                });
            }
            None => {
                self.settling = Some(t);
                self.log.record(self.deck.generation(), SessionEvent::Cancelled)?;
            }
        }
        Ok(())
    }

    fn dropped_stale(&mut self, ticket: GestureTicket) -> Result<()> {
        self.log.record(
            self.deck.generation(),
            SessionEvent::StaleGestureDropped {
                ticket_generation: ticket.generation,
            },
        )?;
        self.status = Some("Gesture dropped: the deck was rebuilt".to_string());
        Ok(())
    }

    /// The deck identity changed: reset every per-card transient.
    fn rebuilt(&mut self) {
        self.faces = vec![true; self.deck.active().len()];
        self.settling = None;
    }
}
