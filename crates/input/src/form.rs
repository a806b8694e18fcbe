//! Card authoring form: two single-line text fields edited from key events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Question,
    Answer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult {
    /// Keep the form open.
    Editing,
    /// The user submitted a card.
    Submit(Card),
    /// The user closed the form without submitting.
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    question: String,
    answer: String,
    focus: FormField,
}

impl Default for CardForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CardForm {
    pub fn new() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            focus: FormField::Question,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Apply one key press.
    ///
    /// Tab / Shift-Tab / Up / Down switch fields. Enter on the question moves
    /// to the answer; Enter on the answer submits. Esc dismisses.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormResult {
        if key.kind == KeyEventKind::Release {
            return FormResult::Editing;
        }

        match key.code {
            KeyCode::Esc => return FormResult::Dismiss,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => self.toggle_focus(),
            KeyCode::Enter => match self.focus {
                FormField::Question => self.focus = FormField::Answer,
                FormField::Answer => return FormResult::Submit(self.take_card()),
            },
            KeyCode::Backspace => {
                self.field_mut().pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.field_mut().push(c);
            }
            _ => {}
        }
        FormResult::Editing
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Question => FormField::Answer,
            FormField::Answer => FormField::Question,
        };
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Question => &mut self.question,
            FormField::Answer => &mut self.answer,
        }
    }

    fn take_card(&mut self) -> Card {
        self.focus = FormField::Question;
        Card::new(
            std::mem::take(&mut self.question),
            std::mem::take(&mut self.answer),
        )
    }
}
