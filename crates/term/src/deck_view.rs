//! DeckView: maps the session state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Terminals cannot rotate text, so card tilt is drawn as a horizontal shear:
//! each row of a card is shifted in proportion to its distance from the
//! card's vertical center.

use crate::core::DeckSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{AccentTint, Card, VisualFeedback, STACK_TILT_DEGREES};

const BACKGROUND: Rgb = Rgb::new(18, 18, 24);
const QUESTION_FACE: Rgb = Rgb::new(40, 100, 220);
const ANSWER_FACE: Rgb = Rgb::new(80, 60, 190);
const REJECT_ACCENT: Rgb = Rgb::new(220, 60, 60);
const ACCEPT_ACCENT: Rgb = Rgb::new(50, 180, 90);
const CARD_TEXT: Rgb = Rgb::new(255, 255, 255);
const CARD_EDGE: Rgb = Rgb::new(190, 200, 230);
const CHROME_TEXT: Rgb = Rgb::new(220, 220, 220);
const CHROME_DIM: Rgb = Rgb::new(110, 110, 120);

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Rows reserved above the card area (title, buttons, counts, gap).
const HEADER_ROWS: u16 = 4;
/// Rows reserved below the card area (status line).
const FOOTER_ROWS: u16 = 2;

const HELP: &str = "←/→ drag · Enter release · [ ] swipe · Space flip · q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Authoring form contents as the view sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormView<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub editing_answer: bool,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct SessionFrame<'a> {
    /// Active deck, index 0 on top.
    pub active: &'a [Card],
    /// Flip state parallel to `active`; missing entries show the question.
    pub showing_question: &'a [bool],
    /// Feedback for the top card.
    pub top: VisualFeedback,
    pub deck: DeckSnapshot,
    pub form: Option<FormView<'a>>,
    pub status: Option<&'a str>,
}

pub struct DeckView {
    units_per_column: f64,
    card_w: u16,
    card_h: u16,
    /// Cards drawn below the top one.
    max_depth: usize,
    anchor_y: AnchorY,
}

impl Default for DeckView {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl DeckView {
    pub fn new(units_per_column: f64) -> Self {
        Self {
            units_per_column,
            card_w: 40,
            card_h: 13,
            max_depth: 3,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_card_size(mut self, card_w: u16, card_h: u16) -> Self {
        self.card_w = card_w.max(4);
        self.card_h = card_h.max(3);
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, frame: &SessionFrame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(CHROME_TEXT, BACKGROUND),
        });

        self.draw_header(fb, &frame.deck, viewport);

        let (left, top) = self.card_origin(viewport);
        if frame.deck.finished() {
            self.draw_empty(fb, &frame.deck, left, top);
        } else {
            let depth = frame.active.len().min(self.max_depth + 1);
            for i in (0..depth).rev() {
                let visual = if i == 0 { frame.top } else { VisualFeedback::REST };
                let showing_question = frame.showing_question.get(i).copied().unwrap_or(true);
                self.draw_card(fb, &frame.active[i], i, visual, showing_question, left, top);
            }
        }

        if let Some(form) = frame.form {
            self.draw_form(fb, &form, viewport);
        }

        let footer_y = viewport.height.saturating_sub(1);
        let style = CellStyle::new(CHROME_DIM, BACKGROUND);
        match frame.status {
            Some(status) => fb.put_str(1, footer_y, status, CellStyle::new(CHROME_TEXT, BACKGROUND)),
            None => fb.put_str(1, footer_y, HELP, style),
        };
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &SessionFrame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    /// Whether `(column, row)` lies on the top card at rest.
    pub fn hit_top(&self, viewport: Viewport, column: u16, row: u16) -> bool {
        let (left, top) = self.card_origin(viewport);
        let (c, r) = (column as i32, row as i32);
        c >= left && c < left + self.card_w as i32 && r >= top && r < top + self.card_h as i32
    }

    /// Top-left corner of a card at rest.
    fn card_origin(&self, viewport: Viewport) -> (i32, i32) {
        let left = (viewport.width as i32 - self.card_w as i32) / 2;
        let area_h = viewport.height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) as i32;
        let top = match self.anchor_y {
            AnchorY::Center => HEADER_ROWS as i32 + (area_h - self.card_h as i32).max(0) / 2,
            AnchorY::Top => HEADER_ROWS as i32,
        };
        (left, top)
    }

    fn draw_header(&self, fb: &mut FrameBuffer, deck: &DeckSnapshot, viewport: Viewport) {
        let title = CellStyle::new(CHROME_TEXT, BACKGROUND).bold();
        let label = CellStyle::new(CHROME_TEXT, BACKGROUND);
        let dim = CellStyle::new(CHROME_DIM, BACKGROUND).dim();

        fb.put_str(1, 0, "FLASHCARDS", title);
        let add = "[n] Add Flashcard";
        let add_x = viewport.width.saturating_sub(add.chars().count() as u16 + 1);
        if add_x > 12 {
            fb.put_str(add_x, 0, add, label);
        }

        // Reset is disabled while there is nothing to practice.
        let reset_style = if deck.can_reset { label } else { dim };
        let x = fb.put_str(1, 1, "[r] Reset", reset_style);
        fb.put_str(x.saturating_add(3), 1, "[m] More Practice", label);

        let mut x = 1;
        for (name, count) in [
            ("ACTIVE ", deck.active_len),
            ("PRACTICE ", deck.practice_len),
            ("MEMORIZED ", deck.memorized_len),
        ] {
            x = fb.put_str(x, 2, name, dim);
            x = fb.put_u64(x, 2, count as u64, label);
            x = x.saturating_add(2);
        }
        x = fb.put_str(x, 2, "GEN ", dim);
        fb.put_u64(x, 2, deck.generation, label);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, deck: &DeckSnapshot, left: i32, top: i32) {
        let mid_y = top + self.card_h as i32 / 2;
        let style = CellStyle::new(CHROME_TEXT, BACKGROUND).bold();
        put_centered(fb, left, self.card_w, mid_y, "No cards left", style);

        let hint = if deck.can_reset {
            "[r] reset · [m] more practice"
        } else {
            "[m] more practice · [n] add a card"
        };
        put_centered(fb, left, self.card_w, mid_y + 1, hint, CellStyle::new(CHROME_DIM, BACKGROUND));
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        card: &Card,
        depth: usize,
        visual: VisualFeedback,
        showing_question: bool,
        left: i32,
        top: i32,
    ) {
        if visual.overall_opacity <= 0.0 {
            return;
        }

        let face = if showing_question { QUESTION_FACE } else { ANSWER_FACE };
        let accent = match visual.accent_tint {
            AccentTint::Reject => REJECT_ACCENT,
            AccentTint::Accept => ACCEPT_ACCENT,
        };
        // Front face fades to reveal the accent layer; the whole card fades into the background.
        let fill = face.over(accent, visual.fade).over(BACKGROUND, visual.overall_opacity);
        let edge = CARD_EDGE.over(fill, visual.overall_opacity);
        let text = CARD_TEXT.over(fill, visual.overall_opacity);

        let tilt = depth as f64 * STACK_TILT_DEGREES + visual.rotation_degrees;
        let offset = (visual.offset_x / self.units_per_column).round() as i32;
        let (w, h) = (self.card_w as i32, self.card_h as i32);

        let body_style = CellStyle::new(edge, fill);
        for r in 0..h {
            let y = top + r;
            let x0 = left + offset + shear(r, h, tilt);
            for c in 0..w {
                let ch = border_char(r, c, w, h);
                fb.set_signed(x0 + c, y, Cell { ch, style: body_style });
            }
        }

        if depth > 0 {
            return;
        }

        let label_style = CellStyle::new(text, fill).bold();
        let text_style = CellStyle::new(text, fill);
        let row_x = |r: i32| left + offset + shear(r, h, tilt);
        let inner = (w - 4).max(1) as usize;

        let (label, body) = if showing_question {
            ("Question", card.question.as_str())
        } else {
            ("Answer", card.answer.as_str())
        };
        put_centered(fb, row_x(2), self.card_w, top + 2, label, label_style);
        let rule: String = std::iter::repeat('─').take(inner).collect();
        fb.put_str_signed(row_x(3) + 2, top + 3, &rule, text_style);

        let first_body_row = 5;
        let last_body_row = h - 2;
        for (i, line) in wrap_lines(body, inner).into_iter().enumerate() {
            let r = first_body_row + i as i32;
            if r > last_body_row {
                break;
            }
            put_centered(fb, row_x(r), self.card_w, top + r, line, text_style);
        }
    }

    fn draw_form(&self, fb: &mut FrameBuffer, form: &FormView<'_>, viewport: Viewport) {
        let w = viewport.width.saturating_sub(4).min(56);
        let h: u16 = 9;
        if w < 12 || viewport.height < h {
            return;
        }
        let x = (viewport.width - w) / 2;
        let y = (viewport.height - h) / 2;

        let panel = Rgb::new(34, 34, 46);
        let frame_style = CellStyle::new(CARD_EDGE, panel);
        for r in 0..h as i32 {
            for c in 0..w as i32 {
                let ch = border_char(r, c, w as i32, h as i32);
                fb.set_signed(x as i32 + c, y as i32 + r, Cell { ch, style: frame_style });
            }
        }

        let title = CellStyle::new(CHROME_TEXT, panel).bold();
        let label = CellStyle::new(CHROME_DIM, panel);
        let value = CellStyle::new(CHROME_TEXT, panel);
        put_centered(fb, x as i32, w, y as i32 + 1, "New Flashcard", title);

        let field_w = w.saturating_sub(6) as usize;
        for (row, name, text, focused) in [
            (3, "Question", form.question, !form.editing_answer),
            (5, "Answer", form.answer, form.editing_answer),
        ] {
            let marker = if focused { "›" } else { " " };
            fb.put_str(x + 2, y + row - 1, name, label);
            let after = fb.put_str(x + 2, y + row, marker, value.bold());
            let shown = tail(text, field_w.saturating_sub(1));
            let end = fb.put_str(after + 1, y + row, shown, value);
            if focused {
                fb.put_char(end, y + row, '▏', value.bold());
            }
        }

        put_centered(
            fb,
            x as i32,
            w,
            y as i32 + h as i32 - 2,
            "Tab switch · Enter save · Esc cancel",
            label,
        );
    }
}

fn border_char(r: i32, c: i32, w: i32, h: i32) -> char {
    match (r == 0, r == h - 1, c == 0, c == w - 1) {
        (true, _, true, _) => '╭',
        (true, _, _, true) => '╮',
        (_, true, true, _) => '╰',
        (_, true, _, true) => '╯',
        (true, _, _, _) | (_, true, _, _) => '─',
        (_, _, true, _) | (_, _, _, true) => '│',
        _ => ' ',
    }
}

/// Column shift of row `r` in a card of height `h` tilted by `degrees` (clockwise positive).
fn shear(r: i32, h: i32, degrees: f64) -> i32 {
    let from_center = r as f64 - (h - 1) as f64 / 2.0;
    (-from_center * degrees.to_radians().tan() * CELL_ASPECT).round() as i32
}

fn put_centered(fb: &mut FrameBuffer, left: i32, width: u16, y: i32, s: &str, style: CellStyle) {
    let len = s.chars().count() as i32;
    let x = left + (width as i32 - len).max(0) / 2;
    fb.put_str_signed(x, y, s, style);
}

/// The last `max` characters of `s`.
fn tail(s: &str, max: usize) -> &str {
    let count = s.chars().count();
    if count <= max {
        return s;
    }
    let skip = count - max;
    match s.char_indices().nth(skip) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

/// Greedy word wrap into lines of at most `width` characters.
///
/// Words longer than `width` are split. Blank paragraphs are skipped.
pub fn wrap_lines(text: &str, width: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }
    for para in text.split('\n') {
        let mut rest = para.trim();
        while !rest.is_empty() {
            let Some((limit, _)) = rest.char_indices().nth(width) else {
                lines.push(rest);
                break;
            };
            let split = if rest[limit..].starts_with(' ') {
                limit
            } else {
                match rest[..limit].rfind(' ') {
                    Some(p) if p > 0 => p,
                    _ => limit,
                }
            };
            lines.push(rest[..split].trim_end());
            rest = rest[split..].trim_start();
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_spaces() {
        assert_eq!(
            wrap_lines("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap_lines("exactly10c next", 10), vec!["exactly10c", "next"]);
    }

    #[test]
    fn wrap_splits_long_words_and_skips_blank_lines() {
        assert_eq!(wrap_lines("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_lines("a\n\nb", 4), vec!["a", "b"]);
        assert!(wrap_lines("", 4).is_empty());
        assert!(wrap_lines("abc", 0).is_empty());
    }

    #[test]
    fn wrap_handles_multibyte_text() {
        assert_eq!(wrap_lines("héllo wörld", 5), vec!["héllo", "wörld"]);
    }

    #[test]
    fn shear_tilts_clockwise_for_positive_degrees() {
        let h = 13;
        assert_eq!(shear(6, h, 10.0), 0);
        assert!(shear(0, h, 10.0) > 0);
        assert!(shear(h - 1, h, 10.0) < 0);
        assert_eq!(shear(0, h, 0.0), 0);
        assert_eq!(shear(0, h, -10.0), -shear(0, h, 10.0));
    }

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail("abcdef", 3), "def");
        assert_eq!(tail("ab", 3), "ab");
        assert_eq!(tail("äöü", 2), "öü");
    }

    #[test]
    fn border_corners() {
        assert_eq!(border_char(0, 0, 5, 3), '╭');
        assert_eq!(border_char(0, 4, 5, 3), '╮');
        assert_eq!(border_char(2, 0, 5, 3), '╰');
        assert_eq!(border_char(2, 4, 5, 3), '╯');
        assert_eq!(border_char(1, 2, 5, 3), ' ');
        assert_eq!(border_char(1, 0, 5, 3), '│');
        assert_eq!(border_char(0, 2, 5, 3), '─');
    }
}
