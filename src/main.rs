//! Terminal flashcards runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer from
//! `tui_flashcards::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_flashcards::core::seed_deck;
use tui_flashcards::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use tui_flashcards::types::TICK_MS;
use tui_flashcards::{App, FlashcardConfig, SessionLog};

/// Static frames are redrawn at least this often.
const STATIC_REFRESH_MS: u64 = 500;

fn main() -> Result<()> {
    let config = FlashcardConfig::from_env();

    // Report log problems before the alternate screen hides stderr.
    let log = match config.log_path.as_deref() {
        Some(path) => SessionLog::open(path).unwrap_or_else(|e| {
            eprintln!("[Flashcards] session log disabled: {:#}", e);
            SessionLog::disabled()
        }),
        None => SessionLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, log);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &FlashcardConfig, log: SessionLog) -> Result<()> {
    let mut app = App::new(config, seed_deck(), log);
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.resize(Viewport::new(w, h));
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.fingerprint(), app.is_animating()) {
            app.view().render_into(&app.frame(), app.viewport(), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
            if app.should_quit() {
                return Ok(());
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.tick(elapsed.as_millis() as u32);
        }
    }
}
