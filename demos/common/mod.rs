//! Terminal plumbing shared by the demos.

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;
use std::panic;
use std::time::{Duration, Instant};

/// Key handling result that controls the event loop
pub enum KeyAction {
    /// Continue the event loop
    Continue,
    /// Exit the event loop
    Exit,
}

/// Runs an animated demo in the alternate screen.
///
/// Handles terminal raw mode, the panic hook that restores the terminal, and
/// an event loop that calls `on_tick` every `tick_interval` and `draw` after
/// every tick or handled key.
pub fn run_animated_example<S, T, D, K>(
    mut state: S,
    tick_interval: Duration,
    mut on_tick: T,
    mut draw: D,
    mut key_handler: K,
) -> Result<()>
where
    T: FnMut(&mut S),
    D: FnMut(&S) -> Result<()>,
    K: FnMut(&mut S, &KeyEvent) -> Result<KeyAction>,
{
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    // Restore the terminal if anything below panics
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    let result = event_loop(&mut state, tick_interval, &mut on_tick, &mut draw, &mut key_handler);
    cleanup_terminal();
    result
}

fn event_loop<S, T, D, K>(
    state: &mut S,
    tick_interval: Duration,
    on_tick: &mut T,
    draw: &mut D,
    key_handler: &mut K,
) -> Result<()>
where
    T: FnMut(&mut S),
    D: FnMut(&S) -> Result<()>,
    K: FnMut(&mut S, &KeyEvent) -> Result<KeyAction>,
{
    draw(state)?;
    let mut next_tick = Instant::now() + tick_interval;
    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)?
            && let Event::Key(key_event) = event::read()?
            && key_event.kind == KeyEventKind::Press
        {
            match key_handler(state, &key_event)? {
                KeyAction::Continue => draw(state)?,
                KeyAction::Exit => return Ok(()),
            }
        }
        if Instant::now() >= next_tick {
            on_tick(state);
            draw(state)?;
            next_tick += tick_interval;
        }
    }
}

/// Cleans up terminal state (cursor, alternate screen, raw mode).
fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Helper to check if a key code is a quit key (Q, ESC).
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
