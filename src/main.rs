//! Terminal match-three runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input (mouse taps plus a keyboard cursor) and a
//! framebuffer-based renderer (no ratatui widgets/layout).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_crush::core::GameState;
use tui_crush::input::{map_key, map_mouse, should_quit};
use tui_crush::term::{GameView, TerminalRenderer, Viewport};
use tui_crush::types::{Coord, CursorDir, UiCommand, GRID_SIZE, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(launch_seed());
    let view = GameView::default();
    let mut cursor = Coord::new(GRID_SIZE / 2, GRID_SIZE / 2);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = view.render(&game.snapshot(), cursor, viewport);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key(key) {
                        Some(UiCommand::Restart) => game.restart(),
                        Some(UiCommand::CursorMove(dir)) => move_cursor(&mut cursor, dir),
                        Some(UiCommand::TapCursor) => game.tap(cursor),
                        None => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some((x, y)) = map_mouse(mouse) {
                        // Off-board clicks resolve to no tile and are dropped.
                        if let Some(at) = view.hit_test(viewport, x, y) {
                            cursor = at;
                            game.tap(at);
                        }
                    }
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
        }
    }
}

fn move_cursor(cursor: &mut Coord, dir: CursorDir) {
    match dir {
        CursorDir::Up => cursor.row = cursor.row.saturating_sub(1),
        CursorDir::Down => cursor.row = (cursor.row + 1).min(GRID_SIZE - 1),
        CursorDir::Left => cursor.col = cursor.col.saturating_sub(1),
        CursorDir::Right => cursor.col = (cursor.col + 1).min(GRID_SIZE - 1),
    }
}

/// Seed each launch differently; sub-second clock bits are plenty
fn launch_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
