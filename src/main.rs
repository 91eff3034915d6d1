//! Terminal runner (default binary).
//!
//! Single-threaded, cooperative: one loop serializes keyboard edges, the
//! movement-repeat clock and the variable-period game clock, so no two
//! transitions ever overlap. Quitting or stopping play tears the timers
//! down simply by the loop no longer firing them.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::Game;
use gridfall::input::{is_start, logical_key, should_quit, InputHandler, InputSignal};
use gridfall::term::{GameView, TerminalRenderer};

/// Event-poll granularity; keeps movement repeats responsive while the game
/// clock may be as slow as the Normal period.
const POLL_MS: u64 = 16;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(seed_from_clock());
    game.start_game();

    let view = GameView::new();
    let mut input = InputHandler::new();

    let mut last_tick = Instant::now();
    let mut last_update = Instant::now();
    let mut was_playing = game.is_playing();

    loop {
        let frame = view.render(&game.snapshot());
        term.draw(&frame)?;

        let timeout = game
            .tick_period_ms()
            .map(|period| Duration::from_millis(period).saturating_sub(last_tick.elapsed()))
            .unwrap_or(Duration::from_millis(POLL_MS))
            .min(Duration::from_millis(POLL_MS));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        if is_start(key) && !game.is_playing() {
                            input.reset();
                            game.start_game();
                            last_tick = Instant::now();
                        } else if let Some(logical) = logical_key(key.code) {
                            if let Some(signal) = input.key_down(logical) {
                                apply_signal(&mut game, signal);
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Host auto-repeat; the debouncer owns repeats.
                    }
                    KeyEventKind::Release => {
                        if let Some(logical) = logical_key(key.code) {
                            if let Some(signal) = input.key_up(logical) {
                                apply_signal(&mut game, signal);
                            }
                        }
                    }
                }
            }
        }

        // Movement-repeat clock.
        let elapsed = last_update.elapsed().as_millis() as u32;
        last_update = Instant::now();
        for intent in input.update(elapsed) {
            game.apply_move(intent);
        }

        // Game clock at the current variable period.
        if let Some(period) = game.tick_period_ms() {
            if last_tick.elapsed() >= Duration::from_millis(period) {
                last_tick = Instant::now();
                game.tick();
            }
        }

        // Play just ended: drop any held keys so nothing repeats into the
        // next game.
        if was_playing && !game.is_playing() {
            input.reset();
        }
        was_playing = game.is_playing();
    }
}

fn apply_signal(game: &mut Game, signal: InputSignal) {
    match signal {
        InputSignal::Move(intent) => game.apply_move(intent),
        InputSignal::FastDrop(fast) => game.set_fast_drop(fast),
    }
}
