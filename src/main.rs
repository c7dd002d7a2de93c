//! Terminal Tetris runner (default binary).
//!
//! Reads keys with crossterm, advances the core on a fixed tick and draws
//! through the framebuffer renderer.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pure_tetris::config::GameConfig;
use pure_tetris::core::{GameSnapshot, GameState};
use pure_tetris::input::{handle_key_event, should_quit};
use pure_tetris::sound::Sound;
use pure_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = GameConfig::load(&args)?;
    init_logging(&config)?;
    info!(seed = config.seed, tick_ms = config.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file only; stdout belongs to the renderer.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("config: cannot open log file {}", path.display()))?;
    let level = std::env::var("TETRIS_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(EnvFilter::new(level))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameState::with_seed(config.seed);
    let sound = if config.sound {
        Sound::spawn()
    } else {
        Sound::muted()
    };

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(config.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        for event in game.take_events() {
            debug!(?event, "game event");
            sound.notify(event);
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), lines = game.lines(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
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
