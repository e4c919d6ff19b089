//! Terminal falltris runner (default binary).
//!
//! Reads keys with crossterm, steps the session once per frame and flushes
//! the changed rows of a framebuffer-based view.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use falltris::config::Config;
use falltris::core::{GameSession, GameSnapshot};
use falltris::input::{CommandBuffer, InputOutcome};
use falltris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file only; stdout belongs to the game.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install log subscriber")
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = GameSession::new(config.seed);
    let view = GameView::default();
    let mut commands = CommandBuffer::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(config.tick_ms as u64);
    let mut last_frame = Instant::now();
    info!(seed = config.seed, tick_ms = config.tick_ms, "falltris starting");

    loop {
        // Collect input until the frame is due.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            loop {
                let ev = event::read()?;
                if let Event::Resize(..) = ev {
                    term.invalidate();
                }
                if commands.handle_event(&ev) == InputOutcome::Quit {
                    info!(score = session.score(), "quit");
                    return Ok(());
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
        if last_frame.elapsed() < frame {
            continue;
        }

        let elapsed_ms = last_frame.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_frame = Instant::now();

        session.step(&commands.drain(), elapsed_ms);
        if let Some(landed) = session.take_last_event() {
            if landed.lines_cleared > 0 {
                debug!(
                    lines = landed.lines_cleared,
                    points = landed.points,
                    level = landed.level,
                    "lines cleared"
                );
            }
        }

        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
