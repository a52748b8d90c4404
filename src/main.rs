//! Terminal falling-block runner (default binary).
//!
//! Loop: poll input, step the session, draw when due, sleep. The terminal is
//! restored even when the loop fails.

use std::fs::File;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use tui_blocks::core::Engine;
use tui_blocks::input::{InputSource, TerminalInput};
use tui_blocks::term::{FrameBuffer, GameView, TerminalRenderer};
use tui_blocks::types::LOOP_SLEEP_MS;
use tui_blocks::{Cli, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        error!(%err, "failed to restore terminal");
    }
    result
}

/// Install a file logger when `--log-file` is given; stdout belongs to the game.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(cli.log_level()))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<()> {
    let engine = Engine::new(cli.randomizer());
    let mut session = Session::new(engine, cli.game_config(), Instant::now());
    let mut input = TerminalInput::new();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let sleep = Duration::from_millis(LOOP_SLEEP_MS);

    session.start(Instant::now());
    view.render_into(session.engine(), term.viewport(), &mut fb);
    term.draw_swap(&mut fb)?;

    while session.running() {
        let event = input.poll_event()?;
        let outcome = session.step(event, Instant::now());

        let resized = term.is_resized()?;
        if outcome.render || resized {
            view.render_into(session.engine(), term.viewport(), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        thread::sleep(sleep);
    }
    Ok(())
}
