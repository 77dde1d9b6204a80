//! Terminal match-3 runner.
//!
//! Reads keys with crossterm, feeds the move form and the paced driver, and
//! redraws through the framebuffer renderer when something on screen changed.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::{error, info};

use tui_match3::cli::Cli;
use tui_match3::core::{GameSession, GameSnapshot};
use tui_match3::engine::GameDriver;
use tui_match3::input::{handle_key_event, should_quit, MoveForm};
use tui_match3::term::{
    fingerprint, FrameBuffer, GameView, HudView, RenderThrottle, TerminalRenderer, Viewport,
};
use tui_match3::types::{GameAction, TICK_MS};

/// Forced redraw interval when nothing changed.
const REFRESH_MS: u64 = 1000;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.resolve_seed();
    let session = GameSession::new(cli.board_config(), seed)
        .with_context(|| format!("cannot start a game with {:?}", cli.board_config()))?;
    info!("starting {}x{} game, seed {}", cli.rows, cli.cols, seed);
    let driver = GameDriver::new(session, cli.pacing());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, driver);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}

fn init_logging(cli: &Cli) -> Result<()> {
    let env = Env::default().default_filter_or(cli.log_filter());
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut driver: GameDriver) -> Result<()> {
    let (rows, cols) = {
        let config = driver.session().config();
        (config.rows, config.cols)
    };
    let mut form = MoveForm::new(rows, cols);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(REFRESH_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        driver.session().snapshot_into(&mut snap);
        let clock = driver.clock().display();
        let frame_id = fingerprint(&[
            snap.board_hash,
            snap.score as u64,
            snap.busy as u64,
            driver.clock().elapsed_ms() / 1000,
            driver.status() as u64,
            form_fingerprint(&form),
            ((w as u64) << 16) | h as u64,
        ]);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, frame_id) {
            let hud = HudView::new(&form, &clock, driver.status().message());
            view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key).and_then(|k| form.handle(k)) {
                        let changed = driver.apply(action)?;
                        if changed && action == GameAction::Restart {
                            form.clear();
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            driver.tick(TICK_MS);
        }
    }
}

fn form_fingerprint(form: &MoveForm) -> u64 {
    let text = |s: &str| s.bytes().fold(0u64, |acc, b| (acc << 8) | b as u64);
    fingerprint(&[
        text(form.column_text()),
        text(form.row_text()),
        form.focus() as u64,
        form.axis() as u64,
    ])
}
