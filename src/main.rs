//! Terminal Tetris 1984 runner (default binary).
//!
//! Runs the engine on a fixed 16ms tick, reads keys with crossterm and draws
//! through the framebuffer renderer. Logs go to a file, never to the
//! terminal, since it is in raw mode while the game runs.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};

use tetris_1984::core::{EngineConfig, GameEngine};
use tetris_1984::input::{handle_key_event, should_quit};
use tetris_1984::sound::TerminalBell;
use tetris_1984::store::FileStore;
use tetris_1984::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_1984::types::{BOARD_HEIGHT, BOARD_WIDTH, RESTART_DELAY_MS, TICK_MS};

type Engine = GameEngine<TerminalBell, FileStore>;

/// The 1984 Tetris in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "tetris-1984",
    version,
    about,
    long_about = "The 1984 Tetris in the terminal.\n\n\
        CONTROLS:\n  Left / 7    Move left    Right / 9   Move right\n  \
        Up / 8      Rotate       Down / 4    Soft drop\n  \
        Space       Hard drop    C           Hold\n  \
        P           Pause        R / 5       Restart\n  \
        Q / Esc     Quit"
)]
struct Args {
    /// Randomizer seed; the same seed deals the same pieces.
    #[arg(long, env = "TETRIS_SEED")]
    seed: Option<u64>,

    /// Playfield width in cells.
    #[arg(long, default_value_t = BOARD_WIDTH, value_name = "COLS")]
    width: usize,

    /// Playfield height in cells.
    #[arg(long, default_value_t = BOARD_HEIGHT, value_name = "ROWS")]
    height: usize,

    /// Game-over countdown before a new game starts.
    #[arg(long, default_value_t = RESTART_DELAY_MS, value_name = "MS")]
    restart_delay_ms: u32,

    /// High score file (default: config dir / tetris-1984 / highscore.json).
    #[arg(long, env = "TETRIS_HIGHSCORE_FILE", value_name = "FILE")]
    highscore_file: Option<PathBuf>,

    /// Write logs to this file.
    #[arg(long, env = "TETRIS_LOG_FILE", value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Most verbose level written to the log file.
    #[arg(long, default_value_t = Level::DEBUG, value_name = "LEVEL")]
    log_level: Level,

    /// Ring the terminal bell on line clears and game over.
    #[arg(long)]
    bell: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    // Build the engine before touching the terminal so config errors print plainly.
    let mut engine = build_engine(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        score = engine.score(),
        high_score = engine.high_score(),
        "session ended"
    );
    result
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(args.log_level)
        .init();
    Ok(())
}

fn build_engine(args: &Args) -> Result<Engine> {
    let mut config = EngineConfig::default()
        .with_board_size(args.width, args.height)
        .with_restart_delay_ms(args.restart_delay_ms);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let store = args
        .highscore_file
        .clone()
        .map(FileStore::new)
        .unwrap_or_default();
    info!(path = %store.path().display(), "high score file");

    let engine = GameEngine::new(config, TerminalBell::stdout(args.bell), store)
        .context("invalid game configuration")?;
    Ok(engine)
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine) -> Result<()> {
    let view = GameView::default();
    let mut snap = engine.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick(TICK_MS);
        }
    }
}
