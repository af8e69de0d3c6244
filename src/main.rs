//! Snake runner (default binary).
//!
//! With rendering enabled this is the human game in the terminal. With
//! `--no-render` it runs a uniformly random agent headless and reports
//! per-episode scores, optionally streaming every step as JSON lines.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_snake::core::{
    FoodRng, GameSnapshot, GameState, Observation, SimpleRng, SnakeConfig, SnakeError,
};
use tui_snake::input::{handle_key_event, is_restart, should_quit, TurnQueue};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{
    ACTION_COUNT, DEFAULT_CELL_SIZE, DEFAULT_PIXEL_HEIGHT, DEFAULT_PIXEL_WIDTH, DEFAULT_TICK_MS,
};

#[derive(Parser, Debug)]
#[command(name = "tui-snake")]
#[command(version, about = "Grid snake for human players and agents")]
struct Cli {
    /// Playfield width in pixels
    #[arg(long, default_value_t = DEFAULT_PIXEL_WIDTH)]
    width: u32,

    /// Playfield height in pixels
    #[arg(long, default_value_t = DEFAULT_PIXEL_HEIGHT)]
    height: u32,

    /// Cell size in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u32,

    /// Run headless with a random agent instead of the terminal game
    #[arg(long)]
    no_render: bool,

    /// Seed for food placement (and the random agent)
    #[arg(long, env = "SNAKE_SEED", default_value_t = 1)]
    seed: u32,

    /// Episodes to play when headless
    #[arg(long, default_value_t = 10)]
    episodes: u32,

    /// Milliseconds per game tick in the terminal game
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u32,

    /// Print one JSON record per step to stdout (headless)
    #[arg(long)]
    json: bool,

    /// Print the ASCII board after every step (headless)
    #[arg(long)]
    board: bool,
}

impl Cli {
    fn config(&self) -> SnakeConfig {
        SnakeConfig {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            render: !self.no_render,
            seed: self.seed,
        }
    }
}

/// One line of `--json` output.
#[derive(Serialize)]
struct StepRecord {
    episode: u32,
    frame: u32,
    state: Observation,
    action: i64,
    reward: f32,
    done: bool,
    score: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_tracing(config.render);

    let game = GameState::new(config.clone())?;
    info!(
        ?config,
        grid_width = game.grid_width(),
        grid_height = game.grid_height(),
        "game created"
    );

    if config.render {
        play(game, cli.tick_ms)
    } else {
        run_agent(game, &cli)
    }
}

fn init_tracing(render: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        // The alternate screen owns the terminal; stay quiet unless asked.
        Err(_) if render => return,
        Err(_) => EnvFilter::new("info"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn play(mut game: GameState, tick_ms: u32) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run_terminal(&mut term, &mut game, tick_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run_terminal(term: &mut TerminalRenderer, game: &mut GameState, tick_ms: u32) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut turns = TurnQueue::new();

    let tick = Duration::from_millis(tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick.checked_sub(last_tick.elapsed()).unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if game.is_done() {
                        if is_restart(key) {
                            game.reset();
                            turns.clear();
                            last_tick = Instant::now();
                        }
                    } else if let Some(dir) = handle_key_event(key) {
                        turns.push(dir, game.direction());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if !game.is_done() && last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            let action = turns.next_action(game.direction());
            match game.step(action) {
                Ok(step) if step.done => info!(score = step.info.score, "game over"),
                Ok(_) => {}
                Err(SnakeError::ResourceExhausted { .. }) => {
                    info!(score = game.score(), "grid filled");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn run_agent(mut game: GameState, cli: &Cli) -> Result<()> {
    info!(space = %serde_json::to_string(&game.action_space())?, "action space");
    info!(space = %serde_json::to_string(&game.observation_space())?, "observation space");

    // Separate stream so the agent does not perturb food placement.
    let mut policy = SimpleRng::new(cli.seed.wrapping_mul(31).wrapping_add(7));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut best = 0u32;
    let mut total = 0u64;

    for episode in 0..cli.episodes {
        let mut state = game.reset();
        loop {
            let action = policy.next_range(ACTION_COUNT as u32) as i64;
            let step = match game.step(action) {
                Ok(step) => step,
                Err(SnakeError::ResourceExhausted { .. }) => break,
                Err(e) => return Err(e.into()),
            };

            if cli.json {
                let record = StepRecord {
                    episode,
                    frame: game.frame(),
                    state,
                    action,
                    reward: step.reward,
                    done: step.done,
                    score: step.info.score,
                };
                serde_json::to_writer(&mut out, &record)?;
                writeln!(out)?;
            }
            if cli.board {
                writeln!(out, "{}", game.debug_board())?;
            }

            state = step.observation;
            if step.done {
                break;
            }
        }

        best = best.max(game.score());
        total += game.score() as u64;
        info!(episode, score = game.score(), frames = game.frame(), "episode finished");
    }

    if cli.episodes > 0 {
        info!(
            episodes = cli.episodes,
            best,
            mean = total as f64 / cli.episodes as f64,
            "random agent summary"
        );
    }
    out.flush()?;
    Ok(())
}
