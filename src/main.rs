use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use torus_snake::config::{THEME_CLASSIC, THEME_NEON, THEME_OCEAN, TICK_INTERVAL_MS, Theme};
use torus_snake::engine::TickEngine;
use torus_snake::error::AppError;
use torus_snake::game::GameState;
use torus_snake::input::{GameInput, InputHandler};
use torus_snake::renderer;
use torus_snake::terminal_runtime::TerminalSession;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(10);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the food RNG for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme.
    #[arg(long, value_enum, default_value = "classic")]
    theme: ThemeArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Classic,
    Ocean,
    Neon,
}

impl ThemeArg {
    fn theme(self) -> &'static Theme {
        match self {
            Self::Classic => &THEME_CLASSIC,
            Self::Ocean => &THEME_OCEAN,
            Self::Neon => &THEME_NEON,
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut session = TerminalSession::enter()?;
    run(&mut session, &cli)?;
    Ok(())
}

/// Single-threaded event loop: poll input, poll the tick engine, redraw.
/// Each step runs to completion before the next, so the game state needs no
/// locking discipline.
fn run(session: &mut TerminalSession, cli: &Cli) -> Result<(), AppError> {
    let theme = cli.theme.theme();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };
    let mut engine = TickEngine::new(Duration::from_millis(TICK_INTERVAL_MS), Instant::now());
    let input = InputHandler::new(INPUT_POLL_TIMEOUT);

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, theme))?;

        if let Some(game_input) = input.poll_input()? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Confirm if state.is_game_over() => {
                    state.reset();
                    engine.restart(Instant::now());
                }
                other => state.apply_input(other),
            }
        }

        if engine.poll(Instant::now()) {
            state.tick();
            if state.is_game_over() {
                // Cancel the recurring tick the instant the game ends.
                engine.stop();
            }
        }
    }

    Ok(())
}
