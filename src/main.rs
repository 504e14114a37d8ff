use std::panic;
use std::thread;
use std::time::Duration;

use clap::Parser;
use matrix_snake::config::{SCROLL_INTERVAL_MS, TICK_INTERVAL_MS};
use matrix_snake::display::{self, LedFrame};
use matrix_snake::error::AppError;
use matrix_snake::font;
use matrix_snake::game::{GameSession, GameStatus};
use matrix_snake::input::Controls;
use matrix_snake::terminal_runtime::{TerminalSession, restore_terminal};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed food placement for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // A missing listener degrades to a snake holding its last heading; it is
    // diagnosed before the alternate screen swallows stderr.
    let controls = match Controls::listen() {
        Ok(controls) => Some(controls),
        Err(error) => {
            eprintln!("button listener unavailable, running without input: {error}");
            None
        }
    };

    let mut session = match cli.seed {
        Some(seed) => GameSession::new_with_seed(seed),
        None => GameSession::new(),
    };

    install_panic_hook();

    let mut terminal = TerminalSession::enter().map_err(AppError::TerminalSetup)?;
    run(&mut terminal, controls.as_ref(), &mut session)?;
    drop(terminal);

    println!("final score: {}", session.score);
    Ok(())
}

fn run(
    terminal: &mut TerminalSession,
    controls: Option<&Controls>,
    session: &mut GameSession,
) -> Result<(), AppError> {
    while session.status == GameStatus::Running {
        // The displayed frame always shows the pre-move state.
        draw(terminal, &session.led_frame())?;

        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));

        if quit_requested(controls) {
            return Ok(());
        }
        session.tick(controls.and_then(|controls| controls.take_turn()));
    }

    show_score(terminal, controls, session.score)
}

/// Holds the final score on the matrix until the player quits: one static
/// frame for a single digit, a looping scroll otherwise.
fn show_score(
    terminal: &mut TerminalSession,
    controls: Option<&Controls>,
    score: u32,
) -> Result<(), AppError> {
    let frames = font::score_frames(score);

    for frame in frames.iter().cycle() {
        draw(terminal, frame)?;

        thread::sleep(Duration::from_millis(SCROLL_INTERVAL_MS));
        if quit_requested(controls) {
            return Ok(());
        }
    }

    Ok(())
}

fn draw(terminal: &mut TerminalSession, led: &LedFrame) -> Result<(), AppError> {
    terminal
        .terminal_mut()
        .draw(|frame| display::render(frame, led))
        .map(|_| ())
        .map_err(AppError::Draw)
}

fn quit_requested(controls: Option<&Controls>) -> bool {
    controls.is_some_and(Controls::quit_requested)
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}
