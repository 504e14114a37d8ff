use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{BOARD_MAX, START_COLUMN, START_SNAKE_LENGTH};
use crate::display::LedFrame;
use crate::food::place_food;
use crate::input::{Direction, Turn};
use crate::snake::{Position, SnakeBody};

/// Session lifecycle. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub direction: Direction,
    pub body: SnakeBody,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with entropy-seeded food placement.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        // Vertical start: head on top, tail filling the rows below it.
        let head_row = BOARD_MAX - START_SNAKE_LENGTH + 1;
        let body = SnakeBody::new(
            (head_row..=BOARD_MAX)
                .map(|y| Position { x: START_COLUMN, y })
                .collect(),
        );
        let food = place_food(&mut rng, BOARD_MAX, &body);

        Self {
            direction: Direction::Up,
            body,
            food,
            score: 0,
            status: GameStatus::Running,
            rng,
        }
    }

    /// Advances the session by one tick, applying at most one rotation.
    ///
    /// Calling this after the session ended is a no-op: score, body, and food
    /// stay frozen.
    pub fn tick(&mut self, turn: Option<Turn>) {
        if self.status != GameStatus::Running {
            return;
        }

        if let Some(turn) = turn {
            self.direction = self.direction.rotated(turn);
        }

        let vacated_tail = self.body.advance(self.direction);

        // Bounds first; a head off the board is never checked for body overlap.
        if self.body.is_out_of_bounds(BOARD_MAX) {
            self.status = GameStatus::GameOver;
            return;
        }

        if self.body.head_collides_with_body() {
            self.status = GameStatus::GameOver;
            return;
        }

        if self.body.head() == self.food {
            // The new tail takes the cell the old tail just vacated.
            self.body.grow_from(vacated_tail);
            self.score += 1;
            self.food = place_food(&mut self.rng, BOARD_MAX, &self.body);
        }
    }

    /// Returns the occupancy snapshot for the renderer: body plus food.
    #[must_use]
    pub fn led_frame(&self) -> LedFrame {
        let mut frame = LedFrame::default();

        frame.set(self.food);
        for segment in self.body.segments() {
            frame.set(*segment);
        }

        frame
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
