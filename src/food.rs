use rand::Rng;

use crate::snake::{Position, SnakeBody};

/// Places food on a cell not occupied by the snake, by rejection sampling.
///
/// Candidate coordinates are drawn uniformly from `[1, board_max]` on each
/// axis, so row 0 and column 0 never hold food. This mirrors the hardware
/// build's sampling and is kept as observable behavior.
///
/// There is no retry bound: on a 5×5 board the snake dies long before free
/// cells become scarce, so the loop terminates after a handful of draws.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, board_max: i32, body: &SnakeBody) -> Position {
    loop {
        let candidate = Position {
            x: rng.gen_range(1..=board_max),
            y: rng.gen_range(1..=board_max),
        };

        if !body.occupies(candidate) {
            return candidate;
        }
    }
}
