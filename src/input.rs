use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Heading of the snake, in clockwise cycle order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Returns the heading after one quarter rotation.
    #[must_use]
    pub fn rotated(self, turn: Turn) -> Self {
        match turn {
            Turn::Left => match self {
                Self::Up => Self::Left,
                Self::Left => Self::Down,
                Self::Down => Self::Right,
                Self::Right => Self::Up,
            },
            Turn::Right => match self {
                Self::Up => Self::Right,
                Self::Right => Self::Down,
                Self::Down => Self::Left,
                Self::Left => Self::Up,
            },
        }
    }
}

/// One button press: rotate the heading counter-clockwise or clockwise.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Turn {
    Left,
    Right,
}

const SLOT_EMPTY: u8 = 0;
const SLOT_LEFT: u8 = 1;
const SLOT_RIGHT: u8 = 2;

/// Single-slot mailbox carrying the latest pending turn request.
///
/// The listener thread posts into the slot, the game loop drains it once per
/// tick. The newest write before the drain wins; earlier writes in the same
/// tick window are lost, so at most one rotation registers per tick.
#[derive(Debug, Default)]
pub struct TurnMailbox {
    slot: AtomicU8,
}

impl TurnMailbox {
    /// Posts a turn request, replacing any pending one.
    pub fn post(&self, turn: Turn) {
        let value = match turn {
            Turn::Left => SLOT_LEFT,
            Turn::Right => SLOT_RIGHT,
        };
        self.slot.store(value, Ordering::Release);
    }

    /// Takes the pending turn request, leaving the slot empty.
    pub fn take(&self) -> Option<Turn> {
        match self.slot.swap(SLOT_EMPTY, Ordering::AcqRel) {
            SLOT_LEFT => Some(Turn::Left),
            SLOT_RIGHT => Some(Turn::Right),
            _ => None,
        }
    }
}

/// Shared handles to the keyboard listener thread.
///
/// The listener stands in for the two hardware buttons: it blocks on terminal
/// events and posts rotations into the mailbox, while the game loop samples
/// the mailbox once per tick.
#[derive(Debug, Clone)]
pub struct Controls {
    mailbox: Arc<TurnMailbox>,
    quit: Arc<AtomicBool>,
}

impl Controls {
    /// Spawns the listener thread.
    ///
    /// On failure the caller is expected to keep running without input; the
    /// snake then holds its last heading until it hits a wall.
    pub fn listen() -> io::Result<Self> {
        let controls = Self {
            mailbox: Arc::new(TurnMailbox::default()),
            quit: Arc::new(AtomicBool::new(false)),
        };

        let mailbox = Arc::clone(&controls.mailbox);
        let quit = Arc::clone(&controls.quit);
        thread::Builder::new()
            .name("button-listener".into())
            .spawn(move || listen_loop(&mailbox, &quit))?;

        Ok(controls)
    }

    /// Drains the pending turn request, if any.
    #[must_use]
    pub fn take_turn(&self) -> Option<Turn> {
        self.mailbox.take()
    }

    /// Returns true once the player asked to quit.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::Acquire)
    }
}

fn listen_loop(mailbox: &TurnMailbox, quit: &AtomicBool) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(error) => {
                // Input device gone; the game keeps ticking without turns.
                eprintln!("button listener stopped: {error}");
                return;
            }
        };

        let Event::Key(key) = event else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            quit.store(true, Ordering::Release);
            return;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('a') => mailbox.post(Turn::Left),
            KeyCode::Right | KeyCode::Char('d') => mailbox.post(Turn::Right),
            KeyCode::Esc | KeyCode::Char('q') => {
                quit.store(true, Ordering::Release);
                return;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Turn, TurnMailbox};

    #[test]
    fn rotating_right_cycles_clockwise() {
        let mut direction = Direction::Up;
        let expected = [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ];

        for step in expected {
            direction = direction.rotated(Turn::Right);
            assert_eq!(direction, step);
        }
    }

    #[test]
    fn rotating_left_cycles_counter_clockwise() {
        let mut direction = Direction::Up;
        let expected = [
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Up,
        ];

        for step in expected {
            direction = direction.rotated(Turn::Left);
            assert_eq!(direction, step);
        }
    }

    #[test]
    fn rotations_cancel_out() {
        for direction in [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ] {
            assert_eq!(direction.rotated(Turn::Left).rotated(Turn::Right), direction);
        }
    }

    #[test]
    fn mailbox_starts_empty() {
        let mailbox = TurnMailbox::default();
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn mailbox_take_drains_the_slot() {
        let mailbox = TurnMailbox::default();

        mailbox.post(Turn::Left);

        assert_eq!(mailbox.take(), Some(Turn::Left));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn mailbox_newest_post_wins() {
        let mailbox = TurnMailbox::default();

        mailbox.post(Turn::Left);
        mailbox.post(Turn::Right);

        assert_eq!(mailbox.take(), Some(Turn::Right));
        assert_eq!(mailbox.take(), None);
    }
}
