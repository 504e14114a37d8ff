use std::collections::VecDeque;

use crate::input::Direction;

/// Board position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring position one cell in `direction`.
    ///
    /// The y axis grows downward, matching LED matrix row order.
    #[must_use]
    pub fn moved(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
        }
    }

    /// Returns true when the position lies inside `[0, board_max]` on both axes.
    #[must_use]
    pub fn is_within_bounds(self, board_max: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x <= board_max && self.y <= board_max
    }
}

/// Ordered snake body, head at the front.
///
/// Segments are owned exclusively by the body; they are created only through
/// [`SnakeBody::new`] and [`SnakeBody::grow_from`] and move only through
/// [`SnakeBody::advance`].
#[derive(Debug, Clone)]
pub struct SnakeBody {
    segments: VecDeque<Position>,
}

impl SnakeBody {
    /// Creates a body from explicit segments (first is the head).
    #[must_use]
    pub fn new(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            segments: VecDeque::from(segments),
        }
    }

    /// Moves the whole body one cell in `direction` as a single synchronized
    /// shift: the head advances and every other segment takes the position its
    /// predecessor held before the move.
    ///
    /// Returns the position the tail vacated, which [`SnakeBody::grow_from`]
    /// needs when the move ate food.
    pub fn advance(&mut self, direction: Direction) -> Position {
        let next_head = self.head().moved(direction);
        self.segments.push_front(next_head);

        self.segments
            .pop_back()
            .expect("snake body must always contain at least one segment")
    }

    /// Appends a new tail segment at `position`.
    pub fn grow_from(&mut self, position: Position) {
        self.segments.push_back(position);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .segments
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true when the head has left the board.
    #[must_use]
    pub fn is_out_of_bounds(&self, board_max: i32) -> bool {
        !self.head().is_within_bounds(board_max)
    }

    /// Returns true when the head overlaps any non-head segment.
    #[must_use]
    pub fn head_collides_with_body(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments. Never true for a live body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segment positions from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Position, SnakeBody};

    fn column_body() -> SnakeBody {
        SnakeBody::new(vec![
            Position { x: 2, y: 2 },
            Position { x: 2, y: 3 },
            Position { x: 2, y: 4 },
        ])
    }

    #[test]
    fn advance_shifts_all_segments_in_one_step() {
        let mut body = column_body();

        let vacated = body.advance(Direction::Up);

        let positions: Vec<Position> = body.segments().copied().collect();
        assert_eq!(
            positions,
            vec![
                Position { x: 2, y: 1 },
                Position { x: 2, y: 2 },
                Position { x: 2, y: 3 },
            ]
        );
        assert_eq!(vacated, Position { x: 2, y: 4 });
    }

    #[test]
    fn advance_never_changes_length() {
        let mut body = column_body();

        for direction in [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ] {
            body.advance(direction);
            assert_eq!(body.len(), 3);
        }
    }

    #[test]
    fn grow_from_appends_exactly_one_tail_segment() {
        let mut body = column_body();
        let vacated = body.advance(Direction::Up);

        body.grow_from(vacated);

        assert_eq!(body.len(), 4);
        assert_eq!(body.segments().last().copied(), Some(vacated));
    }

    #[test]
    fn single_segment_body_advances() {
        let mut body = SnakeBody::new(vec![Position { x: 1, y: 1 }]);

        let vacated = body.advance(Direction::Right);

        assert_eq!(body.head(), Position { x: 2, y: 1 });
        assert_eq!(body.len(), 1);
        assert_eq!(vacated, Position { x: 1, y: 1 });
    }

    #[test]
    fn head_leaving_board_is_out_of_bounds() {
        let mut body = SnakeBody::new(vec![Position { x: 2, y: 0 }]);
        assert!(!body.is_out_of_bounds(4));

        body.advance(Direction::Up);

        assert_eq!(body.head(), Position { x: 2, y: -1 });
        assert!(body.is_out_of_bounds(4));
    }

    #[test]
    fn head_collision_ignores_the_head_itself() {
        let body = column_body();
        assert!(!body.head_collides_with_body());
    }

    #[test]
    fn head_collision_detects_overlap_with_non_head_segment() {
        // Head curled back onto the fourth segment.
        let body = SnakeBody::new(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
            Position { x: 1, y: 1 },
        ]);

        assert!(body.head_collides_with_body());
    }

    #[test]
    fn occupies_covers_every_segment() {
        let body = column_body();

        assert!(body.occupies(Position { x: 2, y: 2 }));
        assert!(body.occupies(Position { x: 2, y: 4 }));
        assert!(!body.occupies(Position { x: 3, y: 2 }));
    }
}
