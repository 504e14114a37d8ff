use ratatui::style::Color;

/// Maximum x and y coordinate on the board (inclusive).
pub const BOARD_MAX: i32 = 4;

/// Board edge length in cells.
pub const BOARD_SIZE: usize = (BOARD_MAX as usize) + 1;

/// Initial snake length in segments.
pub const START_SNAKE_LENGTH: i32 = 2;

/// Column the snake starts in.
pub const START_COLUMN: i32 = 2;

/// Time between snake movements in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 500;

/// Time between score scroll steps in milliseconds.
pub const SCROLL_INTERVAL_MS: u64 = 800;

/// Glyph painted for one LED cell (two terminal columns per cell).
pub const GLYPH_LED: &str = "██";

/// Color of a lit LED.
pub const LED_ON: Color = Color::Red;

/// Color of an unlit LED.
pub const LED_OFF: Color = Color::Rgb(40, 16, 16);

/// Matrix border color.
pub const BORDER_FG: Color = Color::DarkGray;

/// Key-hint footer color.
pub const FOOTER_FG: Color = Color::DarkGray;
