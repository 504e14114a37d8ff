use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{BOARD_SIZE, BORDER_FG, FOOTER_FG, GLYPH_LED, LED_OFF, LED_ON};
use crate::snake::Position;

/// One displayed frame of the LED matrix: a bitmask per board row, bit `x` of
/// row `y` meaning cell `(x, y)` is lit.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct LedFrame {
    rows: [u8; BOARD_SIZE],
}

impl LedFrame {
    /// Lights the cell at `position`. Positions off the board are ignored.
    pub fn set(&mut self, position: Position) {
        let (Ok(x), Ok(y)) = (usize::try_from(position.x), usize::try_from(position.y)) else {
            return;
        };
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return;
        }

        self.rows[y] |= 1 << x;
    }

    /// Builds a frame from row bitmasks, row 0 on top.
    #[must_use]
    pub fn from_rows(rows: [u8; BOARD_SIZE]) -> Self {
        Self { rows }
    }

    /// Returns true when cell `(x, y)` is lit.
    #[must_use]
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE && self.rows[y] & (1 << x) != 0
    }

    /// Returns the number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }
}

/// Width of the matrix widget in terminal columns, border included.
const WIDGET_WIDTH: u16 = (BOARD_SIZE as u16) * 2 + 2;

/// Height of the matrix widget in terminal rows, border included.
const WIDGET_HEIGHT: u16 = (BOARD_SIZE as u16) + 2;

/// Draws one LED frame centered in the terminal, with a key-hint footer.
pub fn render(frame: &mut Frame<'_>, led: &LedFrame) {
    let area = frame.area();
    let widget_area = centered(area, WIDGET_WIDTH, WIDGET_HEIGHT);

    let block = Block::bordered().border_style(Style::new().fg(BORDER_FG));
    let inner = block.inner(widget_area);
    frame.render_widget(block, widget_area);

    render_cells(frame, inner, led);
    render_footer(frame, area, widget_area);
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, led: &LedFrame) {
    let buffer = frame.buffer_mut();

    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let column = inner.x.saturating_add(x as u16 * 2);
            let row = inner.y.saturating_add(y as u16);
            if column.saturating_add(2) > inner.right() || row >= inner.bottom() {
                continue;
            }

            let color = if led.is_lit(x, y) { LED_ON } else { LED_OFF };
            buffer.set_string(column, row, GLYPH_LED, Style::new().fg(color));
        }
    }
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, widget_area: Rect) {
    let footer_y = widget_area.bottom();
    if footer_y >= area.bottom() {
        return;
    }

    let footer = Rect::new(area.x, footer_y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from("[←/A] turn left  [→/D] turn right  [Q] quit"))
            .centered()
            .style(Style::new().fg(FOOTER_FG)),
        footer,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use crate::snake::Position;

    use super::LedFrame;

    #[test]
    fn set_lights_the_matching_bit() {
        let mut frame = LedFrame::default();

        frame.set(Position { x: 3, y: 1 });

        assert!(frame.is_lit(3, 1));
        assert!(!frame.is_lit(1, 3));
        assert_eq!(frame.lit_count(), 1);
    }

    #[test]
    fn set_ignores_positions_off_the_board() {
        let mut frame = LedFrame::default();

        frame.set(Position { x: -1, y: 2 });
        frame.set(Position { x: 2, y: 5 });

        assert_eq!(frame, LedFrame::default());
    }

    #[test]
    fn from_rows_matches_bit_layout() {
        let frame = LedFrame::from_rows([0b00001, 0, 0, 0, 0b10000]);

        assert!(frame.is_lit(0, 0));
        assert!(frame.is_lit(4, 4));
        assert_eq!(frame.lit_count(), 2);
    }
}
