use crate::config::BOARD_SIZE;
use crate::display::LedFrame;

/// 3×5 digit glyphs, one row bitmask per matrix row, most significant bit on
/// the left.
const DIGIT_ROWS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Blank columns appended after the last digit so the loop seam stays legible.
const LOOP_GAP_COLUMNS: usize = 2;

/// Renders the frame sequence for the final score.
///
/// A single-digit score fits the matrix and yields one static frame. Longer
/// scores yield one frame per scroll step of a cyclic leftward scroll; the
/// caller replays the sequence in a loop.
#[must_use]
pub fn score_frames(score: u32) -> Vec<LedFrame> {
    if score < 10 {
        return vec![single_digit_frame(score)];
    }

    let strip = scroll_columns(score);
    (0..strip.len())
        .map(|offset| window_frame(&strip, offset))
        .collect()
}

/// Builds the static frame for a score below 10, glyph centered.
#[must_use]
pub fn single_digit_frame(score: u32) -> LedFrame {
    debug_assert!(score < 10);

    let glyph = DIGIT_ROWS[score as usize];
    let mut rows = [0u8; BOARD_SIZE];
    for (row, bits) in rows.iter_mut().zip(glyph) {
        *row = mirrored_3bits(bits) << 1;
    }

    LedFrame::from_rows(rows)
}

/// Builds the column strip for a multi-digit score: each digit's three
/// columns, one blank column between digits, and a trailing loop gap.
fn scroll_columns(score: u32) -> Vec<u8> {
    let mut columns = Vec::new();

    for digit in score.to_string().bytes().map(|byte| byte - b'0') {
        columns.extend(digit_columns(digit));
        columns.push(0);
    }
    columns.extend(std::iter::repeat_n(0, LOOP_GAP_COLUMNS));

    columns
}

/// Extracts a glyph's columns left to right, bit `y` meaning row `y` lit.
fn digit_columns(digit: u8) -> [u8; 3] {
    let glyph = DIGIT_ROWS[usize::from(digit)];
    let mut columns = [0u8; 3];

    for (column_index, column) in columns.iter_mut().enumerate() {
        for (row_index, row) in glyph.iter().enumerate() {
            if row & (1 << (2 - column_index)) != 0 {
                *column |= 1 << row_index;
            }
        }
    }

    columns
}

/// Cuts one board-wide window out of the cyclic strip.
fn window_frame(strip: &[u8], offset: usize) -> LedFrame {
    let mut rows = [0u8; BOARD_SIZE];

    for x in 0..BOARD_SIZE {
        let column = strip[(offset + x) % strip.len()];
        for (y, row) in rows.iter_mut().enumerate() {
            if column & (1 << y) != 0 {
                *row |= 1 << x;
            }
        }
    }

    LedFrame::from_rows(rows)
}

/// Reverses the low three bits so left glyph columns land on low x bits.
fn mirrored_3bits(bits: u8) -> u8 {
    (bits & 0b001) << 2 | (bits & 0b010) | (bits & 0b100) >> 2
}

#[cfg(test)]
mod tests {
    use super::{DIGIT_ROWS, score_frames, single_digit_frame};

    #[test]
    fn digit_glyphs_are_pairwise_distinct() {
        for (i, a) in DIGIT_ROWS.iter().enumerate() {
            for b in DIGIT_ROWS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn single_digit_frame_is_centered() {
        let frame = single_digit_frame(0);

        // Glyph occupies columns 1..=3; column 0 and 4 stay dark.
        for y in 0..5 {
            assert!(!frame.is_lit(0, y));
            assert!(!frame.is_lit(4, y));
        }

        // Zero has a hollow middle.
        assert!(frame.is_lit(1, 2));
        assert!(!frame.is_lit(2, 2));
        assert!(frame.is_lit(3, 2));
    }

    #[test]
    fn single_digit_score_yields_one_static_frame() {
        let frames = score_frames(7);

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0], single_digit_frame(7));
    }

    #[test]
    fn two_digit_score_yields_a_full_scroll_cycle() {
        // "42": two glyphs of 3 columns, 2 separators, 2 gap columns.
        let frames = score_frames(42);

        assert_eq!(frames.len(), 10);
        assert_ne!(frames[0], frames[1]);

        // The strip is cyclic: the last frame shifts back into the first.
        let (first, last) = (&frames[0], &frames[9]);
        for x in 0..4 {
            for y in 0..5 {
                assert_eq!(last.is_lit(x + 1, y), first.is_lit(x, y));
            }
        }
    }

    #[test]
    fn scroll_frames_shift_by_one_column() {
        let frames = score_frames(11);

        // Column x of the next frame equals column x+1 of the current frame.
        for window in frames.windows(2) {
            for x in 0..4 {
                for y in 0..5 {
                    assert_eq!(window[0].is_lit(x + 1, y), window[1].is_lit(x, y));
                }
            }
        }
    }
}
