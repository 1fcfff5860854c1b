//! Human-readable grid rendering.

use rudoku_core::{Board, Digit, Position};

const BAND_SEPARATOR: &str = "──────┼───────┼──────";

/// Renders the board as a 9×9 grid, with `│` between the 3-column stacks and
/// a ruled line between the 3-row bands. No trailing newline.
///
/// The compact, machine-oriented form is [`Board::serialize`]; this is only
/// for human eyes.
pub fn pretty(board: &Board) -> String {
    let mut out = String::new();
    for (i, pos) in (1..=81u8).zip(Position::ALL) {
        out.push(board.digit_at(pos).map_or('.', Digit::to_char));
        if i % 9 == 0 {
            out.push('\n');
        } else if i % 3 == 0 {
            out.push_str(" │ ");
        } else {
            out.push(' ');
        }
        if i < 81 && i % 27 == 0 {
            out.push_str(BAND_SEPARATOR);
            out.push('\n');
        }
    }
    out.pop();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_shape() {
        let rendered = pretty(&Board::new());
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[3], BAND_SEPARATOR);
        assert_eq!(lines[7], BAND_SEPARATOR);
        for (i, line) in lines.iter().enumerate() {
            if i != 3 && i != 7 {
                assert_eq!(*line, ". . . │ . . . │ . . .");
            }
        }
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_digits_appear_in_place() {
        let mut board = Board::new();
        board.load("123456789");
        let rendered = pretty(&board);

        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "1 2 3 │ 4 5 6 │ 7 8 9");
    }

    #[test]
    fn test_row_major_layout() {
        let mut board = Board::new();
        // A digit at index 9 lands at the start of the second grid row.
        board.load(".........7");
        let rendered = pretty(&board);

        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], ". . . │ . . . │ . . .");
        assert_eq!(lines[1], "7 . . │ . . . │ . . .");
    }
}
