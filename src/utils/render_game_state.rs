//! Plain-text board renderer.
//!
//! Used by the command loop's `print` command and for debugging. Pieces use
//! their position-text letters; empty river tiles are drawn as `~`.

use crate::game_state::congo_rules::is_river_square;
use crate::game_state::congo_types::*;

/// Render the board with rank 7 at the top and the side to move underneath.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g\n");

    for row in 0..BOARD_WIDTH {
        let rank = BOARD_WIDTH - row;
        out.push(char::from(b'0' + rank));
        out.push(' ');

        for file in 0..BOARD_WIDTH {
            let sq = row * BOARD_WIDTH + file;
            match game_state.piece_at(sq) {
                Some(piece) => out.push(piece.to_fen_char()),
                None if is_river_square(sq) => out.push('~'),
                None => out.push('.'),
            }

            if file + 1 < BOARD_WIDTH {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g\n");
    let side = match game_state.side_to_move {
        Color::White => "white",
        Color::Black => "black",
    };
    out.push_str(&format!("{side} to move, turn {}", game_state.turn_number));

    out
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::congo_types::GameState;

    #[test]
    fn renders_the_start_position() {
        let text = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g");
        assert_eq!(lines[1], "7 . . e l e . z 7");
        assert_eq!(lines[4], "4 ~ ~ ~ ~ ~ ~ ~ 4");
        assert_eq!(lines[7], "1 . . E L E . Z 1");
        assert_eq!(lines[9], "white to move, turn 0");
    }
}
