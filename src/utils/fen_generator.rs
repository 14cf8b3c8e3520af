//! Position text encoding: board rows, side to move and turn counter.

use crate::game_state::congo_types::*;

/// Position text for `game_state`; the inverse of `parse_fen`.
pub fn generate_fen(game_state: &GameState) -> String {
    format!(
        "{} {} {}",
        generate_board_field(game_state),
        game_state.side_to_move.to_char(),
        game_state.turn_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in 0..BOARD_WIDTH {
        let mut empty_count = 0u8;

        for file in 0..BOARD_WIDTH {
            let sq = row * BOARD_WIDTH + file;
            if let Some(piece) = game_state.piece_at(sq) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.to_fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < BOARD_WIDTH {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::congo_rules::STARTING_POSITION_FEN;
    use crate::game_state::congo_types::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn start_position_text() {
        assert_eq!(generate_fen(&GameState::new_game()), STARTING_POSITION_FEN);
        assert_eq!(generate_fen(&GameState::new_empty()), "7/7/7/7/7/7/7 w 0");
    }

    #[test]
    fn parse_then_generate_is_identity() {
        for fen in [
            "2ele1z/pp1pppp/2p4/7/2P4/PP1PPPP/2ELE1Z w 1",
            "3l3/7/3P3/3p3/7/7/3L3 b 12",
            "z1e1l1e/7/P5p/7/p5P/7/E1L1E1Z w 0",
        ] {
            let game = parse_fen(fen).expect("FEN should parse");
            assert_eq!(generate_fen(&game), fen);
        }
    }
}
