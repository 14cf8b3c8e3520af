//! Position text to `GameState` parser.
//!
//! The text has three space-separated fields: seven `/`-separated rows from
//! rank 7 down to rank 1 (digits are runs of empty tiles), the side to move
//! (`w` or `b`) and the turn number.

use crate::errors::{CongoError, CongoResult};
use crate::game_state::congo_types::*;

pub fn parse_fen(fen: &str) -> CongoResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let turn_part = parts.next().ok_or_else(|| invalid("missing turn number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.turn_number = turn_part
        .parse::<u32>()
        .map_err(|_| invalid(format!("bad turn number '{turn_part}'")))?;

    Ok(game_state)
}

fn invalid(message: impl Into<String>) -> CongoError {
    CongoError::InvalidPosition(message.into())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> CongoResult<()> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != BOARD_WIDTH as usize {
        return Err(invalid(format!("expected 7 rows, found {}", rows.len())));
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let mut file = 0u8;

        for ch in row.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=u32::from(BOARD_WIDTH)).contains(&empty_count) {
                    return Err(invalid(format!("bad empty run '{ch}'")));
                }
                file += empty_count as u8;
                if file > BOARD_WIDTH {
                    return Err(invalid(format!("row '{row}' is wider than 7")));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("unknown piece letter '{ch}'")))?;
            if file >= BOARD_WIDTH {
                return Err(invalid(format!("row '{row}' is wider than 7")));
            }

            game_state.put_piece(row_idx as Square * BOARD_WIDTH + file, piece);
            file += 1;
        }

        if file != BOARD_WIDTH {
            return Err(invalid(format!("row '{row}' does not cover 7 files")));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> CongoResult<Color> {
    let mut chars = side_part.chars();
    match (chars.next().and_then(Color::from_char), chars.next()) {
        (Some(color), None) => Ok(color),
        _ => Err(invalid(format!("bad side to move '{side_part}'"))),
    }
}
