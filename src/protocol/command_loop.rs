//! Line-based command loop.
//!
//! Keeps the current position, answers `go` requests with an iterative
//! deepening search and applies the opponent's moves. Commands:
//!
//! - `newgame`: start over; the following line carries the position text,
//!   with or without a leading `position`.
//! - `position <text>`: replace the current position.
//! - `go <seconds>`: search for `seconds` minus the safety margin, play the
//!   move and print it.
//! - `moves <move>`: apply the opponent's move.
//! - `print`: show the board.
//! - `quit`: leave the loop.
//!
//! The loop ends on its own once the game is decided.

use std::io::{self, BufRead, Write};

use crate::errors::{CongoError, CongoResult};
use crate::game_state::congo_rules::GameStatus;
use crate::game_state::congo_types::*;
use crate::search::iterative_deepening::SearchConfig;
use crate::search::negamax_search::{SearchMode, Searcher, SearcherOptions};
use crate::utils::long_algebraic::long_algebraic_to_move;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy)]
pub struct CommandLoopConfig {
    pub mode: SearchMode,
    pub max_depth: u32,
    /// Subtracted from the time given to `go` before searching.
    pub time_margin_ms: u64,
    pub searcher: SearcherOptions,
}

impl Default for CommandLoopConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::AlphaBetaTt,
            max_depth: 50,
            time_margin_ms: 3000,
            searcher: SearcherOptions::default(),
        }
    }
}

pub fn run_stdio_loop(config: CommandLoopConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = CommandLoop::new(config);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct CommandLoop {
    game_state: GameState,
    searcher: Searcher,
    config: CommandLoopConfig,
    awaiting_position: bool,
}

impl CommandLoop {
    pub fn new(config: CommandLoopConfig) -> Self {
        Self {
            game_state: GameState::new_game(),
            searcher: Searcher::new(config.searcher),
            config,
            awaiting_position: false,
        }
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        if std::mem::take(&mut self.awaiting_position) {
            let text = trimmed.strip_prefix("position").unwrap_or(trimmed);
            let result = self.set_position(text);
            report(result, out)?;
            return self.check_game_over(out);
        }

        let (cmd, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(cmd, rest)| (cmd, rest.trim()));

        match cmd {
            "newgame" => {
                self.game_state = GameState::new_game();
                self.searcher.clear_tt();
                self.awaiting_position = true;
                return Ok(false);
            }
            "position" => {
                let result = self.set_position(rest);
                report(result, out)?;
            }
            "go" => {
                let result = self.handle_go(rest, out);
                report(result, out)?;
            }
            "moves" => {
                let result = self.handle_moves(rest);
                report(result, out)?;
            }
            "print" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            "quit" => return Ok(true),
            _ => {
                log::warn!("unknown command: {trimmed}");
                writeln!(out, "info string unknown command: {trimmed}")?;
            }
        }

        self.check_game_over(out)
    }

    fn set_position(&mut self, text: &str) -> CongoResult<()> {
        self.game_state = GameState::from_fen(text.trim())?;
        Ok(())
    }

    fn handle_go(&mut self, args: &str, out: &mut impl Write) -> CongoResult<()> {
        let seconds: u64 = args
            .split_whitespace()
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| CongoError::EngineFailure(format!("go needs a whole number of seconds, got '{args}'")))?;
        let movetime_ms = seconds
            .saturating_mul(1000)
            .saturating_sub(self.config.time_margin_ms);

        let result = self.searcher.iterative_deepening(
            &self.game_state,
            SearchConfig {
                mode: self.config.mode,
                max_depth: self.config.max_depth,
                movetime_ms: Some(movetime_ms),
                scorer: None,
            },
        );
        let mv = result
            .best_move
            .ok_or_else(|| CongoError::EngineFailure("no move available".to_owned()))?;

        self.game_state.apply_move(mv)?;
        writeln!(out, "{mv}")?;
        Ok(())
    }

    fn handle_moves(&mut self, args: &str) -> CongoResult<()> {
        let mv = long_algebraic_to_move(args)?;
        self.game_state.apply_move(mv)
    }

    fn check_game_over(&self, out: &mut impl Write) -> io::Result<bool> {
        let status = self.game_state.game_status();
        if status == GameStatus::Ongoing {
            return Ok(false);
        }
        let text = match status.winner() {
            Some(Color::White) => "white wins",
            Some(Color::Black) => "black wins",
            None => "draw",
        };
        writeln!(out, "info string game over: {text}")?;
        Ok(true)
    }
}

/// Pass I/O failures up; turn every other error into an `info string` line.
fn report(result: CongoResult<()>, out: &mut impl Write) -> io::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(CongoError::Io(err)) => Err(err),
        Err(err) => {
            log::warn!("rejected input: {err}");
            writeln!(out, "info string {err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandLoop, CommandLoopConfig};
    use crate::game_state::congo_types::*;
    use crate::search::negamax_search::{SearchMode, SearcherOptions};

    fn session() -> CommandLoop {
        CommandLoop::new(CommandLoopConfig {
            mode: SearchMode::AlphaBeta,
            max_depth: 2,
            time_margin_ms: 0,
            searcher: SearcherOptions { zobrist_seed: Some(5) },
        })
    }

    fn run(session: &mut CommandLoop, line: &str) -> (bool, String) {
        let mut out = Vec::new();
        let quit = session
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        (quit, String::from_utf8(out).expect("output is UTF-8"))
    }

    #[test]
    fn newgame_reads_the_next_line_as_position() {
        let mut s = session();
        assert!(!run(&mut s, "newgame").0);
        assert!(!run(&mut s, "position 3l3/7/7/7/7/P6/3L3 b 4").0);
        assert_eq!(s.game_state().get_fen(), "3l3/7/7/7/7/P6/3L3 b 4");

        run(&mut s, "newgame");
        run(&mut s, "2ele1z/ppppppp/7/7/7/PPPPPPP/2ELE1Z w 0");
        assert_eq!(*s.game_state(), GameState::new_game());
    }

    #[test]
    fn moves_applies_the_opponent_move() {
        let mut s = session();
        let (quit, out) = run(&mut s, "moves c2c3");
        assert!(!quit);
        assert!(out.is_empty());
        assert_eq!(s.game_state().side_to_move, Color::Black);

        let (_, out) = run(&mut s, "moves c2c4");
        assert!(out.starts_with("info string invalid move c2c4"));
    }

    #[test]
    fn go_plays_and_prints_a_move() {
        let mut s = session();
        run(&mut s, "position 3l3/7/7/7/7/P6/3L3 w 0");
        let (quit, out) = run(&mut s, "go 60");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "d1d7");
        assert_eq!(lines[1], "info string game over: white wins");
        assert!(quit);
    }

    #[test]
    fn print_and_bad_input() {
        let mut s = session();
        let (_, out) = run(&mut s, "print");
        assert!(out.contains("7 . . e l e . z 7"));

        let (quit, out) = run(&mut s, "fly away");
        assert!(!quit);
        assert!(out.starts_with("info string unknown command"));

        let (_, out) = run(&mut s, "position 9/7 w 0");
        assert!(out.starts_with("info string invalid position"));
        assert!(run(&mut s, "quit").0);
    }
}
