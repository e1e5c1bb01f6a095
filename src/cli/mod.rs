//! Command-line drivers around the game engine
//!
//! The engine knows nothing about these collaborators; they validate input,
//! call [`crate::game::Game::try_place`] and read state back for display and
//! persistence.

pub mod interactive;
pub mod replay;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use thiserror::Error;

use crate::board::BOARD_SIZE;
use crate::game::Game;

/// Rejected token in a recorded move list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("move `{0}` is not of the form `x,y`")]
    Malformed(String),
    #[error("move `{0}` has a coordinate outside the {BOARD_SIZE}x{BOARD_SIZE} board")]
    OutOfRange(String),
}

/// Parse a single `x,y` token.
pub fn parse_move(token: &str) -> Result<(usize, usize), ParseMoveError> {
    let token = token.trim();
    let malformed = || ParseMoveError::Malformed(token.to_string());

    let (x, y) = token.split_once(',').ok_or_else(malformed)?;
    let x: usize = x.trim().parse().map_err(|_| malformed())?;
    let y: usize = y.trim().parse().map_err(|_| malformed())?;

    if x >= BOARD_SIZE || y >= BOARD_SIZE {
        return Err(ParseMoveError::OutOfRange(token.to_string()));
    }
    Ok((x, y))
}

/// Parse a semicolon-separated move list, `"x1,y1;x2,y2;...;xn,yn"`.
pub fn parse_moves(list: &str) -> Result<Vec<(usize, usize)>, ParseMoveError> {
    let list = list.trim();
    if list.is_empty() {
        return Ok(Vec::new());
    }
    list.split(';').map(parse_move).collect()
}

/// Write the recorded move history to `moves-<timestamp>.txt` in the working
/// directory and return the path.
pub fn save_moves_to_file(game: &Game) -> Result<PathBuf> {
    let filename = format!("moves-{}.txt", Local::now().format("%Y-%m-%d_%H-%M-%S"));
    let path = PathBuf::from(filename);

    fs::write(&path, game.export_moves())
        .with_context(|| format!("failed to write move history to {}", path.display()))?;
    log::info!("saved {} moves to {}", game.moves().len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("3,7"), Ok((3, 7)));
        assert_eq!(parse_move(" 18 , 0 "), Ok((18, 0)));
    }

    #[test]
    fn test_parse_move_malformed() {
        for bad in ["", "3", "3;7", "a,b", "3,7,9", "-1,0", "3,"] {
            assert_eq!(parse_move(bad), Err(ParseMoveError::Malformed(bad.trim().to_string())));
        }
    }

    #[test]
    fn test_parse_move_out_of_range() {
        assert_eq!(
            parse_move("19,0"),
            Err(ParseMoveError::OutOfRange("19,0".to_string()))
        );
        assert_eq!(
            parse_move("0,99"),
            Err(ParseMoveError::OutOfRange("0,99".to_string()))
        );
    }

    #[test]
    fn test_parse_moves_list() {
        assert_eq!(
            parse_moves("0,0;18,18;9,4"),
            Ok(vec![(0, 0), (18, 18), (9, 4)])
        );
        assert_eq!(parse_moves(""), Ok(Vec::new()));
        assert_eq!(parse_moves("  \n"), Ok(Vec::new()));
    }

    #[test]
    fn test_parse_moves_reports_offending_token() {
        assert_eq!(
            parse_moves("0,0;oops;1,1"),
            Err(ParseMoveError::Malformed("oops".to_string()))
        );
    }

    #[test]
    fn test_engine_export_parses_back() {
        let mut game = Game::with_move_recording();
        for (x, y) in [(0, 0), (1, 0), (9, 9)] {
            assert!(game.place_stone(x, y));
        }
        assert_eq!(
            parse_moves(&game.export_moves()),
            Ok(vec![(0, 0), (1, 0), (9, 9)])
        );
    }
}
