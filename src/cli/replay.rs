//! Batch replay of a recorded move list

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::game::Game;

use super::parse_move;

/// Replay a `"x1,y1;x2,y2;..."` move list against a fresh game.
///
/// Stops at the first malformed token or rejected placement, naming the
/// offending move. With `show`, the board is rendered after every move with a
/// fixed `delay_ms` pause.
pub fn run(list: &str, show: bool, delay_ms: u64) -> Result<Game> {
    let mut game = Game::new();
    let list = list.trim();
    if list.is_empty() {
        log::warn!("empty move list, nothing to replay");
        return Ok(game);
    }

    for (idx, token) in list.split(';').enumerate() {
        let (x, y) = parse_move(token)
            .with_context(|| format!("replay aborted at move {}", idx + 1))?;

        game.try_place(x, y)
            .with_context(|| format!("replay aborted at move {} (`{}`)", idx + 1, token.trim()))?;
        log::debug!("move {}: {} at ({x}, {y})", idx + 1, game.opponent());

        if show {
            println!("{}\n", game.render());
            thread::sleep(Duration::from_millis(delay_ms));
        }
    }

    println!("{}", game.render());
    match game.winner() {
        Some(winner) => println!("{winner} wins!"),
        None => println!("No winner after {} moves.", list.split(';').count()),
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_replay_capture_game() {
        let game = run("0,0;1,0;0,1;2,0;3,0", false, 0).unwrap();
        assert_eq!(game.opponent_captures(), 2);
        assert!(!game.is_over());
    }

    #[test]
    fn test_replay_five_in_a_row() {
        let game = run("0,0;1,0;0,1;2,0;0,2;3,0;0,3;4,0;0,4", false, 0).unwrap();
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_replay_aborts_on_malformed_token() {
        let err = run("0,0;nope;1,1", false, 0).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("move 2"), "unexpected error: {msg}");
        assert!(msg.contains("nope"), "unexpected error: {msg}");
    }

    #[test]
    fn test_replay_aborts_on_occupied_cell() {
        let err = run("9,9;9,9", false, 0).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("move 2"), "unexpected error: {msg}");
        assert!(msg.contains("occupied"), "unexpected error: {msg}");
    }

    #[test]
    fn test_replay_aborts_after_game_over() {
        // The five-in-a-row game with one extra move appended
        let err = run("0,0;1,0;0,1;2,0;0,2;3,0;0,3;4,0;0,4;10,10", false, 0).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("move 10"), "unexpected error: {msg}");
        assert!(msg.contains("already over"), "unexpected error: {msg}");
    }

    #[test]
    fn test_replay_empty_list() {
        let game = run("  ", false, 0).unwrap();
        assert!(game.board().is_board_empty());
    }
}
