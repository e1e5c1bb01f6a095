//! Interactive two-player loop on stdin/stdout

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::board::BOARD_SIZE;
use crate::game::Game;

use super::save_moves_to_file;

/// Run a hotseat game until it ends or stdin closes.
///
/// Malformed or out-of-range input is reported and the prompt repeats; the
/// engine is only called with pre-validated coordinates.
pub fn run(save_moves: bool) -> Result<()> {
    let mut game = if save_moves {
        Game::with_move_recording()
    } else {
        Game::new()
    };

    let stdin = io::stdin();
    let mut line = String::new();

    while !game.is_over() {
        println!("{}", game.render());
        print!("{} to move. Enter `x y`: ", game.current_player());
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // stdin closed mid-game
            println!();
            log::info!("input closed, game abandoned after {} stones", game.board().stone_count());
            break;
        }

        let (x, y) = match parse_turn_input(&line) {
            Ok(coords) => coords,
            Err(msg) => {
                eprintln!("{msg}");
                continue;
            }
        };

        if let Err(err) = game.try_place(x, y) {
            eprintln!("Invalid move: {err}. Try again.");
        }
    }

    if game.is_over() {
        println!("{}", game.render());
        if let Some(winner) = game.winner() {
            println!("{winner} wins!");
        }
    }

    if save_moves && !game.moves().is_empty() {
        let path = save_moves_to_file(&game)?;
        println!("Saved game to {}", path.display());
    }
    Ok(())
}

/// Validate one line of input: exactly two whitespace-separated non-negative
/// integers inside the board.
fn parse_turn_input(line: &str) -> Result<(usize, usize), String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err("Enter exactly two numbers, e.g. `9 9`.".to_string());
    }

    let parse = |t: &str| {
        t.parse::<usize>()
            .map_err(|_| format!("`{t}` is not a non-negative integer."))
    };
    let x = parse(tokens[0])?;
    let y = parse(tokens[1])?;

    if x >= BOARD_SIZE || y >= BOARD_SIZE {
        return Err(format!("Coordinates must be in 0..{BOARD_SIZE}."));
    }
    Ok((x, y))
}
