//! Capture rules (Pente pair capture)
//!
//! Capture pattern: X-O-O-X where X is the capturing player's stone
//! and O is the opponent's stone. Only exactly 2 stones can be captured.

use crate::board::{Board, Pos, Stone};

use super::DIRECTIONS;

/// Find positions that would be captured if stone is placed at pos.
///
/// Capture pattern: X-O-O-X where X is the placed stone (at pos) and
/// the existing stone at distance 3.
///
/// # Returns
/// Vector of positions that would be captured (always even, pairs of stones)
pub fn get_captured_positions(board: &Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    let mut captured = Vec::new();
    let opponent = stone.opponent();

    for &(dr, dc) in &DIRECTIONS {
        // Pattern: placed_stone(pos) - opp(+1) - opp(+2) - our_stone(+3)
        let r1 = pos.row as i32 + dr;
        let c1 = pos.col as i32 + dc;
        let r2 = pos.row as i32 + dr * 2;
        let c2 = pos.col as i32 + dc * 2;
        let r3 = pos.row as i32 + dr * 3;
        let c3 = pos.col as i32 + dc * 3;

        // Check bounds for the farthest position
        if !Pos::is_valid(r3, c3) {
            continue;
        }

        let pos1 = Pos::new(r1 as u8, c1 as u8);
        let pos2 = Pos::new(r2 as u8, c2 as u8);
        let pos3 = Pos::new(r3 as u8, c3 as u8);

        if board.get(pos1) == opponent && board.get(pos2) == opponent && board.get(pos3) == stone {
            captured.push(pos1);
            captured.push(pos2);
        }
    }

    captured
}

/// Execute captures and return captured positions.
///
/// Removes every captured stone from the board. Capture counting is done by
/// the caller ([`crate::game::Game`]), which owns the counters.
pub fn execute_captures(board: &mut Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    let captured = get_captured_positions(board, pos, stone);

    for &cap_pos in &captured {
        board.remove_stone(cap_pos);
    }

    captured
}
