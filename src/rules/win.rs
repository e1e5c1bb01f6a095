//! Five-in-a-row detection
//!
//! The scan runs outward from the just-placed stone: for each of the eight
//! directions the run is counted as 1 (the placed stone) plus the consecutive
//! same-color stones in that single direction. Opposite directions are never
//! combined into one line, so a stone dropped into the middle of a 2+2 gap
//! does not register as five; only a stone at either end of a completed run is
//! seen. The capture-threshold win lives in [`crate::game::Game`] alongside
//! the counters it reads.

use crate::board::{Board, Pos, Stone};

use super::DIRECTIONS;

/// Check for five-or-more in a row through `pos`, one direction at a time.
pub fn has_five_at(board: &Board, pos: Pos, stone: Stone) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1;
        let mut r = pos.row as i32 + dr;
        let mut c = pos.col as i32 + dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == stone {
            count += 1;
            r += dr;
            c += dc;
        }

        if count >= 5 {
            return true;
        }
    }
    false
}
