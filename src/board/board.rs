//! Flat-array board grid

use super::{Pos, Stone, TOTAL_CELLS};

/// The 19x19 grid of cells.
///
/// Stored as a flat array indexed by [`Pos::to_index`]. The grid carries no
/// game state beyond cell contents; turn order and capture counters live on
/// [`crate::game::Game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.to_index()] == Stone::Empty
    }

    /// Place a stone (no capture processing; see `Game::place_stone` for moves)
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.to_index()] = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = Stone::Empty;
    }

    /// Total stones on board
    pub fn stone_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c != Stone::Empty).count() as u32
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == Stone::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
