//! The Pente game engine
//!
//! A [`Game`] owns the board, turn order, capture counters and terminal
//! state, and is mutated through a single entry point: stone placement.
//! Rendering and move-history export are pure reads.
//!
//! # Capture accounting
//!
//! The two counters are named from the perspective the mover holds at the
//! moment of capture: every capture awarded after a placement increments
//! `opponent_captures`, and because the current/opponent roles swap after
//! every move, that counter ends up belonging to whichever player is about to
//! move next. `current_player_captures` is exposed but never incremented by
//! any engine path. This arithmetic is preserved deliberately; callers that
//! want per-color totals must track them from the move stream.

use thiserror::Error;

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::rules;

/// Captured stones needed to win (5 pairs)
pub const CAPTURE_WIN_THRESHOLD: u32 = 10;

/// Rejected placement, as reported by [`Game::try_place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("coordinate ({x}, {y}) is outside the {BOARD_SIZE}x{BOARD_SIZE} board")]
    OutOfBounds { x: usize, y: usize },
    #[error("cell ({x}, {y}) is already occupied")]
    Occupied { x: usize, y: usize },
    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Game engine state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Stone,
    opponent: Stone,
    winner: Option<Stone>,
    game_over: bool,
    current_player_captures: u32,
    opponent_captures: u32,
    record_moves: bool,
    moves: Vec<Pos>,
}

impl Game {
    /// New game without move recording. Black (`X`) moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Stone::Black,
            opponent: Stone::White,
            winner: None,
            game_over: false,
            current_player_captures: 0,
            opponent_captures: 0,
            record_moves: false,
            moves: Vec::new(),
        }
    }

    /// New game that records every successful placement for later export.
    pub fn with_move_recording() -> Self {
        Self {
            record_moves: true,
            ..Self::new()
        }
    }

    /// Attempt to place the mover's stone at `(x, y)`.
    ///
    /// Returns `false` without any state change when the cell is occupied;
    /// otherwise places the stone, resolves captures, checks both win
    /// conditions, swaps the turn and returns `true`.
    ///
    /// Callers must pre-validate coordinates and the game-over flag; use
    /// [`Game::try_place`] for the checked variant.
    pub fn place_stone(&mut self, x: usize, y: usize) -> bool {
        let pos = Pos::new(x as u8, y as u8);
        if !self.board.is_empty(pos) {
            return false;
        }

        let mover = self.current_player;
        self.board.place_stone(pos, mover);

        let captured = rules::execute_captures(&mut self.board, pos, mover);
        self.opponent_captures += captured.len() as u32;

        self.check_for_win(pos, mover);

        std::mem::swap(&mut self.current_player, &mut self.opponent);

        if self.record_moves {
            self.moves.push(pos);
        }
        true
    }

    /// Checked placement with defined errors for the conditions the minimal
    /// contract leaves to callers.
    pub fn try_place(&mut self, x: usize, y: usize) -> Result<(), PlaceError> {
        if self.game_over {
            return Err(PlaceError::GameAlreadyOver);
        }
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(PlaceError::OutOfBounds { x, y });
        }
        if self.place_stone(x, y) {
            Ok(())
        } else {
            Err(PlaceError::Occupied { x, y })
        }
    }

    /// Win check, run after captures are resolved and before the turn swap.
    fn check_for_win(&mut self, pos: Pos, mover: Stone) {
        if rules::has_five_at(&self.board, pos, mover) {
            self.winner = Some(mover);
            self.game_over = true;
        } else if self.opponent_captures >= CAPTURE_WIN_THRESHOLD {
            self.winner = Some(mover);
            self.game_over = true;
        } else if self.current_player_captures >= CAPTURE_WIN_THRESHOLD {
            self.winner = Some(self.opponent);
            self.game_over = true;
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is now.
    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    /// The player who just moved.
    #[inline]
    pub fn opponent(&self) -> Stone {
        self.opponent
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// See the module docs for what these counters actually track.
    #[inline]
    pub fn current_player_captures(&self) -> u32 {
        self.current_player_captures
    }

    #[inline]
    pub fn opponent_captures(&self) -> u32 {
        self.opponent_captures
    }

    /// Recorded placements, in order. Empty unless recording was enabled.
    #[inline]
    pub fn moves(&self) -> &[Pos] {
        &self.moves
    }

    /// Text snapshot of the board with row/column indices and the capture
    /// summary line. Pure read.
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header row of 2-wide column indices
        let header: Vec<String> = (0..BOARD_SIZE).map(|i| format!("{i:2}")).collect();
        out.push_str("   ");
        out.push_str(&header.join(" "));
        out.push('\n');

        let border = format!(" +{}+", "-".repeat(BOARD_SIZE * 3 - 1));
        out.push_str(&border);
        out.push('\n');

        for row in 0..BOARD_SIZE {
            out.push_str(&format!("{row:2}|"));
            for col in 0..BOARD_SIZE {
                let cell = self.board.get(Pos::new(row as u8, col as u8));
                out.push_str(&format!(" {} ", cell.symbol()));
            }
            out.push_str("|\n");
        }

        out.push_str(&border);
        out.push('\n');
        out.push_str(&format!(
            "Captures: {}={}, {}={}",
            self.current_player, self.current_player_captures, self.opponent, self.opponent_captures
        ));
        out
    }

    /// Serialize the recorded move history as `"x1,y1;x2,y2;...;xn,yn"`.
    /// Pure read.
    pub fn export_moves(&self) -> String {
        let pairs: Vec<String> = self
            .moves
            .iter()
            .map(|p| format!("{},{}", p.row, p.col))
            .collect();
        pairs.join(";")
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
