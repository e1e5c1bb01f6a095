//! Pente rules engine
//!
//! A rules engine for Pente on the standard 19x19 board:
//! - 5-in-a-row to win (overlines allowed)
//! - Capture win: 10 captured stones (5 pairs)
//! - Pair capture rule: X-O-O-X pattern captures the O-O pair
//!
//! # Architecture
//!
//! The crate is organized into a small set of modules:
//! - [`board`]: Board representation (flat 19x19 grid)
//! - [`rules`]: Game rules (pair capture, five-in-a-row)
//! - [`game`]: The game engine: turn order, capture counters, win detection
//! - [`cli`]: Interactive and batch-replay drivers around the engine
//!
//! # Quick Start
//!
//! ```
//! use pente::{Game, Stone};
//!
//! let mut game = Game::new();
//!
//! // Black (X) opens in the center
//! assert!(game.place_stone(9, 9));
//! assert_eq!(game.current_player(), Stone::White);
//!
//! // The same cell cannot be taken twice
//! assert!(!game.place_stone(9, 9));
//! println!("{}", game.render());
//! ```

pub mod board;
pub mod cli;
pub mod game;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use game::{Game, PlaceError, CAPTURE_WIN_THRESHOLD};
