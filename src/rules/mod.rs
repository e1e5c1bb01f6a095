//! Game rules for Pente
//!
//! This module implements the rule set:
//! - Capture rules (pair capture)
//! - Win conditions (5-in-a-row, capture win)

pub mod capture;
pub mod win;

// Re-exports for convenient access
pub use capture::{execute_captures, get_captured_positions};
pub use win::has_five_at;

/// Direction vectors shared by capture and line checking:
/// R, RD, D, LD, L, LU, U, RU
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];
