//! Core data structures for the rudoku solver.
//!
//! This crate provides the board model that the backtracking search operates
//! on. It is organized around three layers:
//!
//! 1. **Value types**
//!    - [`digit`]: Type-safe representation of sudoku digits 1-9, including
//!      the seed-character mapping
//!    - [`position`]: Board coordinates with row-major indexing
//!
//! 2. **Constraint tracking**
//!    - [`digit_set`]: [`DigitSet`], a bitmask recording which digits are
//!      still available within one row, column, or box
//!
//! 3. **The board**
//!    - [`board`]: [`Board`], which owns the 81 cells together with the
//!      per-area digit sets and keeps both in lockstep under mutation
//!
//! # Examples
//!
//! ```
//! use rudoku_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.load("53..7....");
//!
//! let pos = Position::new(2, 0);
//! assert_eq!(board.digit_at(pos), None);
//! assert!(!board.allowed(pos, Digit::D5)); // 5 already given in row 0
//! assert!(board.allowed(pos, Digit::D1));
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod position;

pub use self::{
    board::{Board, PlaceError},
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
};
