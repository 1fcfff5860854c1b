//! Backtracking search for rudoku boards.
//!
//! The solver completes a [`rudoku_core::Board`] in place with exhaustive
//! depth-first search, or reports that no completion exists. See
//! [`Backtracker`] for the search behavior and its guarantees.

pub use self::backtrack::{Backtracker, SearchStats, solve};

mod backtrack;
