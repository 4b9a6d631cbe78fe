//! Core data structures for kakuro puzzles.
//!
//! This crate provides the puzzle model shared by the solver and the command
//! line application:
//!
//! - [`digit_set`]: a bitset over the digits 1-9, the currency of every sum
//!   and uniqueness computation
//! - [`cell`]: the three kinds of grid cell (sum header, blank, filled digit)
//! - [`grid`]: the rectangular puzzle grid, its text format, structural
//!   validation, and rendering
//! - [`error`]: parse and validation error types
//!
//! # Examples
//!
//! ```
//! use kakuro_core::Grid;
//!
//! let grid: Grid = "X    3\\X  7\\X\nX\\4  .    .\nX\\6  .    .".parse()?;
//! grid.validate()?;
//!
//! assert_eq!(grid.width(), 3);
//! assert_eq!(grid.height(), 3);
//! assert_eq!(grid.blank_count(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod digit_set;
pub mod error;
pub mod grid;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    digit_set::DigitSet,
    error::{ParseError, StructureError},
    grid::Grid,
};
