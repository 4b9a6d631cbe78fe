//! Kakuro solving: run derivation, sum combinations, backtracking search.
//!
//! The solver decides how many digit assignments satisfy a kakuro grid and
//! keeps the first one it finds:
//!
//! - [`combinations`]: for every (target sum, run length) pair, the digit
//!   sets achieving it, precomputed once
//! - [`groups`]: derivation of the horizontal and vertical runs a grid's
//!   blank cells belong to
//! - [`search`]: depth-first assignment over the blank cells, pruned by
//!   intersecting what each cell's two runs can still accept
//!
//! # Examples
//!
//! ```
//! use kakuro_core::Grid;
//! use kakuro_solver::Solver;
//!
//! let grid: Grid = "X    3\\X  7\\X\nX\\4  .    .\nX\\6  .    .".parse()?;
//! grid.validate()?;
//!
//! let solutions = Solver::new().solve(&grid);
//! assert_eq!(solutions.count, 1);
//! assert_eq!(solutions.first, Some(vec![1, 3, 2, 4]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod combinations;
pub mod groups;
pub mod search;

// Re-export commonly used types
pub use self::{
    combinations::CombinationTable,
    groups::{CellGroups, Group, GroupId, GroupTable},
    search::{Solutions, Solver},
};
