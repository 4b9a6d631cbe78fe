//! Backtracking search over the blank cells with combination pruning.

use kakuro_core::{DigitSet, Grid};

use crate::{
    combinations::CombinationTable,
    groups::{Group, GroupId, GroupTable},
};

/// The outcome of a solve.
///
/// The search is exhaustive, so `count` reflects every satisfying
/// assignment, not just whether one exists; `first` keeps the one found
/// first so a unique solution can be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solutions {
    /// Total number of satisfying assignments.
    pub count: usize,
    /// Digits of the first solution in row-major blank-cell order, if any
    /// solution exists.
    pub first: Option<Vec<u8>>,
}

/// A kakuro solver.
///
/// Owns the [`CombinationTable`] so repeated solves share one
/// precomputation.
///
/// # Examples
///
/// ```
/// use kakuro_core::Grid;
/// use kakuro_solver::Solver;
///
/// let solver = Solver::new();
///
/// let unique: Grid = "X    1\\X  2\\X\nX\\3  .    .".parse()?;
/// assert_eq!(solver.solve(&unique).first, Some(vec![1, 2]));
///
/// let impossible: Grid = "X     10\\X\nX\\10  .".parse()?;
/// assert_eq!(solver.solve(&impossible).count, 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    table: CombinationTable,
}

impl Solver {
    /// Creates a solver, building its combination table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: CombinationTable::new(),
        }
    }

    /// Counts the satisfying digit assignments of a structurally valid
    /// grid and keeps the first one found.
    ///
    /// The blank cells are assigned in row-major order, digits tried in
    /// ascending order, so the result is deterministic for a given grid.
    ///
    /// # Panics
    ///
    /// Panics if the grid violates the structural contract checked by
    /// [`Grid::validate`] (a blank outside a run, or a run longer than 9
    /// cells).
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> Solutions {
        let mut groups = GroupTable::build(grid);
        for group in groups.groups() {
            assert!(
                (1..=9).contains(&group.cell_count),
                "run of {} cells cannot hold distinct digits; validate the grid first",
                group.cell_count
            );
            assert!(
                (1..=45).contains(&group.target_sum),
                "run sum {} outside 1-45",
                group.target_sum
            );
        }

        // Cache each blank cell's two runs and their combination slices;
        // the search touches nothing else.
        let cells: Vec<SearchCell<'_>> = (0..grid.cells().len())
            .filter_map(|index| groups.cell_groups(index))
            .map(|m| {
                let down = &groups.groups()[m.down];
                let right = &groups.groups()[m.right];
                SearchCell {
                    down: m.down,
                    right: m.right,
                    down_combos: self.table.combinations(down.target_sum, down.cell_count),
                    right_combos: self.table.combinations(right.target_sum, right.cell_count),
                }
            })
            .collect();

        let mut search = Search {
            values: vec![0; cells.len()],
            cells,
            groups: groups.groups_mut(),
            count: 0,
            first: None,
        };
        search.run(0);

        Solutions {
            count: search.count,
            first: search.first,
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// One blank cell prepared for the search.
#[derive(Clone, Copy)]
struct SearchCell<'a> {
    down: GroupId,
    right: GroupId,
    down_combos: &'a [DigitSet],
    right_combos: &'a [DigitSet],
}

struct Search<'a> {
    cells: Vec<SearchCell<'a>>,
    groups: &'a mut [Group],
    values: Vec<u8>,
    count: usize,
    first: Option<Vec<u8>>,
}

impl Search<'_> {
    /// Assigns the cell at `offset` and recurses over the rest.
    fn run(&mut self, offset: usize) {
        if offset == self.cells.len() {
            if self.count == 0 {
                // the values buffer is reused by later branches, keep a copy
                self.first = Some(self.values.clone());
            }
            self.count += 1;
            return;
        }

        let cell = self.cells[offset];
        let candidates = available(&self.groups[cell.down], cell.down_combos)
            & available(&self.groups[cell.right], cell.right_combos);
        if candidates.is_empty() {
            return;
        }

        for digit in candidates {
            self.values[offset] = digit;
            self.groups[cell.down].present.insert(digit);
            self.groups[cell.right].present.insert(digit);
            self.run(offset + 1);
            self.groups[cell.down].present.remove(digit);
            self.groups[cell.right].present.remove(digit);
        }
    }
}

/// Digits a run can still accept: the union of the full combinations that
/// are consistent with the digits already placed, minus those digits.
///
/// If no full combination remains consistent, the result is empty and the
/// subtree is dead no matter what later cells would try.
fn available(group: &Group, combos: &[DigitSet]) -> DigitSet {
    let mut union = DigitSet::EMPTY;
    for &combo in combos {
        if combo.is_superset_of(group.present) {
            union |= combo;
        }
    }
    union.difference(group.present)
}
