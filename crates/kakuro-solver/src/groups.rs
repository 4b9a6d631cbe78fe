//! Derivation of the runs ("groups") a grid's blank cells belong to.
//!
//! Every blank cell sits in exactly one horizontal run and one vertical
//! run, each governed by the nearest preceding header with a nonzero sum in
//! that direction. Runs are derived by two independent sweeps, rows then
//! columns, and referenced by index so the per-cell membership table stays
//! valid while the group list grows.

use kakuro_core::{Cell, DigitSet, Grid};

/// Index of a [`Group`] within its [`GroupTable`].
pub type GroupId = usize;

/// A maximal run of blank cells governed by one header sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// The sum the run's digits must reach, 1-45.
    pub target_sum: u8,
    /// Number of blank cells in the run, 1-9 in a valid grid.
    pub cell_count: usize,
    /// Digits currently placed in the run. Empty outside a search; the
    /// search inserts a digit before descending and removes it after
    /// returning, so the set always reflects the ancestors of the current
    /// search node.
    pub present: DigitSet,
}

/// The run memberships of one blank cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGroups {
    /// The vertical run containing the cell.
    pub down: GroupId,
    /// The horizontal run containing the cell.
    pub right: GroupId,
}

/// All runs of a grid plus the blank-cell membership table.
///
/// # Examples
///
/// ```
/// use kakuro_core::Grid;
/// use kakuro_solver::GroupTable;
///
/// let grid: Grid = "X    3\\X  7\\X\nX\\4  .    .\nX\\6  .    .".parse()?;
/// let table = GroupTable::build(&grid);
///
/// // two row runs and two column runs
/// assert_eq!(table.groups().len(), 4);
/// let sums: Vec<u8> = table.groups().iter().map(|g| g.target_sum).collect();
/// assert_eq!(sums, vec![4, 6, 3, 7]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct GroupTable {
    groups: Vec<Group>,
    memberships: Vec<Option<CellGroups>>,
}

impl GroupTable {
    /// Derives the run structure of a grid.
    ///
    /// Rows are swept left to right, then columns top to bottom. A header
    /// with a nonzero sum in the sweep direction opens a new run; a header
    /// without one closes any open run; a blank cell joins the open run.
    ///
    /// # Panics
    ///
    /// Panics if a blank cell has no open run in either direction. Such a
    /// grid is structurally invalid and is rejected by
    /// [`Grid::validate`]; run that first.
    #[must_use]
    pub fn build(grid: &Grid) -> Self {
        let mut groups = Vec::new();
        let mut down = vec![None; grid.cells().len()];
        let mut right = vec![None; grid.cells().len()];

        for y in 0..grid.height() {
            let mut current = None;
            for x in 0..grid.width() {
                sweep_cell(
                    grid.get(x, y),
                    false,
                    &mut groups,
                    &mut current,
                    &mut right[y * grid.width() + x],
                );
            }
        }
        for x in 0..grid.width() {
            let mut current = None;
            for y in 0..grid.height() {
                sweep_cell(
                    grid.get(x, y),
                    true,
                    &mut groups,
                    &mut current,
                    &mut down[y * grid.width() + x],
                );
            }
        }

        let memberships = grid
            .cells()
            .iter()
            .zip(down.iter().zip(right.iter()))
            .map(|(cell, (&down, &right))| {
                cell.is_blank().then(|| CellGroups {
                    down: down.expect("blank cell visited by the column sweep"),
                    right: right.expect("blank cell visited by the row sweep"),
                })
            })
            .collect();

        Self { groups, memberships }
    }

    /// Returns all derived runs, row runs first.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub(crate) fn groups_mut(&mut self) -> &mut [Group] {
        &mut self.groups
    }

    /// Returns the memberships of the cell at row-major index `cell`, or
    /// `None` for headers and filled cells.
    #[must_use]
    pub fn cell_groups(&self, cell: usize) -> Option<CellGroups> {
        self.memberships[cell]
    }
}

/// Advances one sweep over `cell`, reading a header's `down` sum during
/// the column sweep and its `right` sum during the row sweep.
fn sweep_cell(
    cell: &Cell,
    is_down: bool,
    groups: &mut Vec<Group>,
    current: &mut Option<GroupId>,
    membership: &mut Option<GroupId>,
) {
    match cell {
        Cell::Header { down, right } => {
            let sum = if is_down { *down } else { *right };
            *current = (sum > 0).then(|| {
                groups.push(Group {
                    target_sum: sum,
                    cell_count: 0,
                    present: DigitSet::EMPTY,
                });
                groups.len() - 1
            });
        }
        Cell::Blank => {
            let id = current.expect("blank cell with no run header; validate the grid first");
            groups[id].cell_count += 1;
            *membership = Some(id);
        }
        Cell::Digit(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(input: &str) -> Grid {
        input.parse().expect("test grid parses")
    }

    #[test]
    fn test_small_grid_groups() {
        let grid = grid("X    3\\X  7\\X\nX\\4  .    .\nX\\6  .    .");
        let table = GroupTable::build(&grid);

        let groups = table.groups();
        assert_eq!(groups.len(), 4);
        // row sweep emits the two row runs first
        assert_eq!(groups[0].target_sum, 4);
        assert_eq!(groups[1].target_sum, 6);
        assert_eq!(groups[2].target_sum, 3);
        assert_eq!(groups[3].target_sum, 7);
        for group in groups {
            assert_eq!(group.cell_count, 2);
            assert!(group.present.is_empty());
        }
    }

    #[test]
    fn test_small_grid_memberships() {
        let grid = grid("X    3\\X  7\\X\nX\\4  .    .\nX\\6  .    .");
        let table = GroupTable::build(&grid);

        // headers have no memberships
        assert_eq!(table.cell_groups(0), None);
        assert_eq!(table.cell_groups(3), None);

        // blank at (1, 1): row run 4, column run 3
        let m = table.cell_groups(4).unwrap();
        assert_eq!(table.groups()[m.right].target_sum, 4);
        assert_eq!(table.groups()[m.down].target_sum, 3);

        // blank at (2, 2): row run 6, column run 7
        let m = table.cell_groups(8).unwrap();
        assert_eq!(table.groups()[m.right].target_sum, 6);
        assert_eq!(table.groups()[m.down].target_sum, 7);
    }

    #[test]
    fn test_split_row_derives_two_runs() {
        // the second header in the row ends the first run and opens another
        let grid = grid("X    3\\X  X    4\\X\nX\\3  .    X\\4  .");
        let table = GroupTable::build(&grid);

        let sums: Vec<u8> = table.groups().iter().map(|g| g.target_sum).collect();
        assert_eq!(sums, vec![3, 4, 3, 4]);
        assert!(table.groups().iter().all(|g| g.cell_count == 1));

        let left = table.cell_groups(5).unwrap();
        let right = table.cell_groups(7).unwrap();
        assert_ne!(left.right, right.right);
        assert_ne!(left.down, right.down);
    }

    #[test]
    #[should_panic(expected = "no run header")]
    fn test_blank_without_header_panics() {
        let grid = grid("X .");
        let _ = GroupTable::build(&grid);
    }

    #[test]
    #[should_panic(expected = "no run header")]
    fn test_blank_after_separator_panics() {
        let grid = grid("X\\3 . X\\X .");
        let _ = GroupTable::build(&grid);
    }
}
