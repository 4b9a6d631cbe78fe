//! Parse and structural validation errors.

/// An error produced while parsing the textual grid format.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// A token was not `.`, `X`, or a `D\R` header expression.
    #[display("unknown cell token `{token}` on line {line}")]
    UnknownToken {
        /// The offending token.
        token: String,
        /// 1-based input line number.
        line: usize,
    },
    /// A header declared a sum outside the satisfiable range.
    #[display("sum {sum} on line {line} is outside 1-45")]
    SumOutOfRange {
        /// The declared sum.
        sum: u32,
        /// 1-based input line number.
        line: usize,
    },
    /// A row had a different number of cells than the first row.
    #[display("line {line} has {found} cells, expected {expected}")]
    UnevenRow {
        /// 1-based input line number.
        line: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of this row.
        found: usize,
    },
    /// The input contained no cells at all.
    #[display("the grid has no cells")]
    EmptyGrid,
}

/// A structural rule violated by a parsed grid.
///
/// A grid that passes [`Grid::validate`](crate::Grid::validate) satisfies
/// the solver's input contract: every maximal run of blanks is 1-9 cells
/// long and governed by exactly one header sum per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StructureError {
    /// The grid exceeds the supported 32x32 size.
    #[display("grid is {width}x{height}, larger than 32x32")]
    TooLarge {
        /// Parsed grid width.
        width: usize,
        /// Parsed grid height.
        height: usize,
    },
    /// A run of blanks is longer than the nine distinct digits allow.
    #[display("run starting at ({x}, {y}) is {len} cells long, the maximum is 9")]
    RunTooLong {
        /// Column of the first cell of the run.
        x: usize,
        /// Row of the first cell of the run.
        y: usize,
        /// Number of blanks in the run.
        len: usize,
    },
    /// A run of blanks follows a header with no sum in its direction.
    #[display("run starting at ({x}, {y}) has no sum header")]
    RunWithoutSum {
        /// Column of the first cell of the run.
        x: usize,
        /// Row of the first cell of the run.
        y: usize,
    },
    /// A header declares a sum but no run follows it.
    #[display("header at ({x}, {y}) declares a sum with no run")]
    SumWithoutRun {
        /// Column of the header cell.
        x: usize,
        /// Row of the header cell.
        y: usize,
    },
}
