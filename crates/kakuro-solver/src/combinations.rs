//! Precomputed digit combinations for every (sum, length) pair.
//!
//! A run of `n` cells summing to `s` can only be filled with one of the
//! digit sets whose size is `n` and whose digits add up to `s`. There are
//! only 511 non-empty subsets of {1..9}, so all of them are enumerated once
//! and bucketed by `(s, n)`; the search then answers "which full
//! combinations remain possible for this run" with a slice lookup.

use kakuro_core::DigitSet;

/// Number of `(sum, length)` buckets, `encode(45, 9) + 1`.
const BUCKETS: usize = 45 * 9 + 9;

/// Total digit sets across all buckets: every non-empty subset of {1..9}.
const TOTAL_SETS: usize = 511;

fn encode(sum: u8, len: usize) -> usize {
    assert!((1..=45).contains(&sum), "target sum {sum} outside 1-45");
    assert!((1..=9).contains(&len), "run length {len} outside 1-9");
    usize::from(sum) * 9 + len - 1
}

/// Iterates the raw bit patterns of all 511 non-empty digit sets.
fn all_masks() -> impl Iterator<Item = u16> {
    // bit 0 is unused, so valid patterns are the even numbers 2..=1022
    (2..=DigitSet::FULL.bits()).step_by(2)
}

/// Lookup table from `(target sum, run length)` to the digit sets
/// achieving it.
///
/// All buckets share one flat storage array: a first pass over the 511
/// masks counts bucket sizes and lays out `[start, end)` ranges, a second
/// pass fills the storage through per-bucket cursors. Queries are O(1)
/// slices into that storage.
///
/// # Examples
///
/// ```
/// use kakuro_core::DigitSet;
/// use kakuro_solver::CombinationTable;
///
/// let table = CombinationTable::new();
///
/// // 17 over two cells is only ever {8, 9}
/// assert_eq!(table.combinations(17, 2), &[DigitSet::from_iter([8, 9])]);
///
/// // 45 over nine cells uses every digit
/// assert_eq!(table.combinations(45, 9), &[DigitSet::FULL]);
///
/// // 45 over one cell is impossible
/// assert!(table.combinations(45, 1).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct CombinationTable {
    buckets: Vec<Bucket>,
    storage: Vec<DigitSet>,
}

#[derive(Debug, Clone, Copy)]
struct Bucket {
    start: u16,
    end: u16,
}

impl CombinationTable {
    /// Builds the table by enumerating all non-empty digit sets.
    #[must_use]
    pub fn new() -> Self {
        let mut sizes = [0u16; BUCKETS];
        for bits in all_masks() {
            let set = DigitSet::from_bits(bits);
            sizes[encode(set.digit_sum(), set.len())] += 1;
        }

        let mut buckets = Vec::with_capacity(BUCKETS);
        let mut start = 0;
        for size in sizes {
            // each bucket's end advances as the storage fills below
            buckets.push(Bucket { start, end: start });
            start += size;
        }
        debug_assert_eq!(start as usize, TOTAL_SETS);

        let mut storage = vec![DigitSet::EMPTY; TOTAL_SETS];
        for bits in all_masks() {
            let set = DigitSet::from_bits(bits);
            let bucket = &mut buckets[encode(set.digit_sum(), set.len())];
            storage[bucket.end as usize] = set;
            bucket.end += 1;
        }

        Self { buckets, storage }
    }

    /// Returns every digit set of size `len` whose digits sum to `sum`.
    ///
    /// The slice is empty when no such combination exists (for example a
    /// single cell summing to 10).
    ///
    /// # Panics
    ///
    /// Panics if `sum` is outside 1-45 or `len` outside 1-9.
    #[must_use]
    pub fn combinations(&self, sum: u8, len: usize) -> &[DigitSet] {
        let bucket = self.buckets[encode(sum, len)];
        &self.storage[bucket.start as usize..bucket.end as usize]
    }
}

impl Default for CombinationTable {
    fn default() -> Self {
        Self::new()
    }
}
