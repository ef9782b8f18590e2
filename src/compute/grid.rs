//! Square cell grid with derived Moore neighbor counts.

use std::fmt;

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::error::{AntError, Result};
use crate::schema::MAX_GRID_SIZE;

/// Relative offsets of the eight Moore neighbors.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// N x N grid of binary cells.
///
/// Cells are stored row-major: `[row * size + col]`. `neighbor_counts` is
/// derived from `cells` and is brought back in sync by every public mutator
/// before it returns. Counting does not wrap at the edges, unlike ant
/// movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
    neighbor_counts: Vec<u8>,
}

impl Grid {
    /// Number of cells in a `size x size` grid, if that size is allowed.
    ///
    /// Sizes of 0 or above [`MAX_GRID_SIZE`] are rejected.
    pub fn cell_count(size: usize) -> Result<usize> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(AntError::InvalidDimension {
                size: i64::try_from(size).unwrap_or(i64::MAX),
            });
        }
        size.checked_mul(size).ok_or(AntError::InvalidDimension {
            size: size as i64,
        })
    }

    /// Create an all-dead grid.
    pub fn new(size: usize) -> Result<Self> {
        let count = Self::cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![false; count],
            neighbor_counts: vec![0; count],
        })
    }

    /// Build a grid from row-major cell states.
    pub(crate) fn from_cells(size: usize, cells: Vec<bool>) -> Result<Self> {
        let count = Self::cell_count(size)?;
        debug_assert_eq!(cells.len(), count);
        let mut grid = Self {
            size,
            cells,
            neighbor_counts: vec![0; count],
        };
        grid.recompute_neighbor_counts();
        Ok(grid)
    }

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether (row, col) lies within the grid.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Whether the cell at (row, col) is living. Out-of-range cells are dead.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.cells[self.idx(row, col)]
    }

    /// Living neighbors of (row, col), or 0 for out-of-range cells.
    #[inline]
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        if self.contains(row, col) {
            self.neighbor_counts[self.idx(row, col)]
        } else {
            0
        }
    }

    /// All cell states, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// All neighbor counts, row-major.
    pub fn neighbor_counts(&self) -> &[u8] {
        &self.neighbor_counts
    }

    /// Number of living cells.
    pub fn living_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Replace the grid with an all-dead grid of a new size.
    ///
    /// A size of 0 or above [`MAX_GRID_SIZE`] is rejected and leaves the grid
    /// unchanged.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        *self = Self::new(new_size)?;
        Ok(())
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.neighbor_counts.fill(0);
    }

    /// Flip one cell and refresh neighbor counts.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        if !self.contains(row, col) {
            return Err(AntError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let i = self.idx(row, col);
        self.cells[i] = !self.cells[i];
        self.recompute_neighbor_counts();
        Ok(())
    }

    /// Set a cell without refreshing neighbor counts.
    ///
    /// Callers must run [`Grid::recompute_neighbor_counts`] before handing the
    /// grid back to anyone else.
    #[inline]
    pub(crate) fn set_raw(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.idx(row, col);
        self.cells[i] = alive;
    }

    /// Recount living Moore neighbors for every cell.
    pub fn recompute_neighbor_counts(&mut self) {
        let size = self.size;
        let cells = &self.cells;

        #[cfg(not(target_arch = "wasm32"))]
        self.neighbor_counts
            .par_chunks_mut(size)
            .enumerate()
            .for_each(|(row, counts)| count_row(cells, size, row, counts));

        #[cfg(target_arch = "wasm32")]
        self.neighbor_counts
            .chunks_mut(size)
            .enumerate()
            .for_each(|(row, counts)| count_row(cells, size, row, counts));
    }
}

/// Fill `counts` with the living-neighbor counts of one row.
fn count_row(cells: &[bool], size: usize, row: usize, counts: &mut [u8]) {
    for (col, count) in counts.iter_mut().enumerate() {
        let mut n = 0u8;
        for &(dr, dc) in &MOORE_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if r < size && c < size && cells[r * size + c] {
                n += 1;
            }
        }
        *count = n;
    }
}

/// Renders in the pattern text format: `X` living, `.` dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for &alive in row {
                f.write_str(if alive { "X" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn brute_force_count(grid: &Grid, row: usize, col: usize) -> u8 {
        let n = grid.size() as isize;
        let mut count = 0;
        for dr in -1..=1isize {
            for dc in -1..=1isize {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r >= 0 && r < n && c >= 0 && c < n && grid.is_alive(r as usize, c as usize) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_new_is_dead() {
        for size in [1, 2, 7, 15] {
            let grid = Grid::new(size).unwrap();
            assert_eq!(grid.size(), size);
            assert_eq!(grid.cells().len(), size * size);
            assert!(grid.cells().iter().all(|&c| !c));
            assert!(grid.neighbor_counts().iter().all(|&n| n == 0));
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Grid::new(0),
            Err(AntError::InvalidDimension { size: 0 })
        ));
    }

    #[test]
    fn test_oversized_rejected() {
        assert!(Grid::new(MAX_GRID_SIZE + 1).is_err());
        assert!(matches!(
            Grid::new(1usize << 33),
            Err(AntError::InvalidDimension { size }) if size == 1i64 << 33
        ));
        assert!(matches!(
            Grid::new(usize::MAX),
            Err(AntError::InvalidDimension { .. })
        ));

        let mut grid = Grid::new(4).unwrap();
        assert!(grid.resize(1usize << 33).is_err());
        assert_eq!(grid.size(), 4);
    }

    #[test]
    fn test_resize_resets() {
        let mut grid = Grid::new(5).unwrap();
        grid.toggle_cell(2, 2).unwrap();
        grid.resize(8).unwrap();
        assert_eq!(grid.size(), 8);
        assert_eq!(grid.living_cells(), 0);
        assert!(grid.neighbor_counts().iter().all(|&n| n == 0));
    }

    #[test]
    fn test_resize_zero_leaves_grid() {
        let mut grid = Grid::new(4).unwrap();
        grid.toggle_cell(1, 1).unwrap();
        let before = grid.clone();
        assert!(grid.resize(0).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_corner_neighbor_counts() {
        let mut grid = Grid::new(3).unwrap();
        grid.toggle_cell(0, 0).unwrap();

        assert_eq!(grid.neighbor_count(0, 1), 1);
        assert_eq!(grid.neighbor_count(1, 0), 1);
        assert_eq!(grid.neighbor_count(1, 1), 1);
        assert_eq!(grid.neighbor_count(0, 0), 0);
        assert_eq!(grid.neighbor_count(0, 2), 0);
        assert_eq!(grid.neighbor_count(1, 2), 0);
        assert_eq!(grid.neighbor_count(2, 0), 0);
        assert_eq!(grid.neighbor_count(2, 1), 0);
        assert_eq!(grid.neighbor_count(2, 2), 0);
    }

    #[test]
    fn test_counting_does_not_wrap() {
        let mut grid = Grid::new(4).unwrap();
        grid.toggle_cell(0, 0).unwrap();
        assert_eq!(grid.neighbor_count(3, 3), 0);
        assert_eq!(grid.neighbor_count(0, 3), 0);
        assert_eq!(grid.neighbor_count(3, 0), 0);
    }

    #[test]
    fn test_full_neighborhood() {
        let mut grid = Grid::new(3).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                grid.toggle_cell(r, c).unwrap();
            }
        }
        assert_eq!(grid.neighbor_count(1, 1), 8);
        assert_eq!(grid.neighbor_count(0, 0), 3);
        assert_eq!(grid.neighbor_count(0, 1), 5);
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let mut grid = Grid::new(3).unwrap();
        let before = grid.clone();
        let err = grid.toggle_cell(3, 0).unwrap_err();
        assert!(matches!(
            err,
            AntError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            }
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut grid = Grid::new(5).unwrap();
        grid.toggle_cell(2, 3).unwrap();
        assert!(grid.is_alive(2, 3));
        assert_eq!(grid.neighbor_count(2, 2), 1);
        grid.toggle_cell(2, 3).unwrap();
        assert!(!grid.is_alive(2, 3));
        assert_eq!(grid.neighbor_count(2, 2), 0);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(4).unwrap();
        grid.toggle_cell(0, 0).unwrap();
        grid.toggle_cell(3, 3).unwrap();
        grid.clear();
        assert_eq!(grid.living_cells(), 0);
        assert!(grid.neighbor_counts().iter().all(|&n| n == 0));
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3).unwrap();
        grid.toggle_cell(0, 1).unwrap();
        grid.toggle_cell(2, 2).unwrap();
        assert_eq!(grid.to_string(), ".X.\n...\n..X\n");
    }

    proptest! {
        #[test]
        fn prop_counts_match_brute_force(
            (size, cells) in (1usize..12).prop_flat_map(|n| {
                (Just(n), proptest::collection::vec(any::<bool>(), n * n))
            })
        ) {
            let grid = Grid::from_cells(size, cells).unwrap();
            for r in 0..size {
                for c in 0..size {
                    prop_assert_eq!(grid.neighbor_count(r, c), brute_force_count(&grid, r, c));
                }
            }
        }
    }
}
