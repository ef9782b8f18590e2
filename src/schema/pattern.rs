//! Text patterns for seeding a grid.
//!
//! One line per grid row. `1`, `X` and `*` are living cells; `0`, `.` and
//! space are dead cells. Any other character is skipped and does not occupy a
//! column. Blank lines and lines with no cell glyphs are dropped.
//!
//! ```text
//! .X.
//! ..X
//! XXX
//! ```

use crate::error::{AntError, Result};

/// Glyph-to-cell mapping for one character, or `None` if it is not a cell.
#[inline]
fn parse_glyph(c: char) -> Option<bool> {
    match c {
        '1' | 'X' | '*' => Some(true),
        '0' | '.' | ' ' => Some(false),
        _ => None,
    }
}

/// A parsed rectangular boolean pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrid {
    /// Cell states, row-major.
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl PatternGrid {
    /// Parse pattern text.
    ///
    /// Fails with [`AntError::MalformedPattern`] if no rows survive parsing or
    /// if any row's width differs from the first row's.
    pub fn parse(text: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for (line_no, line) in text.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }

            let row: Vec<bool> = line.chars().filter_map(parse_glyph).collect();
            if row.is_empty() {
                continue;
            }

            if rows == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(AntError::MalformedPattern(format!(
                    "line {} has {} cells, expected {}",
                    line_no + 1,
                    row.len(),
                    cols
                )));
            }

            cells.extend(row);
            rows += 1;
        }

        if rows == 0 || cols == 0 {
            return Err(AntError::MalformedPattern(
                "pattern contains no cells".to_string(),
            ));
        }

        Ok(Self { cells, rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at (row, col) is living. Out-of-range cells are dead.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Count of living cells.
    pub fn living_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl std::str::FromStr for PatternGrid {
    type Err = AntError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
