//! Square matrix of palette indices.

use crate::error::EditorError;

/// The drawing surface: an `N x N` matrix of cell values.
///
/// `0` is an empty cell; `k > 0` is painted with palette color `k - 1`. Every
/// row always has exactly `size` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<u32>>,
}

impl Grid {
    /// Creates an empty grid. Sizes below 1 are raised to 1.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            cells: vec![vec![0; size]; size],
        }
    }

    /// Builds a grid from externally supplied rows, checking that the
    /// declared size matches both the row count and every row's length.
    pub fn from_rows(declared: usize, rows: Vec<Vec<u32>>) -> Result<Self, EditorError> {
        if declared == 0 {
            return Err(EditorError::InvalidGridSize);
        }

        let bad_row = rows.iter().position(|row| row.len() != declared);
        if rows.len() != declared || bad_row.is_some() {
            return Err(EditorError::ShapeMismatch {
                declared,
                rows: rows.len(),
                bad_row,
            });
        }

        Ok(Self {
            size: declared,
            cells: rows,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.cells
    }

    /// Deep copy of the cell data.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.clone()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Writes a cell value. Returns `true` when the stored value changed;
    /// off-grid writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) if *cell != value => {
                *cell = value;
                true
            }
            _ => false,
        }
    }

    /// Point-symmetric counterpart of a cell: `(N-1-row, N-1-col)`.
    ///
    /// Returns `None` for off-grid coordinates.
    pub fn mirror_of(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        if !self.contains(row, col) {
            return None;
        }
        Some((self.size - 1 - row, self.size - 1 - col))
    }

    /// Number of non-empty cells.
    pub fn painted_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Largest stored value, used to detect references beyond a palette.
    pub fn max_value(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}
