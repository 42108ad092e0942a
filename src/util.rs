//! Geometry helpers for hosts that draw the grid on a pixel surface.
//!
//! This module provides:
//! - Pointer hit testing (pixel position to grid cell)
//! - Cell rectangles for repainting dirty cells

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x.checked_sub(min_x)?;
        let height = max_y.checked_sub(min_y)?;
        Self::new(min_x, min_y, width, height)
    }

    /// Returns true if the point lies inside (min inclusive, max exclusive).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let (min_x, min_y) = (i64::from(self.x), i64::from(self.y));
        x >= min_x
            && y >= min_y
            && x < min_x + i64::from(self.width)
            && y < min_y + i64::from(self.height)
    }
}

/// Maps a pointer position to the `(row, col)` of the cell under it.
///
/// The grid is drawn stretched over `bounds`, so cells may be non-square.
/// Positions outside `bounds` clamp to the nearest edge cell, so a drag that
/// overshoots the border keeps painting the last row or column. Only a
/// zero-sized grid or empty `bounds` gives `None`.
///
/// # Arguments
/// * `x` - Pointer X coordinate in surface pixels
/// * `y` - Pointer Y coordinate in surface pixels
/// * `bounds` - Area the grid is drawn into
/// * `grid_size` - Number of cells per side
pub fn cell_at(x: i32, y: i32, bounds: Rect, grid_size: usize) -> Option<(usize, usize)> {
    if grid_size == 0 || bounds.width <= 0 || bounds.height <= 0 {
        return None;
    }

    let axis = |pos: i32, origin: i32, extent: i32| -> usize {
        let offset = i64::from(pos) - i64::from(origin);
        let extent = i64::from(extent);
        let cells = grid_size as i64;
        let index = (offset * cells).div_euclid(extent);
        index.clamp(0, cells - 1) as usize
    };

    Some((
        axis(y, bounds.y, bounds.height),
        axis(x, bounds.x, bounds.width),
    ))
}

/// Pixel rectangle covered by a cell, the inverse of [`cell_at`].
///
/// Returns `None` for off-grid cells or when the cell would be smaller than a
/// pixel (including cells pushed past the `i32` pixel range).
pub fn cell_rect(row: usize, col: usize, bounds: Rect, grid_size: usize) -> Option<Rect> {
    if row >= grid_size || col >= grid_size {
        return None;
    }

    // First pixel whose `cell_at` index reaches `index` (ceiling division).
    let edge = |index: usize, origin: i32, extent: i32| -> i32 {
        let cells = grid_size as i64;
        let scaled = (i64::from(extent) * index as i64 + cells - 1) / cells;
        (i64::from(origin) + scaled).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    };

    Rect::from_min_max(
        edge(col, bounds.x, bounds.width),
        edge(row, bounds.y, bounds.height),
        edge(col + 1, bounds.x, bounds.width),
        edge(row + 1, bounds.y, bounds.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_rejects_empty_area() {
        assert!(Rect::new(0, 0, 0, 10).is_none());
        assert!(Rect::from_min_max(5, 5, 4, 9).is_none());
        assert_eq!(Rect::from_min_max(1, 2, 4, 6), Rect::new(1, 2, 3, 4));
        assert!(Rect::from_min_max(i32::MIN, 0, i32::MAX, 10).is_none());
    }

    #[test]
    fn rect_near_i32_limits_does_not_overflow() {
        let rect = Rect::new(i32::MAX - 5, i32::MAX - 5, 100, 100).unwrap();
        assert!(rect.contains(i32::MAX, i32::MAX));
        assert!(!rect.contains(i32::MAX - 6, i32::MAX));

        let first = cell_rect(0, 0, rect, 8).unwrap();
        assert_eq!((first.x, first.width), (i32::MAX - 5, 5));
        assert!(cell_rect(7, 7, rect, 8).is_none());
        assert_eq!(cell_at(i32::MAX, i32::MAX, rect, 8), Some((0, 0)));
    }

    #[test]
    fn cell_at_maps_pixels_to_cells() {
        let bounds = Rect::new(10, 20, 160, 160).unwrap();
        assert_eq!(cell_at(10, 20, bounds, 16), Some((0, 0)));
        assert_eq!(cell_at(29, 20, bounds, 16), Some((0, 1)));
        assert_eq!(cell_at(169, 179, bounds, 16), Some((15, 15)));
        assert_eq!(cell_at(50, 50, bounds, 0), None);
        let empty = Rect { width: 0, ..bounds };
        assert_eq!(cell_at(50, 50, empty, 16), None);
    }

    #[test]
    fn cell_at_clamps_overshoot_to_edge_cells() {
        let bounds = Rect::new(10, 20, 160, 160).unwrap();
        assert_eq!(cell_at(170, 100, bounds, 16), Some((8, 15)));
        assert_eq!(cell_at(9, 100, bounds, 16), Some((8, 0)));
        assert_eq!(cell_at(500, -300, bounds, 16), Some((0, 15)));
        assert_eq!(cell_at(i32::MIN, i32::MAX, bounds, 16), Some((15, 0)));
    }

    #[test]
    fn cell_at_handles_uneven_bounds() {
        let bounds = Rect::new(0, 0, 100, 50).unwrap();
        assert_eq!(cell_at(99, 49, bounds, 3), Some((2, 2)));
        assert_eq!(cell_at(33, 16, bounds, 3), Some((0, 0)));
        assert_eq!(cell_at(34, 17, bounds, 3), Some((1, 1)));
    }

    #[test]
    fn cell_rect_is_inverse_of_cell_at() {
        let bounds = Rect::new(0, 0, 100, 100).unwrap();
        for row in 0..8 {
            for col in 0..8 {
                let rect = cell_rect(row, col, bounds, 8).unwrap();
                assert_eq!(cell_at(rect.x, rect.y, bounds, 8), Some((row, col)));
                assert_eq!(
                    cell_at(rect.x + rect.width - 1, rect.y + rect.height - 1, bounds, 8),
                    Some((row, col))
                );
            }
        }
        assert!(cell_rect(8, 0, bounds, 8).is_none());
    }
}
