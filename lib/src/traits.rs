//! A trait shared by both kinds of grids, and their size limit.

use crate::{error::Error, orientation::Orientation};

/// The largest number of cells in a grid.
///
/// Larger RLE headers and working grids are rejected with
/// [`Error::TooLarge`] instead of being allocated.
pub const MAX_CELLS: usize = 1 << 28;

/// Checks that a grid of the given size can be created.
pub(crate) fn check_size(width: usize, height: usize) -> Result<(), Error> {
    if width == 0 || height == 0 {
        return Err(Error::NonPositiveError);
    }
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(Error::TooLarge(width, height)),
    }
}

/// A rectangular toroidal grid of cells.
///
/// So that the RLE reader and the orientation generator can work on
/// both [`Pattern`](crate::Pattern) and [`Template`](crate::Template).
pub trait Grid: Sized {
    /// The type of a single cell.
    type Cell: Copy;

    /// Creates a grid of the given size where every cell is in the
    /// default state.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    fn blank(width: usize, height: usize) -> Self;

    /// Width.
    fn width(&self) -> usize;

    /// Height.
    fn height(&self) -> usize;

    /// Gets the cell at `(x, y)`, wrapping around the edges.
    fn cell(&self, x: usize, y: usize) -> Self::Cell;

    /// Sets the cell at `(x, y)`, wrapping around the edges.
    fn set_cell(&mut self, x: usize, y: usize, cell: Self::Cell);

    /// Applies a rotation or reflection to the whole grid.
    ///
    /// The width and height are swapped when the orientation swaps the axes.
    fn transformed(&self, orientation: Orientation) -> Self {
        let (width, height) = orientation.dimensions(self.width(), self.height());
        let mut grid = Self::blank(width, height);
        for y in 0..height {
            for x in 0..width {
                let (sx, sy) = orientation.source(x, y, width, height);
                grid.set_cell(x, y, self.cell(sx, sy));
            }
        }
        grid
    }
}
