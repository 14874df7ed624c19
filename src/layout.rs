//! Grid layout math shared by the display and console variants.
//!
//! A hand's linear order maps onto a fixed-width grid: index `i` sits at
//! column `i % width`, row `i / width`. The pixel geometry places each cell
//! at the card size plus padding times its grid position.

/// Number of cards per grid row.
pub const ROW_WIDTH: usize = 13;
/// Number of grid rows for a standard deck.
pub const GRID_ROWS: usize = 4;

/// Card sprite width in pixels.
pub const CARD_W: f32 = 75.0;
/// Horizontal padding between cards.
pub const PAD_W: f32 = 5.0;
/// Card sprite height in pixels.
pub const CARD_H: f32 = 107.0;
/// Vertical padding between cards.
pub const PAD_H: f32 = 10.0;

/// Scene width for the standard 13-column grid.
pub const WINDOW_W: f32 = CARD_W * ROW_WIDTH as f32 + PAD_W * (ROW_WIDTH as f32 - 1.0);
/// Scene height for the standard 4-row grid.
pub const WINDOW_H: f32 = CARD_H * GRID_ROWS as f32 + PAD_H * (GRID_ROWS as f32 - 1.0);

/// (column, row) position in the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoords {
    /// Column, zero-based from the left.
    pub col: usize,
    /// Row, zero-based from the top.
    pub row: usize,
}

impl GridCoords {
    /// Creates grid coordinates.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Grid position of a linear index in rows of `width`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    #[must_use]
    pub const fn at_index(index: usize, width: usize) -> Self {
        Self {
            col: index % width,
            row: index / width,
        }
    }

    /// Linear index of this position in rows of `width`, inverse of
    /// [`GridCoords::at_index`].
    #[must_use]
    pub const fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }
}

/// A 2D pixel position in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal pixel offset.
    pub x: f32,
    /// Vertical pixel offset.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel position of a grid cell's top-left corner.
#[must_use]
pub const fn pixel_position(coords: GridCoords) -> Point {
    Point::new(
        coords.col as f32 * (CARD_W + PAD_W),
        coords.row as f32 * (CARD_H + PAD_H),
    )
}
