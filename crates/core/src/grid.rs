//! Grid module - generic dense 2D array
//!
//! Used both for the board (10x20 of color ids) and for each shape's block mask.
//! Storage is a flat `Vec` in row-major order (`y * width + x`).
//! Coordinates: (x, y) where x grows to the right and y grows downward.

use tui_blocks_types::Vec2;

/// Fixed-size 2D grid with row-major backing storage.
///
/// `Clone` is a deep copy. [`Grid::take`] moves the contents out in O(1)
/// and leaves the source as an empty 0x0 grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    /// Invariant: `cells.len() == width * height`
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }

    /// Create a grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Build from literal rows (all rows must have the same length)
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        assert!(
            rows.iter().all(|r| r.as_ref().len() == width),
            "grid rows must have equal length"
        );

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            cells.extend_from_slice(row.as_ref());
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Extent as a vector (width, height)
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as i32, self.height as i32)
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Flat index of (x, y)
    #[inline(always)]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Check signed coordinates against the grid extent
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Read the cell at (x, y).
    ///
    /// Callers must bounds-check first; out-of-range access panics (or, in
    /// release builds, may alias a neighbouring row when only `x` is too large).
    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> T {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of range");
        self.cells[self.index_of(x, y)]
    }

    /// Write the cell at (x, y). Same bounds contract as [`Grid::get`].
    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of range");
        let idx = self.index_of(x, y);
        self.cells[idx] = value;
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Borrow row `y`
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Overwrite row `dst` with the contents of row `src`
    pub fn copy_row(&mut self, src: usize, dst: usize) {
        let width = self.width;
        self.cells
            .copy_within(src * width..(src + 1) * width, dst * width);
    }

    /// Set every cell of row `y` to `value`
    pub fn fill_row(&mut self, y: usize, value: T) {
        let start = y * self.width;
        self.cells[start..start + self.width].fill(value);
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Iterate `(x, y, value)` over every cell in row-major order
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i % width, i / width, v))
    }

    /// New `height x width` grid rotated 90° clockwise.
    ///
    /// Source cell (x, y) lands at (height - 1 - y, x).
    pub fn rotate_clockwise(&self) -> Self {
        let mut rotated = Self::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                rotated.set(self.height - 1 - y, x, self.get(x, y));
            }
        }
        rotated
    }

    /// New `height x width` grid rotated 90° counter-clockwise.
    ///
    /// Source cell (x, y) lands at (y, width - 1 - x).
    pub fn rotate_counter_clockwise(&self) -> Self {
        let mut rotated = Self::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                rotated.set(y, self.width - 1 - x, self.get(x, y));
            }
        }
        rotated
    }

    /// Move the contents out, leaving an empty 0x0 grid behind
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
