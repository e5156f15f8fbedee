// src/env/grid.rs
#![forbid(unsafe_code)]

/// Ball position: column fixed for the flight, row grows by one per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ball {
    pub col: usize,
    pub row: usize,
}

/// Binary occupancy map, row-major. Value semantics: snapshots handed to
/// callers are independent copies, so external mutation can never reach the
/// environment's own board. Mutators are crate-private for the same reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![0u8; height * width],
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// One full row as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        debug_assert!(row < self.height);
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// All cells, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u8) {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col] = value;
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(0);
    }

    pub(crate) fn clear_row(&mut self, row: usize) {
        debug_assert!(row < self.height);
        let start = row * self.width;
        self.cells[start..start + self.width].fill(0);
    }
}
