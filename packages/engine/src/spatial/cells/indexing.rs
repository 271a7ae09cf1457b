use super::*;

impl CellBuffer {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    /// Number of meaningful cells (`width * height`).
    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((idx / w) as u32, (idx % w) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    pub fn check_bounds(&self, row: u32, col: u32) -> Result<usize, GridError> {
        if self.in_bounds(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    // === Toroidal wrap ===

    /// Row one step above `row`, wrapping to the bottom edge.
    #[inline]
    pub fn row_above(&self, row: u32) -> u32 {
        wrap_dec(row, self.height)
    }

    #[inline]
    pub fn row_below(&self, row: u32) -> u32 {
        wrap_inc(row, self.height)
    }

    #[inline]
    pub fn col_left(&self, col: u32) -> u32 {
        wrap_dec(col, self.width)
    }

    #[inline]
    pub fn col_right(&self, col: u32) -> u32 {
        wrap_inc(col, self.width)
    }
}

// (v + len - 1) % len without overflowing near u32::MAX
#[inline(always)]
fn wrap_dec(v: u32, len: u32) -> u32 {
    if v == 0 { len - 1 } else { v - 1 }
}

// (v + 1) % len
#[inline(always)]
fn wrap_inc(v: u32, len: u32) -> u32 {
    if v + 1 >= len { 0 } else { v + 1 }
}
