use crate::domain::{next_state, NEIGHBOR_OFFSETS};
use crate::spatial::cells::CellBuffer;

/// Live cells among the 8 toroidal neighbours of (row, col).
#[inline]
pub(super) fn live_neighbor_count(cells: &CellBuffer, row: u32, col: u32) -> u8 {
    let mut count = 0;
    for &(d_row, d_col) in NEIGHBOR_OFFSETS.iter() {
        let r = match d_row {
            -1 => cells.row_above(row),
            1 => cells.row_below(row),
            _ => row,
        };
        let c = match d_col {
            -1 => cells.col_left(col),
            1 => cells.col_right(col),
            _ => col,
        };
        count += cells.is_alive(r, c) as u8;
    }
    count
}

/// Next-generation value of packed byte `byte_idx`. Reads only `cells`.
/// Padding bits come out zero.
#[inline]
pub(super) fn next_byte(cells: &CellBuffer, byte_idx: usize) -> u8 {
    let first = byte_idx << 3;
    let end = (first + 8).min(cells.size());

    let mut out = 0u8;
    for n in first..end {
        let (row, col) = cells.coords(n);
        if next_state(cells.is_alive_idx(n), live_neighbor_count(cells, row, col)) {
            out |= 1u8 << (n - first);
        }
    }
    out
}
