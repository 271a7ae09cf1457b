use crate::core::error::GridError;
use crate::domain::Cell;
use crate::spatial::cells::CellBuffer;

use super::random::CellSource;
use super::UniverseCore;

pub(super) fn toggle_cell(world: &mut UniverseCore, row: u32, col: u32) -> Result<(), GridError> {
    let idx = world.cells.check_bounds(row, col)?;
    world.cells.flip_idx(idx);
    Ok(())
}

pub(super) fn set_cell(world: &mut UniverseCore, row: u32, col: u32, cell: Cell) -> Result<(), GridError> {
    let idx = world.cells.check_bounds(row, col)?;
    world.cells.set_idx(idx, cell.is_alive());
    Ok(())
}

/// Mark every (row, col) alive. Nothing changes unless all are in bounds.
pub(super) fn set_cells(world: &mut UniverseCore, coords: &[(u32, u32)]) -> Result<(), GridError> {
    let indices = coords
        .iter()
        .map(|&(row, col)| world.cells.check_bounds(row, col))
        .collect::<Result<Vec<_>, _>>()?;

    for idx in indices {
        world.cells.set_idx(idx, true);
    }
    Ok(())
}

pub(super) fn cell(world: &UniverseCore, row: u32, col: u32) -> Result<Cell, GridError> {
    let idx = world.cells.check_bounds(row, col)?;
    Ok(Cell::from(world.cells.is_alive_idx(idx)))
}

pub(super) fn randomize(world: &mut UniverseCore) {
    fill_from_source(&mut world.cells, &mut world.rng);
}

pub(super) fn randomize_with<S: CellSource + ?Sized>(world: &mut UniverseCore, source: &mut S) {
    fill_from_source(&mut world.cells, source);
}

/// Draw one bit per cell in index order, packing a byte at a time.
fn fill_from_source<S: CellSource + ?Sized>(cells: &mut CellBuffer, source: &mut S) {
    let size = cells.size();
    for (i, byte) in cells.as_bytes_mut().iter_mut().enumerate() {
        let first = i << 3;
        let end = (first + 8).min(size);

        let mut out = 0u8;
        for n in first..end {
            if source.next_alive() {
                out |= 1u8 << (n - first);
            }
        }
        *byte = out;
    }
}

pub(super) fn clear(world: &mut UniverseCore) {
    world.cells.clear();
    world.generation = 0;
}

/// Swap in an all-dead buffer of the new size. On error the universe is untouched.
pub(super) fn resize(world: &mut UniverseCore, width: u32, height: u32) -> Result<(), GridError> {
    let cells = CellBuffer::new(width, height).map_err(|e| {
        console_warn!("resize rejected: {}", e);
        e
    })?;

    world.scratch = vec![0u8; cells.byte_len()];
    world.cells = cells;
    world.generation = 0;

    console_log!("universe resized: {}x{}", width, height);
    Ok(())
}
