//! Conway's Game of Life rule (B3/S23) on a toroidal Moore neighbourhood.

/// The 8 neighbour offsets as (d_row, d_col).
///
/// Always all 8 are visited. On 1xN or 1x1 grids several offsets wrap onto
/// the same cell (or the cell itself) and each visit counts.
pub const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), // 0: Top-Left
    (-1, 0),  // 1: Top
    (-1, 1),  // 2: Top-Right
    (0, -1),  // 3: Left
    (0, 1),   // 4: Right
    (1, -1),  // 5: Bottom-Left
    (1, 0),   // 6: Bottom
    (1, 1),   // 7: Bottom-Right
];

/// Next state of a cell from its current state and live neighbour count.
#[inline(always)]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        // Survival
        (true, 2) | (true, 3) => true,
        // Birth
        (false, 3) => true,
        // Under/overpopulation, or stays dead
        _ => false,
    }
}
