//! Domain values: what a cell is and how it evolves.

pub mod cell;
pub mod rules;

pub use cell::{Cell, SeedMode};
pub use rules::{next_state, NEIGHBOR_OFFSETS};
