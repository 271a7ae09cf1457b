//! Spatial storage for the universe.

pub mod cells;
