//! Universe - toroidal Game of Life engine
//!
//! UniverseCore only orchestrates and owns state:
//! - storage/indexing lives in spatial/cells
//! - the B3/S23 rule lives in domain/rules
//! - stepping, commands, seeding, perf and text rendering are split into
//!   the submodules mounted below
//!
//! The live cell buffer is exclusively owned here. Readers get a borrowed
//! `&[u8]` (Rust) or a raw pointer (JS) that stays valid until `resize`.

use crate::core::error::{ConfigError, GridError};
use crate::domain::{Cell, SeedMode};
use crate::spatial::cells::CellBuffer;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
pub mod random;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/neighbors.rs"]
mod neighbors;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_text.rs"]
mod render_text;
mod facade;

pub use config::UniverseConfig;
pub use facade::{CellsLayout, Universe};
pub use perf_stats::PerfStats;
pub use random::{CellSource, Xorshift32};

use perf_timer::PerfTimer;

/// The simulation universe
pub struct UniverseCore {
    cells: CellBuffer,
    // Next-generation buffer, same length as `cells`, reused every tick
    scratch: Vec<u8>,
    rng: Xorshift32,

    // State
    generation: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl UniverseCore {
    /// Create a universe seeded from a platform-random PRNG.
    pub fn new(width: u32, height: u32, mode: SeedMode) -> Result<Self, GridError> {
        Self::with_rng(width, height, mode, Xorshift32::from_entropy())
    }

    /// Square universe, `size x size`.
    pub fn square(size: u32, mode: SeedMode) -> Result<Self, GridError> {
        Self::new(size, size, mode)
    }

    /// Create a universe whose PRNG (initial seeding and `randomize`) is fixed.
    pub fn with_seed(width: u32, height: u32, mode: SeedMode, seed: u32) -> Result<Self, GridError> {
        Self::with_rng(width, height, mode, Xorshift32::new(seed))
    }

    /// Create a universe whose initial RANDOM population is drawn from `source`.
    pub fn with_source<S: CellSource + ?Sized>(
        width: u32,
        height: u32,
        mode: SeedMode,
        source: &mut S,
    ) -> Result<Self, GridError> {
        let mut world = init::create_universe_core(width, height, Xorshift32::from_entropy())?;
        if mode == SeedMode::Random {
            world.randomize_with(source);
        }
        Ok(world)
    }

    fn with_rng(width: u32, height: u32, mode: SeedMode, rng: Xorshift32) -> Result<Self, GridError> {
        let mut world = init::create_universe_core(width, height, rng)?;
        if mode == SeedMode::Random {
            world.randomize();
        }
        Ok(world)
    }

    pub fn from_config(config: &UniverseConfig) -> Result<Self, GridError> {
        let rng = match config.seed {
            Some(seed) => Xorshift32::new(seed),
            None => Xorshift32::from_entropy(),
        };
        let mut world = Self::with_rng(config.width, config.height, config.seed_mode, rng)?;
        world.enable_perf_metrics(config.perf_metrics);
        Ok(world)
    }

    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        let config = UniverseConfig::from_json(json).map_err(|e| {
            console_warn!("universe config rejected: {}", e);
            e
        })?;
        Ok(Self::from_config(&config)?)
    }

    pub fn width(&self) -> u32 { self.cells.width() }

    pub fn height(&self) -> u32 { self.cells.height() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn live_count(&self) -> usize { self.cells.live_count() }

    /// Packed cells, LSB-first, `ceil(width * height / 8)` bytes. No copy.
    ///
    /// Cell `n = row * width + col` is `(view[n / 8] >> (n % 8)) & 1`.
    /// Bits past `width * height` in the last byte are padding.
    pub fn buffer_view(&self) -> &[u8] {
        self.cells.as_bytes()
    }

    /// Get pointer to packed cells (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.cells_ptr()
    }

    pub fn cells_len_bytes(&self) -> usize {
        self.cells.byte_len()
    }

    pub fn cells_len_bits(&self) -> usize {
        self.cells.size()
    }

    pub fn cell(&self, row: u32, col: u32) -> Result<Cell, GridError> {
        commands::cell(self, row, col)
    }

    pub fn is_alive(&self, row: u32, col: u32) -> Result<bool, GridError> {
        Ok(self.cell(row, col)?.is_alive())
    }

    /// Advance exactly one generation
    pub fn tick(&mut self) {
        step::tick(self);
    }

    /// Flip the cell at (row, col)
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        commands::toggle_cell(self, row, col)
    }

    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) -> Result<(), GridError> {
        commands::set_cell(self, row, col, cell)
    }

    /// Set every listed (row, col) alive; all-or-nothing
    pub fn set_cells(&mut self, coords: &[(u32, u32)]) -> Result<(), GridError> {
        commands::set_cells(self, coords)
    }

    /// Reassign every cell from the universe's own PRNG
    pub fn randomize(&mut self) {
        commands::randomize(self);
    }

    /// Reassign every cell from `source`, in cell-index order
    pub fn randomize_with<S: CellSource + ?Sized>(&mut self, source: &mut S) {
        commands::randomize_with(self, source);
    }

    /// Kill all cells
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Replace the grid with an all-dead one of the new size.
    /// Invalidates any pointer obtained from `cells_ptr`.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GridError> {
        commands::resize(self, width, height)
    }

    /// Reseed the PRNG used by `randomize`
    pub fn reseed(&mut self, seed: u32) {
        settings::reseed(self, seed);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn perf_enabled(&self) -> bool {
        settings::perf_enabled(self)
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
