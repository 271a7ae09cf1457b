use wasm_bindgen::prelude::*;

use crate::core::error::GridError;
use crate::domain::{Cell, SeedMode};

use super::perf_stats::PerfStats;
use super::UniverseCore;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn install_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    crate::set_panic_hook();
}

/// Where the packed cells live in wasm memory.
///
/// JS view: `new Uint8Array(memory.buffer, layout.cells_ptr, layout.cells_len_bytes)`.
/// Re-read after `resize`.
#[wasm_bindgen]
pub struct CellsLayout {
    cells_ptr: u32,
    cells_len_bytes: u32,
    cells_len_bits: u32,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl CellsLayout {
    #[wasm_bindgen(getter)]
    pub fn cells_ptr(&self) -> u32 { self.cells_ptr }
    #[wasm_bindgen(getter)]
    pub fn cells_len_bytes(&self) -> u32 { self.cells_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn cells_len_bits(&self) -> u32 { self.cells_len_bits }
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.width }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.height }
}

#[wasm_bindgen]
pub struct Universe {
    core: UniverseCore,
}

impl Universe {
    /// Wrap an already-built core (native callers, tests).
    pub fn from_core(core: UniverseCore) -> Self {
        Self { core }
    }

    /// Packed cells, borrowed (Rust-side view of `cells_ptr`).
    pub fn buffer_view(&self) -> &[u8] {
        self.core.buffer_view()
    }

    fn build(result: Result<UniverseCore, GridError>) -> Result<Universe, JsValue> {
        install_panic_hook();
        result.map(Self::from_core).map_err(js_err)
    }
}

#[wasm_bindgen]
impl Universe {
    /// Create a randomly populated universe with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<Universe, JsValue> {
        Self::build(UniverseCore::new(width, height, SeedMode::Random))
    }

    /// Random `size x size` universe
    #[wasm_bindgen(js_name = newSquare)]
    pub fn new_square(size: u32) -> Result<Universe, JsValue> {
        Self::build(UniverseCore::square(size, SeedMode::Random))
    }

    /// All-dead universe
    #[wasm_bindgen(js_name = newDead)]
    pub fn new_dead(width: u32, height: u32) -> Result<Universe, JsValue> {
        Self::build(UniverseCore::new(width, height, SeedMode::AllDead))
    }

    /// Random universe with a fixed PRNG seed (reproducible runs)
    #[wasm_bindgen(js_name = newSeeded)]
    pub fn new_seeded(width: u32, height: u32, seed: u32) -> Result<Universe, JsValue> {
        Self::build(UniverseCore::with_seed(width, height, SeedMode::Random, seed))
    }

    /// Build from a JSON `UniverseConfig`
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config_json(json: String) -> Result<Universe, JsValue> {
        install_panic_hook();
        UniverseCore::from_config_json(&json)
            .map(Self::from_core)
            .map_err(js_err)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    pub fn live_count(&self) -> usize {
        self.core.live_count()
    }

    /// Step the universe forward one generation
    pub fn tick(&mut self) {
        self.core.tick();
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), JsValue> {
        self.core.toggle_cell(row, col).map_err(js_err)
    }

    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) -> Result<(), JsValue> {
        self.core.set_cell(row, col, cell).map_err(js_err)
    }

    /// Set cells alive from a flat `[row0, col0, row1, col1, ...]` list
    pub fn set_cells(&mut self, coords: &[u32]) -> Result<(), JsValue> {
        if coords.len() % 2 != 0 {
            return Err(JsValue::from_str("coordinate list must hold (row, col) pairs"));
        }
        let pairs: Vec<(u32, u32)> = coords.chunks_exact(2).map(|p| (p[0], p[1])).collect();
        self.core.set_cells(&pairs).map_err(js_err)
    }

    pub fn cell(&self, row: u32, col: u32) -> Result<Cell, JsValue> {
        self.core.cell(row, col).map_err(js_err)
    }

    pub fn randomize(&mut self) {
        self.core.randomize();
    }

    pub fn reseed(&mut self, seed: u32) {
        self.core.reseed(seed);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Replace the grid with an all-dead one. Invalidates `cells_ptr`.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.core.resize(width, height).map_err(js_err)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Get pointer to packed cells (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    pub fn cells_len_bytes(&self) -> usize {
        self.core.cells_len_bytes()
    }

    /// Text dump, one row per line
    pub fn render(&self) -> String {
        self.core.to_string()
    }

    pub fn cells_layout(&self) -> CellsLayout {
        CellsLayout {
            cells_ptr: self.core.cells_ptr() as u32,
            cells_len_bytes: self.core.cells_len_bytes() as u32,
            cells_len_bits: self.core.cells_len_bits() as u32,
            width: self.core.width(),
            height: self.core.height(),
        }
    }
}
