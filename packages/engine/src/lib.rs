//! Conway Engine - toroidal Game of Life in WASM
//!
//! The engine owns a bit-packed cell buffer and advances it one generation
//! per `tick`. A JS renderer reads the buffer straight out of wasm memory.
//!
//! Architecture:
//! - core/       - Logging macros, bit helpers, errors
//! - spatial/    - Packed cell storage and toroidal indexing
//! - domain/     - Cell values, seed modes, the B3/S23 rule
//! - simulation/ - UniverseCore orchestration + wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("conway engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::{ConfigError, GridError};
pub use domain::{Cell, SeedMode};
pub use simulation::{
    CellSource, CellsLayout, PerfStats, Universe, UniverseConfig, UniverseCore, Xorshift32,
};
