//! Random-bit sources for seeding cells.
//!
//! Seeding never reaches for a hidden global generator: every fill takes a
//! `CellSource`, so tests can hand in a fixed bit pattern.

/// Seed used when a caller passes 0 (xorshift never leaves the zero state).
pub const DEFAULT_SEED: u32 = 12345;

/// Random number generator step (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Supplies one alive/dead decision per cell, in cell-index order.
pub trait CellSource {
    fn next_alive(&mut self) -> bool;
}

/// Any `FnMut() -> bool` is a source, e.g. an iterator over a fixed pattern.
impl<F: FnMut() -> bool> CellSource for F {
    #[inline]
    fn next_alive(&mut self) -> bool {
        self()
    }
}

/// Deterministic PRNG owned by the universe for `randomize()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Seeded from the platform clock (native) or `Math.random` (wasm).
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }
}

impl CellSource for Xorshift32 {
    /// Top bit of the next word: alive with probability 1/2.
    #[inline]
    fn next_alive(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }
}

#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}

#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(DEFAULT_SEED)
}
