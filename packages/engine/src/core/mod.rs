//! Core building blocks shared by every other module.
//!
//! - utils/  - logging macros (must be first for macro export!)
//! - bits    - LSB-first bit helpers over packed byte buffers
//! - error   - engine error types

#[macro_use]
pub mod utils {
    #[macro_use]
    pub mod log;
}

pub mod bits;
pub mod error;
