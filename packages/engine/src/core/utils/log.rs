//! Console logging macros
//!
//! On wasm32 these forward to the browser console through `web_sys`.
//! Native builds (tests, benches) cannot call wasm imports, so the macros
//! only type-check their arguments there.
//!
//! Usage:
//! ```rust
//! use conway_engine::console_log;
//!
//! let (w, h) = (64, 48);
//! console_log!("universe created: {}x{}", w, h);
//! ```

/// Log an info line to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&format!($($t)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($t)*);
        }
    }};
}

/// Log a warning to the browser console.
#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&format!($($t)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($t)*);
        }
    }};
}
