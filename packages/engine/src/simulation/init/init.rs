use crate::spatial::cells::CellBuffer;
use crate::core::error::GridError;

use super::perf_stats::PerfStats;
use super::random::Xorshift32;
use super::UniverseCore;

/// All-dead universe; callers seed it afterwards.
pub(super) fn create_universe_core(
    width: u32,
    height: u32,
    rng: Xorshift32,
) -> Result<UniverseCore, GridError> {
    let cells = CellBuffer::new(width, height).map_err(|e| {
        console_warn!("universe rejected: {}", e);
        e
    })?;
    let scratch = vec![0u8; cells.byte_len()];

    console_log!(
        "universe created: {}x{} ({} bytes packed)",
        width,
        height,
        cells.byte_len()
    );

    Ok(UniverseCore {
        cells,
        scratch,
        rng,
        generation: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
