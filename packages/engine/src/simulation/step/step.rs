#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::bits;
use crate::spatial::cells::CellBuffer;

use super::neighbors::next_byte;
use super::{PerfTimer, UniverseCore};

/// Advance one generation.
///
/// The whole next generation is built in `scratch` from the untouched live
/// buffer, then copied over it. The live buffer keeps its address.
pub(super) fn tick(world: &mut UniverseCore) {
    let perf_on = world.perf_enabled;
    let timer = if perf_on { Some(PerfTimer::start()) } else { None };

    compute_next(&world.cells, &mut world.scratch);

    if perf_on {
        let (births, deaths) = count_transitions(&world.cells, &world.scratch);
        world.perf_stats.reset();
        world.perf_stats.births = births;
        world.perf_stats.deaths = deaths;
    }

    world.cells.commit(&world.scratch);
    world.generation += 1;

    if let Some(timer) = timer {
        let size = world.cells.size();
        world.perf_stats.tick_ms = timer.elapsed_ms();
        world.perf_stats.cells_processed = size as u32;
        world.perf_stats.live_cells = world.cells.live_count() as u32;
        world.perf_stats.generation = world.generation;
        // live + scratch buffers
        world.perf_stats.memory_bytes = (world.cells.byte_len() as u32).saturating_mul(2);
    }
}

/// Fill `next` with the successor of `cells`, one output byte per task.
/// Parallel over output bytes with Rayon when the feature is enabled.
fn compute_next(cells: &CellBuffer, next: &mut [u8]) {
    #[cfg(feature = "parallel")]
    {
        next.par_iter_mut()
            .enumerate()
            .for_each(|(i, b)| *b = next_byte(cells, i));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (i, b) in next.iter_mut().enumerate() {
            *b = next_byte(cells, i);
        }
    }
}

/// (births, deaths) between the live buffer and its successor.
fn count_transitions(cells: &CellBuffer, next: &[u8]) -> (u32, u32) {
    let size = cells.size();
    let mut births = 0u32;
    let mut deaths = 0u32;
    for (i, (&cur, &nxt)) in cells.as_bytes().iter().zip(next.iter()).enumerate() {
        let mask = bits::valid_mask(i, size);
        births += (nxt & !cur & mask).count_ones();
        deaths += (cur & !nxt & mask).count_ones();
    }
    (births, deaths)
}
