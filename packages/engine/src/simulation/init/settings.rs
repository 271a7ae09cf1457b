use super::perf_stats::PerfStats;
use super::random::Xorshift32;
use super::UniverseCore;

pub(super) fn enable_perf_metrics(world: &mut UniverseCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn perf_enabled(world: &UniverseCore) -> bool {
    world.perf_enabled
}

pub(super) fn get_perf_stats(world: &UniverseCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn reseed(world: &mut UniverseCore, seed: u32) {
    world.rng = Xorshift32::new(seed);
}
