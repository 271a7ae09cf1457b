use super::*;

fn dead(width: u32, height: u32) -> UniverseCore {
    UniverseCore::new(width, height, SeedMode::AllDead).unwrap()
}

fn alive_cells(world: &UniverseCore) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for row in 0..world.height() {
        for col in 0..world.width() {
            if world.is_alive(row, col).unwrap() {
                out.push((row, col));
            }
        }
    }
    out
}

#[test]
fn create_rejects_zero_dimensions() {
    for (w, h) in [(0, 5), (5, 0), (0, 0)] {
        assert_eq!(
            UniverseCore::new(w, h, SeedMode::AllDead).err(),
            Some(GridError::InvalidDimension { width: w, height: h })
        );
    }
    assert!(UniverseCore::square(0, SeedMode::Random).is_err());
}

#[test]
fn square_is_size_by_size() {
    let world = UniverseCore::square(7, SeedMode::AllDead).unwrap();
    assert_eq!(world.width(), 7);
    assert_eq!(world.height(), 7);
    assert_eq!(world.buffer_view().len(), 7);
    assert_eq!(world.live_count(), 0);
}

#[test]
fn buffer_is_packed_lsb_first() {
    let mut world = dead(3, 3);
    world.toggle_cell(0, 0).unwrap();
    world.toggle_cell(1, 1).unwrap();
    world.toggle_cell(2, 2).unwrap();

    let view = world.buffer_view();
    assert_eq!(view.len(), 2);
    assert_eq!(view[0], 0b0001_0001);
    assert_eq!(view[1], 0b0000_0001);

    for n in 0..9usize {
        let bit = (view[n / 8] >> (n % 8)) & 1;
        assert_eq!(bit == 1, n == 0 || n == 4 || n == 8, "bit {}", n);
    }
}

#[test]
fn out_of_bounds_toggle_leaves_buffer_untouched() {
    let mut world = UniverseCore::with_seed(5, 4, SeedMode::Random, 99).unwrap();
    let before = world.buffer_view().to_vec();

    assert_eq!(
        world.toggle_cell(4, 0),
        Err(GridError::OutOfBounds { row: 4, col: 0, width: 5, height: 4 })
    );
    assert_eq!(
        world.toggle_cell(0, 5),
        Err(GridError::OutOfBounds { row: 0, col: 5, width: 5, height: 4 })
    );
    assert_eq!(world.buffer_view(), &before[..]);
}

#[test]
fn toggle_twice_restores_every_cell() {
    let mut world = UniverseCore::with_seed(6, 5, SeedMode::Random, 3).unwrap();
    let before = world.buffer_view().to_vec();
    for row in 0..5 {
        for col in 0..6 {
            let was = world.is_alive(row, col).unwrap();
            world.toggle_cell(row, col).unwrap();
            assert_eq!(world.is_alive(row, col).unwrap(), !was);
            world.toggle_cell(row, col).unwrap();
        }
    }
    assert_eq!(world.buffer_view(), &before[..]);
}

#[test]
fn block_is_a_still_life() {
    let mut world = dead(6, 6);
    world.set_cells(&[(2, 2), (2, 3), (3, 2), (3, 3)]).unwrap();
    let before = world.buffer_view().to_vec();

    world.tick();
    assert_eq!(world.buffer_view(), &before[..]);
    world.tick();
    assert_eq!(alive_cells(&world), vec![(2, 2), (2, 3), (3, 2), (3, 3)]);
}

#[test]
fn blinker_has_period_two() {
    let mut world = dead(6, 6);
    world.set_cells(&[(2, 1), (2, 2), (2, 3)]).unwrap();

    world.tick();
    assert_eq!(alive_cells(&world), vec![(1, 2), (2, 2), (3, 2)]);

    world.tick();
    assert_eq!(alive_cells(&world), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(world.generation(), 2);
}

#[test]
fn glider_wraps_around_the_torus() {
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    let mut world = dead(8, 8);
    world.set_cells(&glider).unwrap();
    let start = world.buffer_view().to_vec();

    // One diagonal step every 4 generations.
    for _ in 0..4 {
        world.tick();
    }
    let mut expected: Vec<(u32, u32)> = glider.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    expected.sort();
    assert_eq!(alive_cells(&world), expected);

    // 8 diagonal steps on an 8x8 torus lands back home.
    for _ in 4..32 {
        world.tick();
    }
    assert_eq!(world.buffer_view(), &start[..]);
}

#[test]
fn single_cell_grid_counts_itself_eight_times() {
    let mut world = dead(1, 1);
    world.toggle_cell(0, 0).unwrap();
    world.tick();
    // 8 neighbours, all itself -> overpopulation
    assert_eq!(world.is_alive(0, 0), Ok(false));

    world.tick();
    assert_eq!(world.is_alive(0, 0), Ok(false));
}

#[test]
fn one_row_grid_uses_wrapped_neighbours() {
    // Every lookup on a 1x3 torus lands in the same row, so the lone
    // cell at col 0 is seen 3 times by each of its neighbours.
    let mut world = dead(3, 1);
    world.toggle_cell(0, 0).unwrap();
    world.tick();
    assert_eq!(alive_cells(&world), vec![(0, 0), (0, 1), (0, 2)]);

    // Full row: every cell sees 8 live neighbours and dies.
    world.tick();
    assert_eq!(world.live_count(), 0);
}

#[test]
fn identical_seeds_evolve_identically() {
    let mut a = UniverseCore::with_seed(32, 24, SeedMode::Random, 2024).unwrap();
    let mut b = UniverseCore::with_seed(32, 24, SeedMode::Random, 2024).unwrap();
    assert_eq!(a.buffer_view(), b.buffer_view());

    a.tick();
    a.tick();
    b.tick();
    b.tick();
    assert_eq!(a.buffer_view(), b.buffer_view());
}

#[test]
fn size_is_conserved_by_mutations() {
    let mut world = UniverseCore::with_seed(13, 7, SeedMode::Random, 5).unwrap();
    let len = world.buffer_view().len();

    world.tick();
    world.toggle_cell(6, 12).unwrap();
    world.randomize();

    assert_eq!(world.width(), 13);
    assert_eq!(world.height(), 7);
    assert_eq!(world.buffer_view().len(), len);
    assert_eq!(len, (13 * 7 + 7) / 8);
}

#[test]
fn pointer_is_stable_until_resize() {
    let mut world = UniverseCore::with_seed(16, 16, SeedMode::Random, 1).unwrap();
    let ptr = world.cells_ptr();

    world.tick();
    world.toggle_cell(0, 0).unwrap();
    world.randomize();
    world.clear();
    assert_eq!(world.cells_ptr(), ptr);

    world.resize(40, 10).unwrap();
    assert_eq!(world.cells_len_bytes(), 50);
    assert_eq!(world.cells_len_bits(), 400);
}

#[test]
fn resize_replaces_grid_with_dead_cells() {
    let mut world = UniverseCore::with_seed(8, 8, SeedMode::Random, 11).unwrap();
    world.tick();

    world.resize(5, 3).unwrap();
    assert_eq!((world.width(), world.height()), (5, 3));
    assert_eq!(world.live_count(), 0);
    assert_eq!(world.generation(), 0);

    // Stepping after resize uses the new scratch size.
    world.set_cells(&[(1, 1), (1, 2), (1, 3)]).unwrap();
    world.tick();
    assert_eq!(world.live_count(), 3);
}

#[test]
fn failed_resize_keeps_the_old_grid() {
    let mut world = dead(4, 4);
    world.toggle_cell(1, 1).unwrap();

    assert_eq!(
        world.resize(0, 9),
        Err(GridError::InvalidDimension { width: 0, height: 9 })
    );
    assert_eq!((world.width(), world.height()), (4, 4));
    assert_eq!(world.is_alive(1, 1), Ok(true));
}

#[test]
fn set_cells_is_all_or_nothing() {
    let mut world = dead(4, 4);
    let err = world.set_cells(&[(0, 0), (1, 1), (4, 4)]).unwrap_err();
    assert_eq!(err, GridError::OutOfBounds { row: 4, col: 4, width: 4, height: 4 });
    assert_eq!(world.live_count(), 0);
}

#[test]
fn set_cell_and_cell_round_trip() {
    let mut world = dead(4, 4);
    world.set_cell(3, 0, Cell::Alive).unwrap();
    assert_eq!(world.cell(3, 0), Ok(Cell::Alive));
    world.set_cell(3, 0, Cell::Dead).unwrap();
    assert_eq!(world.cell(3, 0), Ok(Cell::Dead));
    assert!(world.cell(0, 4).is_err());
}

#[test]
fn randomize_with_fixed_pattern_is_exact() {
    let mut world = dead(3, 3);
    let mut next = false;
    let mut alternate = move || {
        next = !next;
        next
    };
    world.randomize_with(&mut alternate);

    // Cells 0, 2, 4, 6, 8 alive; padding stays clear.
    assert_eq!(world.buffer_view(), &[0b0101_0101, 0b0000_0001]);
}

#[test]
fn random_mode_draws_one_bit_per_cell_from_source() {
    let mut drawn = 0;
    let mut all_alive = || {
        drawn += 1;
        true
    };
    let world = UniverseCore::with_source(5, 2, SeedMode::Random, &mut all_alive).unwrap();
    assert_eq!(drawn, 10);
    assert_eq!(world.live_count(), 10);
    assert_eq!(world.buffer_view(), &[0xFF, 0b0000_0011]);
}

#[test]
fn all_dead_mode_ignores_source() {
    let mut drawn = 0;
    let mut source = || {
        drawn += 1;
        true
    };
    let world = UniverseCore::with_source(5, 2, SeedMode::AllDead, &mut source).unwrap();
    assert_eq!(drawn, 0);
    assert_eq!(world.live_count(), 0);
}

#[test]
fn reseed_makes_randomize_repeatable() {
    let mut world = dead(20, 20);
    world.reseed(77);
    world.randomize();
    let first = world.buffer_view().to_vec();

    world.reseed(77);
    world.randomize();
    assert_eq!(world.buffer_view(), &first[..]);
    assert!(world.live_count() > 0);
}

#[test]
fn clear_kills_everything_and_resets_generation() {
    let mut world = UniverseCore::with_seed(10, 10, SeedMode::Random, 8).unwrap();
    world.tick();
    world.clear();
    assert_eq!(world.live_count(), 0);
    assert_eq!(world.generation(), 0);
}

#[test]
fn perf_stats_count_births_and_deaths() {
    let mut world = dead(6, 6);
    world.set_cells(&[(2, 1), (2, 2), (2, 3)]).unwrap();

    world.tick();
    let stats = world.get_perf_stats();
    assert_eq!(stats.births(), 0);
    assert_eq!(stats.tick_ms(), 0.0);

    world.enable_perf_metrics(true);
    world.tick();
    let stats = world.get_perf_stats();
    assert_eq!(stats.births(), 2);
    assert_eq!(stats.deaths(), 2);
    assert_eq!(stats.live_cells(), 3);
    assert_eq!(stats.cells_processed(), 36);
    assert_eq!(stats.generation(), 2);
    assert!(stats.tick_ms() >= 0.0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats().live_cells(), 0);
}

#[test]
fn display_draws_one_line_per_row() {
    let mut world = dead(3, 2);
    world.set_cells(&[(0, 0), (1, 2)]).unwrap();
    assert_eq!(world.to_string(), "◼◻◻\n◻◻◼\n");
}

#[test]
fn config_json_builds_reproducible_universes() {
    let json = r#"{"width": 12, "height": 9, "seed": 4, "perf_metrics": true}"#;
    let a = UniverseCore::from_config_json(json).unwrap();
    let b = UniverseCore::from_config_json(json).unwrap();
    assert_eq!((a.width(), a.height()), (12, 9));
    assert_eq!(a.buffer_view(), b.buffer_view());
    assert!(a.perf_enabled());

    let dead = UniverseCore::from_config_json(r#"{"seed_mode": "all_dead"}"#).unwrap();
    assert_eq!((dead.width(), dead.height()), (64, 64));
    assert_eq!(dead.live_count(), 0);
}

#[test]
fn config_errors_are_typed() {
    assert!(matches!(
        UniverseCore::from_config_json("not json"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        UniverseCore::from_config_json(r#"{"height": 0}"#),
        Err(ConfigError::Grid(GridError::InvalidDimension { width: 64, height: 0 }))
    ));
}
