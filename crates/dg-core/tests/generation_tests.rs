use dg_core::dungeon::{Dungeon, Grid, PlacementOutcome, Range, Room, TileKind, carve_corridor};
use dg_core::{DungeonConfig, DungeonRng, GenerationError, generate};
use proptest::prelude::*;

fn config(width: usize, height: usize, rooms: usize, size: Range) -> DungeonConfig {
    DungeonConfig::default()
        .with_size(width, height)
        .with_room_count(rooms)
        .with_room_size(size)
}

fn rooms_overlap(a: &Room, b: &Room) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.bottom() < b.top() && b.bottom() < a.top()
}

/// Cells a corridor between two centers passes through
fn corridor_cells(from: (usize, usize), to: (usize, usize)) -> Vec<(usize, usize)> {
    let (ax, az) = from;
    let (bx, bz) = to;
    let xs = ax.min(bx)..=ax.max(bx);
    let zs = az.min(bz)..=az.max(bz);
    xs.map(|x| (x, az)).chain(zs.map(|z| (bx, z))).collect()
}

fn assert_layout_invariants(dungeon: &Dungeon) {
    let grid = &dungeon.grid;
    assert_eq!(grid.width(), dungeon.config.width);
    assert_eq!(grid.height(), dungeon.config.height);
    assert_eq!(dungeon.rooms.len(), dungeon.outcome.placed());

    for (i, a) in dungeon.rooms.iter().enumerate() {
        assert!(a.right() < grid.width() && a.top() < grid.height());
        for b in &dungeon.rooms[i + 1..] {
            assert!(!rooms_overlap(a, b), "{a:?} overlaps {b:?}");
        }
        // room floor is never walled over later
        for x in a.left() + 1..a.right() - 1 {
            for z in a.bottom() + 1..a.top() - 1 {
                assert_eq!(grid[(x, z)], TileKind::Floor);
            }
        }
    }

    for corridor in &dungeon.corridors {
        let from = dungeon.rooms[corridor.from].center();
        let to = dungeon.rooms[corridor.to].center();
        for (x, z) in corridor_cells(from, to) {
            assert_eq!(grid[(x, z)], TileKind::Floor, "corridor cell ({x}, {z})");
        }
    }
}

#[test]
fn test_twenty_by_twenty_example() {
    for seed in [1, 7, 42, 1337] {
        let dungeon = generate(config(20, 20, 4, Range::new(4, 10)), DungeonRng::new(seed)).unwrap();
        assert_layout_invariants(&dungeon);

        for room in &dungeon.rooms {
            let (cx, cz) = room.center();
            assert_eq!(dungeon.grid[(cx, cz)], TileKind::Floor);
            // border cells are wall unless a corridor cut through
            for x in room.left()..room.right() {
                for z in [room.bottom(), room.top() - 1] {
                    assert_ne!(dungeon.grid[(x, z)], TileKind::Empty);
                }
            }
        }

        // every room but the last is a corridor source
        assert_eq!(dungeon.corridors.len(), dungeon.rooms.len().saturating_sub(1));
        for (i, corridor) in dungeon.corridors.iter().enumerate() {
            assert_eq!(corridor.from, i);
            assert!(corridor.to > corridor.from);
        }
    }
}

#[test]
fn test_overcrowded_grid_keeps_partial_layout() {
    for seed in 0..20 {
        let dungeon = generate(config(5, 5, 3, Range::fixed(4)), DungeonRng::new(seed)).unwrap();
        assert!(dungeon.is_partial());
        assert!(dungeon.rooms.len() <= 1);
        assert!(dungeon.corridors.is_empty());
        assert_eq!((dungeon.grid.width(), dungeon.grid.height()), (5, 5));

        match dungeon.outcome {
            PlacementOutcome::Exhausted {
                placed,
                requested,
                cause,
            } => {
                assert_eq!(requested, 3);
                assert_eq!(cause.slot, placed);
                assert_eq!(cause.attempts, 6);
            }
            PlacementOutcome::Complete { .. } => panic!("three rooms cannot fit in 5x5"),
        }

        if let Some(room) = dungeon.rooms.first() {
            assert_eq!((room.x, room.z), (0, 0));
            assert_eq!(dungeon.grid.count(TileKind::Floor), 4);
        } else {
            assert_eq!(dungeon.grid.count(TileKind::Empty), 25);
        }
    }
}

#[test]
fn test_single_room_has_no_connection_candidate() {
    for seed in 0..5 {
        let result = generate(config(100, 100, 1, Range::fixed(4)), DungeonRng::new(seed));
        assert!(
            matches!(result, Err(GenerationError::NoConnectionCandidate { room: 0 })),
            "seed {seed}: {result:?}"
        );
    }
}

#[test]
fn test_single_room_that_does_not_fit_has_no_connection_candidate() {
    let result = generate(config(3, 3, 1, Range::fixed(4)), DungeonRng::new(0));
    assert!(
        matches!(result, Err(GenerationError::NoConnectionCandidate { room: 0 })),
        "{result:?}"
    );
}

#[test]
fn test_invalid_configuration_aborts() {
    let result = generate(config(10, 10, 2, Range::new(8, 4)), DungeonRng::new(0));
    assert!(matches!(
        result,
        Err(GenerationError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_same_seed_same_dungeon() {
    let cfg = config(48, 32, 8, Range::new(4, 10));
    let a = generate(cfg.clone(), DungeonRng::new(2024)).unwrap();
    let b = generate(cfg, DungeonRng::new(2024)).unwrap();
    assert_eq!(a.grid, b.grid);
    assert_eq!(a.rooms, b.rooms);
    assert_eq!(a.corridors, b.corridors);
    assert_eq!(a.seed, 2024);
}

#[test]
fn test_vertical_corridor_between_rooms() {
    let mut grid = Grid::new(12, 12).unwrap();
    let a = Room::new(0, 0, 4, 4);
    let b = Room::new(0, 6, 4, 4);
    assert_eq!(a.center(), (2, 2));
    assert_eq!(b.center(), (2, 8));
    assert!(a.can_place(&grid));
    a.place(&mut grid);
    assert!(b.can_place(&grid));
    b.place(&mut grid);

    let before = grid.clone();
    carve_corridor(&mut grid, a.center(), b.center());

    for z in 2..=8 {
        assert_eq!(grid[(2, z)], TileKind::Floor);
        for x in [1, 3] {
            let expected = if before[(x, z)] == TileKind::Floor {
                TileKind::Floor
            } else {
                TileKind::Wall
            };
            assert_eq!(grid[(x, z)], expected, "({x}, {z})");
        }
    }
}

#[test]
fn test_dungeon_serializes_to_json() {
    let dungeon = generate(config(24, 24, 3, Range::new(4, 8)), DungeonRng::new(5)).unwrap();
    let value = serde_json::to_value(&dungeon).unwrap();
    assert_eq!(value["seed"], 5);
    assert_eq!(value["grid"]["width"], 24);
    assert_eq!(value["grid"]["tiles"].as_array().unwrap().len(), 24 * 24);
    assert_eq!(value["config"]["room_count"], 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_layout_invariants_hold(
        seed in any::<u64>(),
        width in 1usize..48,
        height in 1usize..48,
        rooms in 2usize..8,
        min in 3usize..7,
        span in 1usize..6,
    ) {
        let cfg = config(width, height, rooms, Range::new(min, min + span));
        let dungeon = generate(cfg, DungeonRng::new(seed)).unwrap();
        assert_layout_invariants(&dungeon);
        prop_assert_eq!(dungeon.corridors.len(), dungeon.rooms.len().saturating_sub(1));
    }

    #[test]
    fn prop_generation_is_deterministic(seed in any::<u64>(), rooms in 2usize..6) {
        let cfg = config(30, 30, rooms, Range::new(4, 9));
        let a = generate(cfg.clone(), DungeonRng::new(seed)).unwrap();
        let b = generate(cfg, DungeonRng::new(seed)).unwrap();
        prop_assert_eq!(a.grid, b.grid);
        prop_assert_eq!(a.outcome, b.outcome);
    }
}
