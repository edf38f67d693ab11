use common::{Dir4, Vec2};
use container::{Container, DefId, Located, Tile};
use fxhash::FxHashSet;
use grid::{GridError, NO_INDEX};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn tile(def: u32, x: i32, y: i32) -> Tile {
    Tile::new(DefId(def), Dir4::Up, Vec2::new(x, y))
}

fn assert_consistent(container: &Container) {
    let grid = container.grid();
    let mut seen = FxHashSet::default();
    for location in grid.locations() {
        let slot = *grid.get_at(location);
        if slot == NO_INDEX {
            continue;
        }
        assert_eq!(container.tiles()[slot].location(), location);
        assert!(seen.insert(slot), "slot {} referenced twice", slot);
    }
    assert_eq!(seen.len(), container.len());
}

#[test]
fn test_new_rejects_bad_size() {
    assert_eq!(
        Container::<Tile>::new(Vec2::new(0, 5)).unwrap_err(),
        GridError::NonPositiveSize
    );
}

#[test]
fn test_add_and_get() {
    let mut container = Container::new(Vec2::new(8, 8)).unwrap();
    assert!(container.is_empty());
    assert!(container.add_tile(tile(3, 2, 5)));
    assert_eq!(container.len(), 1);
    assert_eq!(container.count(), 64);

    let stored = container.get_tile_at(Vec2::new(2, 5)).unwrap();
    assert_eq!(stored.definition(), DefId(3));
    assert_eq!(stored.rotation(), Dir4::Up);
    assert_eq!(container.get_tile_at_unchecked(Vec2::new(2, 5)), stored);
    assert!(container.get_tile_at(Vec2::new(5, 2)).is_none());
    assert!(container.get_tile_at(Vec2::new(-1, 2)).is_none());
}

#[test]
fn test_add_out_of_bounds_does_not_mutate() {
    let mut container = Container::new(Vec2::new(4, 4)).unwrap();
    assert!(!container.add_tile(tile(1, 4, 0)));
    assert!(!container.add_tile(tile(1, 0, -1)));
    assert!(container.tiles().is_empty());
    assert!(container.is_empty());
}

#[test]
fn test_remove() {
    let mut container = Container::new(Vec2::new(4, 4)).unwrap();
    container.add_tile(tile(1, 1, 1));
    assert!(!container.remove_tile_at(Vec2::new(2, 2)));
    assert!(!container.remove_tile_at(Vec2::new(9, 9)));
    assert!(container.remove_tile_at(Vec2::new(1, 1)));
    assert!(container.get_tile_at(Vec2::new(1, 1)).is_none());
    assert!(!container.remove_tile_at(Vec2::new(1, 1)));
    // The payload is left behind in its slot.
    assert_eq!(container.tiles().len(), 1);
    assert!(container.is_empty());
}

#[test]
fn test_slot_reuse_is_lifo() {
    let mut container = Container::new(Vec2::new(10, 10)).unwrap();
    let a = tile(1, 1, 1);
    let b = tile(2, 7, 3);
    container.add_tile(tile(9, 0, 0));
    container.add_tile(a);
    let slot_a = container.slot_index_at(Vec2::new(1, 1));

    assert!(container.remove_tile_at(Vec2::new(1, 1)));
    assert!(container.add_tile(b));
    assert_eq!(container.slot_index_at(Vec2::new(7, 3)), slot_a);
    assert!(container.get_tile_at(Vec2::new(1, 1)).is_none());
    assert_eq!(container.get_tile_at(Vec2::new(7, 3)), Some(&b));

    container.remove_tile_at(Vec2::new(0, 0));
    container.remove_tile_at(Vec2::new(7, 3));
    container.add_tile(tile(3, 4, 4));
    assert_eq!(container.slot_index_at(Vec2::new(4, 4)), slot_a);
    assert_eq!(container.tiles().len(), 2);
}

#[test]
fn test_add_into_occupied_cell_replaces() {
    let mut container = Container::new(Vec2::new(4, 4)).unwrap();
    container.add_tile(tile(1, 2, 2));
    let slot = container.slot_index_at(Vec2::new(2, 2));
    container.add_tile(tile(5, 2, 2));
    assert_eq!(container.slot_index_at(Vec2::new(2, 2)), slot);
    assert_eq!(container.get_tile_at(Vec2::new(2, 2)).unwrap().definition(), DefId(5));
    assert_eq!(container.len(), 1);
    assert_consistent(&container);
}

#[test]
fn test_unchecked_variants() {
    let mut container = Container::new(Vec2::new(3, 3)).unwrap();
    container.add_tile_unchecked(tile(1, 0, 0));
    container.add_tile_unchecked(tile(2, 2, 2));
    assert_eq!(container.get_tile_at_unchecked(Vec2::new(2, 2)).definition(), DefId(2));
    container.remove_tile_at_unchecked(Vec2::new(0, 0));
    assert!(container.get_tile_at(Vec2::new(0, 0)).is_none());
    container.add_tile_unchecked(tile(3, 1, 0));
    assert_eq!(container.slot_index_at(Vec2::new(1, 0)), 0);
    assert_consistent(&container);
}

#[test]
fn test_iter_skips_stale_slots() {
    let mut container = Container::new(Vec2::new(5, 5)).unwrap();
    for x in 0..5 {
        container.add_tile(tile(x as u32, x, x));
    }
    container.remove_tile_at(Vec2::new(1, 1));
    container.remove_tile_at(Vec2::new(3, 3));
    let defs: FxHashSet<DefId> = container.iter().map(|t| t.definition()).collect();
    assert_eq!(defs, [DefId(0), DefId(2), DefId(4)].into_iter().collect());
    assert_eq!(container.tiles().len(), 5);

    container.clear();
    assert!(container.is_empty());
    assert_eq!(container.iter().count(), 0);
}

#[test]
fn test_random_add_remove_keeps_invariant() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut container = Container::new(Vec2::new(16, 12)).unwrap();
    let mut high_water = 0;
    for step in 0..5_000u32 {
        let location = Vec2::new(rng.gen_range(-2..18), rng.gen_range(-2..14));
        let in_bounds = container.grid().is_valid_location(location);
        if rng.gen_bool(0.55) {
            let rotation = Dir4::ALL[rng.gen_range(0..4)];
            let added = container.add_tile(Tile::new(DefId(step), rotation, location));
            assert_eq!(added, in_bounds);
        } else {
            let occupied = container.get_tile_at(location).is_some();
            assert_eq!(container.remove_tile_at(location), occupied);
        }
        high_water = high_water.max(container.len());
        assert_consistent(&container);
    }
    assert_eq!(container.tiles().len(), high_water);
}
