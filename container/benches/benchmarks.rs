use common::{Dir4, Vec2};
use container::{Container, DefId, Tile};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

const SIZE: Vec2<i32> = Vec2::new(256, 256);

fn random_location(rng: &mut StdRng) -> Vec2<i32> {
    Vec2::new(rng.gen_range(0..SIZE.x), rng.gen_range(0..SIZE.y))
}

fn populated(rng: &mut StdRng, count: u32) -> Container {
    let mut container = Container::new(SIZE).unwrap();
    for id in 0..count {
        container.add_tile(Tile::new(DefId(id), Dir4::Up, random_location(rng)));
    }
    container
}

fn churn_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut container = populated(&mut rng, 20_000);
    let mut id = 0;

    c.bench_function("container_add_remove", |b| {
        b.iter(|| {
            id += 1;
            container.remove_tile_at(black_box(random_location(&mut rng)));
            container.add_tile(black_box(Tile::new(
                DefId(id),
                Dir4::Right,
                random_location(&mut rng),
            )));
        })
    });
}

fn lookup_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let container = populated(&mut rng, 20_000);

    c.bench_function("container_get_tile_at", |b| {
        b.iter(|| container.get_tile_at(black_box(random_location(&mut rng))))
    });
}

criterion_group!(container_benchmarks, churn_benchmark, lookup_benchmark);
criterion_main!(container_benchmarks);
