use common::Vec2;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::{Positioned, Quadtree};
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
struct Body {
    id: u32,
    pos: Vec2<f32>,
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Positioned<f32> for Body {
    fn position(&self) -> Vec2<f32> {
        self.pos
    }
}

const MIN: Vec2<f32> = Vec2::new(0.0, 0.0);
const MAX: Vec2<f32> = Vec2::new(1000.0, 1000.0);

fn populated(rng: &mut StdRng, count: u32) -> (Quadtree<Body, f32>, Vec<Body>) {
    let mut quadtree = Quadtree::new(MIN, MAX).unwrap();
    let mut bodies = Vec::new();
    for id in 0..count {
        let body = Body {
            id,
            pos: Vec2::random_in(MIN, MAX, rng),
        };
        quadtree.add_item(body);
        bodies.push(body);
    }
    (quadtree, bodies)
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut quadtree: Quadtree<Body, f32> = Quadtree::new(MIN, MAX).unwrap();
    let mut id = 0;

    c.bench_function("quadtree_insert", |b| {
        b.iter(|| {
            id += 1;
            let body = Body {
                id,
                pos: Vec2::random_in(MIN, MAX, &mut rng),
            };
            quadtree.add_item(black_box(body));
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let (mut quadtree, bodies) = populated(&mut rng, 10_000);

    c.bench_function("quadtree_remove_reinsert", |b| {
        b.iter(|| {
            let body = bodies[rng.gen_range(0..bodies.len())];
            quadtree.remove_item(black_box(&body));
            quadtree.add_item(body);
        })
    });
}

fn item_moved_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let (mut quadtree, mut bodies) = populated(&mut rng, 10_000);

    c.bench_function("quadtree_item_moved", |b| {
        b.iter(|| {
            let idx = rng.gen_range(0..bodies.len());
            let old = bodies[idx].pos;
            let step = Vec2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
            bodies[idx].pos = (old + step).max(MIN).min(Vec2::new(999.0, 999.0));
            quadtree.item_moved(black_box(bodies[idx]), old);
        })
    });
}

fn find_items_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let (quadtree, _) = populated(&mut rng, 10_000);
    let mut found = Vec::new();

    c.bench_function("quadtree_find_items", |b| {
        b.iter(|| {
            found.clear();
            quadtree.find_items(
                black_box(Vec2::new(400.0, 400.0)),
                black_box(Vec2::new(600.0, 600.0)),
                &mut found,
            );
        })
    });
}

criterion_group!(
    quadtree_benchmarks,
    insert_benchmark,
    remove_benchmark,
    item_moved_benchmark,
    find_items_benchmark
);
criterion_main!(quadtree_benchmarks);
