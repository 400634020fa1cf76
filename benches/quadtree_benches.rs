use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quadtree_index::simulation::count_overlaps;
use quadtree_index::{Point, Quadtree, Rectangle};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const CAPACITY: usize = 4;

fn get_rand() -> impl rand::Rng {
    SmallRng::seed_from_u64(0xdeadbeef)
}

fn random_point(rng: &mut impl Rng, size: f64) -> Point {
    Point::new(rng.gen_range(0.0, size), rng.gen_range(0.0, size))
}

fn make_tree(rng: &mut impl Rng, len: usize, size: f64) -> Quadtree {
    let half = size / 2.0;
    let mut tree = Quadtree::from_xywh(half, half, half, half, CAPACITY).unwrap();
    for _ in 0..len {
        // points on a split line are simply skipped
        let _ = tree.insert(random_point(rng, size));
    }
    tree
}

fn query_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadtree query sparse");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();

            let tree = make_tree(&mut rng, size, 7800.0);

            let mut res = Vec::new();
            b.iter(|| {
                res.clear();
                let p = random_point(&mut rng, 7800.0);
                tree.query_into(&Rectangle::from_center(p, 512.0, 512.0), &mut res);
                black_box(&res);
            });
        });
    }
    group.finish();
}

fn query_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadtree query dense");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();

            let tree = make_tree(&mut rng, size, 400.0);

            b.iter(|| {
                let p = random_point(&mut rng, 400.0);
                tree.query(&Rectangle::from_center(p, 50.0, 50.0))
            });
        });
    }
    group.finish();
}

fn build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadtree build");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();

            b.iter(|| make_tree(&mut rng, size, 7800.0));
        });
    }
    group.finish();
}

fn rebuild_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadtree rebuild after clear");
    for size in 8..16 {
        let size = 1 << size;

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let points = (0..size)
                .map(|_| random_point(&mut rng, 3900.0))
                .collect::<Vec<_>>();

            let mut tree = Quadtree::from_xywh(1950.0, 1950.0, 1950.0, 1950.0, CAPACITY).unwrap();

            b.iter(|| {
                tree.clear();
                for p in points.iter() {
                    let _ = tree.insert(*p);
                }
            });
        });
    }
    group.finish();
}

fn random_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadtree random_insert");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let mut tree = make_tree(&mut rng, size, 29000.0);

            b.iter(|| tree.insert(random_point(&mut rng, 29000.0)));
        });
    }
    group.finish();
}

fn overlaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadtree count_overlaps");
    group.sample_size(10);
    for size in 10..15 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let points = (0..size)
                .map(|_| random_point(&mut rng, 200.0))
                .collect::<Vec<_>>();
            let mut tree = Quadtree::from_xywh(100.0, 100.0, 100.0, 100.0, CAPACITY).unwrap();
            let points = points
                .into_iter()
                .filter(|p| tree.insert(*p).is_ok())
                .collect::<Vec<_>>();

            b.iter(|| count_overlaps(&tree, &points, 10.0, 3.0));
        });
    }
    group.finish();
}

criterion_group!(
    quadtree_benches,
    query_sparse,
    query_dense,
    build_tree,
    random_insert,
    rebuild_tree,
    overlaps,
);

criterion_main!(quadtree_benches);
