use criterion::{criterion_group, criterion_main, Criterion};
use sparse_life::{random_cells, step, Generation};

const SEED: u64 = 42;

fn soup(count: usize, radius: i64) -> Generation {
    random_cells(count, radius, Some(SEED)).into_iter().collect()
}

fn step_soup(c: &mut Criterion) {
    for (count, radius) in [(300, 10), (3_000, 40), (30_000, 150)] {
        let generation = soup(count, radius);
        c.bench_function(&format!("step_{}", count), |b| b.iter(|| step(&generation)));
    }
}

fn run_100(c: &mut Criterion) {
    let start = soup(1_000, 25);
    c.bench_function("run_100", |b| {
        b.iter(|| {
            let mut generation = start.clone();
            for _ in 0..100 {
                generation = step(&generation);
            }
            generation
        })
    });
}

criterion_group!(benches, step_soup, run_100);
criterion_main!(benches);
