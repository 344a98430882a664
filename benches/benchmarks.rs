//! Benchmarks for AQ learner operations.

use core::hint::black_box;

use aq_rs::{
    AqLearner, Complex, Config, EncodedExample, ExampleStore, Selector,
    star::{prune_to_maximal, select_top_m}
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn synthetic_rows(n: usize, n_attrs: usize, width: usize) -> Vec<(Vec<usize>, usize)> {
    (0..n)
        .map(|i| {
            let row: Vec<usize> = (0..n_attrs).map(|j| (i * (j + 3) + j) % width).collect();
            let label = (row[0] + row[n_attrs - 1]) % 2;
            (row, label)
        })
        .collect()
}

fn encoded_store(n: usize, n_attrs: usize, width: usize) -> ExampleStore<usize> {
    let mut store = ExampleStore::new();
    for (row, label) in synthetic_rows(n, n_attrs, width) {
        let attributes = row.iter().map(|&v| Selector::one_hot(width, v)).collect();
        store.push(EncodedExample::new(attributes, label));
    }
    store
}

fn specialized_star(n_attrs: usize, width: usize) -> Vec<Complex> {
    let mg = Complex::most_general((0..n_attrs).map(|_| width));
    let seed: Vec<Selector> = (0..n_attrs).map(|j| Selector::one_hot(width, j % width)).collect();
    let mut star = vec![mg];
    for i in 0..width {
        let negative: Vec<Selector> = (0..n_attrs)
            .map(|j| Selector::one_hot(width, (j + i + 1) % width))
            .collect();
        if negative == seed {
            continue;
        }
        let mut next = Vec::new();
        for complex in &star {
            if complex.covers(&negative) {
                next.extend(complex.specialize(&negative, &seed));
            } else {
                next.push(complex.clone());
            }
        }
        // keep the fan-out bounded; variety matters here, not the full star
        next.truncate(40);
        star = next;
    }
    star
}

fn bench_covering(c: &mut Criterion) {
    let mut group = c.benchmark_group("covers");

    for width in [8usize, 32, 128] {
        let complex = Complex::most_general([width, width, width, width]);
        let example: Vec<Selector> =
            (0..4).map(|j| Selector::one_hot(width, j % width)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| black_box(complex.covers(black_box(&example))));
        });
    }

    group.finish();
}

fn bench_specialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("specialize");

    for n_attrs in [4usize, 8, 16] {
        let mg = Complex::most_general((0..n_attrs).map(|_| 8));
        let seed: Vec<Selector> = (0..n_attrs).map(|_| Selector::one_hot(8, 0)).collect();
        let negative: Vec<Selector> = (0..n_attrs).map(|_| Selector::one_hot(8, 3)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(n_attrs), &n_attrs, |b, _| {
            b.iter(|| black_box(mg.specialize(black_box(&negative), black_box(&seed))));
        });
    }

    group.finish();
}

fn bench_prune(c: &mut Criterion) {
    let star = specialized_star(6, 12);
    assert!(star.len() > 1);

    c.bench_function("prune_to_maximal", |b| {
        b.iter(|| black_box(prune_to_maximal(black_box(star.clone()))));
    });
}

fn bench_beam_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_top_m");

    for n_examples in [50usize, 200] {
        let store = encoded_store(n_examples, 6, 12);
        let star = specialized_star(6, 12);

        group.bench_with_input(
            BenchmarkId::from_parameter(n_examples),
            &n_examples,
            |b, _| {
                b.iter(|| black_box(select_top_m(4, black_box(star.clone()), &0usize, &store)));
            }
        );
    }

    group.finish();
}

fn bench_induction(c: &mut Criterion) {
    let mut group = c.benchmark_group("induce_rules");
    group.sample_size(20);

    for n_rows in [25usize, 50, 100] {
        let width = 5;
        let domains: Vec<Vec<usize>> = (0..4).map(|_| (0..width).collect()).collect();
        let rows = synthetic_rows(n_rows, 4, width);

        group.bench_with_input(BenchmarkId::from_parameter(n_rows), &n_rows, |b, _| {
            b.iter(|| {
                let config = Config::builder().beam_width(3).build().unwrap();
                let mut learner = AqLearner::new(config, domains.clone()).unwrap();
                learner.load_training_data(&rows).unwrap();
                black_box(learner.induce_rules().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_covering,
    bench_specialize,
    bench_prune,
    bench_beam_select,
    bench_induction
);
criterion_main!(benches);
