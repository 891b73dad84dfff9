use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_fixed_solvers::{Fixed, FixedFormat, FlatSystem, SolverConfig, solve_batch, solve_flat};

/// Diagonally dominant system with a deterministic fill
fn dominant_system(n: usize, fmt: &FixedFormat) -> FlatSystem {
    let mut matrix = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let v = if i == j {
                2.0 * n as f64
            } else {
                ((i * 7 + j * 3) % 5) as f64 * 0.25 - 0.5
            };
            matrix.push(fmt.from_f64(v).unwrap());
        }
    }
    let rhs: Vec<Fixed> = (0..n)
        .map(|i| fmt.from_f64(i as f64 - 1.5).unwrap())
        .collect();
    FlatSystem { matrix, rhs }
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_solve");
    for n in [3usize, 8, 16, 32] {
        let config = SolverConfig::with_dimension(n);
        let system = dominant_system(n, &config.format);
        group.bench_with_input(BenchmarkId::from_parameter(n), &system, |b, system| {
            b.iter(|| solve_flat(black_box(&config), &system.matrix, &system.rhs))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let config = SolverConfig::default();
    let systems: Vec<FlatSystem> = (0..1024)
        .map(|_| dominant_system(3, &config.format))
        .collect();

    c.bench_function("gauss_batch_1024x3", |b| {
        b.iter(|| solve_batch(black_box(&config), black_box(&systems)))
    });
}

criterion_group!(benches, bench_solve, bench_batch);
criterion_main!(benches);
