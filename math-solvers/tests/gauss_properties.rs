//! Property tests for the fixed-point Gaussian solver
//!
//! Random systems are generated from fixed seeds so failures are reproducible.

use approx::assert_abs_diff_eq;
use math_fixed_solvers::matrix::{matrix_from_flat, upper_residual};
use math_fixed_solvers::{
    Fixed, FixedFormat, FlatSystem, Overflow, Private, RowSwap, SolverConfig, eliminate,
    gauss_factorize, solve_batch, solve_flat, solve_private,
};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Diagonally dominant system as reals: diagonal 2n, off-diagonal in [-1, 1)
fn dominant_system(rng: &mut StdRng, n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut a = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            a[i * n + j] = if i == j {
                2.0 * n as f64 + rng.random_range(0.0..1.0)
            } else {
                rng.random_range(-1.0..1.0)
            };
        }
    }
    let b = (0..n).map(|_| rng.random_range(-4.0..4.0)).collect();
    (a, b)
}

/// Reference solution in f64 (no pivoting needed for dominant systems)
fn reference_solve(n: usize, a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut m = a.to_vec();
    let mut y = b.to_vec();
    for i in 0..n {
        for k in (i + 1)..n {
            let f = m[k * n + i] / m[i * n + i];
            for j in i..n {
                m[k * n + j] -= f * m[i * n + j];
            }
            y[k] -= f * y[i];
        }
    }
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut s = y[i];
        for j in (i + 1)..n {
            s -= m[i * n + j] * x[j];
        }
        x[i] = s / m[i * n + i];
    }
    x
}

fn to_fixed(fmt: &FixedFormat, values: &[f64]) -> Vec<Fixed> {
    values.iter().map(|&v| fmt.from_f64(v).unwrap()).collect()
}

#[test]
fn test_dominant_systems_match_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for n in 1..=6 {
        for _ in 0..20 {
            let config = SolverConfig::with_dimension(n);
            let fmt = config.format;
            let (a, b) = dominant_system(&mut rng, n);

            let x = solve_flat(&config, &to_fixed(&fmt, &a), &to_fixed(&fmt, &b)).unwrap();
            let expected = reference_solve(n, &a, &b);

            for (xi, ei) in x.iter().zip(expected.iter()) {
                assert_abs_diff_eq!(fmt.to_f64(*xi), *ei, epsilon = 1e-3);
            }
        }
    }
}

#[test]
fn test_transformed_system_is_reproduced() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 1..=6 {
        for _ in 0..20 {
            let config = SolverConfig::with_dimension(n);
            let fmt = config.format;
            let (a, b) = dominant_system(&mut rng, n);
            let a = matrix_from_flat(n, &to_fixed(&fmt, &a)).unwrap();
            let b = Array1::from_vec(to_fixed(&fmt, &b));

            let elim = gauss_factorize(&a, &b, &fmt).unwrap();
            let x = elim.solve(&fmt).unwrap();

            // A truncated quotient is off by less than one unit, which the
            // diagonal entry scales back up; each truncated product in back
            // substitution adds one more unit.
            let max_diag = (0..n)
                .map(|i| fmt.to_f64(elim.upper[[i, i]]).abs())
                .fold(0.0, f64::max);
            let bound = max_diag.ceil() as i64 + n as i64 + 1;
            let deviation = upper_residual(&elim.upper, &x, &elim.rhs, fmt.frac_bits());
            assert!(
                deviation <= bound,
                "n = {n}: deviation {deviation} exceeds {bound} raw units"
            );
        }
    }
}

#[test]
fn test_back_substitution_is_repeatable() {
    let mut rng = StdRng::seed_from_u64(11);
    let config = SolverConfig::with_dimension(4);
    let fmt = config.format;
    let (a, b) = dominant_system(&mut rng, 4);
    let a = matrix_from_flat(4, &to_fixed(&fmt, &a)).unwrap();
    let b = Array1::from_vec(to_fixed(&fmt, &b));

    let elim = gauss_factorize(&a, &b, &fmt).unwrap();
    let first = elim.solve(&fmt).unwrap();
    let second = elim.solve(&fmt).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_first_step_follows_sequential_scan() {
    // Saturating division keeps singular random matrices from erroring out
    let fmt = FixedFormat::default().with_overflow(Overflow::Saturating);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..200 {
        let n = rng.random_range(2..=5);
        let raw: Vec<i32> = (0..n * n).map(|_| rng.random_range(-9..=9)).collect();
        let values: Vec<Fixed> = raw.iter().map(|&v| fmt.from_int(v).unwrap()).collect();
        let mut m = matrix_from_flat(n, &values).unwrap();
        let mut b = Array1::from_iter((0..n as i32).map(|i| fmt.from_int(i).unwrap()));

        // Expected step-0 swaps: every row whose entry beats the running pivot
        let mut rows: Vec<usize> = (0..n).collect();
        let mut expected = Vec::new();
        for k in 1..n {
            if raw[rows[k] * n] > raw[rows[0] * n] {
                rows.swap(0, k);
                expected.push(RowSwap { step: 0, row: k });
            }
        }

        let elim = eliminate(&mut m, &mut b, &fmt).unwrap();
        let step0: Vec<RowSwap> = elim.swaps.iter().copied().filter(|s| s.step == 0).collect();
        assert_eq!(step0, expected);

        // Row 0 is final after step 0: it is the original row holding the pivot
        for j in 0..n {
            assert_eq!(m[[0, j]], values[rows[0] * n + j]);
        }
        assert_eq!(b[0], fmt.from_int(rows[0] as i32).unwrap());

        // The pivot is at least every entry of the column
        let column_max = (0..n).map(|k| raw[k * n]).max().unwrap();
        assert_eq!(m[[0, 0]], fmt.from_int(column_max).unwrap());
    }
}

#[test]
fn test_concrete_scenarios() {
    // Identity at scale 1
    let config = SolverConfig::with_dimension(3).format(FixedFormat::integer());
    let id: Vec<Fixed> = [1, 0, 0, 0, 1, 0, 0, 0, 1]
        .iter()
        .map(|&v| Fixed::from_raw(v))
        .collect();
    let rhs: Vec<Fixed> = [2, 4, 6].iter().map(|&v| Fixed::from_raw(v)).collect();
    assert_eq!(solve_flat(&config, &id, &rhs).unwrap(), rhs);

    // Two unknowns needing a swap, with enough fractional bits for 1/2
    let config = SolverConfig::with_dimension(2);
    let fmt = config.format;
    let x = solve_flat(
        &config,
        &to_fixed(&fmt, &[1.0, 1.0, 2.0, 1.0]),
        &to_fixed(&fmt, &[3.0, 4.0]),
    )
    .unwrap();
    assert_eq!(x, to_fixed(&fmt, &[1.0, 2.0]));

    // One unknown
    let config = SolverConfig::with_dimension(1);
    let fmt = config.format;
    let x = solve_flat(&config, &to_fixed(&fmt, &[-4.0]), &to_fixed(&fmt, &[3.0])).unwrap();
    assert_eq!(x, to_fixed(&fmt, &[-0.75]));
}

#[test]
fn test_batch_matches_individual_solves() {
    let mut rng = StdRng::seed_from_u64(3);
    let config = SolverConfig::default();
    let fmt = config.format;

    let systems: Vec<FlatSystem> = (0..32)
        .map(|_| {
            let (a, b) = dominant_system(&mut rng, 3);
            FlatSystem {
                matrix: to_fixed(&fmt, &a),
                rhs: to_fixed(&fmt, &b),
            }
        })
        .collect();

    let batch = solve_batch(&config, &systems);
    for (system, result) in systems.iter().zip(batch) {
        let single = solve_flat(&config, &system.matrix, &system.rhs).unwrap();
        assert_eq!(result.unwrap(), single);
    }
}

#[test]
fn test_private_markers_are_ignored() {
    let mut rng = StdRng::seed_from_u64(5);
    let config = SolverConfig::default();
    let fmt = config.format;
    let (a, b) = dominant_system(&mut rng, 3);
    let (a, b) = (to_fixed(&fmt, &a), to_fixed(&fmt, &b));

    let plain = solve_flat(&config, &a, &b).unwrap();
    let marked = solve_private(&config, Private::new(0, a), Private::new(1, b)).unwrap();
    assert_eq!(plain, marked);
}
