use approx::assert_abs_diff_eq;
use ergo_steady::{SteadyConfig, hitting_probabilities_by_row, steady_states_by_row};
use ergo_structure::classify;
use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random row-stochastic matrix; every row has at least one edge.
fn random_chain(n: usize, density: f64, seed: u64) -> DMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut p = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            if rng.random_bool(density) {
                p[(i, j)] = rng.random_range(0.1..1.0);
            }
        }
        if p.row(i).sum() == 0.0 {
            let j = rng.random_range(0..n);
            p[(i, j)] = 1.0;
        }
        let s = p.row(i).sum();
        for j in 0..n {
            p[(i, j)] /= s;
        }
    }
    p
}

/// Dense chain with a self-loop everywhere, so each closed class is
/// aperiodic and its unit eigenvalue simple.
fn lazy_chain(n: usize, seed: u64) -> DMatrix<f64> {
    let mut p = random_chain(n, 0.5, seed);
    for i in 0..n {
        for j in 0..n {
            p[(i, j)] *= 0.5;
        }
        p[(i, i)] += 0.5;
    }
    p
}

fn cycle(n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |i, j| if j == (i + 1) % n { 1.0 } else { 0.0 })
}

/// Checks one row per closed class, each a distribution with `π = πP`.
fn assert_stationary(p: &DMatrix<f64>, pi: &DMatrix<f64>, label: &str) {
    let closed = classify(p).unwrap().recurrent_classes().count();
    assert_eq!(pi.nrows(), closed, "{label}: one row per closed class");
    for row in pi.row_iter() {
        assert_abs_diff_eq!(row.sum(), 1.0, epsilon = 1e-9);
        assert!(row.iter().all(|&v| v >= 0.0), "{label}: {row}");
        let moved = &row * p;
        assert_abs_diff_eq!(moved, row.clone_owned(), epsilon = 1e-8);
    }
}

// ---------------------------------------------------------------------------
// 1. stationary_rows_are_invariant
// ---------------------------------------------------------------------------
#[test]
fn stationary_rows_are_invariant() {
    for seed in 0..25 {
        let n = 2 + (seed as usize % 7);
        let p = lazy_chain(n, seed);
        let pi = steady_states_by_row(&p, &SteadyConfig::new()).unwrap();
        assert_stationary(&p, &pi, &format!("seed {seed}"));
    }
}

// ---------------------------------------------------------------------------
// 2. stationary_support_is_one_class
// ---------------------------------------------------------------------------
#[test]
fn stationary_support_is_one_class() {
    for seed in 0..25 {
        let p = lazy_chain(6, 100 + seed);
        let c = classify(&p).unwrap();
        let pi = steady_states_by_row(&p, &SteadyConfig::new()).unwrap();
        for row in pi.row_iter() {
            let support: Vec<usize> = (0..6).filter(|&j| row[j] > 1e-12).collect();
            assert!(!support.is_empty());
            let class = c.class_of(support[0]);
            assert!(
                support.iter().all(|&j| c.class_of(j) == class),
                "seed {seed}: support {support:?} spans classes"
            );
            assert!(c.is_closed(support[0]));
        }
    }
}

// ---------------------------------------------------------------------------
// 3. closed_class_never_hits_outside
// ---------------------------------------------------------------------------
#[test]
fn closed_class_never_hits_outside() {
    for seed in 0..25 {
        let n = 2 + (seed as usize % 8);
        let p = random_chain(n, 0.2, 200 + seed);
        let c = classify(&p).unwrap();
        let h = hitting_probabilities_by_row(&p).unwrap();
        for class in c.recurrent_classes() {
            for &i in class.states() {
                for j in 0..n {
                    let expected = if class.contains(j) { 1.0 } else { 0.0 };
                    assert_abs_diff_eq!(h[(i, j)], expected, epsilon = 1e-12);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 4. hitting_probabilities_are_probabilities
// ---------------------------------------------------------------------------
#[test]
fn hitting_probabilities_are_probabilities() {
    for seed in 0..25 {
        let n = 2 + (seed as usize % 8);
        let p = random_chain(n, 0.3, 300 + seed);
        let h = hitting_probabilities_by_row(&p).unwrap();
        for v in h.iter() {
            assert!(*v > -1e-9 && *v < 1.0 + 1e-9, "seed {seed}: {v}");
        }
    }
}

// ---------------------------------------------------------------------------
// 5. singleton_closed_class_and_unreachable_target
// ---------------------------------------------------------------------------
#[test]
fn singleton_closed_class_and_unreachable_target() {
    // 0 absorbing; 1 leaks to 0 and 2; 2 is a separate absorbing state;
    // 3 only feeds 0.
    let p = DMatrix::from_row_slice(
        4,
        4,
        &[
            1.0, 0.0, 0.0, 0.0, //
            0.3, 0.4, 0.3, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.5, 0.0, 0.0, 0.5,
        ],
    );
    let h = hitting_probabilities_by_row(&p).unwrap();
    assert_abs_diff_eq!(h[(0, 0)], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(h[(2, 2)], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(h[(3, 2)], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(h[(3, 1)], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(h[(1, 0)], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(h[(1, 2)], 0.5, epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// 6. periodic_cycles_are_invariant
// ---------------------------------------------------------------------------
#[test]
fn periodic_cycles_are_invariant() {
    for n in 3..=8 {
        let p = cycle(n);
        let pi = steady_states_by_row(&p, &SteadyConfig::new()).unwrap();
        assert_stationary(&p, &pi, &format!("cycle {n}"));
    }
}

// ---------------------------------------------------------------------------
// 7. sparse_chains_are_invariant
// ---------------------------------------------------------------------------
#[test]
fn sparse_chains_are_invariant() {
    // No self-loops are added, so closed classes may be periodic.
    for seed in 0..300 {
        let n = 2 + (seed as usize % 8);
        let p = random_chain(n, 0.2, seed);
        let pi = steady_states_by_row(&p, &SteadyConfig::new()).unwrap();
        assert_stationary(&p, &pi, &format!("seed {seed}"));
    }
}

// ---------------------------------------------------------------------------
// 8. periodic_class_beside_transient_states
// ---------------------------------------------------------------------------
#[test]
fn periodic_class_beside_transient_states() {
    // 0 -> 1 -> 2 -> 0 closed with period 3; 3 and 4 drain into it.
    let p = DMatrix::from_row_slice(
        5,
        5,
        &[
            0.0, 1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, 0.0, //
            0.2, 0.0, 0.0, 0.3, 0.5, //
            0.0, 0.0, 0.6, 0.4, 0.0,
        ],
    );
    let pi = steady_states_by_row(&p, &SteadyConfig::new()).unwrap();
    assert_stationary(&p, &pi, "periodic class");
    for j in 0..3 {
        assert_abs_diff_eq!(pi[(0, j)], 1.0 / 3.0, epsilon = 1e-10);
    }
    assert_eq!(pi[(0, 3)], 0.0);
    assert_eq!(pi[(0, 4)], 0.0);
}
