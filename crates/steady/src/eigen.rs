//! Unit-eigenvalue extraction for class sub-matrices.
//!
//! **Not part of the public API.**

use std::cmp::Ordering;

use nalgebra::{DMatrix, DVector, SVD, SymmetricEigen};

/// Iteration budget for a decomposition of an `n × n` matrix.
fn iteration_cap(n: usize) -> usize {
    1_000 + 100 * n
}

/// Returns `true` if `|m_ij - m_ji| <= tol` for all pairs.
pub(crate) fn is_symmetric(m: &DMatrix<f64>, tol: f64) -> bool {
    let n = m.nrows();
    (0..n).all(|i| (i + 1..n).all(|j| (m[(i, j)] - m[(j, i)]).abs() <= tol))
}

/// Real left eigenvectors of a stochastic `p` for eigenvalue one.
///
/// Symmetric matrices go through the symmetric solver and keep every
/// eigenvector whose eigenvalue lies within `tol` of one. Otherwise the
/// vectors span the numerical null space of `pᵀ - I`: the right singular
/// vectors whose singular value is at most `tol · max(1, σ_max)`. The unit
/// eigenvalue of a stochastic matrix is semisimple, so the count equals
/// its multiplicity.
///
/// Returns `None` if a decomposition does not converge within its
/// iteration budget.
pub(crate) fn unit_left_eigenvectors(
    p: &DMatrix<f64>,
    tol: f64,
    symmetry_tol: f64,
) -> Option<Vec<DVector<f64>>> {
    let n = p.nrows();
    let max_niter = iteration_cap(n);

    if is_symmetric(p, symmetry_tol) {
        let eig = SymmetricEigen::try_new(p.clone(), f64::EPSILON, max_niter)?;
        return Some(
            eig.eigenvalues
                .iter()
                .enumerate()
                .filter(|&(_, &l)| (l - 1.0).abs() <= tol)
                .map(|(k, _)| eig.eigenvectors.column(k).into_owned())
                .collect(),
        );
    }

    let shifted = p.transpose() - DMatrix::<f64>::identity(n, n);
    let svd = SVD::try_new(shifted, false, true, f64::EPSILON, max_niter)?;
    let v_t = svd.v_t?;
    let sigma = &svd.singular_values;
    let threshold = tol * sigma.max().max(1.0);

    let mut null: Vec<usize> = (0..sigma.len()).filter(|&k| sigma[k] <= threshold).collect();
    null.sort_by(|&x, &y| sigma[x].partial_cmp(&sigma[y]).unwrap_or(Ordering::Equal));

    Some(null.into_iter().map(|k| v_t.row(k).transpose()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cycle(n: usize) -> DMatrix<f64> {
        DMatrix::from_fn(n, n, |i, j| if j == (i + 1) % n { 1.0 } else { 0.0 })
    }

    #[test]
    fn symmetric_detection() {
        let s = DMatrix::from_row_slice(2, 2, &[0.3, 0.7, 0.7, 0.3]);
        let a = DMatrix::from_row_slice(2, 2, &[0.3, 0.7, 0.4, 0.6]);
        assert!(is_symmetric(&s, 0.0));
        assert!(!is_symmetric(&a, 1e-12));
    }

    #[test]
    fn symmetric_flip_vector() {
        let p = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let vecs = unit_left_eigenvectors(&p, 1e-7, 1e-12).unwrap();
        assert_eq!(vecs.len(), 1);
        let v = &vecs[0];
        assert_abs_diff_eq!(v[0], v[1], epsilon = 1e-12);
    }

    #[test]
    fn general_vector_is_left_eigenvector() {
        let p = DMatrix::from_row_slice(2, 2, &[0.9, 0.1, 0.5, 0.5]);
        let vecs = unit_left_eigenvectors(&p, 1e-7, 1e-12).unwrap();
        assert_eq!(vecs.len(), 1);
        let v = &vecs[0];
        let vp = p.transpose() * v;
        assert_abs_diff_eq!(vp, v.clone(), epsilon = 1e-10);
    }

    #[test]
    fn permutation_cycles_have_one_vector() {
        for n in 3..=10 {
            let p = cycle(n);
            let vecs = unit_left_eigenvectors(&p, 1e-7, 1e-12).unwrap();
            assert_eq!(vecs.len(), 1, "cycle of length {n}");
            let v = &vecs[0];
            for k in 1..n {
                assert_abs_diff_eq!(v[k], v[0], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn identity_has_full_multiplicity() {
        let p = DMatrix::from_row_slice(3, 3, &[0.5, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let vecs = unit_left_eigenvectors(&p, 1e-7, 1e-12).unwrap();
        assert_eq!(vecs.len(), 2);
        for v in &vecs {
            assert_abs_diff_eq!(v[0], 0.0, epsilon = 1e-12);
        }
    }
}
