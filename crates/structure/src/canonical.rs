//! Canonical reordering: recurrent classes first, transient states last.

use ergo_chain::MarkovChain;
use nalgebra::DMatrix;

use crate::classes::{Classification, classify};
use crate::error::StructureError;

/// Permutation placing each recurrent class (in classification order,
/// members in original order) ahead of the transient states.
pub fn canonical_order(classification: &Classification) -> Vec<usize> {
    let mut order: Vec<usize> = classification
        .recurrent_classes()
        .flat_map(|c| c.states().iter().copied())
        .collect();
    order.extend(classification.transient_states());
    order
}

/// Applies `order` symmetrically to rows and columns.
///
/// Entry `(a, b)` of the result is `matrix[(order[a], order[b])]`.
///
/// # Errors
///
/// Returns [`StructureError::NotSquare`] for a non-square matrix and
/// [`StructureError::StateOutOfRange`] if `order` names a missing state.
pub fn permute(matrix: &DMatrix<f64>, order: &[usize]) -> Result<DMatrix<f64>, StructureError> {
    let n = crate::reach::check_square(matrix)?;
    if let Some(&index) = order.iter().find(|&&i| i >= n) {
        return Err(StructureError::StateOutOfRange { index, n_states: n });
    }
    let k = order.len();
    Ok(DMatrix::from_fn(k, k, |a, b| matrix[(order[a], order[b])]))
}

/// Returns a copy of `chain` with states in canonical order.
///
/// The orientation of the result matches the input.
///
/// # Errors
///
/// Propagates [`StructureError`] from classification or chain rebuilding.
#[tracing::instrument(skip_all, fields(n_states = chain.n_states()))]
pub fn canonical_form(chain: &MarkovChain) -> Result<MarkovChain, StructureError> {
    let by_row = chain.by_row_matrix();
    let classification = classify(&by_row)?;
    let order = canonical_order(&classification);
    let reordered = permute(&by_row, &order)?;
    let states = order.iter().map(|&i| chain.states()[i].clone()).collect();
    Ok(chain.with_by_row_matrix(reordered, states)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ergo_chain::Orientation;

    fn gambler() -> MarkovChain {
        // 0 and 3 absorbing, 1 and 2 transient.
        MarkovChain::from_rows(
            &[
                vec![0.0, 0.5, 0.5, 0.0],
                vec![0.0, 1.0, 0.0, 0.0],
                vec![0.5, 0.0, 0.0, 0.5],
                vec![0.0, 0.0, 0.0, 1.0],
            ],
            ["t1", "a", "t2", "b"],
            Orientation::ByRow,
        )
        .unwrap()
    }

    #[test]
    fn order_puts_recurrent_first() {
        let c = classify(&gambler().by_row_matrix()).unwrap();
        assert_eq!(canonical_order(&c), vec![1, 3, 0, 2]);
    }

    #[test]
    fn canonical_form_reorders_labels_and_matrix() {
        let canon = canonical_form(&gambler()).unwrap();
        assert_eq!(canon.states(), &["a", "b", "t1", "t2"]);
        let p = canon.matrix();
        assert_eq!(p[(0, 0)], 1.0);
        assert_eq!(p[(1, 1)], 1.0);
        assert_eq!(p[(2, 0)], 0.5);
        assert_eq!(p[(2, 3)], 0.5);
        assert_eq!(p[(3, 2)], 0.5);
        assert_eq!(p[(3, 1)], 0.5);
    }

    #[test]
    fn canonical_form_preserves_column_orientation() {
        let by_row = gambler();
        let by_col = MarkovChain::new(
            by_row.matrix().transpose(),
            by_row.states().to_vec(),
            Orientation::ByColumn,
        )
        .unwrap();
        let canon_row = canonical_form(&by_row).unwrap();
        let canon_col = canonical_form(&by_col).unwrap();
        assert_eq!(canon_col.orientation(), Orientation::ByColumn);
        assert_eq!(canon_col.states(), canon_row.states());
        assert_eq!(canon_col.matrix(), &canon_row.matrix().transpose());
    }

    #[test]
    fn permute_rejects_bad_index() {
        let m = DMatrix::<f64>::identity(2, 2);
        assert!(matches!(
            permute(&m, &[0, 2]),
            Err(StructureError::StateOutOfRange {
                index: 2,
                n_states: 2
            })
        ));
    }
}
