//! Communicating classes and their closure flags.

use nalgebra::DMatrix;
use tracing::debug;

use crate::error::StructureError;
use crate::reach::{Reachability, reachability};

/// A maximal set of mutually reachable states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommClass {
    states: Vec<usize>,
    closed: bool,
}

impl CommClass {
    /// Member state indices in increasing order.
    pub fn states(&self) -> &[usize] {
        &self.states
    }

    /// `true` if no member reaches a state outside the class (recurrent).
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of member states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; classes have at least one member.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns `true` if `state` belongs to this class.
    pub fn contains(&self, state: usize) -> bool {
        self.states.binary_search(&state).is_ok()
    }
}

/// Partition of the state space into communicating classes.
///
/// Classes are ordered by their lowest member index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    n: usize,
    classes: Vec<CommClass>,
    class_of: Vec<usize>,
}

impl Classification {
    /// Number of states.
    pub fn n_states(&self) -> usize {
        self.n
    }

    /// All communicating classes.
    pub fn classes(&self) -> &[CommClass] {
        &self.classes
    }

    /// Index into [`classes`](Self::classes) of the class containing `state`.
    pub fn class_of(&self, state: usize) -> usize {
        self.class_of[state]
    }

    /// `true` if `i` and `j` belong to the same communicating class.
    pub fn communicates(&self, i: usize, j: usize) -> bool {
        self.class_of[i] == self.class_of[j]
    }

    /// `true` if the class containing `state` is closed.
    pub fn is_closed(&self, state: usize) -> bool {
        self.classes[self.class_of[state]].closed
    }

    /// Per-state closure flags.
    pub fn closed_flags(&self) -> Vec<bool> {
        (0..self.n).map(|i| self.is_closed(i)).collect()
    }

    /// The pairwise "same class" relation as an n×n boolean table.
    pub fn communication_table(&self) -> Vec<Vec<bool>> {
        (0..self.n)
            .map(|i| (0..self.n).map(|j| self.communicates(i, j)).collect())
            .collect()
    }

    /// Closed (recurrent) classes.
    pub fn recurrent_classes(&self) -> impl Iterator<Item = &CommClass> {
        self.classes.iter().filter(|c| c.closed)
    }

    /// Open (transient) classes.
    pub fn transient_classes(&self) -> impl Iterator<Item = &CommClass> {
        self.classes.iter().filter(|c| !c.closed)
    }

    /// States in a closed class, in index order.
    pub fn recurrent_states(&self) -> Vec<usize> {
        (0..self.n).filter(|&i| self.is_closed(i)).collect()
    }

    /// States in an open class, in index order.
    pub fn transient_states(&self) -> Vec<usize> {
        (0..self.n).filter(|&i| !self.is_closed(i)).collect()
    }

    /// States forming a closed class on their own.
    pub fn absorbing_states(&self) -> Vec<usize> {
        self.recurrent_classes()
            .filter(|c| c.len() == 1)
            .map(|c| c.states[0])
            .collect()
    }

    /// `true` if every state communicates with every other.
    pub fn is_irreducible(&self) -> bool {
        self.classes.len() == 1
    }
}

/// Partitions states using a precomputed reachability relation.
///
/// The class of `i` is `{j : i reaches j and j reaches i}`; it is closed iff
/// its size equals the number of states reachable from `i`. The first
/// unassigned index seeds each new class, so every class is emitted once.
pub fn classify_reachability(reach: &Reachability) -> Classification {
    let n = reach.n_states();
    let mut class_of = vec![usize::MAX; n];
    let mut classes = Vec::new();

    for i in 0..n {
        if class_of[i] != usize::MAX {
            continue;
        }
        let states: Vec<usize> = (0..n)
            .filter(|&j| {
                reach.reaches(i, j) == Some(true) && reach.reaches(j, i) == Some(true)
            })
            .collect();
        let closed = states.len() == reach.count_from(i);
        for &j in &states {
            class_of[j] = classes.len();
        }
        classes.push(CommClass { states, closed });
    }

    Classification {
        n,
        classes,
        class_of,
    }
}

/// Computes the communicating classes of a row-oriented transition matrix.
///
/// # Errors
///
/// Returns [`StructureError::NotSquare`] for a non-square matrix.
#[tracing::instrument(skip_all, fields(n_states = matrix.nrows()))]
pub fn classify(matrix: &DMatrix<f64>) -> Result<Classification, StructureError> {
    let reach = reachability(matrix)?;
    let classification = classify_reachability(&reach);
    debug!(
        n_classes = classification.classes.len(),
        n_closed = classification.recurrent_classes().count(),
        "classified states"
    );
    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(n: usize, data: &[f64]) -> DMatrix<f64> {
        DMatrix::from_row_slice(n, n, data)
    }

    #[test]
    fn flip_is_one_closed_class() {
        let c = classify(&m(2, &[0.0, 1.0, 1.0, 0.0])).unwrap();
        assert_eq!(c.classes().len(), 1);
        assert!(c.is_irreducible());
        assert!(c.classes()[0].is_closed());
        assert_eq!(c.classes()[0].states(), &[0, 1]);
        assert_eq!(c.closed_flags(), vec![true, true]);
    }

    #[test]
    fn absorbing_chain() {
        let c = classify(&m(2, &[1.0, 0.0, 0.5, 0.5])).unwrap();
        assert_eq!(c.recurrent_states(), vec![0]);
        assert_eq!(c.transient_states(), vec![1]);
        assert_eq!(c.absorbing_states(), vec![0]);
        assert!(!c.communicates(0, 1));
        assert!(!c.is_irreducible());
    }

    #[test]
    fn classes_in_lowest_member_order() {
        // 0 <-> 2 closed, 1 transient feeding both 1 and 3, 3 absorbing.
        let p = m(
            4,
            &[
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.5, 0.25, 0.25, //
                1.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        );
        let c = classify(&p).unwrap();
        let sets: Vec<&[usize]> = c.classes().iter().map(|c| c.states()).collect();
        assert_eq!(sets, vec![&[0, 2][..], &[1][..], &[3][..]]);
        assert_eq!(c.class_of(2), 0);
        assert_eq!(c.class_of(3), 2);
        let recurrent: Vec<&[usize]> = c.recurrent_classes().map(|c| c.states()).collect();
        assert_eq!(recurrent, vec![&[0, 2][..], &[3][..]]);
        let transient: Vec<&[usize]> = c.transient_classes().map(|c| c.states()).collect();
        assert_eq!(transient, vec![&[1][..]]);
    }

    #[test]
    fn communication_table_is_symmetric() {
        let p = m(3, &[0.5, 0.5, 0.0, 0.5, 0.0, 0.5, 0.0, 0.0, 1.0]);
        let c = classify(&p).unwrap();
        let t = c.communication_table();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(t[i][j], t[j][i]);
            }
        }
        assert!(t[0][1]);
        assert!(!t[1][2]);
    }

    #[test]
    fn open_class_with_several_members() {
        // {0, 1} communicate but leak into absorbing 2.
        let p = m(3, &[0.0, 1.0, 0.0, 0.5, 0.0, 0.5, 0.0, 0.0, 1.0]);
        let c = classify(&p).unwrap();
        assert_eq!(c.classes().len(), 2);
        assert!(!c.classes()[0].is_closed());
        assert!(c.classes()[0].contains(1));
        assert_eq!(c.transient_states(), vec![0, 1]);
    }
}
