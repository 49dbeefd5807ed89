//! Logical-to-physical qubit permutations.
//!
//! A circuit carries two of these. The *initial layout* says which physical
//! qubit holds each logical position when the circuit starts. The *output
//! permutation* says where each meaningful output ends up; positions without
//! an entry are not outputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::qubit::QubitId;

/// A mapping from logical position to physical qubit.
///
/// Entries iterate in ascending position order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permutation {
    positions: BTreeMap<u32, QubitId>,
}

impl Permutation {
    /// Create a new empty permutation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the identity permutation on `num_qubits` positions.
    pub fn identity(num_qubits: u32) -> Self {
        (0..num_qubits).map(|i| (i, QubitId(i))).collect()
    }

    /// Map `position` to `qubit`, returning the previous qubit if any.
    pub fn insert(&mut self, position: u32, qubit: QubitId) -> Option<QubitId> {
        self.positions.insert(position, qubit)
    }

    /// Remove the mapping for `position`.
    pub fn remove(&mut self, position: u32) -> Option<QubitId> {
        self.positions.remove(&position)
    }

    /// Get the physical qubit for a logical position.
    #[inline]
    pub fn get(&self, position: u32) -> Option<QubitId> {
        self.positions.get(&position).copied()
    }

    /// Check if a logical position is mapped.
    #[inline]
    pub fn contains(&self, position: u32) -> bool {
        self.positions.contains_key(&position)
    }

    /// Number of mapped positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if no position is mapped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over `(position, qubit)` pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, QubitId)> + '_ {
        self.positions.iter().map(|(&p, &q)| (p, q))
    }

    /// Check if every position maps to the qubit of the same index.
    pub fn is_identity(&self) -> bool {
        self.positions.iter().all(|(&p, q)| p == q.0)
    }
}

impl FromIterator<(u32, QubitId)> for Permutation {
    fn from_iter<T: IntoIterator<Item = (u32, QubitId)>>(iter: T) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let perm = Permutation::identity(3);
        assert_eq!(perm.len(), 3);
        assert!(perm.is_identity());
        assert_eq!(perm.get(2), Some(QubitId(2)));
    }

    #[test]
    fn test_insert_remove() {
        let mut perm = Permutation::new();
        assert!(perm.is_empty());

        perm.insert(0, QubitId(2));
        perm.insert(1, QubitId(0));
        assert!(!perm.is_identity());
        assert!(perm.contains(1));

        assert_eq!(perm.remove(1), Some(QubitId(0)));
        assert_eq!(perm.remove(1), None);
        assert_eq!(perm.iter().collect::<Vec<_>>(), vec![(0, QubitId(2))]);
    }

    #[test]
    fn test_serialize_ordered() {
        let perm: Permutation = [(1, QubitId(0)), (0, QubitId(1))].into_iter().collect();
        let json = serde_json::to_string(&perm).unwrap();
        assert_eq!(json, r#"{"positions":{"0":1,"1":0}}"#);
    }
}
