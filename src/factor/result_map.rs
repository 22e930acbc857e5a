// src/factor/result_map.rs

use super::factorization::Factorization;
use serde::{Deserialize, Serialize};

/// Mapping from input integer to its factorization, preserving input order.
///
/// Re-inserting an integer replaces its entry in place, so a batch with
/// duplicate lines yields one record per distinct input, first position
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMap(Vec<(u64, Factorization)>);

impl ResultMap {
    pub fn new() -> Self {
        ResultMap(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ResultMap(Vec::with_capacity(capacity))
    }

    pub fn insert(&mut self, factorization: Factorization) {
        let n = factorization.n();
        match self.0.iter_mut().find(|(key, _)| *key == n) {
            Some(entry) => entry.1 = factorization,
            None => self.0.push((n, factorization)),
        }
    }

    pub fn get(&self, n: u64) -> Option<&Factorization> {
        self.0.iter().find(|(key, _)| *key == n).map(|(_, f)| f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Factorization)> {
        self.0.iter().map(|(n, f)| (*n, f))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
