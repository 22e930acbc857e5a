// src/factor/factorization.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The ordered prime decomposition of a single integer.
///
/// Factors ascend and repeat for multiplicity; their product is the
/// original input. A prime input factors to itself, so the list is never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factorization {
    n: u64,
    factors: Vec<u64>,
}

impl Factorization {
    pub fn new(n: u64, factors: Vec<u64>) -> Self {
        debug_assert!(!factors.is_empty());
        debug_assert_eq!(factors.iter().product::<u64>(), n);
        debug_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
        Factorization { n, factors }
    }

    /// The integer this decomposition belongs to.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Ascending prime factors with multiplicity.
    pub fn factors(&self) -> &[u64] {
        &self.factors
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Recomputes the product of the factor list.
    pub fn product(&self) -> u64 {
        self.factors.iter().product()
    }

    /// Factors grouped into (prime, exponent) pairs, ascending by prime.
    pub fn exponents(&self) -> BTreeMap<u64, u32> {
        let mut map = BTreeMap::new();
        for &p in &self.factors {
            *map.entry(p).or_insert(0u32) += 1;
        }
        map
    }

    /// Renders the decomposition as a product of prime powers,
    /// e.g. `2^3 * 3^2 * 5^1` for 360.
    pub fn format_exponents(&self) -> String {
        let parts: Vec<String> = self
            .exponents()
            .iter()
            .map(|(p, e)| format!("{}^{}", p, e))
            .collect();
        parts.join(" * ")
    }

    pub fn into_factors(self) -> Vec<u64> {
        self.factors
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self.factors.iter().map(|p| p.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
