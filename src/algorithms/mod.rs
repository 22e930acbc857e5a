// src/algorithms/mod.rs
//
// Strategy dispatcher: trial-division factorization over a shared prime table.
//
// Three interchangeable strategies produce identical factor sequences and
// differ only in how they walk the candidate divisors:
//
// Strategy            Candidate source        Typical use
// ─────────────────────────────────────────────────────────────────────────
// BatchedTrial        table prefix, one       production default
//                     batched modulo pass
// ScalarTrial         full table, shrinking   comparison baseline
//                     square-root bound
// OddBrute            every odd integer,      table-free baseline
//                     no table at all
//
// The table is built once and borrowed by the dispatcher; each factorize
// call is pure and runs to completion synchronously.

pub mod batched_trial;
pub mod odd_brute;
pub mod scalar_trial;

use crate::factor::factorization::Factorization;
use crate::integer_math::prime_table::PrimeTable;
use log::debug;
use num::integer::Roots;
use std::fmt;
use std::str::FromStr;

/// Enumeration of the available factorization strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FactorStrategy {
    /// One batched divisibility pass over the candidate prefix of the table.
    #[default]
    BatchedTrial,

    /// Walks the table in order, re-shrinking the square-root bound after
    /// every successful division.
    ScalarTrial,

    /// Tests every odd integer; ignores the table entirely.
    OddBrute,
}

impl FactorStrategy {
    /// Returns a human-readable name for the strategy
    pub fn name(&self) -> &str {
        match self {
            Self::BatchedTrial => "Batched Trial Division",
            Self::ScalarTrial => "Scalar Trial Division",
            Self::OddBrute => "Odd Brute Force",
        }
    }

    /// Returns the expected candidate count per call
    pub fn complexity(&self) -> &str {
        match self {
            Self::BatchedTrial => "pi(sqrt(n)) candidates, one modulo pass",
            Self::ScalarTrial => "pi(sqrt(n)) candidates, early exit",
            Self::OddBrute => "sqrt(n)/2 candidates",
        }
    }
}

impl fmt::Display for FactorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FactorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "batched" => Ok(Self::BatchedTrial),
            "scalar" => Ok(Self::ScalarTrial),
            "odd" => Ok(Self::OddBrute),
            other => Err(format!(
                "unknown strategy '{}' (expected one of: batched, scalar, odd)",
                other
            )),
        }
    }
}

/// Error raised when a factorization request is rejected before any work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorError {
    /// Factorization is defined for integers >= 2 only.
    InvalidInput { value: u64 },
}

impl fmt::Display for FactorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FactorError::InvalidInput { value } => {
                write!(f, "cannot factorize {}: input must be at least 2", value)
            }
        }
    }
}

impl std::error::Error for FactorError {}

/// Factors integers against a borrowed, immutable prime table.
///
/// The strategy is fixed at construction; every strategy returns the same
/// ascending factor sequence for the same input.
///
/// # Examples
/// ```
/// use factorize::algorithms::{FactorStrategy, Factorizer};
/// use factorize::integer_math::prime_table::PrimeTable;
///
/// let table = PrimeTable::build(1_000).unwrap();
/// let factorizer = Factorizer::new(&table, FactorStrategy::BatchedTrial);
/// let result = factorizer.factorize(360).unwrap();
/// assert_eq!(result.factors(), &[2, 2, 2, 3, 3, 5]);
/// ```
pub struct Factorizer<'a> {
    table: &'a PrimeTable,
    strategy: FactorStrategy,
}

impl<'a> Factorizer<'a> {
    pub fn new(table: &'a PrimeTable, strategy: FactorStrategy) -> Self {
        Factorizer { table, strategy }
    }

    pub fn with_default_strategy(table: &'a PrimeTable) -> Self {
        Factorizer::new(table, FactorStrategy::default())
    }

    pub fn strategy(&self) -> FactorStrategy {
        self.strategy
    }

    pub fn table(&self) -> &PrimeTable {
        self.table
    }

    /// Decomposes `n` into its ascending prime factors with multiplicity.
    ///
    /// Rejects `n < 2`; every valid input succeeds, including inputs whose
    /// prime factors all exceed the table bound.
    pub fn factorize(&self, n: u64) -> Result<Factorization, FactorError> {
        if n < 2 {
            return Err(FactorError::InvalidInput { value: n });
        }
        let factors = match self.strategy {
            FactorStrategy::BatchedTrial => batched_trial::factor(self.table, n),
            FactorStrategy::ScalarTrial => scalar_trial::factor(self.table, n),
            FactorStrategy::OddBrute => odd_brute::factor(n),
        };
        Ok(Factorization::new(n, factors))
    }
}

/// Emits the still-unfactored residual left once the table candidates are
/// exhausted.
///
/// The table certifies the residual prime only while every prime up to its
/// square root was available as a candidate. Past that reach the residual
/// can still be composite (two factors both above the bound), so trial
/// division continues over ascending odd candidates starting after the
/// table's largest prime. Composite candidates in that range cannot divide:
/// their smaller prime factors were already removed.
pub(crate) fn push_residual(table: &PrimeTable, mut remainder: u64, factors: &mut Vec<u64>) {
    if remainder == 1 {
        return;
    }
    if remainder.sqrt() <= table.bound() {
        factors.push(remainder);
        return;
    }

    debug!(
        "residual {} is beyond table reach, extending trial division past {}",
        remainder,
        table.largest()
    );

    let mut d = if table.largest() < 3 {
        3
    } else {
        table.largest() + 2
    };
    // d * d <= remainder, division-side to avoid overflow
    while d <= remainder / d {
        while remainder % d == 0 {
            factors.push(d);
            remainder /= d;
        }
        d += 2;
    }
    if remainder != 1 {
        factors.push(remainder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_rejected() {
        let table = PrimeTable::build(100).unwrap();
        let factorizer = Factorizer::with_default_strategy(&table);
        assert_eq!(
            factorizer.factorize(0),
            Err(FactorError::InvalidInput { value: 0 })
        );
        assert_eq!(
            factorizer.factorize(1),
            Err(FactorError::InvalidInput { value: 1 })
        );
    }

    #[test]
    fn test_default_strategy_is_batched() {
        let table = PrimeTable::build(100).unwrap();
        let factorizer = Factorizer::with_default_strategy(&table);
        assert_eq!(factorizer.strategy(), FactorStrategy::BatchedTrial);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("batched".parse(), Ok(FactorStrategy::BatchedTrial));
        assert_eq!("SCALAR".parse(), Ok(FactorStrategy::ScalarTrial));
        assert_eq!("odd".parse(), Ok(FactorStrategy::OddBrute));
        assert!("pollard".parse::<FactorStrategy>().is_err());
    }

    #[test]
    fn test_residual_prime_within_table_reach() {
        let table = PrimeTable::build(100).unwrap();
        let mut factors = vec![2];
        push_residual(&table, 53, &mut factors);
        assert_eq!(factors, vec![2, 53]);
    }

    #[test]
    fn test_residual_composite_beyond_table_reach() {
        // Both factors exceed the bound; the residual must not be emitted
        // as a single pseudo-factor.
        let table = PrimeTable::build(100).unwrap();
        let mut factors = vec![];
        push_residual(&table, 101 * 103, &mut factors);
        assert_eq!(factors, vec![101, 103]);
    }

    #[test]
    fn test_residual_prime_beyond_table_reach() {
        let table = PrimeTable::build(100).unwrap();
        let mut factors = vec![];
        push_residual(&table, 1_000_003, &mut factors);
        assert_eq!(factors, vec![1_000_003]);
    }
}
