// src/algorithms/scalar_trial.rs
//
// Scalar trial division: walks the table in order with an early exit
// The square-root bound shrinks as factors are divided out, so the walk
// usually stops long before the candidate prefix a batched pass would build

use crate::algorithms::push_residual;
use crate::integer_math::prime_table::PrimeTable;
use num::integer::Roots;

/// Factors `n` (>= 2) by walking the table in ascending order, breaking as
/// soon as the candidate exceeds the current remainder's square root.
///
/// Recomputing the bound after every division shortens the walk whenever a
/// small factor comes out; algebraically equivalent to the batched pass.
pub fn factor(table: &PrimeTable, n: u64) -> Vec<u64> {
    let mut remainder = n;
    let mut factors = Vec::new();
    let mut root = remainder.sqrt();

    for p in table.iter() {
        if p > root {
            break;
        }
        while remainder % p == 0 {
            remainder /= p;
            factors.push(p);
            root = remainder.sqrt();
        }
    }

    push_residual(table, remainder, &mut factors);
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PrimeTable {
        PrimeTable::build(1_000).unwrap()
    }

    #[test]
    fn test_smallest_input() {
        assert_eq!(factor(&table(), 2), vec![2]);
    }

    #[test]
    fn test_prime_input_returns_itself() {
        assert_eq!(factor(&table(), 97), vec![97]);
    }

    #[test]
    fn test_composite_with_multiplicity() {
        assert_eq!(factor(&table(), 360), vec![2, 2, 2, 3, 3, 5]);
    }

    #[test]
    fn test_semiprime_near_table_reach() {
        assert_eq!(factor(&table(), 997 * 991), vec![991, 997]);
    }

    #[test]
    fn test_shrinking_bound_stops_early() {
        // 2^20 * 1009: after the 2s the bound collapses to sqrt(1009) < 37,
        // so the walk ends inside the first few table entries.
        let n = (1u64 << 20) * 1009;
        let mut expected = vec![2; 20];
        expected.push(1009);
        assert_eq!(factor(&table(), n), expected);
    }
}
