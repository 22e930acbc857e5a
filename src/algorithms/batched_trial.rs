// src/algorithms/batched_trial.rs
//
// Batched trial division: the production strategy
// Candidate set: table primes strictly below floor(sqrt(n)) + 1
// Divisibility of all candidates is evaluated in one batched modulo pass

use crate::algorithms::push_residual;
use crate::integer_math::prime_table::PrimeTable;
use num::integer::Roots;

/// Factors `n` (>= 2) by a single batched divisibility pass over the table
/// prefix, then ascending division of the candidates that hit.
///
/// Any factor above `sqrt(n)` pairs with a cofactor below it that trial
/// division has already removed, so the candidate prefix stops there. The
/// batched pass tests the initial value once; multiplicities are extracted
/// afterwards, breaking out as soon as the remainder reaches 1.
pub fn factor(table: &PrimeTable, n: u64) -> Vec<u64> {
    let mut remainder = n;
    let mut factors = Vec::new();

    let max_factor = n.sqrt() + 1;
    let candidates = table.primes_below(max_factor);

    let dividing: Vec<u64> = candidates.iter().copied().filter(|&p| n % p == 0).collect();

    for p in dividing {
        while remainder % p == 0 {
            factors.push(p);
            remainder /= p;
        }
        if remainder == 1 {
            break;
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
    fn test_power_of_ten() {
        // 10^6 = 2^6 * 5^6
        assert_eq!(
            factor(&table(), 1_000_000),
            vec![2, 2, 2, 2, 2, 2, 5, 5, 5, 5, 5, 5]
        );
    }

    #[test]
    fn test_semiprime_near_table_reach() {
        assert_eq!(factor(&table(), 997 * 991), vec![991, 997]);
    }

    #[test]
    fn test_prime_square() {
        assert_eq!(factor(&table(), 961), vec![31, 31]);
    }

    #[test]
    fn test_early_break_leaves_no_trailing_factors() {
        // 2^10: the dividing pass collects only 2; everything divides out.
        assert_eq!(factor(&table(), 1024), vec![2; 10]);
    }
}
