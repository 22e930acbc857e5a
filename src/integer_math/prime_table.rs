// src/integer_math/prime_table.rs

use bitvec::prelude::*;
use log::debug;
use std::fmt;

/// Error raised when the sieve is configured with an unusable upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveError {
    /// The requested bound admits no primes at all.
    BoundTooSmall { bound: u64 },
}

impl fmt::Display for SieveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SieveError::BoundTooSmall { bound } => {
                write!(f, "sieve bound must be at least 2, got {}", bound)
            }
        }
    }
}

impl std::error::Error for SieveError {}

/// All primes in `[2, bound]`, generated once by a sieve of Eratosthenes
/// and held as an ascending list for the lifetime of the process.
///
/// The marker array covers odd numbers only (index `i` maps to the value
/// `2*i + 3`), halving memory and culling work; 2 is prepended afterwards
/// as the single even prime. The table is immutable after construction, so
/// it can be shared by reference across any number of factorization calls.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimeTable {
    bound: u64,
    primes: Vec<u64>,
}

impl PrimeTable {
    /// Sieves all primes up to and including `bound`.
    ///
    /// Fails only on configuration: a bound below 2 leaves nothing to sieve.
    ///
    /// # Examples
    /// ```
    /// use factorize::integer_math::prime_table::PrimeTable;
    ///
    /// let table = PrimeTable::build(30).unwrap();
    /// assert_eq!(table.as_slice(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    /// ```
    pub fn build(bound: u64) -> Result<Self, SieveError> {
        if bound < 2 {
            return Err(SieveError::BoundTooSmall { bound });
        }

        // Odd values 3, 5, ..., bound; index i <-> value 2*i + 3.
        let odd_count = if bound < 3 { 0 } else { ((bound - 1) / 2) as usize };
        let mut composite = bitvec![0; odd_count];

        let mut i = 0usize;
        loop {
            let p = 2 * i as u64 + 3;
            // p * p <= bound, written division-side to avoid overflow near u64::MAX
            if odd_count == 0 || p > bound / p {
                break;
            }
            if !composite[i] {
                // First multiple worth marking is p*p; smaller ones already
                // carry a smaller prime factor. Step p in index space = 2p in
                // value space, skipping even multiples entirely.
                let mut j = ((p * p - 3) / 2) as usize;
                while j < odd_count {
                    composite.set(j, true);
                    j += p as usize;
                }
            }
            i += 1;
        }

        let mut primes = Vec::with_capacity(odd_count / 2 + 1);
        primes.push(2);
        for i in composite.iter_zeros() {
            primes.push(2 * i as u64 + 3);
        }

        debug!("sieved {} primes up to {}", primes.len(), bound);

        Ok(PrimeTable { bound, primes })
    }

    /// The configured upper bound of the sieve (inclusive).
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// The largest prime in the table.
    pub fn largest(&self) -> u64 {
        *self.primes.last().expect("table always holds at least 2")
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.primes.iter().copied()
    }

    /// The prefix of the table holding every prime strictly less than
    /// `limit`. Binary-search bounded; this sits in the factorizer's inner
    /// loop, so a linear scan would dominate large batches.
    pub fn primes_below(&self, limit: u64) -> &[u64] {
        let end = self.primes.partition_point(|&p| p < limit);
        &self.primes[..end]
    }

    /// Whether `value` is a member of the table. Only meaningful for
    /// `value <= bound`; larger values are simply absent.
    pub fn contains(&self, value: u64) -> bool {
        self.primes.binary_search(&value).is_ok()
    }
}
