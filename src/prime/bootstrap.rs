//! Bootstrap prime set: every prime up to a small limit, found by 6k±1
//! stepping and trial division against the primes already collected.
//! Used as the divisor pool when testing larger candidates.

use crate::prime::config::MAX_BOOTSTRAP_LIMIT;
use crate::prime::errors::PrimeError;
use crate::prime::primality::has_no_known_divisor;
use crate::prime::stepping::SixStep;

pub const DEFAULT_BOOTSTRAP_LIMIT: u64 = 50_000;

/// Strictly increasing, starts with `[2, 3]`, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPrimes {
    primes: Vec<u64>,
    limit: u64,
}

impl BootstrapPrimes {
    /// All primes up to 50,000.
    pub fn generate() -> Self {
        Self::build(DEFAULT_BOOTSTRAP_LIMIT)
    }

    /// All primes up to `limit`. Limits below 3 still yield `[2, 3]`;
    /// limits above [`MAX_BOOTSTRAP_LIMIT`] are refused before any allocation.
    pub fn up_to(limit: u64) -> Result<Self, PrimeError> {
        if limit > MAX_BOOTSTRAP_LIMIT {
            return Err(PrimeError::InvalidConfig(format!(
                "bootstrap limit {} exceeds maximum of {}",
                limit, MAX_BOOTSTRAP_LIMIT
            )));
        }
        Ok(Self::build(limit))
    }

    fn build(limit: u64) -> Self {
        let limit = limit.max(3);
        let mut primes = Vec::with_capacity(capacity_hint(limit));
        primes.extend_from_slice(&[2, 3]);

        for candidate in SixStep::new().take_while(|&c| c <= limit) {
            if has_no_known_divisor(candidate, &primes) {
                primes.push(candidate);
            }
        }

        Self { primes, limit }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Largest candidate whose primality this set can decide: `limit²`.
    #[inline(always)]
    pub fn ceiling(&self) -> u64 {
        self.limit.saturating_mul(self.limit)
    }

    /// Membership for `n <= limit`.
    #[inline(always)]
    pub fn contains(&self, n: u64) -> bool {
        self.primes.binary_search(&n).is_ok()
    }
}

/// Cap on up-front reservation; larger sets grow as they fill.
const MAX_CAPACITY_HINT: usize = 1 << 16;

/// Rough upper estimate of π(limit) to avoid regrowth.
fn capacity_hint(limit: u64) -> usize {
    let x = limit as f64;
    let estimate = 1.26 * x / x.ln().max(1.0);
    (estimate as usize).min(MAX_CAPACITY_HINT).saturating_add(2)
}
