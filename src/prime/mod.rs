//! N-th prime lookup.
//! Bootstrap primes up to 50,000, then 6k±1 stepping with trial division.

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod primality;
pub mod search;
pub mod stepping;

pub use bootstrap::{BootstrapPrimes, DEFAULT_BOOTSTRAP_LIMIT};
pub use config::{BoundPolicy, SearchConfig, SearchConfigBuilder};
pub use errors::{PrimeError, NEGATIVE_INDEX_MESSAGE};
pub use primality::{PrimalityTest, TrialDivision};
pub use search::{small_index_prime, validate_index, PrimeSearch};
pub use stepping::SixStep;

/// The prime at 0-based `index`: `nth_prime(0) == Ok(2)`,
/// `nth_prime(99) == Ok(541)`.
///
/// Fails with [`PrimeError::InvalidArgument`] for negative indices.
/// Primes above 2.5×10⁹ (index ≳ 121 million) are past the bootstrap
/// accuracy ceiling and may be composite; use
/// [`PrimeSearch`] with [`SearchConfig::strict`] to refuse those instead.
pub fn nth_prime(index: i64) -> Result<u64, PrimeError> {
    PrimeSearch::default().nth(index)
}

#[cfg(test)]
mod tests;
