//! Index search: walk 6k±1 candidates, count the primes, stop at the
//! requested 0-based position.

use crate::prime::bootstrap::BootstrapPrimes;
use crate::prime::config::{BoundPolicy, SearchConfig};
use crate::prime::errors::PrimeError;
use crate::prime::primality::{PrimalityTest, TrialDivision};
use crate::prime::stepping::SixStep;

use tracing::{debug, instrument, warn};

/// Primes answered without building the bootstrap set.
const SMALL_PRIMES: [u64; 4] = [2, 3, 5, 7];

/// 2 and 3 are counted before stepping starts.
const PRIMES_BEFORE_STEPPING: u64 = 2;

/// Fast-path lookup for indices 0..=3.
#[inline(always)]
pub fn small_index_prime(index: u64) -> Option<u64> {
    usize::try_from(index)
        .ok()
        .and_then(|i| SMALL_PRIMES.get(i))
        .copied()
}

/// Rejects negative indices before any work is done.
#[inline(always)]
pub fn validate_index(index: i64) -> Result<u64, PrimeError> {
    u64::try_from(index).map_err(|_| PrimeError::negative_index())
}

/// A configured prime search. Holds no state between calls: every
/// [`PrimeSearch::nth`] builds and drops its own bootstrap set.
#[derive(Debug, Clone)]
pub struct PrimeSearch<T = TrialDivision> {
    config: SearchConfig,
    test: T,
}

impl PrimeSearch<TrialDivision> {
    pub fn new(config: SearchConfig) -> Result<Self, PrimeError> {
        Self::with_test(config, TrialDivision)
    }
}

impl Default for PrimeSearch<TrialDivision> {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            test: TrialDivision,
        }
    }
}

impl<T: PrimalityTest> PrimeSearch<T> {
    pub fn with_test(config: SearchConfig, test: T) -> Result<Self, PrimeError> {
        config.validate()?;
        Ok(Self { config, test })
    }

    #[inline(always)]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The prime at 0-based `index` in 2, 3, 5, 7, 11, ...
    #[instrument(skip(self), fields(limit = self.config.bootstrap_limit))]
    pub fn nth(&self, index: i64) -> Result<u64, PrimeError> {
        let target = validate_index(index)?;
        if let Some(prime) = small_index_prime(target) {
            return Ok(prime);
        }

        let bootstrap = BootstrapPrimes::up_to(self.config.bootstrap_limit)?;
        debug!(primes = bootstrap.len(), "bootstrap set built");

        let prime = self.walk(target, &bootstrap)?;
        debug!(prime, "prime found");
        Ok(prime)
    }

    fn walk(&self, target: u64, bootstrap: &BootstrapPrimes) -> Result<u64, PrimeError> {
        let ceiling = bootstrap.ceiling();
        // target came from a non-negative i64, so this cannot wrap
        let wanted = target + 1;
        let mut count = PRIMES_BEFORE_STEPPING;
        let mut warned = false;

        for candidate in SixStep::new() {
            if candidate > ceiling {
                match self.config.bound_policy {
                    BoundPolicy::Strict => {
                        return Err(PrimeError::BeyondBootstrap { candidate, ceiling });
                    }
                    BoundPolicy::Unchecked if !warned => {
                        warn!(candidate, ceiling, "searching past bootstrap accuracy ceiling");
                        warned = true;
                    }
                    BoundPolicy::Unchecked => {}
                }
            }

            if !self.test.is_prime(candidate, bootstrap.as_slice()) {
                continue;
            }
            count += 1;
            if count == wanted {
                return Ok(candidate);
            }
        }

        Err(PrimeError::Overflow)
    }
}
