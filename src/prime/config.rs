//! **Search configuration**: bootstrap size + accuracy-ceiling policy.
//! Serde-ready so hosts can embed it in their own config files.

use crate::prime::bootstrap::DEFAULT_BOOTSTRAP_LIMIT;
use crate::prime::errors::PrimeError;

use serde::{Deserialize, Serialize};

/// Smallest limit that still yields the [2, 3, 5] seed.
pub const MIN_BOOTSTRAP_LIMIT: u64 = 5;
/// Largest limit the bootstrap generator will build (ceiling 10¹⁴).
pub const MAX_BOOTSTRAP_LIMIT: u64 = 10_000_000;

// ------------------------------------------------------------------
// 1. Ceiling policy
// ------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundPolicy {
    /// Keep searching past `limit²`; results there may be composite.
    #[default]
    Unchecked,
    /// Fail with [`PrimeError::BeyondBootstrap`] once a candidate passes `limit²`.
    Strict,
}

// ------------------------------------------------------------------
// 2. Configuration struct
// ------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound of the bootstrap prime set
    pub bootstrap_limit: u64,
    /// What to do once candidates exceed `bootstrap_limit²`
    pub bound_policy: BoundPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bootstrap_limit: DEFAULT_BOOTSTRAP_LIMIT,
            bound_policy: BoundPolicy::Unchecked,
        }
    }
}

impl SearchConfig {
    /// Default limit, but refuse to answer past the accuracy ceiling.
    pub fn strict() -> Self {
        Self {
            bound_policy: BoundPolicy::Strict,
            ..Default::default()
        }
    }

    #[inline(always)]
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<(), PrimeError> {
        if !(MIN_BOOTSTRAP_LIMIT..=MAX_BOOTSTRAP_LIMIT).contains(&self.bootstrap_limit) {
            return Err(PrimeError::InvalidConfig(format!(
                "bootstrap limit must be between {} and {}, got {}",
                MIN_BOOTSTRAP_LIMIT, MAX_BOOTSTRAP_LIMIT, self.bootstrap_limit
            )));
        }
        Ok(())
    }
}

// ------------------------------------------------------------------
// 3. Builder
// ------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfigBuilder {
    inner: SearchConfig,
}

impl SearchConfigBuilder {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn bootstrap_limit(mut self, limit: u64) -> Self {
        self.inner.bootstrap_limit = limit;
        self
    }

    #[inline(always)]
    pub fn bound_policy(mut self, policy: BoundPolicy) -> Self {
        self.inner.bound_policy = policy;
        self
    }

    #[inline(always)]
    pub fn build(self) -> Result<SearchConfig, PrimeError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
