//! Error taxonomy for prime lookups.

use thiserror::Error;

/// Message carried by [`PrimeError::InvalidArgument`] for negative indices.
pub const NEGATIVE_INDEX_MESSAGE: &str = "Index cannot be negative.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimeError {
    // --- Caller input ----------------------------------------------------------
    #[error("{0}")]
    InvalidArgument(String),

    // --- Search limits ---------------------------------------------------------
    #[error("Candidate {candidate} exceeds the bootstrap accuracy ceiling of {ceiling}")]
    BeyondBootstrap { candidate: u64, ceiling: u64 },
    #[error("Candidate arithmetic overflowed u64")]
    Overflow,

    // --- Configuration ---------------------------------------------------------
    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),
}

impl PrimeError {
    #[inline(always)]
    pub fn negative_index() -> Self {
        Self::InvalidArgument(NEGATIVE_INDEX_MESSAGE.to_string())
    }
}
