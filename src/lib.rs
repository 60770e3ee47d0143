//! Computes the n-th prime (0-indexed) by trial division over a small
//! bootstrap prime set.

pub mod prime;

pub use prime::{nth_prime, PrimeError, PrimeSearch, SearchConfig};
