//! Primality checks against a list of known primes.

/// Strategy used by the search to decide whether a candidate is prime,
/// given the bootstrap primes in increasing order.
///
/// Any `Fn(u64, &[u64]) -> bool` closure is a strategy too.
pub trait PrimalityTest {
    fn is_prime(&self, candidate: u64, known: &[u64]) -> bool;
}

impl<F> PrimalityTest for F
where
    F: Fn(u64, &[u64]) -> bool,
{
    #[inline(always)]
    fn is_prime(&self, candidate: u64, known: &[u64]) -> bool {
        self(candidate, known)
    }
}

/// Trial division by every known prime up to `√candidate`.
///
/// Only certifies candidates whose smallest prime factor is in `known`,
/// i.e. candidates up to `max(known)²`. Beyond that a composite with two
/// large factors passes as prime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialDivision;

impl PrimalityTest for TrialDivision {
    #[inline(always)]
    fn is_prime(&self, candidate: u64, known: &[u64]) -> bool {
        if candidate < 2 {
            return false;
        }
        has_no_known_divisor(candidate, known)
    }
}

/// `true` when no element of `known` that is `<= √candidate` divides it.
#[inline(always)]
pub(crate) fn has_no_known_divisor(candidate: u64, known: &[u64]) -> bool {
    for &p in known {
        // p > √candidate, compared without floats
        if p.saturating_mul(p) > candidate {
            break;
        }
        if candidate % p == 0 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [u64; 6] = [2, 3, 5, 7, 11, 13];

    #[test]
    fn below_two_is_never_prime() {
        assert!(!TrialDivision.is_prime(0, &KNOWN));
        assert!(!TrialDivision.is_prime(1, &KNOWN));
    }

    #[test]
    fn known_primes_pass_themselves() {
        for p in KNOWN {
            assert!(TrialDivision.is_prime(p, &KNOWN), "{p} should be prime");
        }
    }

    #[test]
    fn squares_of_known_primes_are_caught() {
        for p in KNOWN {
            assert!(!TrialDivision.is_prime(p * p, &KNOWN), "{} is composite", p * p);
        }
    }

    #[test]
    fn false_positive_past_ceiling() {
        // 17 * 19 has no factor in KNOWN and sits above 13².
        assert!(TrialDivision.is_prime(323, &KNOWN));
    }

    #[test]
    fn closures_are_strategies() {
        let only_odd = |c: u64, _: &[u64]| c % 2 == 1;
        assert!(only_odd.is_prime(9, &KNOWN));
        assert!(!only_odd.is_prime(10, &KNOWN));
    }
}
