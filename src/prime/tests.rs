//! Search-level tests across bootstrap, primality and stepping.

use super::*;

fn is_prime_naive(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

fn naive_primes(count: usize) -> Vec<u64> {
    (2u64..).filter(|&n| is_prime_naive(n)).take(count).collect()
}

#[test]
fn agrees_with_naive_enumeration() -> anyhow::Result<()> {
    let search = PrimeSearch::default();
    for (i, expected) in naive_primes(600).into_iter().enumerate() {
        assert_eq!(search.nth(i as i64)?, expected, "index {i}");
    }
    Ok(())
}

#[test]
fn stepping_agrees_with_fast_path() {
    let bootstrap = BootstrapPrimes::generate();
    let stepped: Vec<u64> = SixStep::new()
        .filter(|&c| TrialDivision.is_prime(c, bootstrap.as_slice()))
        .take(2)
        .collect();
    assert_eq!(stepped, vec![small_index_prime(2).unwrap(), small_index_prime(3).unwrap()]);
}

#[test]
fn negative_indices_never_reach_the_loop() {
    let panicking = |_: u64, _: &[u64]| -> bool { panic!("stepping loop reached") };
    let search = PrimeSearch::with_test(SearchConfig::default(), panicking)
        .expect("default config is valid");
    for index in [-1, -5, i64::MIN] {
        let err = search.nth(index).unwrap_err();
        assert_eq!(err, PrimeError::InvalidArgument(NEGATIVE_INDEX_MESSAGE.into()));
    }
}

#[test]
fn custom_strategy_is_used() -> anyhow::Result<()> {
    let naive = |c: u64, _: &[u64]| is_prime_naive(c);
    let search = PrimeSearch::with_test(SearchConfig::default(), naive)?;
    assert_eq!(search.nth(24)?, 97);
    assert_eq!(search.nth(99)?, 541);
    Ok(())
}

#[test]
fn strict_policy_stops_at_ceiling() -> anyhow::Result<()> {
    let cfg = SearchConfig::builder()
        .bootstrap_limit(5)
        .bound_policy(BoundPolicy::Strict)
        .build()?;
    let search = PrimeSearch::new(cfg)?;
    // 23 is the last prime at or below 5² = 25.
    assert_eq!(search.nth(8)?, 23);
    assert_eq!(
        search.nth(9),
        Err(PrimeError::BeyondBootstrap { candidate: 29, ceiling: 25 })
    );
    Ok(())
}

#[test]
fn unchecked_policy_keeps_original_limitation() -> anyhow::Result<()> {
    let cfg = SearchConfig::builder().bootstrap_limit(5).build()?;
    let search = PrimeSearch::new(cfg)?;
    assert_eq!(search.nth(9)?, 29);
    assert_eq!(search.nth(14)?, 47);
    // 49 = 7² has no divisor in [2, 3, 5] and is counted as prime.
    assert_eq!(search.nth(15)?, 49);
    Ok(())
}

#[test]
fn strict_default_answers_below_ceiling() -> anyhow::Result<()> {
    let search = PrimeSearch::new(SearchConfig::strict())?;
    assert_eq!(search.nth(2000)?, 17_393);
    Ok(())
}

#[test]
fn searches_are_independent_across_threads() {
    let handles: Vec<_> = [19i64, 500, 986]
        .into_iter()
        .map(|i| std::thread::spawn(move || nth_prime(i)))
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("worker panicked"))
        .collect();
    assert_eq!(results, vec![Ok(71), Ok(3581), Ok(7793)]);
}
