//! 6k±1 candidate enumeration.

/// Yields `6k - 1, 6k + 1` for k = 1, 2, 3, ... : every integer above 3
/// not divisible by 2 or 3. Ends instead of wrapping once `6k + 1` would
/// overflow `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SixStep {
    k: u64,
    upper: bool,
}

impl SixStep {
    pub fn new() -> Self {
        Self { k: 1, upper: false }
    }
}

impl Default for SixStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SixStep {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let base = self.k.checked_mul(6)?;
        if self.upper {
            let candidate = base.checked_add(1)?;
            self.k += 1;
            self.upper = false;
            Some(candidate)
        } else {
            self.upper = true;
            Some(base - 1)
        }
    }
}

impl core::iter::FusedIterator for SixStep {}
