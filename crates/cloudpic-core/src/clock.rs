//! Time source used when stamping signed requests.

/// Supplies the current Unix time in whole seconds.
///
/// Closures returning `i64` are clocks too, which keeps tests deterministic:
///
/// ```
/// use cloudpic_core::clock::Clock;
///
/// let frozen = || 1_700_000_000_i64;
/// assert_eq!(frozen.unix_timestamp(), 1_700_000_000);
/// ```
pub trait Clock: Send + Sync {
    fn unix_timestamp(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn unix_timestamp(&self) -> i64 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.unix_timestamp() > 1_577_836_800);
    }
}
