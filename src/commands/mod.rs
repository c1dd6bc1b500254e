//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{Console, Role, run_breaker_session, run_console, run_setter_session};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded generator when `seed` is given, otherwise one seeded from the OS
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seeded_rng_is_reproducible() {
        let a: u64 = make_rng(Some(42)).random();
        let b: u64 = make_rng(Some(42)).random();
        assert_eq!(a, b);
    }
}
