//! Batch solving with feature-gated parallelism
//!
//! A single solve is inherently sequential, but independent systems share
//! nothing and can be solved side by side. With the `rayon` feature the batch
//! is spread over the rayon pool, otherwise it runs in order.

use crate::config::SolverConfig;
use crate::error::Result;
use crate::solve::solve_flat;
use crate::system::FlatSystem;
use math_fixed_point::Fixed;

/// Check if parallel processing is available
#[cfg(feature = "rayon")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "rayon"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Parallel map over a slice
#[cfg(feature = "rayon")]
fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    data.par_iter().map(f).collect()
}

/// Sequential map (fallback when parallel is not available)
#[cfg(not(feature = "rayon"))]
fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    data.iter().map(f).collect()
}

/// Solve independent systems sharing one configuration.
///
/// Results come back in input order; a failing system does not affect the
/// others.
pub fn solve_batch(config: &SolverConfig, systems: &[FlatSystem]) -> Vec<Result<Vec<Fixed>>> {
    log::debug!(
        "solving batch of {} systems (parallel: {})",
        systems.len(),
        is_parallel_available()
    );
    parallel_map(systems, |system| {
        solve_flat(config, &system.matrix, &system.rhs)
    })
}
