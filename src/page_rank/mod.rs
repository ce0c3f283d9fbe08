//! Two estimators of the random surfer's stationary distribution.
//!
//! [`sampled`] counts where a long random walk goes; [`iterated`] relaxes the
//! PageRank equation until it stops moving. Both share the step rule in
//! [`transition`] and should agree up to sampling noise.

mod traits;
pub use self::traits::*;
pub mod iterated;
pub use self::iterated::{iterate_pagerank, IteratedPageRank};
pub mod sampled;
pub use self::sampled::{sample_pagerank, RandomSource, SampledPageRank};
pub mod transition;
pub use self::transition::{transition, transition_by_id, Distribution};

/// Probability of following a link rather than jumping anywhere.
pub const DAMPING: f64 = 0.85;
pub const SAMPLES: usize = 10_000;
pub const EPSILON: f64 = 0.001;
pub const MAX_ITERATIONS: usize = 10_000;
