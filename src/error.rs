//! Error types for random-surfer

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed or inconsistent link data, e.g. a link to an unknown page.
    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),

    /// Out-of-range damping factor, zero sample count, empty graph, ...
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no convergence after {iterations} iterations (last delta={delta})")]
    NonConvergence { iterations: usize, delta: f64 },
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("damping={damping}")))
    }
}
