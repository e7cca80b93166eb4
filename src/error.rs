use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the analysis engine.
///
/// Every fault here is terminal for a run: the analysis either produces a
/// complete report or aborts with one of these variants. Each variant carries
/// enough context to be actionable.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid run configuration (zero simulation count, unparseable
    /// environment values, malformed batch columns).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Aggregation was attempted over zero samples; mean energy and risk are
    /// undefined for an empty population.
    #[error("empty batch: statistics are undefined over zero samples")]
    EmptyBatch,

    /// Rejected sampling distribution parameters.
    #[error("invalid sampling distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    /// Propagated I/O errors from report output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_carries_the_offending_detail() {
        let e = Error::InvalidConfig("SIMULATIONS must be a positive integer".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid configuration"));
        assert!(msg.contains("SIMULATIONS"));
    }

    #[test]
    fn empty_batch_names_the_fault() {
        let msg = format!("{}", Error::EmptyBatch);
        assert!(msg.contains("zero samples"));
    }

    #[test]
    fn foreign_errors_convert_into_the_taxonomy() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        assert!(matches!(Error::from(io), Error::Io(_)));
        let dist = rand_distr::NormalError::BadVariance;
        assert!(matches!(Error::from(dist), Error::Distribution(_)));
    }
}
