use confab_core::DataSourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverError {
    /// The topic did not compile as a regular expression; an
    /// invalid-argument condition, not a data-source failure.
    #[error("invalid topic pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Source(#[from] DataSourceError),
}
