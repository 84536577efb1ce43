use thiserror::Error;

/// Fetch or parse failure against a remote schedule resource.
///
/// Kept `Clone` (with rendered messages instead of source errors) so the
/// schedule cache can broadcast one population outcome to every waiter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("response from {url} was not valid JSON: {message}")]
    Parse { url: String, message: String },

    #[error("schedule population was interrupted")]
    Interrupted,
}

impl DataSourceError {
    #[must_use]
    pub fn http(url: &str, message: impl std::fmt::Display) -> Self {
        Self::Http {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn parse(url: &str, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}
