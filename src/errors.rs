use thiserror::Error;

/// Error type for the few fallible edges of the analytics core.
///
/// The view computations themselves are total functions; only parsing
/// caller-supplied keys can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Unknown date range key: {0}")]
    UnknownDateRange(String),
}
