use thiserror::Error;

/// Failures of the accounting report log accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The most recent report was read before any report was recorded.
    #[error("No report found")]
    EmptyReport,
    /// An empty value was handed to the report setter.
    #[error("Please provide a value")]
    InvalidInput,
}
