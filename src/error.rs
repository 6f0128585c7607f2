use thiserror::Error;

/// Failures signalled by the fixture library.
///
/// Division by zero and aggregation over empty slices are not errors; those
/// operations return a zero default instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("string {0:?} not found")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
