use thiserror::Error;

/// Convenience result type for the fallible parts of the crate.
pub type MathResult<T> = Result<T, MathError>;

/// Error type returned by the dataset helpers, operator parsing, and the batch executor.
///
/// The aggregation and transformation functions themselves never fail; an undefined numeric
/// result is reported as `f64::NAN` instead.
#[derive(Debug, Error)]
pub enum MathError {
    /// The referenced column is not part of the dataset schema.
    #[error("unknown column '{column}'")]
    UnknownColumn { column: String },

    /// A column with this name already exists in the dataset schema.
    #[error("column '{column}' already exists")]
    DuplicateColumn { column: String },

    /// A string did not name a known [`crate::processing::AggregateOp`].
    #[error("unknown aggregate operation '{name}'")]
    UnknownOperation { name: String },

    /// [`crate::execution::ExecutionOptions`] were rejected.
    #[error("invalid execution options: {message}")]
    InvalidOptions { message: String },

    /// The rayon thread pool could not be created.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
