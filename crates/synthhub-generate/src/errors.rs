use thiserror::Error;

/// Errors emitted by the snapshot generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A caller supplied an argument outside the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
