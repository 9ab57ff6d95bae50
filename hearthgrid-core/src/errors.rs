use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("card source error: {0}")]
    Source(String),
    #[error("invalid input: {0}")]
    Invalid(String),
}
