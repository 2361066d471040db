use thiserror::Error;

pub type SyResult<T> = Result<T, SyError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
