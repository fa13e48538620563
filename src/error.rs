use thiserror::Error;

/// Errors returned by the statistics and generation helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Statistics were requested over a sequence with no elements.
    #[error("cannot compute statistics of an empty sequence")]
    EmptyInput,

    /// The requested length does not fit the element type.
    #[error("length {len} is not representable by the element type")]
    InvalidLength { len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
