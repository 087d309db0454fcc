// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Degenerate axis: cannot normalize a zero-length or non-finite vector")]
    DegenerateAxis,

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Rejection sampling gave up after {attempts} attempts")]
    SamplingExhausted { attempts: usize },

    #[error("Unknown direction: {name}")]
    UnknownDirection { name: String },
}

pub type MathResult<T> = Result<T, MathError>;
