use thiserror::Error;

/// Errors raised by plot-dictionary selection and thermogram construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RpoError {
    #[error("unrecognized case `{0}`; expected one of: rpo_labs, rpo_md, rpo_rd")]
    UnrecognizedCase(String),

    #[error("unrecognized domain `{0}`; expected one of: time, temp")]
    UnrecognizedDomain(String),

    #[error("unrecognized representation `{0}`; expected one of: fraction, rate")]
    UnrecognizedRepresentation(String),

    /// A series case was requested without a data object.
    #[error("case `{case}` requires a data object")]
    MissingData { case: &'static str },

    /// The data object does not carry the named series (e.g. no modeled fit yet).
    #[error("data has no `{0}` series")]
    MissingSeries(&'static str),

    #[error("length mismatch: `{name}` has {got} values, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("need at least 2 observations, got {0}")]
    TooFewPoints(usize),

    #[error("time must be strictly increasing (violated at index {0})")]
    NonMonotonicTime(usize),
}

pub type Result<T> = std::result::Result<T, RpoError>;
