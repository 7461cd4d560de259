//! Error type shared by every layer of the crate.

use core::fmt;

/// Result alias used throughout `curvekit`.
pub type Result<T> = core::result::Result<T, Error>;

/// Failure modes surfaced by field, point, curve and protocol operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scalar, coordinate or signature component fell outside its valid interval.
    ValueOutOfRange,
    /// A supplied point does not satisfy the curve equation.
    NotOnCurve,
    /// Operands are bound to different curves.
    CurveMismatch,
    /// `sqrt` was called on a non-residue, or on a modulus not congruent to 3 mod 4.
    NoSquareRoot,
    /// Attempted to invert zero.
    DivisionByZero,
    /// The requested operation is not defined for this curve family.
    UnsupportedOperation,
    /// A name or alias is already present in the curve registry.
    NameAlreadyRegistered,
    /// No curve registered under the requested name.
    NameNotFound,
    /// An encoded point or signature failed a structural check.
    MalformedEncoding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ValueOutOfRange => write!(f, "curvekit: value out of range"),
            Error::NotOnCurve => write!(f, "curvekit: point is not on the curve"),
            Error::CurveMismatch => write!(f, "curvekit: operands are bound to different curves"),
            Error::NoSquareRoot => write!(f, "curvekit: no square root exists"),
            Error::DivisionByZero => write!(f, "curvekit: division by zero"),
            Error::UnsupportedOperation => {
                write!(f, "curvekit: operation unsupported for this curve family")
            }
            Error::NameAlreadyRegistered => write!(f, "curvekit: curve name already registered"),
            Error::NameNotFound => write!(f, "curvekit: no curve registered under that name"),
            Error::MalformedEncoding => write!(f, "curvekit: malformed encoding"),
        }
    }
}

impl std::error::Error for Error {}
