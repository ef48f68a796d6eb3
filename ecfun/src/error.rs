//! The error type shared by field, point and signature operations.
use core::fmt;

/// Everything that can go wrong when constructing or combining field elements,
/// curve points and signatures.
///
/// Every variant is reported at the point of detection. Nothing is retried or
/// silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A field element's value was not in `[0, prime)`.
    OutOfRange,
    /// Arithmetic was attempted between elements of two different fields.
    FieldMismatch,
    /// Division by (or inversion of) zero.
    DivisionByZero,
    /// Integer coordinates did not divide exactly.
    InexactDivision,
    /// Only one of the two coordinates of a point was given.
    MalformedPoint,
    /// The coordinates do not satisfy the curve equation.
    PointNotOnCurve,
    /// Two points with different curve parameters were combined.
    CurveMismatch,
    /// A signature component was outside of `[1, N)`.
    InvalidSignature,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            OutOfRange => write!(f, "value not in field range"),
            FieldMismatch => write!(f, "cannot combine numbers in different fields"),
            DivisionByZero => write!(f, "division by zero"),
            InexactDivision => write!(f, "integer division was not exact"),
            MalformedPoint => write!(f, "point must have both or neither coordinate"),
            PointNotOnCurve => write!(f, "point is not on the curve"),
            CurveMismatch => write!(f, "points are not on the same curve"),
            InvalidSignature => write!(f, "signature component out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
