//! cumulative::errors — error types for cumulative-series transforms.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the cumulative-series
//! transforms, together with a conversion layer to Python exceptions for
//! PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`CumResult`] and [`CumError`] as the canonical result and error
//!   types for shape validation, option parsing, and the strict
//!   negative-increment policy.
//! - Attach human-readable `Display` messages that embed the offending
//!   payload (time step, ensemble member, drop size, policy string).
//! - Implement `From<CumError> for PyErr` so the bindings raise
//!   `ValueError` with the Rust message preserved.
//!
//! Invariants & assumptions
//! ------------------------
//! - Transforms validate shapes up front and return [`CumResult<T>`] instead
//!   of panicking on user-facing input.
//! - `CumError` values are small and cloneable.
//!
//! Conventions
//! -----------
//! - `step` indices refer to the row of the *later* observation in a
//!   decreasing pair, i.e. `cum[step] < cum[step - 1]`.
//! - `member` indices are 0-based column indices.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload. The PyO3 conversion is left to Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type CumResult<T> = Result<T, CumError>;

/// CumError — error conditions for cumulative-to-instantaneous transforms.
///
/// Variants
/// --------
/// - `EmptyTimeAxis`
///   The input has no rows, so there is no baseline row to copy.
/// - `EmptyEnsemble`
///   The input has no columns (no ensemble members).
/// - `DecreasingCumulative { step, member, drop }`
///   Raised only under [`NegativeIncrementPolicy::Reject`]: the cumulative
///   value of `member` decreased by `drop` (> 0) between rows `step - 1`
///   and `step`.
/// - `UnknownPolicy(name)`
///   A policy string could not be parsed into a
///   [`NegativeIncrementPolicy`].
///
/// [`NegativeIncrementPolicy`]: crate::cumulative::options::NegativeIncrementPolicy
/// [`NegativeIncrementPolicy::Reject`]: crate::cumulative::options::NegativeIncrementPolicy::Reject
#[derive(Debug, Clone, PartialEq)]
pub enum CumError {
    //------ Shape errors ------
    EmptyTimeAxis,
    EmptyEnsemble,

    //------ Data errors ------
    DecreasingCumulative { step: usize, member: usize, drop: f64 },

    //------ Option errors ------
    UnknownPolicy(String),
}

impl std::error::Error for CumError {}

impl std::fmt::Display for CumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CumError::EmptyTimeAxis => {
                write!(f, "Cumulative series has no time steps; need at least 1 row.")
            }
            CumError::EmptyEnsemble => {
                write!(f, "Cumulative series has no ensemble members; need at least 1 column.")
            }
            CumError::DecreasingCumulative { step, member, drop } => write!(
                f,
                "Cumulative value of member {member} decreases by {drop} at time step {step}."
            ),
            CumError::UnknownPolicy(name) => write!(
                f,
                "Unknown negative-increment policy '{name}'. Expected one of: clamp, keep, reject."
            ),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<CumError> for PyErr {
    fn from(err: CumError) -> PyErr {
        PyValueError::new_err(format!("CumError: {err}"))
    }
}
