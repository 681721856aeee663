//! cumulative::validation — shape guards for cumulative ensembles.
//!
//! Purpose
//! -------
//! Centralize the only precondition the transforms enforce: a cumulative
//! ensemble must have at least one time step and at least one member.
//!
//! Invariants & assumptions
//! ------------------------
//! - Rank is fixed at 2 by the `Ix2` dimension type, so only axis lengths
//!   need checking here.
//! - Values are *not* inspected: NaN, ±∞ and decreasing sequences are
//!   handled by the transform itself according to its options.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the success path and both empty-axis branches.

use crate::cumulative::errors::{CumError, CumResult};

/// Validate the `(n_steps, n_members)` shape of a cumulative ensemble.
///
/// Parameters
/// ----------
/// - `dim`: `(usize, usize)`
///   Shape as returned by `ArrayBase::dim()` for a 2-D array: rows are time
///   steps, columns are ensemble members.
///
/// Errors
/// ------
/// - `CumError::EmptyTimeAxis` when `n_steps == 0`.
/// - `CumError::EmptyEnsemble` when `n_members == 0`.
///
/// The time axis is checked first, so a `(0, 0)` shape reports
/// `EmptyTimeAxis`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_streamflow::cumulative::validation::validate_shape;
/// # use rust_streamflow::cumulative::errors::CumError;
/// assert!(validate_shape((3, 2)).is_ok());
/// assert_eq!(validate_shape((0, 2)), Err(CumError::EmptyTimeAxis));
/// ```
pub fn validate_shape(dim: (usize, usize)) -> CumResult<()> {
    let (n_steps, n_members) = dim;
    if n_steps == 0 {
        return Err(CumError::EmptyTimeAxis);
    }
    if n_members == 0 {
        return Err(CumError::EmptyEnsemble);
    }
    Ok(())
}
