//! cumulative::cum2inst — cumulative-to-instantaneous ensemble transform.
//!
//! Purpose
//! -------
//! Turn an ensemble of cumulative series (e.g. cumulative streamflow volume)
//! into per-step instantaneous series. Rows are time steps, columns are
//! ensemble members; every column is processed independently.
//!
//! Key behaviors
//! -------------
//! - Copy row 0 verbatim as the baseline (the initial stock is treated as
//!   the first instantaneous value, whatever its sign).
//! - For every later row, emit the first difference `cum[i] − cum[i − 1]`,
//!   with strictly negative differences handled by the configured
//!   [`NegativeIncrementPolicy`] (clamped to `0.0` by default).
//! - Count negative steps and track the largest drop so callers can tell
//!   whether clamping distorted the mass balance. A single `warn!` record is
//!   emitted per call when any were seen.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output shape always equals input shape.
//! - `out.row(0) == cum.row(0)` elementwise, bit for bit.
//! - NaN differences propagate as NaN; they are neither clamped nor counted
//!   as negative steps.
//! - Inputs must have at least one row and one column; see
//!   [`validate_shape`](crate::cumulative::validation::validate_shape).
//!
//! Conventions
//! -----------
//! - Inputs are borrowed as any `ndarray` 2-D array or view of `f64`, so
//!   transposed or sliced views work without copying.
//! - The result is always a freshly allocated, standard-layout `Array2<f64>`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the reference scenarios (single column, two columns,
//!   decreasing value, single time step), NaN propagation, negative
//!   baselines, each negative-increment policy, non-contiguous views, and the
//!   single-series convenience wrapper.
use crate::cumulative::{
    errors::{CumError, CumResult},
    options::{Cum2InstOptions, NegativeIncrementPolicy},
    validation::validate_shape,
};
use log::{debug, warn};
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Axis, Data, Ix2};

/// Cum2InstOutcome — instantaneous ensemble plus negative-step diagnostics.
///
/// Fields
/// ------
/// - `instantaneous`: `Array2<f64>`
///   Per-step values, same shape as the cumulative input.
/// - `negative_steps`: `usize`
///   Number of strictly negative first differences seen across all members.
///   Under `Clamp` these were replaced by `0.0`; under `Keep` they are
///   present in `instantaneous` as negative values.
/// - `largest_drop`: `f64`
///   Largest magnitude of a negative difference, or `0.0` when
///   `negative_steps == 0`.
///
/// Invariants
/// ----------
/// - `largest_drop >= 0.0`, and `largest_drop > 0.0` iff
///   `negative_steps > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cum2InstOutcome {
    instantaneous: Array2<f64>,
    negative_steps: usize,
    largest_drop: f64,
}

impl Cum2InstOutcome {
    pub fn instantaneous(&self) -> &Array2<f64> {
        &self.instantaneous
    }

    pub fn negative_steps(&self) -> usize {
        self.negative_steps
    }

    pub fn largest_drop(&self) -> f64 {
        self.largest_drop
    }

    /// Consume the outcome and return the instantaneous ensemble.
    pub fn into_instantaneous(self) -> Array2<f64> {
        self.instantaneous
    }
}

/// Convert a cumulative ensemble into instantaneous values, clamping
/// negative differences to zero.
///
/// Parameters
/// ----------
/// - `cum`: `&ArrayBase<S, Ix2>`
///   Cumulative ensemble of shape `(T, E)` with `T ≥ 1` time steps (rows)
///   and `E ≥ 1` members (columns).
///
/// Returns
/// -------
/// `CumResult<Array2<f64>>`
///   A new `(T, E)` array where row 0 equals `cum.row(0)` and, for `i ≥ 1`,
///   `out[[i, j]] = max(cum[[i, j]] − cum[[i − 1, j]], 0)`.
///
/// Errors
/// ------
/// - `CumError::EmptyTimeAxis` when `T == 0`.
/// - `CumError::EmptyEnsemble` when `E == 0`.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use rust_streamflow::cumulative::cum2inst::cum2inst;
/// # use ndarray::array;
/// let cum = array![[0.0, 0.0], [3.0, 1.0], [3.0, 4.0]];
/// let inst = cum2inst(&cum).unwrap();
/// assert_eq!(inst, array![[0.0, 0.0], [3.0, 1.0], [0.0, 3.0]]);
/// ```
pub fn cum2inst<S>(cum: &ArrayBase<S, Ix2>) -> CumResult<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    cum2inst_with_options(cum, &Cum2InstOptions::default())
        .map(Cum2InstOutcome::into_instantaneous)
}

/// Convert a cumulative ensemble into instantaneous values under explicit
/// options.
///
/// Parameters
/// ----------
/// - `cum`: `&ArrayBase<S, Ix2>`
///   Cumulative ensemble of shape `(T, E)`, `T ≥ 1`, `E ≥ 1`.
/// - `opts`: `&Cum2InstOptions`
///   Selects how strictly negative first differences are handled.
///
/// Returns
/// -------
/// `CumResult<Cum2InstOutcome>`
///   The instantaneous ensemble together with the number of negative steps
///   and the largest drop observed.
///
/// Errors
/// ------
/// - `CumError::EmptyTimeAxis` / `CumError::EmptyEnsemble` for empty axes.
/// - `CumError::DecreasingCumulative { step, member, drop }` under
///   `NegativeIncrementPolicy::Reject`, for the first negative step found
///   when scanning member 0 top to bottom, then member 1, and so on.
///
/// Notes
/// -----
/// - Differences are computed on the raw input, never on already-clamped
///   output, so a dip followed by recovery yields `0` then the net gain over
///   the dip (e.g. `[5, 4, 6] → [5, 0, 2]`).
pub fn cum2inst_with_options<S>(
    cum: &ArrayBase<S, Ix2>, opts: &Cum2InstOptions,
) -> CumResult<Cum2InstOutcome>
where
    S: Data<Elem = f64>,
{
    validate_shape(cum.dim())?;
    let (n_steps, n_members) = cum.dim();
    debug!(
        "cum2inst: {n_steps} time steps x {n_members} members, negative policy '{}'",
        opts.negative
    );

    let mut instantaneous = Array2::<f64>::zeros((n_steps, n_members));
    instantaneous.row_mut(0).assign(&cum.row(0));

    let mut negative_steps = 0_usize;
    let mut largest_drop = 0.0_f64;
    for j in 0..n_members {
        for i in 0..n_steps - 1 {
            let diff = cum[[i + 1, j]] - cum[[i, j]];
            // NaN compares false here and falls through unchanged.
            instantaneous[[i + 1, j]] = if diff < 0.0 {
                negative_steps += 1;
                largest_drop = largest_drop.max(-diff);
                match opts.negative {
                    NegativeIncrementPolicy::Clamp => 0.0,
                    NegativeIncrementPolicy::Keep => diff,
                    NegativeIncrementPolicy::Reject => {
                        return Err(CumError::DecreasingCumulative {
                            step: i + 1,
                            member: j,
                            drop: -diff,
                        });
                    }
                }
            } else {
                diff
            };
        }
    }

    if negative_steps > 0 {
        let action = match opts.negative {
            NegativeIncrementPolicy::Clamp => "clamped to zero",
            _ => "kept",
        };
        warn!(
            "cum2inst: {negative_steps} decreasing step(s) {action}; largest drop {largest_drop}"
        );
    }

    Ok(Cum2InstOutcome { instantaneous, negative_steps, largest_drop })
}

/// Convert a single cumulative series into instantaneous values.
///
/// Treats `series` as a one-member ensemble of shape `(series.len(), 1)`
/// and applies [`cum2inst`].
///
/// # Errors
/// - [`CumError::EmptyTimeAxis`] if `series` is empty.
pub fn cum2inst_series(series: &[f64]) -> CumResult<Array1<f64>> {
    let ensemble = ArrayView1::from(series).insert_axis(Axis(1));
    let inst = cum2inst(&ensemble)?;
    Ok(inst.index_axis_move(Axis(1), 0))
}
