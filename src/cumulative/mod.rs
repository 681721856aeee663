//! cumulative — transforms for cumulative ensemble time series.
//!
//! Purpose
//! -------
//! Collect the routines that turn cumulative quantities (e.g. cumulative
//! streamflow volume from a forecast ensemble) into per-step instantaneous
//! quantities, together with their options, shape guards and error types.
//!
//! Key behaviors
//! -------------
//! - [`cum2inst`] converts a `(T, E)` ensemble with the clamp-to-zero
//!   behaviour; [`cum2inst_with_options`] exposes the negative-increment
//!   policy and returns [`Cum2InstOutcome`] diagnostics.
//! - [`cum2inst_series`] handles the single-member case from a plain slice.
//! - [`validate_shape`] guards against empty axes before any indexing.
//!
//! Invariants & assumptions
//! ------------------------
//! - Rows are time steps and columns are ensemble members.
//! - Members never interact; each column is transformed on its own.
//! - Row 0 is the baseline and is copied verbatim.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use rust_streamflow::cumulative::prelude::*;
//! use ndarray::array;
//!
//! # fn main() -> CumResult<()> {
//! let cum = array![[0.0], [5.0], [12.0], [12.0]];
//! let inst = cum2inst(&cum)?;
//! assert_eq!(inst, array![[0.0], [5.0], [7.0], [0.0]]);
//! # Ok(())
//! # }
//! ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; `tests/` exercises the
//!   public surface end to end.

pub mod cum2inst;
pub mod errors;
pub mod options;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::cum2inst::{Cum2InstOutcome, cum2inst, cum2inst_series, cum2inst_with_options};
pub use self::errors::{CumError, CumResult};
pub use self::options::{Cum2InstOptions, NegativeIncrementPolicy};
pub use self::validation::validate_shape;

pub mod prelude {
    pub use super::cum2inst::{Cum2InstOutcome, cum2inst, cum2inst_series, cum2inst_with_options};
    pub use super::errors::{CumError, CumResult};
    pub use super::options::{Cum2InstOptions, NegativeIncrementPolicy};
}
