//! cumulative::options — configuration for cumulative-to-instantaneous
//! transforms.
//!
//! Purpose
//! -------
//! Decide what happens when a cumulative series *decreases* between two
//! consecutive time steps. The default clamps such differences to
//! zero; callers that need mass balance or strict input checking can pick a
//! different policy instead of post-processing the output.
//!
//! Key behaviors
//! -------------
//! - [`NegativeIncrementPolicy`] enumerates the three handling strategies and
//!   parses from the lowercase names used by the Python bindings.
//! - [`Cum2InstOptions`] bundles the policy into the value passed to
//!   [`cum2inst_with_options`](crate::cumulative::cum2inst::cum2inst_with_options).
//!
//! Conventions
//! -----------
//! - A *negative step* is a strictly negative first difference. Zero and NaN
//!   differences are never negative steps.
//! - The baseline row (row 0) is never subject to the policy; it is copied
//!   verbatim whatever its sign.
//!
//! Testing notes
//! -------------
//! - Unit tests check the default policy, the builder, and string parsing
//!   (accepted spellings and the `UnknownPolicy` branch).

use crate::cumulative::errors::{CumError, CumResult};
use std::str::FromStr;

/// NegativeIncrementPolicy — handling of decreasing cumulative values.
///
/// Variants
/// --------
/// - `Clamp` (default)
///   Replace a negative difference with `0.0`. Instantaneous values stay
///   non-negative; total volume is no longer conserved when the input
///   really decreases.
/// - `Keep`
///   Emit the raw first difference. Column sums of the output equal the last
///   cumulative value, but the output may contain negative values.
/// - `Reject`
///   Fail with [`CumError::DecreasingCumulative`] at the first negative step,
///   scanning members in column order and time steps within each member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeIncrementPolicy {
    #[default]
    Clamp,
    Keep,
    Reject,
}

impl NegativeIncrementPolicy {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            NegativeIncrementPolicy::Clamp => "clamp",
            NegativeIncrementPolicy::Keep => "keep",
            NegativeIncrementPolicy::Reject => "reject",
        }
    }
}

impl std::fmt::Display for NegativeIncrementPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NegativeIncrementPolicy {
    type Err = CumError;

    /// Parse `"clamp"`, `"keep"` or `"reject"`, ignoring ASCII case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> CumResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(NegativeIncrementPolicy::Clamp),
            "keep" => Ok(NegativeIncrementPolicy::Keep),
            "reject" => Ok(NegativeIncrementPolicy::Reject),
            _ => Err(CumError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Cum2InstOptions — options for a single cumulative-to-instantaneous call.
///
/// Fields
/// ------
/// - `negative`: [`NegativeIncrementPolicy`]
///   How strictly negative first differences are handled.
///
/// Notes
/// -----
/// - `Cum2InstOptions::default()` reproduces the clamp-to-zero behaviour of
///   [`cum2inst`](crate::cumulative::cum2inst::cum2inst).
///
/// Examples
/// --------
/// ```rust
/// # use rust_streamflow::cumulative::options::{Cum2InstOptions, NegativeIncrementPolicy};
/// let opts = Cum2InstOptions::default().with_negative(NegativeIncrementPolicy::Keep);
/// assert_eq!(opts.negative, NegativeIncrementPolicy::Keep);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cum2InstOptions {
    /// Handling of strictly negative first differences.
    pub negative: NegativeIncrementPolicy,
}

impl Cum2InstOptions {
    pub fn new(negative: NegativeIncrementPolicy) -> Cum2InstOptions {
        Cum2InstOptions { negative }
    }

    /// Return a copy with the negative-increment policy replaced.
    pub fn with_negative(mut self, negative: NegativeIncrementPolicy) -> Cum2InstOptions {
        self.negative = negative;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The default policy and options.
    // - `with_negative` builder semantics.
    // - `FromStr` round-trip through `as_str` and the error branch.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The default must match the clamp-to-zero behaviour of `cum2inst`.
    //
    // Expect
    // ------
    // - `Cum2InstOptions::default().negative == Clamp`.
    fn options_default_policy_is_clamp() {
        // Act
        let opts = Cum2InstOptions::default();

        // Assert
        assert_eq!(opts.negative, NegativeIncrementPolicy::Clamp);
        assert_eq!(opts, Cum2InstOptions::new(NegativeIncrementPolicy::Clamp));
    }

    #[test]
    // Purpose
    // -------
    // `with_negative` replaces the policy without touching the original.
    //
    // Given
    // -----
    // - A default options value.
    //
    // Expect
    // ------
    // - The returned copy carries `Reject`; the original still `Clamp`.
    fn options_with_negative_replaces_policy() {
        // Arrange
        let base = Cum2InstOptions::default();

        // Act
        let strict = base.with_negative(NegativeIncrementPolicy::Reject);

        // Assert
        assert_eq!(strict.negative, NegativeIncrementPolicy::Reject);
        assert_eq!(base.negative, NegativeIncrementPolicy::Clamp);
    }

    #[test]
    // Purpose
    // -------
    // Every policy parses back from its own name, with case and whitespace
    // ignored.
    //
    // Given
    // -----
    // - All three variants, rendered via `as_str` and in mixed case.
    //
    // Expect
    // ------
    // - Each string parses to the original variant.
    fn policy_from_str_accepts_names_case_insensitively() {
        for policy in [
            NegativeIncrementPolicy::Clamp,
            NegativeIncrementPolicy::Keep,
            NegativeIncrementPolicy::Reject,
        ] {
            // Arrange
            let lower = policy.as_str();
            let shouty = format!("  {}  ", lower.to_ascii_uppercase());

            // Act
            let from_lower: NegativeIncrementPolicy = lower.parse().unwrap();
            let from_shouty: NegativeIncrementPolicy = shouty.parse().unwrap();

            // Assert
            assert_eq!(from_lower, policy);
            assert_eq!(from_shouty, policy);
            assert_eq!(policy.to_string(), lower);
        }
    }

    #[test]
    // Purpose
    // -------
    // Unrecognised names are rejected with the original string preserved.
    //
    // Given
    // -----
    // - "zero".
    //
    // Expect
    // ------
    // - `Err(CumError::UnknownPolicy("zero"))`.
    fn policy_from_str_unknown_name_returns_unknown_policy() {
        // Act
        let result = "zero".parse::<NegativeIncrementPolicy>();

        // Assert
        assert_eq!(result, Err(CumError::UnknownPolicy("zero".to_string())));
    }
}
