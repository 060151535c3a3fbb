//! Decimal truncation toward zero.
//!
//! Every numeric stage truncates its outputs to a fixed number of decimals
//! rather than rounding them, so a design produces the same decimal digits on
//! every platform.
use crate::error::{DesignError, DesignResult};

/// Slack, in ULPs of the scaled value, within which it is treated as an integer.
const SNAP_ULPS: f64 = 16.0;

/// Truncate `x` toward zero to `decimals` decimal places.
///
/// Computes `trunc(x · 10^decimals) / 10^decimals`.  A scaled value that sits
/// within a few ULPs of an integer is taken as that integer first: `0.29 · 100`
/// evaluates to `28.999999999999996`, and without the snap an already
/// truncated value could lose one more step when truncated again.
///
/// A result of zero is always `+0.0`.  If `10^decimals` overflows the scaled
/// value, `x` is returned unchanged.
///
/// # Errors
///
/// [`DesignError::InvalidPrecision`] when `decimals < 0`.
///
/// # Examples
///
/// ```
/// use firdes::truncate;
///
/// assert_eq!(truncate(1.2399, 2).unwrap(), 1.23);
/// assert_eq!(truncate(-1.2399, 2).unwrap(), -1.23);
/// assert!(truncate(1.0, -1).is_err());
/// ```
pub fn truncate(x: f64, decimals: i32) -> DesignResult<f64> {
    if decimals < 0 {
        return Err(DesignError::InvalidPrecision(decimals));
    }
    let factor = 10f64.powi(decimals);
    let scaled = x * factor;
    if !scaled.is_finite() {
        return Ok(x);
    }

    let nearest = scaled.round();
    let slack = SNAP_ULPS * f64::EPSILON * scaled.abs().max(1.0);
    let whole = if (scaled - nearest).abs() <= slack {
        nearest
    } else {
        scaled.trunc()
    };
    // -0.0 + 0.0 == +0.0
    Ok(whole / factor + 0.0)
}
