//! Ripple / attenuation to tolerance conversion.
//!
//! Turns the requested passband ripple `Ap` and stopband attenuation `As`
//! (both in dB) into the common tolerance `δ`, the attenuation and ripple that
//! `δ` actually realizes, and the order-estimation constant `D`:
//!
//! ```text
//! δs = 10^(-0.05·As)
//! δp = (10^(0.05·Ap) − 1) / (10^(0.05·Ap) + 1)
//! δ  = trunc(min(δs, δp))
//! AS = trunc(−20·log10 δ)
//! AP = trunc(20·log10((1 + δ) / (1 − δ)))
//! D  = 0.9222                       if AS ≤ 21
//!      trunc((AS − 7.95) / 14.36)   otherwise
//! ```
use serde::Serialize;
use tracing::debug;

use crate::error::DesignResult;
use crate::spec::FilterSpec;
use crate::truncate::truncate;

/// `D` used when the realized attenuation is at most [`RECTANGULAR_LIMIT_DB`].
pub const D_RECTANGULAR: f64 = 0.9222;

/// Attenuation (dB) at or below which the rectangular-window estimate applies.
pub const RECTANGULAR_LIMIT_DB: f64 = 21.0;

/// Tolerance and realized ripple figures derived from a [`FilterSpec`].
///
/// Only [`convert`] builds one, so holding a `RippleResult` proves the
/// conversion ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RippleResult {
    delta: f64,
    stopband_attenuation: f64,
    passband_ripple: f64,
    d: f64,
    round_to: i32,
}

impl RippleResult {
    /// Common tolerance `δ = min(δs, δp)`, truncated.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Realized stopband attenuation `AS` in dB.
    pub fn stopband_attenuation(&self) -> f64 {
        self.stopband_attenuation
    }

    /// Realized passband ripple `AP` in dB.
    pub fn passband_ripple(&self) -> f64 {
        self.passband_ripple
    }

    /// Order-estimation constant `D`.
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Precision the figures were truncated to.
    pub fn round_to(&self) -> i32 {
        self.round_to
    }
}

/// Stopband tolerance `δs` for an attenuation in dB.
pub fn stopband_tolerance(as_db: f64) -> f64 {
    10f64.powf(-0.05 * as_db)
}

/// Passband tolerance `δp` for a peak-to-peak ripple in dB.
pub fn passband_tolerance(ap_db: f64) -> f64 {
    let g = 10f64.powf(0.05 * ap_db);
    (g - 1.0) / (g + 1.0)
}

/// Run the ripple conversion for `spec`.
///
/// # Errors
///
/// [`DesignError::InvalidPrecision`](crate::DesignError::InvalidPrecision)
/// when `spec.round_to` is negative.
///
/// # Examples
///
/// ```
/// use firdes::{ripple, Band, FilterSpec, WindowKind};
///
/// let spec = FilterSpec::new(
///     Band::Lowpass { passband: 500.0, stopband: 750.0 },
///     WindowKind::Hamming,
///     2500.0,
///     0.4,
///     34.0,
/// );
/// let r = ripple::convert(&spec).unwrap();
/// assert_eq!(r.delta(), 0.0199);
/// assert_eq!(r.stopband_attenuation(), 34.0229);
/// assert_eq!(r.d(), 1.8156);
/// ```
pub fn convert(spec: &FilterSpec) -> DesignResult<RippleResult> {
    let round_to = spec.round_to;
    let delta_s = stopband_tolerance(spec.stopband_attenuation_db);
    let delta_p = passband_tolerance(spec.passband_ripple_db);

    let delta = truncate(delta_s.min(delta_p), round_to)?;
    let stopband_attenuation = truncate(-20.0 * delta.log10(), round_to)?;
    let passband_ripple = truncate(20.0 * ((1.0 + delta) / (1.0 - delta)).log10(), round_to)?;
    let d = d_parameter(stopband_attenuation, round_to)?;

    debug!(
        delta_s,
        delta_p,
        delta,
        stopband_attenuation,
        passband_ripple,
        d,
        "ripple conversion"
    );

    Ok(RippleResult {
        delta,
        stopband_attenuation,
        passband_ripple,
        d,
        round_to,
    })
}

/// Order-estimation constant `D` for a realized attenuation `AS`.
pub fn d_parameter(as_db: f64, round_to: i32) -> DesignResult<f64> {
    if as_db <= RECTANGULAR_LIMIT_DB {
        Ok(D_RECTANGULAR)
    } else {
        truncate((as_db - 7.95) / 14.36, round_to)
    }
}
