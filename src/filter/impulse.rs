//! Ideal (sinc) impulse responses.
//!
//! Each generator returns the center-referenced half-sequence `h[0..=n]`:
//! `h[0]` is the center tap, `h[i]` the tap `i` samples away from it.  With
//!
//! ```text
//! s_i(fc) = (2·fc/F) · sin(2π·i·fc/F) / (2π·i·fc/F),   i ≥ 1
//! ```
//!
//! the four kinds are composed from lowpass responses:
//!
//! | kind     | cutoffs                         | h[0]              | h[i]                  |
//! |----------|---------------------------------|-------------------|-----------------------|
//! | lowpass  | fc = (fp + fs)/2                | 2fc/F             | s_i(fc)               |
//! | highpass | fc = (fp + fs)/2                | 1 − 2fc/F         | −s_i(fc)              |
//! | bandpass | fc1 = fp1 − Δf/2, fc2 = fp2 + Δf/2 | 2(fc2 − fc1)/F | s_i(fc2) − s_i(fc1)   |
//! | bandstop | fc1 = fp1 + Δf/2, fc2 = fp2 − Δf/2 | 1 − 2(fc2 − fc1)/F | s_i(fc1) − s_i(fc2) |
//!
//! Every sample is truncated to `round_to` decimals as it is produced.
use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::error::DesignResult;
use crate::filter::order::OrderResult;
use crate::spec::Band;
use crate::truncate::truncate;

/// Scaled sinc sample `s_i(fc)` for `i ≥ 1`.
fn sinc_sample(i: usize, cutoff: f64, sampling_rate: f64) -> f64 {
    let gain = 2.0 * cutoff / sampling_rate;
    let term = 2.0 * PI * i as f64 * cutoff / sampling_rate;
    gain * term.sin() / term
}

/// Cutoff frequencies (Hz) used for the ideal response of `band`.
///
/// Single-edge kinds return the same value twice.
pub fn cutoffs(band: &Band) -> (f64, f64) {
    let half = band.transition_width() / 2.0;
    match *band {
        Band::Lowpass { passband, stopband } | Band::Highpass { passband, stopband } => {
            let fc = 0.5 * (passband + stopband);
            (fc, fc)
        }
        Band::Bandpass { pass_low, pass_high, .. } => (pass_low - half, pass_high + half),
        Band::Bandstop { pass_low, pass_high, .. } => (pass_low + half, pass_high - half),
    }
}

/// Ideal impulse-response half-sequence for `band`, of length `n + 1`.
///
/// # Errors
///
/// [`DesignError::InvalidPrecision`](crate::DesignError::InvalidPrecision)
/// when `round_to` is negative.
pub fn impulse_response(
    band: &Band,
    sampling_rate: f64,
    order: &OrderResult,
    round_to: i32,
) -> DesignResult<Vec<f64>> {
    let (fc1, fc2) = cutoffs(band);
    let f = sampling_rate;

    let center = match band {
        Band::Lowpass { .. } => 2.0 * fc1 / f,
        Band::Highpass { .. } => 1.0 - 2.0 * fc1 / f,
        Band::Bandpass { .. } => 2.0 * (fc2 - fc1) / f,
        Band::Bandstop { .. } => 1.0 - 2.0 * (fc2 - fc1) / f,
    };
    let tap = |i: usize| match band {
        Band::Lowpass { .. } => sinc_sample(i, fc1, f),
        Band::Highpass { .. } => -sinc_sample(i, fc1, f),
        Band::Bandpass { .. } => sinc_sample(i, fc2, f) - sinc_sample(i, fc1, f),
        Band::Bandstop { .. } => sinc_sample(i, fc1, f) - sinc_sample(i, fc2, f),
    };

    let n = order.order();
    let mut h = Vec::with_capacity(n + 1);
    h.push(truncate(center, round_to)?);
    for i in 1..=n {
        h.push(truncate(tap(i), round_to)?);
    }

    debug!(kind = %band.kind(), fc1, fc2, center = h[0], len = h.len(), "ideal impulse response");
    trace!(?h, "impulse half-sequence");
    Ok(h)
}
