//! Coefficient assembly.
//!
//! The window and the ideal impulse response are multiplied elementwise
//! (each product truncated) and the resulting half-sequence `p[0..=n]` is
//! mirrored into the full `N`-tap sequence:
//!
//! ```text
//! c[k] = p[⌈|k − n/2|⌉],   k = 0 … N − 1
//! ```
//!
//! For odd `N` the center term `p[0]` lands once, in the middle.  For even `N`
//! there is no middle tap and `p[0]` is not used; the sequence is still
//! symmetric.
use serde::Serialize;
use std::ops::Index;
use tracing::debug;

use crate::error::{DesignError, DesignResult};
use crate::filter::order::OrderResult;
use crate::truncate::truncate;

/// Final symmetric tap sequence of length `N`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterCoefficients {
    taps: Vec<f64>,
}

impl FilterCoefficients {
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.taps
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.taps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.taps.iter()
    }

    /// Middle tap, present only for odd lengths.
    pub fn center(&self) -> Option<f64> {
        match self.taps.len() % 2 {
            1 => Some(self.taps[self.taps.len() / 2]),
            _ => None,
        }
    }

    /// Sum of all taps, i.e. the gain at DC.
    pub fn dc_gain(&self) -> f64 {
        self.taps.iter().sum()
    }

    /// `true` when `c[i]` and `c[N−1−i]` agree within `tolerance` for all `i`.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.taps.len();
        (0..n / 2).all(|i| (self.taps[i] - self.taps[n - 1 - i]).abs() <= tolerance)
    }
}

impl Index<usize> for FilterCoefficients {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.taps[i]
    }
}

impl<'a> IntoIterator for &'a FilterCoefficients {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.taps.iter()
    }
}

/// Elementwise `trunc(window[i] · impulse[i])`.
///
/// # Errors
///
/// [`DesignError::LengthMismatch`] when the half-sequences differ in length.
pub fn products(window: &[f64], impulse: &[f64], round_to: i32) -> DesignResult<Vec<f64>> {
    if window.len() != impulse.len() {
        return Err(DesignError::LengthMismatch {
            window: window.len(),
            impulse: impulse.len(),
        });
    }
    window
        .iter()
        .zip(impulse)
        .map(|(&w, &h)| truncate(w * h, round_to))
        .collect()
}

/// Mirror a center-referenced half-sequence into `N` symmetric taps.
///
/// `half` must have `n + 1` entries (see [`assemble`] for the checked entry
/// point); only the first `⌈n/2⌉ + 1` of them are read.
pub fn mirror(half: &[f64], order: &OrderResult) -> FilterCoefficients {
    let n = order.order();
    let taps = (0..order.taps())
        .map(|k| {
            let twice_distance = (2 * k).abs_diff(n);
            half[(twice_distance + 1) / 2]
        })
        .collect();
    FilterCoefficients { taps }
}

/// Combine window and impulse response into the final coefficients.
///
/// Returns the truncated product half-sequence alongside the coefficients.
///
/// # Errors
///
/// * [`DesignError::LengthMismatch`] when the half-sequences differ in length.
/// * [`DesignError::OrderMismatch`] when they agree but are not `n + 1` long.
/// * [`DesignError::InvalidPrecision`] when `round_to` is negative.
pub fn assemble(
    window: &[f64],
    impulse: &[f64],
    order: &OrderResult,
    round_to: i32,
) -> DesignResult<(Vec<f64>, FilterCoefficients)> {
    let half = products(window, impulse, round_to)?;
    if half.len() != order.order() + 1 {
        return Err(DesignError::OrderMismatch {
            expected: order.order() + 1,
            actual: half.len(),
        });
    }
    let coefficients = mirror(&half, order);
    debug!(taps = coefficients.len(), center = ?coefficients.center(), "assembled coefficients");
    Ok((half, coefficients))
}
