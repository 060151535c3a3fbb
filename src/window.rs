//! Window functions for the window design method.
//!
//! Windows are produced as center-referenced half-sequences `w[0..=n]`
//! (`w[0]` is the center weight) so they can be multiplied directly with the
//! ideal impulse response.  All three variants divide by `N − 1` and therefore
//! need at least two taps.
//!
//! The Kaiser window carries its own shape input: the realized stopband
//! attenuation `AS` from the ripple stage.  It normalizes by a truncated power
//! series for the modified Bessel function `I0`, with each term truncated on
//! its own, so results are reproducible to the last decimal.
use std::f64::consts::PI;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{DesignError, DesignResult};
use crate::filter::order::OrderResult;
use crate::spec::WindowKind;
use crate::truncate::truncate;

/// Number of terms in the `I0` power series (after the leading 1).
pub const BESSEL_TERMS: u32 = 25;

/// Cosine-sum coefficients of the Hamming window.
const HAMMING: [f64; 2] = [0.54, 0.46];

/// Cosine-sum coefficients of the Blackman window.
const BLACKMAN: [f64; 3] = [0.42, 0.5, 0.08];

/// A window ready to generate coefficients.
///
/// Unlike [`WindowKind`], the Kaiser variant holds the attenuation it is
/// shaped for, so a Kaiser window without one cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Window {
    Hamming,
    Blackman,
    Kaiser {
        /// Realized stopband attenuation `AS` in dB.
        attenuation: f64,
    },
}

impl WindowKind {
    /// Attach the shape input required by this kind.
    ///
    /// Hamming and Blackman ignore `attenuation`.
    ///
    /// # Errors
    ///
    /// [`DesignError::MissingShapeParameter`] for Kaiser without an attenuation.
    pub fn with_attenuation(self, attenuation: Option<f64>) -> DesignResult<Window> {
        match self {
            WindowKind::Hamming => Ok(Window::Hamming),
            WindowKind::Blackman => Ok(Window::Blackman),
            WindowKind::Kaiser => attenuation
                .map(|attenuation| Window::Kaiser { attenuation })
                .ok_or(DesignError::MissingShapeParameter),
        }
    }
}

impl Window {
    pub fn kind(&self) -> WindowKind {
        match self {
            Window::Hamming => WindowKind::Hamming,
            Window::Blackman => WindowKind::Blackman,
            Window::Kaiser { .. } => WindowKind::Kaiser,
        }
    }

    /// Window half-sequence of length `n + 1`.
    ///
    /// # Errors
    ///
    /// * [`DesignError::DegenerateLength`] when `N ≤ 1`.
    /// * [`DesignError::InvalidPrecision`] when `round_to` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use firdes::{Window, WindowKind};
    ///
    /// let w = WindowKind::Kaiser.with_attenuation(None);
    /// assert!(w.is_err());
    ///
    /// let w = WindowKind::Kaiser.with_attenuation(Some(20.0)).unwrap();
    /// assert!(matches!(w, Window::Kaiser { .. }));
    /// ```
    pub fn coefficients(&self, order: &OrderResult, round_to: i32) -> DesignResult<Vec<f64>> {
        let taps = order.taps();
        if taps <= 1 {
            return Err(DesignError::DegenerateLength(taps));
        }

        let w = match *self {
            Window::Hamming => cosine_sum(order, &HAMMING, round_to)?,
            Window::Blackman => cosine_sum(order, &BLACKMAN, round_to)?,
            Window::Kaiser { attenuation } => kaiser(order, attenuation, round_to)?,
        };

        debug!(window = %self.kind(), taps, center = w[0], "window coefficients");
        trace!(?w, "window half-sequence");
        Ok(w)
    }
}

/// `w[i] = Σ_k a_k · cos(2π·k·i / (N − 1))`, truncated.
///
/// With the center at `i = 0` every term is added, so `[0.54, 0.46]` is the
/// Hamming window and `[0.42, 0.5, 0.08]` the Blackman window.
fn cosine_sum(order: &OrderResult, coeffs: &[f64], round_to: i32) -> DesignResult<Vec<f64>> {
    let span = (order.taps() - 1) as f64;
    (0..=order.order())
        .map(|i| {
            let w = coeffs
                .iter()
                .enumerate()
                .skip(1)
                .fold(coeffs[0], |acc, (k, &a)| {
                    acc + a * ((2.0 * PI * k as f64 * i as f64) / span).cos()
                });
            truncate(w, round_to)
        })
        .collect()
}

/// Kaiser shape parameter `α` for a stopband attenuation `AS` (dB).
///
/// ```text
/// α = 0                                         AS ≤ 21
///     0.5842·(AS − 21)^0.4 + 0.07886·(AS − 21)  21 < AS ≤ 50
///     0.1102·(AS − 8.7)                         AS > 50
/// ```
pub fn kaiser_alpha(attenuation: f64, round_to: i32) -> DesignResult<f64> {
    if attenuation <= 21.0 {
        Ok(0.0)
    } else if attenuation <= 50.0 {
        let x = attenuation - 21.0;
        truncate(0.5842 * x.powf(0.4) + 0.07886 * x, round_to)
    } else {
        truncate(0.1102 * (attenuation - 8.7), round_to)
    }
}

/// Zeroth-order modified Bessel function of the first kind, by series.
///
/// `I0(x) ≈ 1 + Σ_{k=1}^{25} trunc(((x/2)^k / k!)²)`; each term is truncated
/// before it is added.
pub fn bessel_i0(x: f64, round_to: i32) -> DesignResult<f64> {
    let half = x / 2.0;
    let mut factorial = 1.0_f64;
    let mut sum = 0.0;
    for k in 1..=BESSEL_TERMS {
        factorial *= k as f64;
        let term = (1.0 / factorial) * half.powf(k as f64);
        sum += truncate(term * term, round_to)?;
    }
    Ok(sum + 1.0)
}

/// Kaiser window half-sequence for attenuation `AS`.
///
/// Past the window edge (`2i > N − 1`, reached only for the outer index of an
/// even-length design) the radicand is clamped to zero.
fn kaiser(order: &OrderResult, attenuation: f64, round_to: i32) -> DesignResult<Vec<f64>> {
    let span = (order.taps() - 1) as f64;
    let alpha = kaiser_alpha(attenuation, round_to)?;
    let i_alpha = bessel_i0(alpha, round_to)?;
    debug!(attenuation, alpha, i_alpha, "kaiser shape");

    (0..=order.order())
        .map(|i| {
            let r = (2.0 * i as f64) / span;
            let beta = truncate(alpha * (1.0 - r * r).max(0.0).sqrt(), round_to)?;
            truncate(bessel_i0(beta, round_to)? / i_alpha, round_to)
        })
        .collect()
}
