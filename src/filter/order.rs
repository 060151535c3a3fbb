//! Filter order estimation.
//!
//! For every filter kind the length follows the same empirical rule
//!
//! ```text
//! N = ⌊F · D / Δf⌋ + 1,    n = N − 1
//! ```
//!
//! where `Δf` is the transition width of the band (the narrower one for
//! bandpass and bandstop).  The parity of `N` is left as computed, and `N` is
//! capped at [`MAX_TAPS`].
use serde::Serialize;
use tracing::debug;

use crate::error::{DesignError, DesignResult};
use crate::ripple::RippleResult;
use crate::spec::Band;

/// Largest tap count a design may have.
pub const MAX_TAPS: usize = 1 << 20;

/// Filter order `n` and tap count `N = n + 1`.
///
/// Only [`plan_order`] builds one, and it needs a [`RippleResult`], so the
/// ripple stage always runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderResult {
    order: usize,
    taps: usize,
}

impl OrderResult {
    /// Filter order `n`; half-sequences are indexed `0..=n`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Total number of taps `N`.
    pub fn taps(&self) -> usize {
        self.taps
    }

    /// `true` when `N` is odd (Type-I linear phase, with a center tap).
    pub fn has_center_tap(&self) -> bool {
        self.taps % 2 == 1
    }
}

/// Estimate the filter order for `band` at `sampling_rate` Hz.
///
/// # Errors
///
/// * [`DesignError::InvalidTransition`] when the transition width is not
///   positive, or the quotient `F·D/Δf` is not finite.
/// * [`DesignError::LengthOverflow`] when `N` would exceed [`MAX_TAPS`].
pub fn plan_order(
    band: &Band,
    sampling_rate: f64,
    ripple: &RippleResult,
) -> DesignResult<OrderResult> {
    let width = band.transition_width();
    if !(width > 0.0) {
        return Err(DesignError::InvalidTransition(width));
    }

    let ratio = (sampling_rate * ripple.d()) / width;
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(DesignError::InvalidTransition(width));
    }
    if ratio >= MAX_TAPS as f64 {
        return Err(DesignError::LengthOverflow { estimate: ratio, limit: MAX_TAPS });
    }

    let order = ratio.floor() as usize;
    let taps = order + 1;

    debug!(kind = %band.kind(), width, d = ripple.d(), order, taps, "planned filter order");
    if taps % 2 == 0 {
        debug!(taps, "even tap count: no center tap");
    }

    Ok(OrderResult { order, taps })
}

#[cfg(test)]
impl OrderResult {
    /// Test-only constructor for exercising generators at a given length.
    pub(crate) fn from_taps(taps: usize) -> Self {
        Self { order: taps.saturating_sub(1), taps }
    }
}
