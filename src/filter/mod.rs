//! Per-kind filter stages.
//!
//! - [`order`]: order estimation `N = ⌊F·D/Δf⌋ + 1` from the ripple stage's `D`.
//! - [`impulse`]: ideal sinc impulse responses for lowpass, highpass,
//!   bandpass and bandstop, composed from lowpass responses.

pub mod impulse;
pub mod order;

pub use impulse::{cutoffs, impulse_response};
pub use order::{plan_order, OrderResult, MAX_TAPS};
