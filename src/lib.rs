//! # firdes — window-method FIR filter design
//!
//! `firdes` computes the tap coefficients of a linear-phase FIR filter with
//! the classical window method.  Every intermediate value is truncated (never
//! rounded) to a fixed number of decimals, so a design yields the same digits
//! on every platform.
//!
//! ## Pipeline overview
//!
//! ```text
//! raw JSON config
//!   │
//!   ├─ validate::validate()        ordered, fail-fast checks → FilterSpec
//!   │
//! FilterSpec
//!   ├─ ripple::convert()           (Ap, As) → δ, AS, AP, D
//!   ├─ filter::plan_order()        D, F, Δf → n, N
//!   ├─ filter::impulse_response()  ideal sinc half-sequence h[0..=n]
//!   ├─ Window::coefficients()      Hamming / Blackman / Kaiser(AS) w[0..=n]
//!   └─ assemble::assemble()        trunc(w·h), mirrored → N symmetric taps
//! ```
//!
//! Each stage only accepts the previous stage's result type: there is no way
//! to plan an order without a [`RippleResult`], or to build a window without
//! an [`OrderResult`].
//!
//! ## Quick start
//!
//! ```
//! use firdes::{design, Band, FilterSpec, WindowKind};
//!
//! let spec = FilterSpec::new(
//!     Band::Lowpass { passband: 500.0, stopband: 750.0 },
//!     WindowKind::Hamming,
//!     2500.0, // sampling rate, Hz
//!     0.1,    // passband ripple, dB
//!     44.0,   // stopband attenuation, dB
//! );
//! let taps = design(&spec).unwrap();
//! assert_eq!(taps.len(), 26);
//! assert!(taps.is_symmetric(1e-4));
//! ```
//!
//! ## From a raw configuration
//!
//! ```
//! use firdes::design_from_json;
//! use serde_json::json;
//!
//! let report = design_from_json(&json!({
//!     "filter_type": "bandstop",
//!     "window_type": "kaiser",
//!     "sampling_freq_hz": 5000,
//!     "passband_freq_hz": 200,
//!     "stopband_freq_hz": 400,
//!     "stopband_freq2_hz": 800,
//!     "passband_freq2_hz": 1000,
//!     "passband_ripple_db": 0.1,
//!     "stopband_attenuation_db": 44,
//! })).unwrap();
//! assert_eq!(report.coefficients.len(), report.order.taps());
//! ```

pub mod assemble;
pub mod config;
pub mod error;
pub mod filter;
pub mod ripple;
pub mod spec;
pub mod truncate;
pub mod validate;
pub mod window;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

// ── Crate-root re-exports ─────────────────────────────────────────────────

pub use assemble::{assemble, FilterCoefficients};
pub use config::{DesignConfig, DEFAULT_ROUND_TO};
pub use error::{ConfigError, DesignError, DesignResult};
pub use filter::{impulse_response, plan_order, OrderResult, MAX_TAPS};
pub use ripple::RippleResult;
pub use spec::{Band, FilterKind, FilterSpec, WindowKind};
pub use truncate::truncate;
pub use validate::{validate, validate_with};
pub use window::{bessel_i0, kaiser_alpha, Window};

/// Every product of one design run, in pipeline order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterDesign {
    /// The request the design was computed for.
    pub spec: FilterSpec,
    /// Tolerance, realized ripple figures and `D`.
    pub ripple: RippleResult,
    /// Filter order `n` and length `N`.
    pub order: OrderResult,
    /// Window with its shape input resolved.
    pub window: Window,
    /// Ideal impulse-response half-sequence, `n + 1` samples.
    pub impulse_response: Vec<f64>,
    /// Window half-sequence, `n + 1` samples.
    pub window_coefficients: Vec<f64>,
    /// Truncated products `w[i]·h[i]`, `n + 1` samples.
    pub half_coefficients: Vec<f64>,
    /// Final symmetric taps, `N` samples.
    pub coefficients: FilterCoefficients,
}

/// Design the filter described by `spec` and return its taps.
///
/// # Errors
///
/// * [`DesignError::InvalidPrecision`] when `spec.round_to < 0`.
/// * [`DesignError::InvalidTransition`] when the band edges leave no
///   transition band.
/// * [`DesignError::DegenerateLength`] when the estimated length is below 2.
/// * [`DesignError::LengthOverflow`] when it exceeds [`MAX_TAPS`].
pub fn design(spec: &FilterSpec) -> DesignResult<FilterCoefficients> {
    design_report(spec).map(|report| report.coefficients)
}

/// Design the filter described by `spec`, keeping every intermediate result.
///
/// Errors are as for [`design`]; no partial report is ever returned.
pub fn design_report(spec: &FilterSpec) -> DesignResult<FilterDesign> {
    let round_to = spec.round_to;

    let ripple = ripple::convert(spec)?;
    let order = filter::plan_order(&spec.band, spec.sampling_rate, &ripple)?;
    let impulse_response =
        filter::impulse_response(&spec.band, spec.sampling_rate, &order, round_to)?;
    let window = spec.window.with_attenuation(Some(ripple.stopband_attenuation()))?;
    let window_coefficients = window.coefficients(&order, round_to)?;
    let (half_coefficients, coefficients) =
        assemble::assemble(&window_coefficients, &impulse_response, &order, round_to)?;

    info!(
        kind = %spec.kind(),
        window = %spec.window,
        taps = order.taps(),
        attenuation = ripple.stopband_attenuation(),
        "designed FIR filter"
    );

    Ok(FilterDesign {
        spec: spec.clone(),
        ripple,
        order,
        window,
        impulse_response,
        window_coefficients,
        half_coefficients,
        coefficients,
    })
}

/// Validate a raw JSON configuration and design it.
///
/// # Errors
///
/// [`DesignError::Config`] when validation fails, otherwise as for [`design`].
pub fn design_from_json(raw: &Value) -> DesignResult<FilterDesign> {
    design_from_json_with(raw, &DesignConfig::default())
}

/// [`design_from_json`] with explicit configuration defaults.
pub fn design_from_json_with(raw: &Value, cfg: &DesignConfig) -> DesignResult<FilterDesign> {
    let spec = validate::validate_with(raw, cfg)?;
    design_report(&spec)
}
