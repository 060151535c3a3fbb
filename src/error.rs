//! Error types for configuration validation and the design pipeline.
//!
//! [`ConfigError`] is produced by [`crate::validate::validate`] before any
//! numeric stage runs.  [`DesignError`] covers everything the pipeline itself
//! can reject.  Every variant is a deterministic function of the input: none
//! of them is transient, and none leaves a partial result behind.
use thiserror::Error;

/// Result alias used by every design stage.
pub type DesignResult<T> = Result<T, DesignError>;

/// A raw configuration was rejected by the validator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration object has no keys at all.
    #[error("filter configuration is empty")]
    Empty,

    /// The configuration is not a JSON object.
    #[error("filter configuration must be an object, got {0}")]
    NotAnObject(&'static str),

    /// One or more required keys are absent (sorted by name).
    #[error("missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),

    /// A key is present but holds a value of the wrong JSON type.
    #[error("invalid type for key '{key}': expected {expected}, got {actual}")]
    InvalidType {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// `filter_type` is not one of the supported filter kinds.
    #[error("invalid filter type: {0}")]
    InvalidFilterType(String),

    /// `window_type` is not one of the supported window kinds.
    #[error("invalid window type: {0}")]
    InvalidWindowType(String),

    /// A value check failed (ripple sanity, positivity, Nyquist or band ordering).
    #[error("{0}")]
    InvalidValue(String),
}

/// The design pipeline rejected its input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// A negative number of decimals was requested for truncation.
    #[error("invalid precision: decimals must be non-negative, got {0}")]
    InvalidPrecision(i32),

    /// The Kaiser window was selected without a realized stopband attenuation.
    #[error("kaiser window requires the realized stopband attenuation (AS)")]
    MissingShapeParameter,

    /// The filter length is too short for a window (`N - 1` would be zero).
    #[error("degenerate filter length N = {0}: at least 2 taps are required")]
    DegenerateLength(usize),

    /// The transition band has non-positive (or non-finite) width.
    #[error("invalid transition width {0} Hz: band edges collapse the transition band")]
    InvalidTransition(f64),

    /// The estimated length `F·D/Δf` exceeds [`MAX_TAPS`](crate::filter::order::MAX_TAPS).
    #[error("filter length estimate {estimate} exceeds the limit of {limit} taps")]
    LengthOverflow { estimate: f64, limit: usize },

    /// Window and impulse-response half-sequences disagree in length.
    #[error("half-sequence length mismatch: window has {window}, impulse response has {impulse}")]
    LengthMismatch { window: usize, impulse: usize },

    /// The product half-sequence does not have the `n + 1` entries the order requires.
    #[error("half-sequence has {actual} entries, filter order requires {expected}")]
    OrderMismatch { expected: usize, actual: usize },

    /// The raw configuration did not validate.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
