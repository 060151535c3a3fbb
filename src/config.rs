//! Design configuration.
//!
//! [`DesignConfig`] holds the settings that apply to a design request but are
//! not part of the filter itself.  The `KEY_*` constants name the fields of the
//! raw JSON configuration accepted by [`crate::validate::validate`].

/// Default number of decimals every intermediate value is truncated to.
pub const DEFAULT_ROUND_TO: i32 = 4;

// ── Raw configuration keys ──────────────────────────────────────────────────

pub const KEY_FILTER_TYPE: &str = "filter_type";
pub const KEY_WINDOW_TYPE: &str = "window_type";
pub const KEY_PASSBAND_RIPPLE: &str = "passband_ripple_db";
pub const KEY_STOPBAND_ATTENUATION: &str = "stopband_attenuation_db";
pub const KEY_PASSBAND_FREQ: &str = "passband_freq_hz";
pub const KEY_STOPBAND_FREQ: &str = "stopband_freq_hz";
pub const KEY_SAMPLING_FREQ: &str = "sampling_freq_hz";
pub const KEY_PASSBAND_FREQ2: &str = "passband_freq2_hz";
pub const KEY_STOPBAND_FREQ2: &str = "stopband_freq2_hz";
pub const KEY_ROUND_TO: &str = "round_to";

/// Keys every configuration must carry.
pub const REQUIRED_KEYS: [&str; 7] = [
    KEY_FILTER_TYPE,
    KEY_WINDOW_TYPE,
    KEY_PASSBAND_RIPPLE,
    KEY_STOPBAND_ATTENUATION,
    KEY_PASSBAND_FREQ,
    KEY_STOPBAND_FREQ,
    KEY_SAMPLING_FREQ,
];

/// Second edge pair, required only by bandpass and bandstop filters.
pub const DUAL_EDGE_KEYS: [&str; 2] = [KEY_PASSBAND_FREQ2, KEY_STOPBAND_FREQ2];

/// Settings applied while turning a raw configuration into a
/// [`FilterSpec`](crate::FilterSpec).
///
/// ```
/// use firdes::DesignConfig;
///
/// let cfg = DesignConfig {
///     round_to: 6,
///     ..DesignConfig::default()
/// };
/// assert_eq!(cfg.round_to, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignConfig {
    /// Decimal precision used when the raw configuration has no `round_to`.
    ///
    /// A `round_to` key in the raw configuration always wins.  The sign is not
    /// checked here: a negative value makes the pipeline fail with
    /// [`DesignError::InvalidPrecision`](crate::DesignError::InvalidPrecision).
    ///
    /// Default: `4`.
    pub round_to: i32,

    /// Accept the `passband` / `stopband` spellings of `bandpass` / `bandstop`.
    ///
    /// Default: `true`.
    pub legacy_band_names: bool,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            round_to: DEFAULT_ROUND_TO,
            legacy_band_names: true,
        }
    }
}
