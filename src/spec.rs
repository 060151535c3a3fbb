//! The validated filter specification.
//!
//! A [`FilterSpec`] is what the pipeline consumes.  It is normally produced by
//! [`crate::validate::validate`] but can be built directly; the pipeline never
//! checks band ordering or Nyquist bounds again.
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_ROUND_TO;

/// Filter response kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Lowpass,
    Highpass,
    Bandpass,
    Bandstop,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Lowpass,
        FilterKind::Highpass,
        FilterKind::Bandpass,
        FilterKind::Bandstop,
    ];

    /// `true` for the kinds described by two edge pairs.
    pub fn is_dual_edge(self) -> bool {
        matches!(self, FilterKind::Bandpass | FilterKind::Bandstop)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Lowpass => "lowpass",
            FilterKind::Highpass => "highpass",
            FilterKind::Bandpass => "bandpass",
            FilterKind::Bandstop => "bandstop",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = String;

    /// Accepts `passband` / `stopband` as aliases of `bandpass` / `bandstop`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowpass" => Ok(FilterKind::Lowpass),
            "highpass" => Ok(FilterKind::Highpass),
            "bandpass" | "passband" => Ok(FilterKind::Bandpass),
            "bandstop" | "stopband" => Ok(FilterKind::Bandstop),
            other => Err(other.to_string()),
        }
    }
}

/// Window function kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    Hamming,
    Blackman,
    Kaiser,
}

impl WindowKind {
    pub const ALL: [WindowKind; 3] =
        [WindowKind::Hamming, WindowKind::Blackman, WindowKind::Kaiser];

    pub fn as_str(self) -> &'static str {
        match self {
            WindowKind::Hamming => "hamming",
            WindowKind::Blackman => "blackman",
            WindowKind::Kaiser => "kaiser",
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hamming" => Ok(WindowKind::Hamming),
            "blackman" => Ok(WindowKind::Blackman),
            "kaiser" => Ok(WindowKind::Kaiser),
            other => Err(other.to_string()),
        }
    }
}

/// Filter kind together with its band edges, in Hz.
///
/// Edge ordering is a precondition:
///
/// | kind     | ordering                                  |
/// |----------|-------------------------------------------|
/// | lowpass  | `passband < stopband`                     |
/// | highpass | `stopband < passband`                     |
/// | bandpass | `stop_low < pass_low < pass_high < stop_high` |
/// | bandstop | `pass_low < stop_low < stop_high < pass_high` |
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Band {
    Lowpass {
        passband: f64,
        stopband: f64,
    },
    Highpass {
        passband: f64,
        stopband: f64,
    },
    Bandpass {
        stop_low: f64,
        pass_low: f64,
        pass_high: f64,
        stop_high: f64,
    },
    Bandstop {
        pass_low: f64,
        stop_low: f64,
        stop_high: f64,
        pass_high: f64,
    },
}

impl Band {
    pub fn kind(&self) -> FilterKind {
        match self {
            Band::Lowpass { .. } => FilterKind::Lowpass,
            Band::Highpass { .. } => FilterKind::Highpass,
            Band::Bandpass { .. } => FilterKind::Bandpass,
            Band::Bandstop { .. } => FilterKind::Bandstop,
        }
    }

    /// Width of the transition band in Hz.
    ///
    /// Dual-edge kinds use the narrower of their two transition bands.
    pub fn transition_width(&self) -> f64 {
        match *self {
            Band::Lowpass { passband, stopband } => stopband - passband,
            Band::Highpass { passband, stopband } => passband - stopband,
            Band::Bandpass { stop_low, pass_low, pass_high, stop_high } => {
                (pass_low - stop_low).min(stop_high - pass_high)
            }
            Band::Bandstop { pass_low, stop_low, stop_high, pass_high } => {
                (stop_low - pass_low).min(pass_high - stop_high)
            }
        }
    }
}

/// An already-validated design request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSpec {
    /// Filter kind and band edges.
    pub band: Band,
    /// Window used to shape the ideal response.
    pub window: WindowKind,
    /// Sampling rate `F` in Hz.
    pub sampling_rate: f64,
    /// Maximum passband ripple `Ap` in dB.
    pub passband_ripple_db: f64,
    /// Minimum stopband attenuation `As` in dB.
    pub stopband_attenuation_db: f64,
    /// Decimal places every intermediate value is truncated to.
    pub round_to: i32,
}

impl FilterSpec {
    /// Build a spec with the default precision ([`DEFAULT_ROUND_TO`]).
    pub fn new(
        band: Band,
        window: WindowKind,
        sampling_rate: f64,
        passband_ripple_db: f64,
        stopband_attenuation_db: f64,
    ) -> Self {
        Self {
            band,
            window,
            sampling_rate,
            passband_ripple_db,
            stopband_attenuation_db,
            round_to: DEFAULT_ROUND_TO,
        }
    }

    pub fn kind(&self) -> FilterKind {
        self.band.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in FilterKind::ALL {
            assert_eq!(kind.as_str().parse::<FilterKind>(), Ok(kind));
        }
        for kind in WindowKind::ALL {
            assert_eq!(kind.as_str().parse::<WindowKind>(), Ok(kind));
        }
    }

    #[test]
    fn legacy_band_aliases() {
        assert_eq!("passband".parse::<FilterKind>(), Ok(FilterKind::Bandpass));
        assert_eq!("stopband".parse::<FilterKind>(), Ok(FilterKind::Bandstop));
        assert_eq!("notch".parse::<FilterKind>(), Err("notch".to_string()));
    }

    #[test]
    fn dual_edge_uses_narrower_transition() {
        let bp =
            Band::Bandpass { stop_low: 200.0, pass_low: 400.0, pass_high: 800.0, stop_high: 900.0 };
        assert_eq!(bp.transition_width(), 100.0);

        let bs = Band::Bandstop {
            pass_low: 100.0,
            stop_low: 400.0,
            stop_high: 800.0,
            pass_high: 1000.0,
        };
        assert_eq!(bs.transition_width(), 200.0);
    }

    #[test]
    fn single_edge_transition() {
        let lp = Band::Lowpass { passband: 500.0, stopband: 750.0 };
        let hp = Band::Highpass { passband: 750.0, stopband: 500.0 };
        assert_eq!(lp.transition_width(), 250.0);
        assert_eq!(hp.transition_width(), 250.0);
    }

    #[test]
    fn spec_defaults_to_four_decimals() {
        let spec = FilterSpec::new(
            Band::Lowpass { passband: 500.0, stopband: 750.0 },
            WindowKind::Hamming,
            2500.0,
            0.1,
            44.0,
        );
        assert_eq!(spec.round_to, 4);
        assert_eq!(spec.kind(), FilterKind::Lowpass);
    }
}
