/// Shared helpers for reference-vector tests.
use firdes::{Band, FilterCoefficients, FilterSpec, WindowKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One recorded design: the raw configuration and every stage's output.
#[allow(unused)]
#[derive(Debug, Deserialize)]
pub struct DesignVector {
    pub config: serde_json::Value,
    pub delta: f64,
    pub stopband_attenuation: f64,
    pub passband_ripple: f64,
    pub d: f64,
    pub order: usize,
    pub taps: usize,
    pub impulse_response: Vec<f64>,
    pub window: Vec<f64>,
    pub coefficients: Vec<f64>,
}

pub fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vectors")
}

#[allow(unused)]
/// Load `tests/vectors/{name}.json`.
pub fn load_vector(name: &str) -> DesignVector {
    let path = vectors_dir().join(format!("{name}.json"));
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("test vector not found: {}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("bad test vector {}: {e}", path.display()))
}

#[allow(unused)]
/// Names of every recorded vector.
pub const VECTORS: [&str; 5] = [
    "lowpass_hamming",
    "highpass_blackman",
    "bandpass_kaiser",
    "bandstop_hamming",
    "lowpass_kaiser_rectangular",
];

#[allow(unused)]
/// Maximum absolute difference between two slices.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).fold(0.0_f64, f64::max)
}

#[allow(unused)]
/// Panics unless `c[i] == c[N−1−i]` for every `i`.
pub fn assert_symmetric(c: &FilterCoefficients) {
    let n = c.len();
    for i in 0..n / 2 {
        assert_eq!(c[i], c[n - 1 - i], "c[{i}]={} ≠ c[{}]={}", c[i], n - 1 - i, c[n - 1 - i]);
    }
}

#[allow(unused)]
/// The worked lowpass example: F=2500, fp=500, fs=750, Ap=0.1, As=44.
pub fn lowpass_spec(window: WindowKind) -> FilterSpec {
    FilterSpec::new(
        Band::Lowpass { passband: 500.0, stopband: 750.0 },
        window,
        2500.0,
        0.1,
        44.0,
    )
}

#[allow(unused)]
/// One band of each kind at F=3000 or F=5000, all with odd `N`.
pub fn odd_length_specs(window: WindowKind) -> Vec<FilterSpec> {
    let spec = |band, rate| FilterSpec::new(band, window, rate, 0.1, 44.0);
    vec![
        spec(Band::Lowpass { passband: 500.0, stopband: 750.0 }, 3000.0),
        spec(Band::Highpass { passband: 750.0, stopband: 500.0 }, 3000.0),
        spec(
            Band::Bandpass { stop_low: 200.0, pass_low: 400.0, pass_high: 800.0, stop_high: 1e3 },
            5000.0,
        ),
        spec(
            Band::Bandstop { pass_low: 200.0, stop_low: 400.0, stop_high: 800.0, pass_high: 1e3 },
            5000.0,
        ),
    ]
}
