//! Raw configuration validation.
//!
//! [`validate`] turns a loosely-typed JSON object into a [`FilterSpec`].  The
//! checks run in a fixed order and the first violation is reported:
//!
//! 1. the configuration is a non-empty object
//! 2. required keys are present
//! 3. required values have the right JSON type
//! 4. optional keys (second edge pair for bandpass/bandstop, `round_to`)
//! 5. filter and window kinds are known
//! 6. ripple sanity: `0 < Ap < As`
//! 7. every frequency is positive
//! 8. every band edge is at or below Nyquist (`F/2`)
//! 9. band edges are ordered as the filter kind requires
//!
//! ```
//! use firdes::{validate, FilterKind};
//! use serde_json::json;
//!
//! let spec = validate(&json!({
//!     "filter_type": "lowpass",
//!     "window_type": "hamming",
//!     "sampling_freq_hz": 2500,
//!     "passband_freq_hz": 500,
//!     "stopband_freq_hz": 750,
//!     "passband_ripple_db": 0.1,
//!     "stopband_attenuation_db": 44,
//! })).unwrap();
//! assert_eq!(spec.kind(), FilterKind::Lowpass);
//! assert_eq!(spec.round_to, 4);
//! ```
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::*;
use crate::error::ConfigError;
use crate::spec::{Band, FilterKind, FilterSpec, WindowKind};

/// Validate `raw` with the default [`DesignConfig`].
pub fn validate(raw: &Value) -> Result<FilterSpec, ConfigError> {
    validate_with(raw, &DesignConfig::default())
}

/// Validate `raw`, taking defaults from `cfg`.
pub fn validate_with(raw: &Value, cfg: &DesignConfig) -> Result<FilterSpec, ConfigError> {
    let conf = as_object(raw)?;

    check_required_keys(conf)?;
    check_required_types(conf)?;

    let kind_name = conf[KEY_FILTER_TYPE].as_str().unwrap_or_default();
    let window_name = conf[KEY_WINDOW_TYPE].as_str().unwrap_or_default();
    let dual_edge = kind_name
        .parse::<FilterKind>()
        .map(FilterKind::is_dual_edge)
        .unwrap_or(false);
    let round_to = check_optional_keys(conf, dual_edge, cfg)?;

    let kind = parse_filter_kind(kind_name, cfg)?;
    let window = window_name
        .parse::<WindowKind>()
        .map_err(ConfigError::InvalidWindowType)?;

    let ap = number(conf, KEY_PASSBAND_RIPPLE);
    let as_db = number(conf, KEY_STOPBAND_ATTENUATION);
    check_ripples(ap, as_db)?;

    let sampling_rate = number(conf, KEY_SAMPLING_FREQ);
    let mut edge_keys = vec![KEY_PASSBAND_FREQ, KEY_STOPBAND_FREQ];
    if kind.is_dual_edge() {
        edge_keys.extend_from_slice(&DUAL_EDGE_KEYS);
    }

    let mut positive_keys = edge_keys.clone();
    positive_keys.push(KEY_SAMPLING_FREQ);
    check_bound(conf, &positive_keys, |v| v > 0.0, "must be greater than 0")?;

    let nyquist = sampling_rate / 2.0;
    check_bound(
        conf,
        &edge_keys,
        |v| v <= nyquist,
        &format!("must be less than or equal to {nyquist}"),
    )?;

    let band = ordered_band(conf, kind)?;

    let spec = FilterSpec {
        band,
        window,
        sampling_rate,
        passband_ripple_db: ap,
        stopband_attenuation_db: as_db,
        round_to,
    };
    debug!(
        kind = %kind,
        window = %window,
        sampling_rate,
        round_to,
        "validated filter configuration"
    );
    Ok(spec)
}

fn as_object(raw: &Value) -> Result<&Map<String, Value>, ConfigError> {
    match raw {
        Value::Null => Err(ConfigError::Empty),
        Value::Object(conf) if conf.is_empty() => Err(ConfigError::Empty),
        Value::Object(conf) => Ok(conf),
        other => Err(ConfigError::NotAnObject(json_type(other))),
    }
}

fn check_required_keys(conf: &Map<String, Value>) -> Result<(), ConfigError> {
    missing(conf, &REQUIRED_KEYS)
}

fn missing(conf: &Map<String, Value>, keys: &[&str]) -> Result<(), ConfigError> {
    let mut absent: Vec<String> = keys
        .iter()
        .filter(|k| !conf.contains_key(**k))
        .map(|k| k.to_string())
        .collect();
    if absent.is_empty() {
        return Ok(());
    }
    absent.sort();
    Err(ConfigError::MissingKeys(absent))
}

fn check_required_types(conf: &Map<String, Value>) -> Result<(), ConfigError> {
    for key in REQUIRED_KEYS {
        let value = &conf[key];
        let (ok, expected) = if key == KEY_FILTER_TYPE || key == KEY_WINDOW_TYPE {
            (value.is_string(), "string")
        } else {
            (value.is_number(), "number")
        };
        if !ok {
            return Err(invalid_type(key, expected, value));
        }
    }
    Ok(())
}

/// Checks the second edge pair and `round_to`; returns the precision to use.
fn check_optional_keys(
    conf: &Map<String, Value>,
    dual_edge: bool,
    cfg: &DesignConfig,
) -> Result<i32, ConfigError> {
    if dual_edge {
        missing(conf, &DUAL_EDGE_KEYS)?;
    }
    for key in DUAL_EDGE_KEYS {
        if let Some(value) = conf.get(key) {
            if !value.is_null() && !value.is_number() {
                return Err(invalid_type(key, "number", value));
            }
        }
    }
    if dual_edge {
        for key in DUAL_EDGE_KEYS {
            if conf[key].is_null() {
                return Err(invalid_type(key, "number", &conf[key]));
            }
        }
    }

    match conf.get(KEY_ROUND_TO) {
        None | Some(Value::Null) => Ok(cfg.round_to),
        Some(value) => {
            let n = value
                .as_i64()
                .ok_or_else(|| invalid_type(KEY_ROUND_TO, "integer", value))?;
            i32::try_from(n)
                .map_err(|_| ConfigError::InvalidValue(format!("{KEY_ROUND_TO} out of range: {n}")))
        }
    }
}

fn parse_filter_kind(name: &str, cfg: &DesignConfig) -> Result<FilterKind, ConfigError> {
    let legacy = matches!(name, "passband" | "stopband");
    if legacy && !cfg.legacy_band_names {
        return Err(ConfigError::InvalidFilterType(name.to_string()));
    }
    name.parse::<FilterKind>().map_err(ConfigError::InvalidFilterType)
}

fn check_ripples(ap: f64, as_db: f64) -> Result<(), ConfigError> {
    if ap <= 0.0 {
        return Err(ConfigError::InvalidValue("passband ripple must be positive".into()));
    }
    if as_db <= 0.0 {
        return Err(ConfigError::InvalidValue("stopband attenuation must be positive".into()));
    }
    if ap >= as_db {
        return Err(ConfigError::InvalidValue(
            "passband ripple must be less than stopband attenuation".into(),
        ));
    }
    Ok(())
}

/// Fails with every key in `keys` whose value does not satisfy `ok`.
fn check_bound(
    conf: &Map<String, Value>,
    keys: &[&str],
    ok: impl Fn(f64) -> bool,
    requirement: &str,
) -> Result<(), ConfigError> {
    let bad: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| !ok(number(conf, key)))
        .collect();
    if bad.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue(format!("{} {requirement}", bad.join(", "))))
    }
}

fn ordered_band(conf: &Map<String, Value>, kind: FilterKind) -> Result<Band, ConfigError> {
    let fp1 = number(conf, KEY_PASSBAND_FREQ);
    let fs1 = number(conf, KEY_STOPBAND_FREQ);
    match kind {
        FilterKind::Lowpass if fp1 < fs1 => Ok(Band::Lowpass { passband: fp1, stopband: fs1 }),
        FilterKind::Lowpass => Err(ConfigError::InvalidValue(
            "for lowpass filter, passband frequency must be less than stopband frequency".into(),
        )),
        FilterKind::Highpass if fp1 > fs1 => Ok(Band::Highpass { passband: fp1, stopband: fs1 }),
        FilterKind::Highpass => Err(ConfigError::InvalidValue(
            "for highpass filter, passband frequency must be greater than stopband frequency"
                .into(),
        )),
        FilterKind::Bandpass => {
            let fp2 = number(conf, KEY_PASSBAND_FREQ2);
            let fs2 = number(conf, KEY_STOPBAND_FREQ2);
            if fs1 < fp1 && fp1 < fp2 && fp2 < fs2 {
                Ok(Band::Bandpass { stop_low: fs1, pass_low: fp1, pass_high: fp2, stop_high: fs2 })
            } else {
                Err(ConfigError::InvalidValue(format!(
                    "for bandpass filter, expected fs1 < fp1 < fp2 < fs2, \
                     got {fs1}, {fp1}, {fp2}, {fs2}"
                )))
            }
        }
        FilterKind::Bandstop => {
            let fp2 = number(conf, KEY_PASSBAND_FREQ2);
            let fs2 = number(conf, KEY_STOPBAND_FREQ2);
            if fp1 < fs1 && fs1 < fs2 && fs2 < fp2 {
                Ok(Band::Bandstop { pass_low: fp1, stop_low: fs1, stop_high: fs2, pass_high: fp2 })
            } else {
                Err(ConfigError::InvalidValue(format!(
                    "for bandstop filter, expected fp1 < fs1 < fs2 < fp2, \
                     got {fp1}, {fs1}, {fs2}, {fp2}"
                )))
            }
        }
    }
}

/// Numeric value of a key already known to hold a number.
fn number(conf: &Map<String, Value>, key: &str) -> f64 {
    conf.get(key).and_then(Value::as_f64).unwrap_or(f64::NAN)
}

fn invalid_type(key: &str, expected: &'static str, value: &Value) -> ConfigError {
    ConfigError::InvalidType {
        key: key.to_string(),
        expected,
        actual: json_type(value),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lowpass() -> Value {
        json!({
            "filter_type": "lowpass",
            "window_type": "hamming",
            "sampling_freq_hz": 2500,
            "passband_freq_hz": 500,
            "stopband_freq_hz": 750,
            "passband_ripple_db": 0.1,
            "stopband_attenuation_db": 44,
        })
    }

    fn with(mut raw: Value, key: &str, value: Value) -> Value {
        raw[key] = value;
        raw
    }

    /// Message of the `InvalidValue` error `raw` is rejected with.
    fn value_error(raw: &Value) -> String {
        match validate(raw) {
            Err(ConfigError::InvalidValue(m)) => m,
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn lowpass_config_validates() {
        let spec = validate(&lowpass()).unwrap();
        assert_eq!(spec.band, Band::Lowpass { passband: 500.0, stopband: 750.0 });
        assert_eq!(spec.window, WindowKind::Hamming);
        assert_eq!(spec.sampling_rate, 2500.0);
        assert_eq!(spec.round_to, DEFAULT_ROUND_TO);
    }

    #[test]
    fn empty_and_non_object() {
        assert_eq!(validate(&json!({})), Err(ConfigError::Empty));
        assert_eq!(validate(&Value::Null), Err(ConfigError::Empty));
        assert_eq!(validate(&json!([1, 2])), Err(ConfigError::NotAnObject("array")));
    }

    #[test]
    fn missing_keys_reported_sorted() {
        let mut raw = lowpass();
        raw.as_object_mut().unwrap().remove("window_type");
        raw.as_object_mut().unwrap().remove("sampling_freq_hz");
        assert_eq!(
            validate(&raw),
            Err(ConfigError::MissingKeys(vec!["sampling_freq_hz".into(), "window_type".into()]))
        );
    }

    #[test]
    fn wrong_type_reported() {
        let raw = with(lowpass(), "passband_freq_hz", json!("500"));
        assert_eq!(
            validate(&raw),
            Err(ConfigError::InvalidType {
                key: "passband_freq_hz".into(),
                expected: "number",
                actual: "string",
            })
        );
        let raw = with(lowpass(), "filter_type", json!(3));
        assert!(matches!(validate(&raw), Err(ConfigError::InvalidType { expected: "string", .. })));
    }

    #[test]
    fn dual_edge_requires_second_pair() {
        let raw = with(lowpass(), "filter_type", json!("bandpass"));
        assert_eq!(
            validate(&raw),
            Err(ConfigError::MissingKeys(vec![
                "passband_freq2_hz".into(),
                "stopband_freq2_hz".into(),
            ]))
        );
    }

    #[test]
    fn unknown_kinds_rejected() {
        let raw = with(lowpass(), "filter_type", json!("notch"));
        assert_eq!(validate(&raw), Err(ConfigError::InvalidFilterType("notch".into())));
        let raw = with(lowpass(), "window_type", json!("hann"));
        assert_eq!(validate(&raw), Err(ConfigError::InvalidWindowType("hann".into())));
    }

    #[test]
    fn legacy_names_can_be_disabled() {
        let raw = with(lowpass(), "filter_type", json!("passband"));
        let raw = with(raw, "passband_freq2_hz", json!(900));
        let raw = with(raw, "stopband_freq2_hz", json!(1000));
        let raw = with(raw, "stopband_freq_hz", json!(300));
        assert_eq!(validate(&raw).unwrap().kind(), FilterKind::Bandpass);

        let strict = DesignConfig { legacy_band_names: false, ..DesignConfig::default() };
        assert_eq!(
            validate_with(&raw, &strict),
            Err(ConfigError::InvalidFilterType("passband".into()))
        );
    }

    #[test]
    fn ripple_checks() {
        let raw = with(lowpass(), "passband_ripple_db", json!(0));
        assert!(value_error(&raw).contains("passband ripple must be positive"));
        let raw = with(lowpass(), "stopband_attenuation_db", json!(-3));
        assert!(value_error(&raw).contains("stopband attenuation"));
        let raw = with(lowpass(), "passband_ripple_db", json!(50));
        assert!(value_error(&raw).contains("less than stopband"));
    }

    #[test]
    fn frequency_bounds() {
        let raw = with(lowpass(), "sampling_freq_hz", json!(0));
        assert_eq!(value_error(&raw), "sampling_freq_hz must be greater than 0");
        let raw = with(lowpass(), "stopband_freq_hz", json!(1300));
        assert_eq!(value_error(&raw), "stopband_freq_hz must be less than or equal to 1250");
    }

    #[test]
    fn ordering_by_kind() {
        let raw = with(lowpass(), "stopband_freq_hz", json!(400));
        assert!(value_error(&raw).starts_with("for lowpass"));
        let raw = with(lowpass(), "filter_type", json!("highpass"));
        assert!(value_error(&raw).starts_with("for highpass"));
    }

    #[test]
    fn first_violation_wins() {
        // Bad ripple and bad Nyquist bound: ripple is checked first.
        let raw = with(lowpass(), "passband_ripple_db", json!(-1));
        let raw = with(raw, "stopband_freq_hz", json!(5000));
        assert!(value_error(&raw).contains("ripple"));
    }

    #[test]
    fn round_to_override() {
        let raw = with(lowpass(), "round_to", json!(6));
        assert_eq!(validate(&raw).unwrap().round_to, 6);
        let raw = with(lowpass(), "round_to", json!(-2));
        assert_eq!(validate(&raw).unwrap().round_to, -2);
        let raw = with(lowpass(), "round_to", json!(2.5));
        assert!(matches!(
            validate(&raw),
            Err(ConfigError::InvalidType { expected: "integer", .. })
        ));
    }
}
