//! Score Normalizer — folds 0–10 and 0–100 ratings onto one 0–100 scale.
//!
//! Values up to and including 10 are read as "X/10" and multiplied by ten.
//! 10 itself is therefore 100, not 10%. The model is prompted for X/10
//! ratings, so this tie-break favours that convention.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("static number pattern must compile")
});

/// Parses the leading numeric prefix of a string, ignoring leading
/// whitespace: `"8/10"` → 8, `"7.5 out of 10"` → 7.5, `"abc"` → None.
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let found = LEADING_NUMBER.find(raw.trim_start())?;
    found.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Normalizes a numeric rating into an integer percentage in [0, 100].
pub fn normalize(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    let scaled = if value <= 10.0 { value * 10.0 } else { value };
    scaled.round().clamp(0.0, 100.0) as u8
}

/// Normalizes a textual rating; non-numeric text yields 0.
pub fn normalize_str(raw: &str) -> u8 {
    parse_leading_number(raw).map(normalize).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_points() {
        assert_eq!(normalize(0.0), 0);
        assert_eq!(normalize(10.0), 100);
        assert_eq!(normalize(7.0), 70);
        assert_eq!(normalize(85.0), 85);
        assert_eq!(normalize(100.0), 100);
        assert_eq!(normalize_str("abc"), 0);
    }

    #[test]
    fn test_ten_point_scale_is_rounded() {
        assert_eq!(normalize(7.25), 73);
        assert_eq!(normalize(0.04), 0);
        assert_eq!(normalize(9.96), 100);
    }

    #[test]
    fn test_hundred_point_scale_is_rounded() {
        assert_eq!(normalize(10.4), 10);
        assert_eq!(normalize(67.5), 68);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(normalize(-3.0), 0);
        assert_eq!(normalize(250.0), 100);
        assert_eq!(normalize(f64::NAN), 0);
    }

    #[test]
    fn test_every_tenth_on_small_scale() {
        for tenths in 0..=100 {
            let v = tenths as f64 / 10.0;
            assert_eq!(normalize(v), (v * 10.0).round() as u8, "v = {v}");
        }
    }

    #[test]
    fn test_strings_use_leading_number() {
        assert_eq!(normalize_str("8/10"), 80);
        assert_eq!(normalize_str("  7.5 out of 10"), 75);
        assert_eq!(normalize_str("85%"), 85);
        assert_eq!(normalize_str(""), 0);
        assert_eq!(normalize_str("/10"), 0);
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("-2.5e1x"), Some(-25.0));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("x5"), None);
    }
}
