//! Trivial unit-conversion helpers over a total in seconds: division by a
//! scale's `seconds_per_unit`, with a structural [`ConfigError`] when the
//! target scale is disabled.

use crate::error::ConfigError;
use crate::model::{canonical, Scale};

/// Convert a total in seconds into units of `scale`.
pub fn to_scale(seconds: f64, scale: &Scale) -> Result<f64, ConfigError> {
    if !scale.is_enabled() {
        return Err(ConfigError::DisabledScale);
    }
    Ok(seconds / scale.seconds_per_unit)
}

pub fn to_milliseconds(seconds: f64) -> f64 {
    seconds / canonical::MILLISECOND
}

pub fn to_seconds(seconds: f64) -> f64 {
    seconds
}

pub fn to_minutes(seconds: f64) -> f64 {
    seconds / canonical::MINUTE
}

pub fn to_hours(seconds: f64) -> f64 {
    seconds / canonical::HOUR
}

pub fn to_days(seconds: f64) -> f64 {
    seconds / canonical::DAY
}

pub fn to_weeks(seconds: f64) -> f64 {
    seconds / canonical::WEEK
}

pub fn to_months(seconds: f64) -> f64 {
    seconds / canonical::MONTH
}

pub fn to_years(seconds: f64) -> f64 {
    seconds / canonical::YEAR
}

pub fn to_decades(seconds: f64) -> f64 {
    seconds / canonical::DECADE
}

pub fn to_centuries(seconds: f64) -> f64 {
    seconds / canonical::CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_roundtrip() {
        assert_eq!(to_hours(3600.0), 1.0);
    }

    #[test]
    fn disabled_scale_is_a_structural_error() {
        let err = to_scale(3600.0, &Scale::EMPTY).unwrap_err();
        assert_eq!(err, ConfigError::DisabledScale);
    }

    #[test]
    fn months_use_the_fixed_30_point_5_day_constant() {
        assert_eq!(to_months(canonical::MONTH), 1.0);
        assert_eq!(canonical::MONTH, 30.5 * canonical::DAY);
    }
}
