use chrono::{DateTime, Utc};

use crate::core::Sample;

/// Rounds a mapped coordinate toward positive infinity into a drawable pixel.
///
/// Results saturate to the `i32` range so downstream rasterizers never see
/// coordinates they cannot represent. `NaN` maps to `0`.
#[must_use]
pub fn checked_pixel(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    let rounded = value.ceil();
    if rounded >= f64::from(i32::MAX) {
        i64::from(i32::MAX)
    } else if rounded <= f64::from(i32::MIN) {
        i64::from(i32::MIN)
    } else {
        rounded as i64
    }
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

impl Sample {
    /// Builds a sample keyed by the millisecond timestamp of `time`.
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, value: i64) -> Self {
        Self::new(datetime_to_unix_millis(time), value)
    }
}

#[cfg(test)]
mod tests {
    use super::checked_pixel;

    #[test]
    fn rounds_toward_positive_infinity() {
        assert_eq!(checked_pixel(1.01), 2);
        assert_eq!(checked_pixel(2.0), 2);
        assert_eq!(checked_pixel(-1.5), -1);
    }

    #[test]
    fn saturates_out_of_range_values() {
        assert_eq!(checked_pixel(1e20), i64::from(i32::MAX));
        assert_eq!(checked_pixel(-1e20), i64::from(i32::MIN));
        assert_eq!(checked_pixel(f64::NAN), 0);
    }
}
