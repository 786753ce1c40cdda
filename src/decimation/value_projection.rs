use crate::core::{Series, ViewportMapping, checked_pixel};

use super::ScalingMode;

/// Scale applied to relative-mode values so the series fills the value axis
/// minus `max_value_offset` pixels.
///
/// A flat series is treated as one data unit tall.
#[must_use]
pub fn item_value_factor(
    mapping: &dyn ViewportMapping,
    max_value_offset: f64,
    item_height: i64,
) -> f64 {
    (mapping.data_height() - mapping.data_height_of(max_value_offset)) / item_height.max(1) as f64
}

/// Per-call value → pixel projection for one series.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ValueProjection {
    Absolute,
    Relative { factor: f64, base: i64, offset: f64 },
}

impl ValueProjection {
    pub(crate) fn new(
        scaling: ScalingMode,
        series: &Series,
        mapping: &dyn ViewportMapping,
    ) -> Self {
        match scaling {
            ScalingMode::Absolute => Self::Absolute,
            ScalingMode::Relative { max_value_offset } => {
                let bounds = series.bounds();
                Self::Relative {
                    factor: item_value_factor(mapping, max_value_offset, bounds.height),
                    base: bounds.y,
                    offset: mapping.data_offset_y(),
                }
            }
        }
    }

    /// Data value actually handed to the mapping for `value`.
    pub(crate) fn data_y(self, value: i64) -> f64 {
        match self {
            Self::Absolute => value as f64,
            Self::Relative {
                factor,
                base,
                offset,
            } => offset + factor * (value - base) as f64,
        }
    }

    pub(crate) fn pixel_y(self, mapping: &dyn ViewportMapping, value: i64) -> i64 {
        checked_pixel(mapping.view_y(self.data_y(value)))
    }
}
