//! Reduction of long sample sequences to bounded pixel-space polylines.
//!
//! Two strategies share the [`SeriesDecimator`] contract:
//! [`FastDecimator`] samples at a fixed index stride, [`MinMaxDecimator`]
//! keeps the true extrema of every pixel column. A painter picks one when it
//! is constructed and keeps it for its whole lifetime.

mod fast;
mod minmax;
mod render_points;
mod value_projection;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{PixelRect, Series, ViewportMapping, checked_pixel};
use crate::selection::SelectionResult;

pub use fast::FastDecimator;
pub use minmax::MinMaxDecimator;
pub use render_points::RenderPoints;
pub use value_projection::item_value_factor;

pub(crate) use value_projection::ValueProjection;

/// Decimation strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimationMode {
    /// Fixed-stride sampling.
    Fast,
    /// Per-column extrema preservation.
    #[default]
    MinMax,
}

impl DecimationMode {
    /// Parses a property-style mode name.
    ///
    /// `"fast"` in any letter case selects [`DecimationMode::Fast`]; any other
    /// value, or no value, selects [`DecimationMode::MinMax`].
    #[must_use]
    pub fn from_property(value: Option<&str>) -> Self {
        match value {
            Some(name) if name.trim().eq_ignore_ascii_case("fast") => Self::Fast,
            _ => Self::MinMax,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::MinMax => "minmax",
        }
    }

    /// Builds the strategy object for this mode.
    #[must_use]
    pub fn decimator(self, scaling: ScalingMode, line_width: f64) -> Box<dyn SeriesDecimator> {
        match self {
            Self::Fast => Box::new(FastDecimator::new(scaling)),
            Self::MinMax => Box::new(MinMaxDecimator::new(scaling, line_width)),
        }
    }
}

impl fmt::Display for DecimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How sample values map onto the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScalingMode {
    /// Values go straight through the viewport mapping.
    #[default]
    Absolute,
    /// Values are normalized against the series' own height so the series
    /// spans the value axis minus `max_value_offset` pixels.
    Relative { max_value_offset: f64 },
}

/// Shared contract of the decimation strategies.
///
/// Both operations are pure functions of their inputs; `None` means nothing
/// of the series is visible for the request.
pub trait SeriesDecimator: fmt::Debug + Send + Sync {
    fn mode(&self) -> DecimationMode;

    /// Reduces the samples visible in `area` to a bounded polyline.
    fn decimate(
        &self,
        series: &Series,
        area: PixelRect,
        mapping: &dyn ViewportMapping,
    ) -> Option<RenderPoints>;

    /// Finds the sample closest to a pixel position, consistent with what
    /// [`SeriesDecimator::decimate`] draws.
    fn select_nearest(
        &self,
        series: &Series,
        view_x: i64,
        view_y: i64,
        mapping: &dyn ViewportMapping,
    ) -> Option<SelectionResult>;
}

/// Pixel column of the sample at `index`.
pub(crate) fn sample_view_x(mapping: &dyn ViewportMapping, series: &Series, index: usize) -> i64 {
    checked_pixel(mapping.view_x(series.x(index) as f64))
}

/// Rounded stroke extent used to grow areas and bounds.
pub(crate) fn stroke_extent(line_width: f64) -> i64 {
    if line_width.is_finite() && line_width > 0.0 {
        checked_pixel(line_width)
    } else {
        0
    }
}
