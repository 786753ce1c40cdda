use tracing::trace;

use crate::core::{EdgeIndex, PixelRect, Series, ViewportMapping};
use crate::selection::{SelectionResult, select_nearest_by_timestamp};

use super::{
    DecimationMode, RenderPoints, ScalingMode, SeriesDecimator, ValueProjection, sample_view_x,
};

/// Fixed-stride decimator.
///
/// Emits one point every `len / view_width` samples, so the output size
/// tracks the pixel width instead of the sample count. Narrow spikes between
/// stride positions are not guaranteed to survive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FastDecimator {
    scaling: ScalingMode,
}

impl FastDecimator {
    #[must_use]
    pub fn new(scaling: ScalingMode) -> Self {
        Self { scaling }
    }

    #[must_use]
    pub fn scaling(&self) -> ScalingMode {
        self.scaling
    }

    /// Index stride for `len` samples spread over `view_width` pixels, at least 1.
    #[must_use]
    pub fn stride(len: usize, view_width: f64) -> usize {
        let stride = (len as f64 / view_width).floor();
        if stride.is_finite() && stride >= 1.0 {
            stride as usize
        } else {
            1
        }
    }
}

impl SeriesDecimator for FastDecimator {
    fn mode(&self) -> DecimationMode {
        DecimationMode::Fast
    }

    fn decimate(
        &self,
        series: &Series,
        area: PixelRect,
        mapping: &dyn ViewportMapping,
    ) -> Option<RenderPoints> {
        let view_width = mapping.view_width();
        if series.is_empty() || !mapping.viewport().is_valid() || !(view_width > 0.0) {
            return None;
        }

        let len = series.len();
        let bounds = mapping.visible_bounds(series, area);
        let mut first = match bounds.first {
            EdgeIndex::Absent => return None,
            EdgeIndex::Terminal(index) => index,
            EdgeIndex::Interior(index) => index.saturating_sub(1),
        };
        let mut last = match bounds.last {
            // Every sample lies past the far edge of the area.
            EdgeIndex::Absent => return None,
            EdgeIndex::Terminal(index) => index,
            EdgeIndex::Interior(index) => (index + 1).min(len - 1),
        };
        if first > last || last >= len {
            return None;
        }

        let stride = Self::stride(len, view_width);
        let count = if stride > 1 {
            first -= first % stride;
            let aligned_last = last - last % stride + stride;
            let count = (aligned_last - first) / stride + 1;
            last = aligned_last.min(len - 1);
            count
        } else {
            last - first + 1
        };

        let projection = ValueProjection::new(self.scaling, series, mapping);
        let mut points = RenderPoints::with_capacity(count);
        for step in 0..count {
            // The final step always lands on the true last sample.
            let index = if step == count - 1 {
                last
            } else {
                first + step * stride
            };
            points.push(
                sample_view_x(mapping, series, index),
                projection.pixel_y(mapping, series.y(index)),
            );
        }

        trace!(first, last, stride, emitted = points.len(), "fast decimation");
        Some(points)
    }

    fn select_nearest(
        &self,
        series: &Series,
        view_x: i64,
        view_y: i64,
        mapping: &dyn ViewportMapping,
    ) -> Option<SelectionResult> {
        select_nearest_by_timestamp(series, view_x, view_y, mapping)
    }
}
