use tracing::trace;

use crate::core::{PixelRect, Series, ViewportMapping};
use crate::selection::{SelectionResult, select_nearest_topmost};

use super::{
    DecimationMode, RenderPoints, ScalingMode, SeriesDecimator, ValueProjection, sample_view_x,
    stroke_extent,
};

/// Points one pixel column may hold: its minimum and its maximum.
const COLUMN_POINTS: usize = 2;

/// Extrema-preserving decimator.
///
/// Every run of consecutive samples that land in the same pixel column is
/// folded into at most two points holding the run's true minimum and
/// maximum, in the order they occur. A spike narrower than a pixel therefore
/// always reaches the polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxDecimator {
    scaling: ScalingMode,
    stroke_extent: i64,
}

impl MinMaxDecimator {
    #[must_use]
    pub fn new(scaling: ScalingMode, line_width: f64) -> Self {
        Self {
            scaling,
            stroke_extent: stroke_extent(line_width),
        }
    }

    #[must_use]
    pub fn scaling(&self) -> ScalingMode {
        self.scaling
    }

    /// Horizontal margin added around dirty areas, in pixels.
    #[must_use]
    pub fn stroke_extent(&self) -> i64 {
        self.stroke_extent
    }
}

impl SeriesDecimator for MinMaxDecimator {
    fn mode(&self) -> DecimationMode {
        DecimationMode::MinMax
    }

    fn decimate(
        &self,
        series: &Series,
        area: PixelRect,
        mapping: &dyn ViewportMapping,
    ) -> Option<RenderPoints> {
        if area.is_empty() || series.is_empty() || !mapping.viewport().is_valid() {
            return None;
        }

        // Segments of samples just outside the area can still cross into it.
        let area = area.grow(self.stroke_extent, 0);
        let (first, last) = mapping
            .visible_bounds(series, area)
            .extended_range(series.len())?;

        // Two slots per column fit in four per pixel; +2 for the neighbors
        // pulled in on both sides.
        let width = usize::try_from(area.width).unwrap_or(0);
        let capacity = width
            .saturating_mul(4)
            .saturating_add(2)
            .min(last - first + 1);

        let projection = ValueProjection::new(self.scaling, series, mapping);
        let mut points = RenderPoints::with_capacity(capacity);
        for index in first..=last {
            let x = sample_view_x(mapping, series, index);
            let y = projection.pixel_y(mapping, series.y(index));
            fold_into_column(&mut points, x, y);
        }

        trace!(
            first,
            last,
            capacity,
            emitted = points.len(),
            "min/max decimation"
        );
        Some(points)
    }

    fn select_nearest(
        &self,
        series: &Series,
        view_x: i64,
        _view_y: i64,
        mapping: &dyn ViewportMapping,
    ) -> Option<SelectionResult> {
        select_nearest_topmost(series, view_x, mapping)
    }
}

/// Trailing points already emitted for pixel column `x`.
fn column_run(points: &RenderPoints, x: i64) -> usize {
    (1..=COLUMN_POINTS.min(points.len()))
        .take_while(|&back| points.tail(back).0 == x)
        .count()
}

/// Adds `(x, y)` to the polyline, keeping each column at its extrema.
///
/// The extreme visited most recently sits last so the segment toward the
/// next column leaves from it. Equal values in adjacent columns stay separate
/// points: each column keeps its own value.
fn fold_into_column(points: &mut RenderPoints, x: i64, y: i64) {
    match column_run(points, x) {
        // New column.
        0 => points.push(x, y),
        // Second value in the column; repeats would draw zero-length segments.
        1 => {
            if points.tail(1).1 != y {
                points.push(x, y);
            }
        }
        // Column already holds two distinct extrema.
        _ => {
            let entry = points.tail(2).1;
            let exit = points.tail(1).1;
            if y == entry {
                points.set_tail_y(2, exit);
                points.set_tail_y(1, entry);
                return;
            }
            let (low, high) = (entry.min(exit), entry.max(exit));
            if (low..=high).contains(&y) {
                return;
            }

            // The extreme on `y`'s side is replaced; the other one keeps its
            // place ahead of the newer value.
            let replaces_exit = if y > high { exit == high } else { exit == low };
            if !replaces_exit {
                points.set_tail_y(2, exit);
            }
            points.set_tail_y(1, y);
        }
    }
}
