//! Pixel-space damage regions for samples and whole series.

use crate::core::{DataRect, PixelRect, Series, ViewportMapping, checked_pixel};
use crate::decimation::{ScalingMode, item_value_factor, stroke_extent};

/// Projects data bounds into pixel rectangles padded by the stroke extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsProjector {
    scaling: ScalingMode,
    stroke_extent: i64,
}

impl BoundsProjector {
    #[must_use]
    pub fn new(scaling: ScalingMode, line_width: f64) -> Self {
        Self {
            scaling,
            stroke_extent: stroke_extent(line_width),
        }
    }

    /// Damage region of one selected sample.
    ///
    /// A missing or stale index (for example after the series was cleared)
    /// yields the whole viewport: nothing smaller is known to be clean.
    #[must_use]
    pub fn selection_bounds(
        &self,
        series: &Series,
        selection: Option<usize>,
        mapping: &dyn ViewportMapping,
    ) -> PixelRect {
        match selection.filter(|&index| index < series.len()) {
            Some(index) => self.view_bounds(series, &[index], mapping),
            None => mapping.viewport().rect(),
        }
    }

    /// Damage region covering `indices`, or the whole series when empty.
    #[must_use]
    pub fn view_bounds(
        &self,
        series: &Series,
        indices: &[usize],
        mapping: &dyn ViewportMapping,
    ) -> PixelRect {
        let data = if indices.is_empty() {
            series.bounds()
        } else {
            let mut data: Option<DataRect> = None;
            for &index in indices {
                let Some(sample) = series.get(index) else {
                    return mapping.viewport().rect();
                };
                data = Some(match data {
                    Some(rect) => rect.including(sample),
                    None => DataRect::at(sample),
                });
            }
            data.unwrap_or_default()
        };

        match self.scaling {
            ScalingMode::Absolute => mapping.view_rect(data).add_border(self.stroke_extent),
            ScalingMode::Relative { max_value_offset } => {
                self.relative_view_bounds(data, series.bounds(), max_value_offset, mapping)
            }
        }
    }

    fn relative_view_bounds(
        &self,
        data: DataRect,
        item: DataRect,
        max_value_offset: f64,
        mapping: &dyn ViewportMapping,
    ) -> PixelRect {
        let factor = item_value_factor(mapping, max_value_offset, item.height);
        let offset = mapping.data_offset_y();
        let low = offset + factor * (data.y - item.y) as f64;
        let high = offset + factor * (data.y + data.height - item.y) as f64;

        let width = checked_pixel(mapping.view_width_of(data.width as f64));
        let mut x = checked_pixel(mapping.view_x(data.x as f64));
        if mapping.is_right_based() {
            x -= width;
        }

        let low_px = checked_pixel(mapping.view_y(low));
        let high_px = checked_pixel(mapping.view_y(high));
        let (top, bottom) = if mapping.is_bottom_based() {
            (high_px, low_px)
        } else {
            (low_px, high_px)
        };

        PixelRect::new(x, top, width, bottom - top).add_border(self.stroke_extent)
    }
}
