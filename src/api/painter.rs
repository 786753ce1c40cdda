use tracing::{debug, trace};

use crate::bounds::BoundsProjector;
use crate::core::{PixelRect, Series, ViewportMapping, checked_pixel};
use crate::decimation::{DecimationMode, RenderPoints, SeriesDecimator};
use crate::error::ChartResult;
use crate::render::{FillPaint, FillRegion, LineStroke, Renderer, SeriesFrame};
use crate::selection::SelectionResult;

use super::PainterConfig;

/// Paints one XY series and answers hit tests against it.
///
/// The decimation strategy is built once from [`PainterConfig::mode`];
/// rendering, selection and bounds all go through that same strategy so what
/// the user clicks matches what was drawn.
#[derive(Debug)]
pub struct XyPainter {
    config: PainterConfig,
    decimator: Box<dyn SeriesDecimator>,
    bounds: BoundsProjector,
    painting: bool,
}

impl XyPainter {
    pub fn new(config: PainterConfig) -> ChartResult<Self> {
        config.validate()?;
        let decimator = config.mode.decimator(config.scaling, config.line_width);
        let bounds = BoundsProjector::new(config.scaling, config.line_width);
        debug!(mode = %config.mode, line_width = config.line_width, "painter created");
        Ok(Self {
            config,
            decimator,
            bounds,
            painting: true,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> DecimationMode {
        self.decimator.mode()
    }

    /// Enables or disables [`XyPainter::paint`]. Selection and bounds are unaffected.
    pub fn set_painting(&mut self, painting: bool) {
        self.painting = painting;
    }

    #[must_use]
    pub fn is_painting(&self) -> bool {
        self.painting
    }

    /// Decimated polyline for the samples visible in `dirty`.
    #[must_use]
    pub fn render_points(
        &self,
        series: &Series,
        dirty: PixelRect,
        mapping: &dyn ViewportMapping,
    ) -> Option<RenderPoints> {
        self.decimator.decimate(series, dirty, mapping)
    }

    /// Sample closest to the pointer, `None` when nothing is visible.
    #[must_use]
    pub fn closest_selection(
        &self,
        series: &Series,
        view_x: i64,
        view_y: i64,
        mapping: &dyn ViewportMapping,
    ) -> Option<SelectionResult> {
        self.decimator.select_nearest(series, view_x, view_y, mapping)
    }

    /// Damage region for a selected sample; stale selections invalidate the viewport.
    #[must_use]
    pub fn selection_bounds(
        &self,
        series: &Series,
        selection: Option<usize>,
        mapping: &dyn ViewportMapping,
    ) -> PixelRect {
        self.bounds.selection_bounds(series, selection, mapping)
    }

    /// Damage region for `indices`, or the whole series when `indices` is empty.
    #[must_use]
    pub fn view_bounds(
        &self,
        series: &Series,
        indices: &[usize],
        mapping: &dyn ViewportMapping,
    ) -> PixelRect {
        self.bounds.view_bounds(series, indices, mapping)
    }

    /// Decimates the series for `dirty` and hands the frame to `renderer`.
    ///
    /// Returns `Ok(false)` when nothing was drawn: painting disabled, fewer
    /// than two samples, a zero-sized view or nothing visible.
    pub fn paint<R: Renderer>(
        &self,
        series: &Series,
        dirty: PixelRect,
        mapping: &dyn ViewportMapping,
        renderer: &mut R,
    ) -> ChartResult<bool> {
        if !self.painting || series.len() < 2 {
            return Ok(false);
        }
        if mapping.view_width() == 0.0 || mapping.view_height() == 0.0 {
            return Ok(false);
        }
        let Some(polyline) = self.render_points(series, dirty, mapping) else {
            trace!("nothing visible to paint");
            return Ok(false);
        };

        let frame = self.build_frame(polyline, mapping);
        renderer.render(&frame)?;
        Ok(true)
    }

    fn build_frame(&self, polyline: RenderPoints, mapping: &dyn ViewportMapping) -> SeriesFrame {
        let viewport = mapping.viewport();
        let height = i64::from(viewport.height);
        let style = self.config.style;

        let fill = style.fill_color.map(|start| {
            let baseline_y =
                checked_pixel(mapping.view_y(mapping.data_offset_y())).clamp(0, height);
            let paint = match style.fill_color_end {
                Some(end) => FillPaint::VerticalGradient {
                    top: 0,
                    bottom: height,
                    start,
                    end,
                },
                None => FillPaint::Solid(start),
            };
            FillRegion {
                outline: polyline.fill_outline(baseline_y),
                baseline_y,
                paint,
            }
        });
        let line = style.line_color.map(|color| LineStroke {
            color,
            width: self.config.line_width,
        });

        SeriesFrame {
            viewport,
            polyline,
            line,
            fill,
        }
    }
}
