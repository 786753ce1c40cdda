use crate::core::Viewport;
use crate::decimation::RenderPoints;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Stroke applied along the decimated polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStroke {
    pub color: Color,
    pub width: f64,
}

/// Paint used for the area under the polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillPaint {
    Solid(Color),
    /// Linear gradient from `start` at pixel row `top` to `end` at `bottom`.
    VerticalGradient {
        top: i64,
        bottom: i64,
        start: Color,
        end: Color,
    },
}

/// Closed polygon under the polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRegion {
    pub outline: Vec<(i64, i64)>,
    pub baseline_y: i64,
    pub paint: FillPaint,
}

/// Backend-agnostic drawing request for one series in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFrame {
    pub viewport: Viewport,
    pub polyline: RenderPoints,
    pub line: Option<LineStroke>,
    pub fill: Option<FillRegion>,
}

impl SeriesFrame {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.polyline.is_empty() {
            return Err(ChartError::InvalidData(
                "series frame polyline must not be empty".to_owned(),
            ));
        }

        if let Some(line) = self.line {
            if !line.width.is_finite() || line.width < 0.0 {
                return Err(ChartError::InvalidData(
                    "line stroke width must be finite and >= 0".to_owned(),
                ));
            }
            line.color.validate()?;
        }

        if let Some(fill) = &self.fill {
            match fill.paint {
                FillPaint::Solid(color) => color.validate()?,
                FillPaint::VerticalGradient { start, end, .. } => {
                    start.validate()?;
                    end.validate()?;
                }
            }
        }

        Ok(())
    }
}
