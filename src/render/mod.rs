mod frame;
mod null_renderer;
mod primitives;

pub use frame::{FillPaint, FillRegion, LineStroke, SeriesFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, SeriesStyle};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully decimated [`SeriesFrame`]; rasterization and
/// color handling stay outside the decimation engine.
pub trait Renderer {
    fn render(&mut self, frame: &SeriesFrame) -> ChartResult<()>;
}
