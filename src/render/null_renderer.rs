use crate::error::ChartResult;
use crate::render::{Renderer, SeriesFrame};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frames so invalid geometry is caught without a real
/// backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_point_count: usize,
    pub last_fill_point_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SeriesFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_point_count = frame.polyline.len();
        self.last_fill_point_count = frame.fill.as_ref().map_or(0, |fill| fill.outline.len());
        Ok(())
    }
}
