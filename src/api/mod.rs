mod painter;
mod painter_config;

pub use painter::XyPainter;
pub use painter_config::PainterConfig;
