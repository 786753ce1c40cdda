//! xy-decimation: bounded polylines and hit testing for very long XY series.
//!
//! A series of `(timestamp, value)` samples is reduced to at most a small
//! multiple of the available pixel width before it is drawn. The default
//! min/max strategy keeps every pixel column's true extrema, so spikes never
//! disappear; a cheaper fixed-stride strategy is available as well.

pub mod api;
pub mod bounds;
pub mod core;
pub mod decimation;
pub mod error;
pub mod render;
pub mod selection;
pub mod telemetry;

pub use api::{PainterConfig, XyPainter};
pub use error::{ChartError, ChartResult};
