pub mod mapping;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;

pub use mapping::{EdgeIndex, LinearMapping, ViewportMapping, VisibleBounds};
pub use primitives::checked_pixel;
pub use scale::LinearScale;
pub use series::Series;
pub use types::{DataRect, PixelRect, Sample, Viewport};
