use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Pixel rectangle covering the whole viewport.
    #[must_use]
    pub fn rect(self) -> PixelRect {
        PixelRect::new(0, 0, i64::from(self.width), i64::from(self.height))
    }
}

/// One `(timestamp, value)` pair of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample {
    pub x: i64,
    pub y: i64,
}

impl Sample {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in data space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl DataRect {
    #[must_use]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized rectangle anchored at `sample`.
    #[must_use]
    pub const fn at(sample: Sample) -> Self {
        Self::new(sample.x, sample.y, 0, 0)
    }

    /// Smallest rectangle containing both `self` and `sample`.
    #[must_use]
    pub fn including(self, sample: Sample) -> Self {
        let min_x = self.x.min(sample.x);
        let min_y = self.y.min(sample.y);
        let max_x = (self.x + self.width).max(sample.x);
        let max_y = (self.y + self.height).max(sample.y);
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Bounding rectangle of `samples`, `None` when empty.
    #[must_use]
    pub fn enclosing(samples: impl IntoIterator<Item = Sample>) -> Option<Self> {
        let mut samples = samples.into_iter();
        let first = samples.next()?;
        Some(samples.fold(Self::at(first), Self::including))
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[must_use]
    pub fn right(self) -> i64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> i64 {
        self.y + self.height
    }

    /// Grows the rectangle by `dx` on the left and right, `dy` on top and bottom.
    #[must_use]
    pub fn grow(self, dx: i64, dy: i64) -> Self {
        Self::new(
            self.x - dx,
            self.y - dy,
            self.width + 2 * dx,
            self.height + 2 * dy,
        )
    }

    /// Grows the rectangle by `border` on all four sides.
    #[must_use]
    pub fn add_border(self, border: i64) -> Self {
        self.grow(border, border)
    }
}
