use serde::{Deserialize, Serialize};

use crate::core::primitives::checked_pixel;
use crate::core::{DataRect, LinearScale, PixelRect, Series, Viewport};
use crate::error::ChartResult;

/// One side of a visible index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeIndex {
    /// No sample qualifies on this side.
    Absent,
    /// The series itself ends inside the queried area at this index.
    Terminal(usize),
    /// The series continues past the area edge; this is the outermost sample inside.
    Interior(usize),
}

impl EdgeIndex {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Absent => None,
            Self::Terminal(index) | Self::Interior(index) => Some(index),
        }
    }

    #[must_use]
    pub fn is_interior(self) -> bool {
        matches!(self, Self::Interior(_))
    }
}

/// Sample indices whose mapped positions intersect a pixel area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleBounds {
    pub first: EdgeIndex,
    pub last: EdgeIndex,
}

impl VisibleBounds {
    pub const ABSENT: Self = Self {
        first: EdgeIndex::Absent,
        last: EdgeIndex::Absent,
    };

    /// Index range extended by one sample on every interior edge.
    ///
    /// `None` unless both edges resolved. Extension keeps the segments that
    /// connect visible samples to their off-area neighbors.
    #[must_use]
    pub fn extended_range(self, len: usize) -> Option<(usize, usize)> {
        let first = match self.first {
            EdgeIndex::Absent => return None,
            EdgeIndex::Terminal(index) => index,
            EdgeIndex::Interior(index) => index.saturating_sub(1),
        };
        let last = match self.last {
            EdgeIndex::Absent => return None,
            EdgeIndex::Terminal(index) => index,
            EdgeIndex::Interior(index) => (index + 1).min(len.saturating_sub(1)),
        };
        (first <= last && last < len).then_some((first, last))
    }
}

/// Data ↔ pixel mapping consumed by the decimators, selectors and bounds projector.
///
/// Implementations must be monotonic and deterministic. Callers round mapped
/// values toward positive infinity themselves.
pub trait ViewportMapping {
    /// Visible pixel area.
    fn viewport(&self) -> Viewport;

    /// Width in pixels of the full data extent at the current zoom.
    fn view_width(&self) -> f64;

    /// Height in pixels of the full data extent at the current zoom.
    fn view_height(&self) -> f64;

    fn view_x(&self, data_x: f64) -> f64;

    fn view_y(&self, data_y: f64) -> f64;

    /// Pixel length of a data-space width.
    fn view_width_of(&self, data_width: f64) -> f64;

    /// Data value drawn at the value-axis origin.
    fn data_offset_y(&self) -> f64;

    /// Data-space height of the whole value axis.
    fn data_height(&self) -> f64;

    /// Data-space height of a pixel-space height.
    fn data_height_of(&self, view_height: f64) -> f64;

    /// Pixel rectangle covering a data rectangle.
    fn view_rect(&self, data: DataRect) -> PixelRect;

    /// Resolves which sample indices of `series` land inside `area`.
    fn visible_bounds(&self, series: &Series, area: PixelRect) -> VisibleBounds;

    /// Index of the sample whose timestamp is nearest to the pixel position.
    fn nearest_index_by_timestamp(
        &self,
        series: &Series,
        view_x: i64,
        view_y: i64,
    ) -> Option<usize>;

    /// `x` grows toward the left edge.
    fn is_right_based(&self) -> bool;

    /// `y` grows toward the top edge.
    fn is_bottom_based(&self) -> bool;
}

/// Linear [`ViewportMapping`] over a visible x window and the full y range.
///
/// Bottom-based and left-based by default, the usual orientation of a
/// time-series chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMapping {
    viewport: Viewport,
    full_x: LinearScale,
    x_scale: LinearScale,
    y_scale: LinearScale,
    right_based: bool,
    bottom_based: bool,
}

impl LinearMapping {
    /// Fits `data` onto the whole viewport.
    pub fn new(viewport: Viewport, data: DataRect) -> ChartResult<Self> {
        let full_x = LinearScale::fitted(data.x as f64, (data.x + data.width) as f64, 1.0)?;
        let y_scale = LinearScale::fitted(data.y as f64, (data.y + data.height) as f64, 1.0)?;
        Ok(Self {
            viewport,
            full_x,
            x_scale: full_x,
            y_scale,
            right_based: false,
            bottom_based: true,
        })
    }

    /// Fits the bounds of `series` onto the whole viewport.
    pub fn fit(viewport: Viewport, series: &Series) -> ChartResult<Self> {
        Self::new(viewport, series.bounds())
    }

    /// Restricts the horizontal axis to `[start, end]` in data units.
    pub fn with_visible_x(mut self, start: f64, end: f64) -> ChartResult<Self> {
        self.x_scale = LinearScale::fitted(start, end, 1e-9)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_right_based(mut self, right_based: bool) -> Self {
        self.right_based = right_based;
        self
    }

    #[must_use]
    pub fn with_bottom_based(mut self, bottom_based: bool) -> Self {
        self.bottom_based = bottom_based;
        self
    }

    #[must_use]
    pub fn visible_x(&self) -> (f64, f64) {
        self.x_scale.domain()
    }

    fn width_px(&self) -> f64 {
        f64::from(self.viewport.width)
    }

    fn height_px(&self) -> f64 {
        f64::from(self.viewport.height)
    }

    fn data_x_at(&self, view_x: f64) -> f64 {
        let px = if self.right_based {
            self.width_px() - view_x
        } else {
            view_x
        };
        self.x_scale.to_domain(px, self.width_px())
    }
}

impl ViewportMapping for LinearMapping {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn view_width(&self) -> f64 {
        self.view_width_of(self.full_x.span())
    }

    fn view_height(&self) -> f64 {
        self.height_px()
    }

    fn view_x(&self, data_x: f64) -> f64 {
        let px = self.x_scale.to_pixel(data_x, self.width_px());
        if self.right_based {
            self.width_px() - px
        } else {
            px
        }
    }

    fn view_y(&self, data_y: f64) -> f64 {
        let py = self.y_scale.to_pixel(data_y, self.height_px());
        if self.bottom_based {
            self.height_px() - py
        } else {
            py
        }
    }

    fn view_width_of(&self, data_width: f64) -> f64 {
        data_width / self.x_scale.span() * self.width_px()
    }

    fn data_offset_y(&self) -> f64 {
        self.y_scale.domain().0
    }

    fn data_height(&self) -> f64 {
        self.y_scale.span()
    }

    fn data_height_of(&self, view_height: f64) -> f64 {
        if self.viewport.height == 0 {
            return 0.0;
        }
        view_height / self.height_px() * self.y_scale.span()
    }

    fn view_rect(&self, data: DataRect) -> PixelRect {
        let width = checked_pixel(self.view_width_of(data.width as f64));
        let mut x = checked_pixel(self.view_x(data.x as f64));
        if self.right_based {
            x -= width;
        }

        let y1 = self.view_y(data.y as f64);
        let y2 = self.view_y((data.y + data.height) as f64);
        let top = checked_pixel(y1.min(y2));
        let bottom = checked_pixel(y1.max(y2));
        PixelRect::new(x, top, width, bottom - top)
    }

    fn visible_bounds(&self, series: &Series, area: PixelRect) -> VisibleBounds {
        if series.is_empty() || area.is_empty() || !self.viewport.is_valid() {
            return VisibleBounds::ABSENT;
        }

        let edge_a = self.data_x_at(area.x as f64);
        let edge_b = self.data_x_at(area.right() as f64);
        let (low, high) = (edge_a.min(edge_b), edge_a.max(edge_b));

        let samples = series.samples();
        let len = samples.len();
        let start = samples.partition_point(|sample| (sample.x as f64) < low);
        let end = samples.partition_point(|sample| (sample.x as f64) <= high);

        let first = match start {
            0 => EdgeIndex::Terminal(0),
            index if index >= len => EdgeIndex::Absent,
            index => EdgeIndex::Interior(index),
        };
        let last = match end {
            0 => EdgeIndex::Absent,
            index if index >= len => EdgeIndex::Terminal(len - 1),
            index => EdgeIndex::Interior(index - 1),
        };

        VisibleBounds { first, last }
    }

    fn nearest_index_by_timestamp(
        &self,
        series: &Series,
        view_x: i64,
        _view_y: i64,
    ) -> Option<usize> {
        if series.is_empty() || !self.viewport.is_valid() {
            return None;
        }
        if view_x < 0 || view_x > i64::from(self.viewport.width) {
            return None;
        }

        let target = self.data_x_at(view_x as f64);
        let samples = series.samples();
        let index = samples.partition_point(|sample| (sample.x as f64) < target);
        if index == 0 {
            return Some(0);
        }
        if index == samples.len() {
            return Some(index - 1);
        }

        let before = target - samples[index - 1].x as f64;
        let after = samples[index].x as f64 - target;
        Some(if after < before { index } else { index - 1 })
    }

    fn is_right_based(&self) -> bool {
        self.right_based
    }

    fn is_bottom_based(&self) -> bool {
        self.bottom_based
    }
}
