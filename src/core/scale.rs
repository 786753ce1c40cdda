use crate::error::{ChartError, ChartResult};

/// Linear mapping between a data domain and a pixel extent starting at 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale over `[start, end]`, widening a degenerate range to `min_span`.
    pub fn fitted(start: f64, end: f64, min_span: f64) -> ChartResult<Self> {
        if start == end {
            let half = min_span / 2.0;
            return Self::new(start - half, end + half);
        }
        Self::new(start.min(end), start.max(end))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_end - self.domain_start
    }

    /// Maps `value` into `[0, extent_px]`.
    #[must_use]
    pub fn to_pixel(self, value: f64, extent_px: f64) -> f64 {
        (value - self.domain_start) / self.span() * extent_px
    }

    /// Inverse of [`LinearScale::to_pixel`]. A zero extent maps every pixel to the domain start.
    #[must_use]
    pub fn to_domain(self, pixel: f64, extent_px: f64) -> f64 {
        if extent_px == 0.0 {
            return self.domain_start;
        }
        self.domain_start + pixel / extent_px * self.span()
    }
}
