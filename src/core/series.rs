use tracing::{debug, warn};

use crate::core::{DataRect, Sample};
use crate::error::{ChartError, ChartResult};

/// Ordered sample sequence with its data-space bounding rectangle.
///
/// Sample `x` values are non-decreasing in index order. The decimation and
/// selection code only ever borrows a series, so callers mutate it between
/// passes, never during one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Series {
    samples: Vec<Sample>,
    bounds: Option<DataRect>,
}

impl Series {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from samples already ordered by `x`.
    pub fn from_samples(samples: Vec<Sample>) -> ChartResult<Self> {
        if let Some(pair) = samples.windows(2).find(|pair| pair[1].x < pair[0].x) {
            return Err(ChartError::OutOfOrderSample {
                previous: pair[0].x,
                next: pair[1].x,
            });
        }

        let bounds = DataRect::enclosing(samples.iter().copied());
        debug!(count = samples.len(), "series built from samples");
        Ok(Self { samples, bounds })
    }

    /// Builds a series from `(x, y)` pairs already ordered by `x`.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, i64)>) -> ChartResult<Self> {
        Self::from_samples(pairs.into_iter().map(|(x, y)| Sample::new(x, y)).collect())
    }

    /// Appends a sample; `x` must not be older than the latest sample.
    pub fn push(&mut self, sample: Sample) -> ChartResult<()> {
        if let Some(last) = self.samples.last().filter(|last| sample.x < last.x) {
            warn!(
                previous = last.x,
                next = sample.x,
                "rejecting out-of-order sample"
            );
            return Err(ChartError::OutOfOrderSample {
                previous: last.x,
                next: sample.x,
            });
        }

        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.including(sample),
            None => DataRect::at(sample),
        });
        self.samples.push(sample);
        Ok(())
    }

    /// Drops every sample. Previously issued indices become invalid.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.bounds = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    /// `x` of the sample at `index`.
    ///
    /// # Panics
    /// When `index >= len()`; callers resolve indices through visible bounds first.
    #[must_use]
    pub fn x(&self, index: usize) -> i64 {
        self.samples[index].x
    }

    /// `y` of the sample at `index`.
    ///
    /// # Panics
    /// When `index >= len()`.
    #[must_use]
    pub fn y(&self, index: usize) -> i64 {
        self.samples[index].y
    }

    /// Data bounding rectangle; an empty series reports a zero rectangle.
    #[must_use]
    pub fn bounds(&self) -> DataRect {
        self.bounds.unwrap_or_default()
    }
}
