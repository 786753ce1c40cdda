//! Nearest-sample lookup for hit testing.

use serde::{Deserialize, Serialize};

use crate::core::{Series, ViewportMapping};
use crate::decimation::sample_view_x;

/// Comparator for competing selections; smaller is closer.
///
/// Every measured distance orders before [`SelectionDistance::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SelectionDistance {
    Pixels(u64),
    Unknown,
}

/// Sample picked by a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionResult {
    pub index: usize,
    pub distance: SelectionDistance,
}

impl SelectionResult {
    #[must_use]
    pub const fn new(index: usize, distance: SelectionDistance) -> Self {
        Self { index, distance }
    }
}

/// Delegates to the mapping's timestamp lookup; the distance is not measured.
#[must_use]
pub fn select_nearest_by_timestamp(
    series: &Series,
    view_x: i64,
    view_y: i64,
    mapping: &dyn ViewportMapping,
) -> Option<SelectionResult> {
    mapping
        .nearest_index_by_timestamp(series, view_x, view_y)
        .filter(|&index| index < series.len())
        .map(|index| SelectionResult::new(index, SelectionDistance::Unknown))
}

/// Finds the closest pixel column to `view_x` and returns its highest sample.
///
/// Pixel columns are non-decreasing in index order, so the horizontal
/// distance falls and then rises across the visible range; the forward walk
/// stops at the first sample past the minimum. Among the samples sharing the
/// winning column the one with the largest value wins, which is the point
/// the min/max decimator draws on top.
#[must_use]
pub fn select_nearest_topmost(
    series: &Series,
    view_x: i64,
    mapping: &dyn ViewportMapping,
) -> Option<SelectionResult> {
    if series.is_empty() {
        return None;
    }
    let viewport = mapping.viewport().rect();
    if viewport.is_empty() {
        return None;
    }

    let len = series.len();
    let bounds = mapping.visible_bounds(series, viewport);
    let edge = |index: Option<usize>| index.filter(|&index| index < len);
    let (first, last) = match (edge(bounds.first.index()), edge(bounds.last.index())) {
        (Some(first), Some(last)) if first <= last => (first, last),
        // The viewport falls between two samples; both neighbors are candidates.
        (Some(first), Some(last)) => (last, first),
        _ => return None,
    };

    let mut index = first;
    let mut column = sample_view_x(mapping, series, index);
    let mut distance = view_x.abs_diff(column);
    while index < last {
        let next_column = sample_view_x(mapping, series, index + 1);
        let next_distance = view_x.abs_diff(next_column);
        if next_distance > distance {
            break;
        }
        index += 1;
        column = next_column;
        distance = next_distance;
    }

    let mut best = index;
    let mut best_value = series.y(index);
    for candidate in (first..index).rev() {
        if sample_view_x(mapping, series, candidate) != column {
            break;
        }
        let value = series.y(candidate);
        if value > best_value {
            best = candidate;
            best_value = value;
        }
    }

    Some(SelectionResult::new(best, SelectionDistance::Pixels(distance)))
}
