use proptest::prelude::*;
use xy_decimation::core::{
    DataRect, LinearMapping, Series, Viewport, ViewportMapping, checked_pixel,
};
use xy_decimation::decimation::{FastDecimator, MinMaxDecimator, ScalingMode, SeriesDecimator};
use xy_decimation::selection::select_nearest_topmost;

fn build_series(steps: &[(i64, i64)]) -> Series {
    let mut x = 0;
    let pairs: Vec<(i64, i64)> = steps
        .iter()
        .map(|&(step, y)| {
            x += step;
            (x, y)
        })
        .collect();
    Series::from_pairs(pairs).expect("ordered series")
}

fn pixel(mapping: &LinearMapping, series: &Series, index: usize) -> (i64, i64) {
    (
        checked_pixel(mapping.view_x(series.x(index) as f64)),
        checked_pixel(mapping.view_y(series.y(index) as f64)),
    )
}

/// Consecutive `(column, values)` runs in order.
fn column_runs(points: impl IntoIterator<Item = (i64, i64)>) -> Vec<(i64, Vec<i64>)> {
    let mut runs: Vec<(i64, Vec<i64>)> = Vec::new();
    for (x, y) in points {
        match runs.last_mut() {
            Some((column, values)) if *column == x => values.push(y),
            _ => runs.push((x, vec![y])),
        }
    }
    runs
}

/// Min and max of a run, ordered by where each last occurs.
fn expected_extrema(values: &[i64]) -> Vec<i64> {
    let low = *values.iter().min().expect("non-empty run");
    let high = *values.iter().max().expect("non-empty run");
    if low == high {
        return vec![low];
    }
    let low_at = values.iter().rposition(|&v| v == low).expect("low present");
    let high_at = values.iter().rposition(|&v| v == high).expect("high present");
    if low_at < high_at {
        vec![low, high]
    } else {
        vec![high, low]
    }
}

proptest! {
    #[test]
    fn minmax_keeps_exactly_the_extrema_of_every_column(
        steps in prop::collection::vec((0i64..4, -1_000i64..1_000), 1..300),
        width in 1u32..120,
        height in 20u32..300
    ) {
        let series = build_series(&steps);
        let mapping = LinearMapping::fit(Viewport::new(width, height), &series).expect("mapping");
        let decimator = MinMaxDecimator::new(ScalingMode::Absolute, 0.0);

        let points = decimator
            .decimate(&series, mapping.viewport().rect(), &mapping)
            .expect("whole series is visible");

        let input = column_runs((0..series.len()).map(|i| pixel(&mapping, &series, i)));
        let expected: Vec<(i64, Vec<i64>)> = input
            .iter()
            .map(|(column, values)| (*column, expected_extrema(values)))
            .collect();

        prop_assert_eq!(column_runs(points.iter()), expected);
        prop_assert!(points.len() <= points.capacity());
        prop_assert!(points.capacity() <= 4 * width as usize + 2);
        prop_assert!(points.xs().windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn fast_output_is_bounded_monotonic_and_ends_on_the_last_sample(
        steps in prop::collection::vec((0i64..4, -1_000i64..1_000), 1..2_000),
        width in 1u32..200
    ) {
        let series = build_series(&steps);
        let mapping = LinearMapping::fit(Viewport::new(width, 100), &series).expect("mapping");
        let decimator = FastDecimator::new(ScalingMode::Absolute);

        let points = decimator
            .decimate(&series, mapping.viewport().rect(), &mapping)
            .expect("whole series is visible");

        prop_assert!(points.len() <= 2 * width as usize + 2);
        prop_assert!(points.xs().windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(points.last(), Some(pixel(&mapping, &series, series.len() - 1)));
    }

    #[test]
    fn selection_matches_the_topmost_decimated_point(
        steps in prop::collection::vec((0i64..4, -1_000i64..1_000), 1..300),
        width in 1u32..120,
        query_ratio in 0.0f64..=1.0
    ) {
        let series = build_series(&steps);
        let mapping = LinearMapping::fit(Viewport::new(width, 200), &series).expect("mapping");
        let decimator = MinMaxDecimator::new(ScalingMode::Absolute, 0.0);
        let query = (f64::from(width) * query_ratio).round() as i64;

        let selection = decimator
            .select_nearest(&series, query, 0, &mapping)
            .expect("selection");
        let points = decimator
            .decimate(&series, mapping.viewport().rect(), &mapping)
            .expect("whole series is visible");

        let (column, selected_y) = pixel(&mapping, &series, selection.index);
        let topmost = points
            .iter()
            .filter(|&(x, _)| x == column)
            .map(|(_, y)| y)
            .min()
            .expect("column is drawn");
        prop_assert_eq!(selected_y, topmost);

        let nearest = (0..series.len())
            .map(|i| query.abs_diff(pixel(&mapping, &series, i).0))
            .min()
            .expect("non-empty series");
        prop_assert_eq!(query.abs_diff(column), nearest);
    }

    #[test]
    fn single_column_layout_selects_the_maximum(
        values in prop::collection::vec(-1_000i64..1_000, 1..300),
        query in 0i64..=1
    ) {
        let series = Series::from_pairs(
            values.iter().enumerate().map(|(i, &y)| (i as i64 + 1, y)),
        )
        .expect("ordered series");
        let mapping = LinearMapping::new(
            Viewport::new(1, 100),
            DataRect::new(0, -1_000, 10_000, 2_000),
        )
        .expect("mapping");

        let selection = select_nearest_topmost(&series, query, &mapping).expect("selection");
        let max = *values.iter().max().expect("non-empty");
        prop_assert_eq!(series.y(selection.index), max);

        let decimator = MinMaxDecimator::new(ScalingMode::Absolute, 0.0);
        let points = decimator
            .decimate(&series, mapping.viewport().rect(), &mapping)
            .expect("whole series is visible");
        prop_assert!(points.len() <= 2);
        prop_assert!(points.ys().contains(&checked_pixel(mapping.view_y(max as f64))));
    }
}
