use xy_decimation::core::{DataRect, LinearMapping, Series, Viewport};
use xy_decimation::selection::{
    SelectionDistance, SelectionResult, select_nearest_by_timestamp, select_nearest_topmost,
};

#[test]
fn topmost_selection_picks_the_closest_column() {
    let series = Series::from_pairs((0..=10).map(|i| (i * 10, i))).expect("ordered series");
    let mapping = LinearMapping::fit(Viewport::new(100, 100), &series).expect("mapping");

    let selection = select_nearest_topmost(&series, 33, &mapping).expect("selection");

    assert_eq!(selection, SelectionResult::new(3, SelectionDistance::Pixels(3)));
}

#[test]
fn topmost_selection_prefers_the_highest_value_in_a_shared_column() {
    let series = Series::from_pairs([(0, 1), (10, 3), (11, 8), (12, 2), (100, 0)])
        .expect("ordered series");
    let mapping = LinearMapping::new(Viewport::new(10, 100), DataRect::new(0, 0, 100, 10))
        .expect("mapping");

    let selection = select_nearest_topmost(&series, 2, &mapping).expect("selection");

    assert_eq!(selection.index, 2);
    assert_eq!(selection.distance, SelectionDistance::Pixels(0));
}

#[test]
fn single_column_layout_returns_the_visually_topmost_sample() {
    let series = Series::from_pairs([(1, 4), (2, 7), (3, -2), (4, 7), (5, 1)])
        .expect("ordered series");
    let mapping = LinearMapping::new(Viewport::new(1, 100), DataRect::new(0, -2, 1_000, 9))
        .expect("mapping");

    let selection = select_nearest_topmost(&series, 0, &mapping).expect("selection");

    assert_eq!(series.y(selection.index), 7);
    assert_eq!(selection.distance, SelectionDistance::Pixels(1));
}

#[test]
fn query_between_two_samples_picks_a_neighbor() {
    let series = Series::from_pairs([(0, 1), (1_000, 2)]).expect("ordered series");
    let mapping = LinearMapping::fit(Viewport::new(100, 100), &series)
        .expect("mapping")
        .with_visible_x(400.0, 500.0)
        .expect("visible window");

    // Samples sit at -400 px and 600 px.
    let selection = select_nearest_topmost(&series, 90, &mapping).expect("selection");

    assert_eq!(selection, SelectionResult::new(0, SelectionDistance::Pixels(490)));
}

#[test]
fn empty_series_or_view_yields_none() {
    let empty = Series::new();
    let mapping = LinearMapping::fit(Viewport::new(100, 100), &empty).expect("mapping");
    assert_eq!(select_nearest_topmost(&empty, 10, &mapping), None);
    assert_eq!(select_nearest_by_timestamp(&empty, 10, 10, &mapping), None);

    let series = Series::from_pairs([(0, 1), (10, 2)]).expect("ordered series");
    let collapsed = LinearMapping::fit(Viewport::new(0, 100), &series).expect("mapping");
    assert_eq!(select_nearest_topmost(&series, 0, &collapsed), None);
}

#[test]
fn unknown_distance_orders_after_any_measured_distance() {
    assert!(SelectionDistance::Pixels(u64::MAX) < SelectionDistance::Unknown);
    assert!(SelectionDistance::Pixels(1) < SelectionDistance::Pixels(2));
}
