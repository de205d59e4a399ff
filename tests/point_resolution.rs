use annoplot::{AnnotateError, AxisBounds, AxisData, CategoryGroup, Grid, Hit, PointIndex, Series};

fn bounds() -> AxisBounds {
    AxisBounds::new(0.0, 10.0, 0.0, 10.0)
}

#[test]
fn registered_point_resolves_to_itself_with_annotation() {
    let data = AxisData::Series(vec![Series::with_annotations(
        "s",
        vec![[0.0, 0.0], [1.0, 1.0], [2.0, 4.0]],
        vec!["a".into(), "b".into(), "c".into()],
    )
    .unwrap()]);
    let index = PointIndex::new(&data);
    for (i, p) in [[0.0, 0.0], [1.0, 1.0], [2.0, 4.0]].iter().enumerate() {
        match index.query(p[0], p[1], bounds()).unwrap() {
            Hit::Point {
                index: pi, x, y, ..
            } => {
                assert_eq!(pi, i);
                assert_eq!([x, y], *p);
            }
            other => panic!("expected point hit, got {:?}", other),
        }
    }
}

#[test]
fn query_near_middle_point_picks_it() {
    let data = AxisData::Series(vec![Series::with_annotations(
        "s",
        vec![[0.0, 0.0], [1.0, 1.0], [2.0, 4.0]],
        vec!["a".into(), "b".into(), "c".into()],
    )
    .unwrap()]);
    match PointIndex::new(&data).query(1.1, 1.1, bounds()).unwrap() {
        Hit::Point {
            index, annotation, ..
        } => {
            assert_eq!(index, 1);
            assert_eq!(annotation.as_deref(), Some("b"));
        }
        other => panic!("expected point hit, got {:?}", other),
    }
}

#[test]
fn repeated_queries_are_deterministic() {
    let a = Series::new("a", vec![[1.0, 5.0], [4.0, 5.0], [6.0, 2.0]]);
    let b = Series::new(
        "b",
        vec![[3.0, 5.0], [2.0, 8.0], [7.0, 1.0], [8.0, 3.0], [9.0, 4.0]],
    );
    let data = AxisData::Series(vec![a, b]);
    let index = PointIndex::new(&data);
    // x=2 is equidistant between a[0] at x=1 and b[0] at x=3; registration
    // order wins, every time.
    let first = index.query(2.0, 5.0, bounds()).unwrap();
    match &first {
        Hit::Point { series, index, .. } => assert_eq!((*series, *index), (0, 0)),
        other => panic!("expected point hit, got {:?}", other),
    }
    for _ in 0..10 {
        assert_eq!(index.query(2.0, 5.0, bounds()).unwrap(), first);
    }
}

#[test]
fn grid_rounding_matches_image_convention() {
    let data = AxisData::Grid(Grid::new(5, 5, (0..25).map(f64::from).collect()).unwrap());
    match PointIndex::new(&data).query(2.6, 3.4, bounds()).unwrap() {
        Hit::Cell { row, col, value } => {
            assert_eq!((row, col), (3, 3));
            assert_eq!(value, 18.0);
        }
        other => panic!("expected cell hit, got {:?}", other),
    }
}

#[test]
fn histogram_bar_resolves_by_containment_not_distance() {
    let groups = CategoryGroup::histogram(&[0.0, 0.2, 0.4, 2.6, 2.8, 3.0], 3);
    let data = AxisData::Categories(groups);
    // Click far above the bars still resolves to the bin under the cursor x.
    match PointIndex::new(&data).query(0.3, 500.0, bounds()).unwrap() {
        Hit::Group { index, stats, .. } => {
            assert_eq!(index, 0);
            assert_eq!(stats.count, 3);
        }
        other => panic!("expected group hit, got {:?}", other),
    }
}

#[test]
fn all_equal_histogram_click_resolves_to_the_populated_bin() {
    let groups = CategoryGroup::histogram(&[5.0, 5.0, 5.0], 3);
    let data = AxisData::Categories(groups);
    // Clicking at the common sample value must hit the bin holding the
    // samples, not an empty neighbor.
    match PointIndex::new(&data).query(5.0, 1.0, bounds()).unwrap() {
        Hit::Group { stats, .. } => assert_eq!(stats.count, 3),
        other => panic!("expected group hit, got {:?}", other),
    }
}

#[test]
fn empty_axis_query_fails() {
    let data = AxisData::Series(Vec::new());
    assert_eq!(
        PointIndex::new(&data).query(1.0, 1.0, bounds()),
        Err(AnnotateError::EmptyAxis)
    );
}
