use svgbounds_core::{bounds_from_path, Bounds, BoundsRecord};

fn corners(path: &str) -> ((f64, f64), (f64, f64)) {
    bounds_from_path(path)
        .expect("path should parse")
        .corners()
        .expect("bounds should not be empty")
}

#[test]
fn test_triangle_record() {
    let record = bounds_from_path("M 100 100 L 300 100 200 300 z")
        .unwrap()
        .to_record()
        .unwrap();
    assert_eq!(
        record,
        BoundsRecord {
            x1: 100.0,
            y1: 100.0,
            x2: 300.0,
            y2: 300.0,
            width: 200.0,
            height: 200.0,
        }
    );
}

#[test]
fn test_compact_triangle_matches_spaced_form() {
    assert_eq!(
        bounds_from_path("M 100 100L300 100 200 300z").unwrap(),
        bounds_from_path("M 100 100 L 300 100 200 300 z").unwrap()
    );
}

#[test]
fn test_relative_lines_match_absolute() {
    let relative = bounds_from_path("M 0 0 l 10 0 0 10").unwrap();
    let absolute = bounds_from_path("M 0 0 L 10 0 10 10").unwrap();
    assert_eq!(relative, absolute);
    assert_eq!(relative.corners(), Some(((0.0, 0.0), (10.0, 10.0))));
}

#[test]
fn test_horizontal_vertical_only() {
    assert_eq!(corners("M 0 0 H 50 V 20 H 0 Z"), ((0.0, 0.0), (50.0, 20.0)));
    assert_eq!(corners("M 10 10 h 5 v -20 h -15"), ((0.0, -10.0), (15.0, 10.0)));
}

#[test]
fn test_intermediate_repetitions_count() {
    assert_eq!(corners("M 0 0 L 5 5 -5 -5"), ((-5.0, -5.0), (5.0, 5.0)));
    // The excursion to (100, 0) is undone by the last pair but still counts.
    assert_eq!(corners("M 0 0 l 100 0 -100 0"), ((0.0, 0.0), (100.0, 0.0)));
}

#[test]
fn test_implicit_move_repetitions() {
    assert_eq!(corners("M 1 1 2 2 3 3"), ((1.0, 1.0), (3.0, 3.0)));
    assert_eq!(corners("m 1 1 2 2 3 3"), ((1.0, 1.0), (6.0, 6.0)));
}

#[test]
fn test_close_path_does_not_move_cursor() {
    // After `z` relative commands continue from the last point, not the subpath start.
    assert_eq!(corners("M 10 10 l 5 0 z l 5 0"), ((10.0, 10.0), (20.0, 10.0)));
}

#[test]
fn test_multiple_subpaths() {
    assert_eq!(
        corners("M 0 0 L 1 1 Z M 50 -50 L 60 -40 Z"),
        ((0.0, -50.0), (60.0, 1.0))
    );
}

#[test]
fn test_numeric_forms() {
    assert_eq!(corners("M1e2,2E1L-1.5e+1-.5"), ((-15.0, -0.5), (100.0, 20.0)));
    assert_eq!(corners("M +3 +4 L 0.5.5"), ((0.5, 0.5), (3.0, 4.0)));
}

#[test]
fn test_whitespace_variants() {
    assert_eq!(
        corners("\tM 0,0\n L 4 , 4\r\n z "),
        ((0.0, 0.0), (4.0, 4.0))
    );
}

#[test]
fn test_single_point_path() {
    let bounds = bounds_from_path("M 7 -3").unwrap();
    assert_eq!(bounds.width(), Some(0.0));
    assert_eq!(bounds.height(), Some(0.0));
}

#[test]
fn test_union_path_accumulates() {
    let mut bounds = Bounds::new();
    bounds
        .union_path("M 0 0 L 10 10")
        .unwrap()
        .union_path("M -5 20 h 1")
        .unwrap();
    assert_eq!(bounds.corners(), Some(((-5.0, 0.0), (10.0, 20.0))));
}

#[test]
fn test_record_serializes_to_json() {
    let record = bounds_from_path("M 0 0 H 50 V 20").unwrap().to_record().unwrap();
    let json = serde_json::to_value(record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "x1": 0.0, "y1": 0.0, "x2": 50.0, "y2": 20.0, "width": 50.0, "height": 20.0
        })
    );
}
