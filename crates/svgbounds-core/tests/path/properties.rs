use proptest::prelude::*;
use svgbounds_core::{bounds_from_path, Bounds};

fn coord() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn points() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((coord(), coord()), 1..16)
}

proptest! {
    #[test]
    fn union_is_commutative(a in points(), b in points()) {
        let (a, b) = (Bounds::from_points(&a), Bounds::from_points(&b));
        let mut ab = a;
        ab.union(&b);
        let mut ba = b;
        ba.union(&a);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn union_is_associative(a in points(), b in points(), c in points()) {
        let (a, b, c) = (Bounds::from_points(&a), Bounds::from_points(&b), Bounds::from_points(&c));

        let mut left = a;
        left.union(&b).union(&c);

        let mut bc = b;
        bc.union(&c);
        let mut right = a;
        right.union(&bc);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn union_with_self_is_identity(a in points()) {
        let a = Bounds::from_points(&a);
        let mut twice = a;
        twice.union(&a);
        prop_assert_eq!(twice, a);
    }

    #[test]
    fn extend_never_yields_negative_size(pts in points()) {
        let bounds = Bounds::from_points(&pts);
        prop_assert!(bounds.width().unwrap() >= 0.0);
        prop_assert!(bounds.height().unwrap() >= 0.0);
        for (x, y) in pts {
            prop_assert!(bounds.rect().unwrap().contains(x, y));
        }
    }

    #[test]
    fn polyline_path_matches_point_bounds(pts in points()) {
        let mut path = String::from("M");
        for (x, y) in &pts {
            path.push_str(&format!(" {} {}", x, y));
        }
        let from_path = bounds_from_path(&path).unwrap();
        prop_assert_eq!(from_path, Bounds::from_points(&pts));
    }

    #[test]
    fn relative_path_matches_absolute(start in (coord(), coord()), deltas in prop::collection::vec((-100i32..100, -100i32..100), 1..16)) {
        let mut relative = format!("M {} {} l", start.0, start.1);
        let mut absolute = format!("M {} {} L", start.0, start.1);
        let (mut x, mut y) = start;
        for (dx, dy) in &deltas {
            relative.push_str(&format!(" {} {}", dx, dy));
            x += f64::from(*dx);
            y += f64::from(*dy);
            absolute.push_str(&format!(" {} {}", x, y));
        }
        prop_assert_eq!(bounds_from_path(&relative).unwrap(), bounds_from_path(&absolute).unwrap());
    }
}
