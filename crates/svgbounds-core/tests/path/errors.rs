use svgbounds_core::{bounds_from_path, MalformedPathError, PathError};

#[test]
fn test_curve_and_arc_commands_are_unsupported() {
    let cases = [
        ("M 0 0 C 10 10 20 20 30 30", 'C'),
        ("M 0 0 c 1 1 2 2 3 3", 'c'),
        ("M 0 0 S 1 1 2 2", 'S'),
        ("M 0 0 Q 1 1 2 2", 'Q'),
        ("M 0 0 t 2 2", 't'),
        ("M 0 0 A 5 5 0 0 1 10 10", 'A'),
        ("M 0 0 a 5 5 0 0 1 10 10", 'a'),
    ];
    for (path, letter) in cases {
        let err = bounds_from_path(path).unwrap_err();
        assert!(err.is_unsupported_command(), "{} should be rejected", path);
        assert_eq!(
            err,
            PathError::UnsupportedCommand {
                command: letter,
                offset: 6
            }
        );
    }
}

#[test]
fn test_unsupported_command_wins_over_earlier_valid_groups() {
    // No partial bounds: the curve after a long valid prefix still fails the call.
    let err = bounds_from_path("M 0 0 L 100 100 200 200 C 1 1 2 2 3 3").unwrap_err();
    assert!(err.is_unsupported_command());
    assert_eq!(err.offset(), Some(24));
}

#[test]
fn test_empty_path() {
    let err = bounds_from_path("").unwrap_err();
    assert_eq!(err, PathError::Malformed(MalformedPathError::Empty));
}

#[test]
fn test_missing_leading_move() {
    for path in ["L 10 10", "H 5", "z", "5 5 L 1 1"] {
        let err = bounds_from_path(path).unwrap_err();
        assert!(
            matches!(
                err,
                PathError::Malformed(MalformedPathError::MissingLeadingMove { .. })
            ),
            "{} should need a leading move, got {:?}",
            path,
            err
        );
    }
}

#[test]
fn test_trailing_incomplete_pair() {
    let err = bounds_from_path("M 0 0 L 10 10 20").unwrap_err();
    assert_eq!(
        err,
        PathError::Malformed(MalformedPathError::OperandCount {
            command: 'L',
            arity: 2,
            count: 3,
            offset: 6,
        })
    );
}

#[test]
fn test_missing_operands() {
    let err = bounds_from_path("M 0 0 H").unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(err.offset(), Some(6));
}

#[test]
fn test_operands_after_close_path() {
    let err = bounds_from_path("M 0 0 L 1 1 Z 5").unwrap_err();
    assert_eq!(
        err,
        PathError::Malformed(MalformedPathError::OperandCount {
            command: 'Z',
            arity: 0,
            count: 1,
            offset: 12,
        })
    );
}

#[test]
fn test_invalid_numbers() {
    assert!(bounds_from_path("M 0 0 L 1e 2").unwrap_err().is_malformed());
    assert!(bounds_from_path("M 0 0 L - 2").unwrap_err().is_malformed());
    assert_eq!(
        bounds_from_path("M 0 1e400").unwrap_err(),
        PathError::Malformed(MalformedPathError::NonFinite {
            text: "1e400".to_string(),
            offset: 4,
        })
    );
}

#[test]
fn test_error_display() {
    let err = bounds_from_path("M 0 0 A 1 1 0 0 0 2 2").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported path command 'A' at offset 6");
}

#[test]
fn test_coordinate_overflow() {
    // Each literal is finite; the relative step is not.
    assert_eq!(
        bounds_from_path("M 1e308 0 l 1e308 0").unwrap_err(),
        PathError::Malformed(MalformedPathError::CoordinateOverflow {
            command: 'l',
            offset: 10,
        })
    );

    // Both corners are finite but the width is not.
    assert_eq!(
        bounds_from_path("M -1.7e308 0 L 1.7e308 0").unwrap_err(),
        PathError::Malformed(MalformedPathError::CoordinateOverflow {
            command: 'L',
            offset: 13,
        })
    );

    let bounds = bounds_from_path("M -8e307 0 L 8e307 0").unwrap();
    assert!(bounds.width().is_some_and(f64::is_finite));
}
