//! The facade exposes both components through one dependency.

use labkit::prelude::*;
use labkit_test_utils::fixtures::{sample_scene, SAMPLE_SCENE_BODY};

#[test]
fn scene_rendered_through_facade() {
    let doc = sample_scene().to_tikz().unwrap();
    for line in SAMPLE_SCENE_BODY {
        assert!(doc.contains(line), "missing {line:?}");
    }
}

#[test]
fn array_errors_reachable_through_module_path() {
    let mut arr = labkit::arrayd::ArrayD::new();
    let err = arr.remove(0).unwrap_err();
    assert!(matches!(err, ArrayError::OutOfRange { index: 0, bound: 0 }));
}

#[test]
fn array_feeds_polyline() {
    let mut arr = ArrayD::new();
    for y in [3.0, 1.0, 2.0] {
        arr.push(y).unwrap();
    }
    let line: Polyline = arr
        .as_slice()
        .iter()
        .enumerate()
        .map(|(x, &y)| (x as f64, y))
        .collect();
    assert_eq!(
        line.to_tikz().unwrap(),
        "\\draw (0, 3) -- (1, 1) -- (2, 2);\n"
    );
}
