//! End-to-end checks of the array's public contract.

use labkit_arrayd::{ArrayConfig, ArrayD, ArrayError};
use labkit_test_utils::{sequential_array, sparse_capacity_array, ArrayState};

#[test]
fn every_index_of_new_array_is_accessible() {
    let n = 7;
    let arr = ArrayD::with_size(n).unwrap();
    for i in 0..n {
        assert_eq!(arr.get(i), Ok(&0.0));
    }
    assert!(arr.get(-1).unwrap_err().is_out_of_range());
    assert!(arr.get(n).unwrap_err().is_out_of_range());
}

#[test]
fn insert_remove_scenario() {
    let mut arr = ArrayD::with_size(3).unwrap();
    arr[0] = 1.0;
    arr[1] = 2.0;
    arr[2] = 3.0;

    arr.insert(9.0, 1).unwrap();
    assert_eq!(arr.as_slice(), &[1.0, 9.0, 2.0, 3.0]);
    assert_eq!(arr.size(), 4);

    assert_eq!(arr.remove(0), Ok(1.0));
    assert_eq!(arr.as_slice(), &[9.0, 2.0, 3.0]);
    assert_eq!(arr.size(), 3);

    assert_eq!(
        arr.get(3),
        Err(ArrayError::OutOfRange { index: 3, bound: 3 })
    );
}

#[test]
fn resize_to_zero_hides_all_elements() {
    let mut arr = sequential_array(5);
    arr.resize(0).unwrap();
    assert_eq!(arr.size(), 0);
    assert!(arr.get(0).unwrap_err().is_out_of_range());
    assert_eq!(arr.capacity(), 5);
}

#[test]
fn failed_operations_change_nothing() {
    let mut arr = sparse_capacity_array(&[1.0, 2.0, 3.0], 6);
    let before = ArrayState::of(&arr);

    assert!(arr.get(3).is_err());
    assert!(arr.get_mut(-1).is_err());
    assert!(arr.insert(0.0, 4).is_err());
    assert!(arr.insert(0.0, -1).is_err());
    assert!(arr.remove(3).is_err());
    assert!(matches!(
        arr.resize(-1),
        Err(ArrayError::InvalidArgument { .. })
    ));
    assert!(arr.reserve(-1).is_err());

    assert_eq!(ArrayState::of(&arr), before);
}

#[test]
fn inserts_within_capacity_do_not_reallocate() {
    let mut arr = sparse_capacity_array(&[1.0], 4);
    arr.insert(0.5, 0).unwrap();
    arr.insert(2.0, 2).unwrap();
    arr.push(3.0).unwrap();
    assert_eq!(arr.capacity(), 4);
    assert_eq!(arr.as_slice(), &[0.5, 1.0, 2.0, 3.0]);
}

#[test]
fn many_pushes_grow_geometrically() {
    let mut arr = ArrayD::new();
    let mut reallocations = 0;
    let mut last_capacity = arr.capacity();
    for i in 0..1000 {
        arr.push(i as f64).unwrap();
        if arr.capacity() != last_capacity {
            reallocations += 1;
            last_capacity = arr.capacity();
        }
    }
    assert_eq!(arr.as_slice(), sequential_array(1000).as_slice());
    // 4, 8, 16, ..., 1024
    assert_eq!(reallocations, 9);
}

#[test]
fn copy_independence() {
    let a = sequential_array(4);
    let mut b = a.clone();
    b[0] = -1.0;
    b.push(99.0).unwrap();
    assert_eq!(a.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(b.as_slice(), &[-1.0, 1.0, 2.0, 3.0, 99.0]);
}

#[test]
fn clone_keeps_growth_policy() {
    let config = ArrayConfig {
        min_capacity: 16,
        growth_factor: 4,
    };
    let a = ArrayD::with_config(config).unwrap();
    let mut b = a.clone();
    b.push(1.0).unwrap();
    assert_eq!(b.config(), &config);
    assert_eq!(b.capacity(), 16);
}

#[test]
fn remove_until_empty_then_reuse() {
    let mut arr = sequential_array(4);
    while !arr.is_empty() {
        arr.remove(arr.size() - 1).unwrap();
    }
    assert_eq!(arr.capacity(), 4);
    arr.push(7.0).unwrap();
    assert_eq!(arr.as_slice(), &[7.0]);
    assert_eq!(arr.capacity(), 4);
}

#[test]
fn error_converts_into_boxed_error() {
    fn fallible() -> Result<f64, Box<dyn std::error::Error>> {
        let arr = ArrayD::new();
        Ok(*arr.get(0)?)
    }
    let err = fallible().unwrap_err();
    assert_eq!(err.to_string(), "index 0 out of range [0, 0)");
}

#[test]
fn allocation_failure_is_reported_and_changes_nothing() {
    let mut arr = sparse_capacity_array(&[1.0, 2.0, 3.0], 6);
    let before = ArrayState::of(&arr);

    assert!(matches!(
        arr.resize(1 << 58),
        Err(ArrayError::InvalidArgument { .. })
    ));
    assert!(matches!(
        arr.reserve(1 << 58),
        Err(ArrayError::InvalidArgument { .. })
    ));

    assert_eq!(ArrayState::of(&arr), before);
}
