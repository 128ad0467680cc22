//! Test fixtures and mock types for labkit development.
//!
//! - [`sequential_array`] / [`sparse_capacity_array`]: arrays with known
//!   contents and capacity layouts.
//! - [`fixtures`]: sample scenes and figures that fail on purpose.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use labkit_arrayd::ArrayD;

/// `[0.0, 1.0, ..., (n-1) as f64]`, with capacity exactly `n`.
pub fn sequential_array(n: usize) -> ArrayD {
    ArrayD::from((0..n).map(|i| i as f64).collect::<Vec<_>>())
}

/// An array holding `values` inside a larger allocation of `capacity`
/// slots, so the next inserts do not reallocate.
///
/// # Panics
///
/// Panics if `capacity < values.len()`.
pub fn sparse_capacity_array(values: &[f64], capacity: usize) -> ArrayD {
    assert!(capacity >= values.len(), "capacity below element count");
    let mut arr = ArrayD::new();
    arr.reserve(capacity as isize).unwrap();
    for &v in values {
        arr.push(v).unwrap();
    }
    arr
}

/// Snapshot of everything observable about an array, for asserting that
/// a failed operation changed nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayState {
    pub size: isize,
    pub capacity: isize,
    pub elements: Vec<f64>,
}

impl ArrayState {
    pub fn of(arr: &ArrayD) -> Self {
        Self {
            size: arr.size(),
            capacity: arr.capacity(),
            elements: arr.as_slice().to_vec(),
        }
    }
}
