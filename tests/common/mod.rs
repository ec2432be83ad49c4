//! Shared test utilities for cadmeasure integration tests.
//!
//! Builders live in `builders`; selection helpers live here so every test
//! crate imports them via `mod common;`.

#![allow(dead_code)]

pub mod builders;

use cadmeasure::{MeasureSelection, MeasureSelectionItem, ObjectId, SubObjectRef};

/// Selection of a single sub-element
pub fn select_one(object: ObjectId, sub_name: &str) -> MeasureSelection {
    vec![MeasureSelectionItem::new(SubObjectRef::new(object, sub_name))]
}

/// Selection of several sub-elements of the same object
pub fn select_many(object: ObjectId, sub_names: &[&str]) -> MeasureSelection {
    sub_names
        .iter()
        .map(|s| MeasureSelectionItem::new(SubObjectRef::new(object, *s)))
        .collect()
}

/// Assert two floats agree to evaluator precision
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
