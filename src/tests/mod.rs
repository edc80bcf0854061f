//! # Integration tests that require a look inside the crate.
//!
//! Convention for the fixture functions:
//!
//! * `fn backend()` — engine loaded with the problem
//! * `fn to_reference_basis()` — engine moved to the basis the scenario starts from
//! * `fn dictionary()` — dictionary over that engine

/// Absolute tolerance for comparing floating point results.
pub const EPSILON: f64 = 1e-9;

/// Compare two dense coefficient vectors entry by entry.
pub fn assert_approx_eq(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (&actual, &expected) in actual.iter().zip(expected) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "{:?} differs from {:?}", actual, expected,
        );
    }
}
