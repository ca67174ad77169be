
/// Absolute tolerance for comparing log10 values.
pub(super) const EPS: f64 = 1e-12;

pub(super) fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {actual:?} vs {expected:?}"
    );
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < EPS, "expected {e}, got {a} ({actual:?})");
    }
}
