//! Custom test assertions

use litellm_model::{CostScope, ModelError};

/// Assert two values are approximately equal (for floats)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, 1e-6_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let left_val: f64 = $left as f64;
        let right_val: f64 = $right as f64;
        let diff = (left_val - right_val).abs();
        assert!(
            diff < $epsilon,
            "assertion failed: `(left ~ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` (epsilon: `{:?}`)",
            left_val,
            right_val,
            diff,
            $epsilon
        );
    };
}

/// Assert a duration is within bounds
#[macro_export]
macro_rules! assert_duration_within {
    ($duration:expr, $max_ms:expr) => {
        let millis = $duration.as_millis();
        assert!(
            millis <= $max_ms,
            "Duration {} ms exceeded maximum {} ms",
            millis,
            $max_ms
        );
    };
}

/// Assert the error is a cost limit error for the given scope and return the recorded cost
pub fn assert_cost_limit(err: &ModelError, expected_scope: CostScope) -> f64 {
    match err {
        ModelError::CostLimitExceeded { scope, cost, .. } => {
            assert_eq!(*scope, expected_scope, "wrong cost limit scope");
            *cost
        }
        other => panic!("Expected CostLimitExceeded, got: {other}"),
    }
}
