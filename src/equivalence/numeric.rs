use serde::Serialize;

use super::constants::EPSILON;
use crate::error::AssertionFailure;
use crate::text::{Arg, inject};

/// Tolerance and label for a numeric check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquivalenceOptions {
    pub epsilon: f64,
    /// Prefix of the failure message
    pub message: String,
}

impl Default for EquivalenceOptions {
    fn default() -> Self {
        EquivalenceOptions {
            epsilon: EPSILON,
            message: String::new(),
        }
    }
}

impl EquivalenceOptions {
    pub fn new(epsilon: f64) -> Self {
        EquivalenceOptions {
            epsilon,
            ..Default::default()
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// `true` when `a` and `b` are closer than [`EPSILON`]
pub fn is_equivalent(a: f64, b: f64) -> bool {
    is_equivalent_within(a, b, EPSILON)
}

/// `true` when `|a - b|` is strictly less than `epsilon`
///
/// A NaN difference is never equivalent.
pub fn is_equivalent_within(a: f64, b: f64, epsilon: f64) -> bool {
    let difference = (a - b).abs();
    !difference.is_nan() && difference < epsilon
}

/// Check `a` against `b`, failing only when `|a - b|` exceeds the epsilon
///
/// The boundary is inclusive here (`|a - b| == epsilon` passes) while
/// [`is_equivalent_within`] is exclusive. Both behaviors are relied on by
/// existing callers and are kept distinct.
pub fn check_equivalent(
    a: f64,
    b: f64,
    options: &EquivalenceOptions,
) -> Result<(), AssertionFailure> {
    let difference = (a - b).abs();
    let epsilon = options.epsilon;

    if difference.is_nan() {
        tracing::debug!(a, b, "absolute difference is NaN");
        return Err(AssertionFailure::new(format!(
            "{} - Absolute difference is NaN!",
            options.message
        )));
    }

    if epsilon.is_nan() {
        tracing::debug!(a, b, "epsilon is NaN");
        return Err(AssertionFailure::new(format!(
            "{} - Epsilon is NaN!",
            options.message
        )));
    }

    if epsilon <= 0.0 {
        tracing::debug!(a, b, epsilon, "epsilon is not positive");
        return Err(AssertionFailure::new(format!(
            "{} - Epsilon is not positive!",
            options.message
        )));
    }

    if difference > epsilon {
        tracing::debug!(difference, epsilon, "values not equivalent");
        let detail = inject(
            "Absolute difference {0} but epsilon is {1}!",
            &[Arg::from(difference), Arg::from(epsilon)],
        )
        .unwrap_or_else(|_| format!("Absolute difference {difference} but epsilon is {epsilon}!"));
        return Err(AssertionFailure::new(format!("{}{detail}", options.message)));
    }

    Ok(())
}
