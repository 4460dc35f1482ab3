//! Tolerance-based comparisons and the assertion helpers built on them
//!
//! Every helper comes in three shapes:
//! - `check_*` returns `Result<(), AssertionFailure>` and reports nothing
//! - [`Asserter`] methods send failures to a [`FailureChannel`]
//! - `assert_*` free functions panic, failing the running test

mod channel;
pub mod constants;
mod numeric;
mod sequence;

use std::fmt::Display;

pub use channel::{CollectingChannel, FailureChannel, PanicChannel};
pub use constants::{EPSILON, EPSILON_DEGREES, EPSILON_DISTANCE, EPSILON_POINT_XY, EPSILON_RADIANS};
pub use numeric::{EquivalenceOptions, check_equivalent, is_equivalent, is_equivalent_within};
pub use sequence::{
    check_sequence_equal, check_sequences_equivalent, check_sequences_equivalent_within, contains,
};

use crate::error::AssertionFailure;

/// Runs checks and forwards failures to a channel
#[derive(Debug, Default, Clone)]
pub struct Asserter<C = PanicChannel> {
    channel: C,
}

impl<C: FailureChannel> Asserter<C> {
    pub fn new(channel: C) -> Self {
        Asserter { channel }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }

    #[track_caller]
    fn report(&self, result: Result<(), AssertionFailure>) {
        if let Err(failure) = result {
            self.channel.fail(failure.message());
        }
    }

    /// Fail when `|expected - actual|` is NaN or greater than the epsilon
    #[track_caller]
    pub fn is_equivalent(&self, expected: f64, actual: f64, options: &EquivalenceOptions) {
        self.report(check_equivalent(expected, actual, options));
    }

    #[track_caller]
    pub fn radians(&self, expected: f64, actual: f64) {
        let options = EquivalenceOptions::new(EPSILON_RADIANS).with_message("Radians");
        self.is_equivalent(expected, actual, &options);
    }

    #[track_caller]
    pub fn degrees(&self, expected: f64, actual: f64) {
        let options = EquivalenceOptions::new(EPSILON_DEGREES).with_message("Degrees");
        self.is_equivalent(expected, actual, &options);
    }

    #[track_caller]
    pub fn distance(&self, expected: f64, actual: f64) {
        let options = EquivalenceOptions::new(EPSILON_DISTANCE).with_message("Distance");
        self.is_equivalent(expected, actual, &options);
    }

    /// Compare both coordinates of a point; each failing coordinate is reported
    #[track_caller]
    pub fn point_xy(&self, expected: (f64, f64), actual: (f64, f64)) {
        let x = EquivalenceOptions::new(EPSILON_POINT_XY).with_message("X");
        let y = EquivalenceOptions::new(EPSILON_POINT_XY).with_message("Y");
        self.is_equivalent(expected.0, actual.0, &x);
        self.is_equivalent(expected.1, actual.1, &y);
    }

    /// Fail on a length difference or the first pair outside [`EPSILON`]
    #[track_caller]
    pub fn sequences_equivalent(&self, expected: &[f64], actual: &[f64]) {
        self.report(check_sequences_equivalent(expected, actual));
    }

    /// Fail unless both sequences are exactly equal
    #[track_caller]
    pub fn sequence_equal<T, A, B>(&self, expected: A, actual: B, message: &str)
    where
        T: PartialEq + Display,
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        self.report(check_sequence_equal(expected, actual, message));
    }
}

#[track_caller]
pub fn assert_is_equivalent(expected: f64, actual: f64, options: &EquivalenceOptions) {
    Asserter::new(PanicChannel).is_equivalent(expected, actual, options);
}

#[track_caller]
pub fn assert_radians(expected: f64, actual: f64) {
    Asserter::new(PanicChannel).radians(expected, actual);
}

#[track_caller]
pub fn assert_degrees(expected: f64, actual: f64) {
    Asserter::new(PanicChannel).degrees(expected, actual);
}

#[track_caller]
pub fn assert_distance(expected: f64, actual: f64) {
    Asserter::new(PanicChannel).distance(expected, actual);
}

#[track_caller]
pub fn assert_point_xy(expected: (f64, f64), actual: (f64, f64)) {
    Asserter::new(PanicChannel).point_xy(expected, actual);
}

#[track_caller]
pub fn assert_sequences_equivalent(expected: &[f64], actual: &[f64]) {
    Asserter::new(PanicChannel).sequences_equivalent(expected, actual);
}

#[track_caller]
pub fn assert_sequence_equal<T, A, B>(expected: A, actual: B, message: &str)
where
    T: PartialEq + Display,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    Asserter::new(PanicChannel).sequence_equal(expected, actual, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collecting() -> Asserter<CollectingChannel> {
        Asserter::new(CollectingChannel::new())
    }

    #[test]
    fn test_assert_is_equivalent_passes() {
        assert_is_equivalent(100.0, 100.0, &EquivalenceOptions::new(0.1).with_message("text"));
    }

    #[test]
    #[should_panic(expected = "text - Absolute difference is NaN!")]
    fn test_assert_is_equivalent_nan_panics() {
        assert_is_equivalent(f64::NAN, 100.0, &EquivalenceOptions::new(0.1).with_message("text"));
    }

    #[test]
    #[should_panic(expected = "textAbsolute difference 99 but epsilon is")]
    fn test_assert_is_equivalent_bigger_epsilon_panics() {
        assert_is_equivalent(1.0, 100.0, &EquivalenceOptions::new(0.1).with_message("text"));
    }

    #[test]
    fn test_assert_radians_inside_tolerance() {
        assert_radians(100.0, 100.0);
        assert_radians(100.0, 100.0 + EPSILON_RADIANS * 0.9);
        assert_radians(100.0, 100.0 - EPSILON_RADIANS * 0.9);
    }

    #[test]
    #[should_panic(expected = "Radians")]
    fn test_assert_radians_plus_epsilon_panics() {
        assert_radians(100.0, 100.0 + EPSILON_RADIANS);
    }

    #[test]
    #[should_panic(expected = "Radians")]
    fn test_assert_radians_minus_epsilon_panics() {
        assert_radians(100.0, 100.0 - EPSILON_RADIANS);
    }

    #[test]
    fn test_assert_degrees_inside_tolerance() {
        assert_degrees(100.0, 100.0);
        assert_degrees(100.0, 100.0 + EPSILON_DEGREES * 0.9);
        assert_degrees(100.0, 100.0 - EPSILON_DEGREES * 0.9);
    }

    #[test]
    #[should_panic(expected = "Degrees")]
    fn test_assert_degrees_plus_epsilon_panics() {
        assert_degrees(100.0, 100.0 + EPSILON_DEGREES);
    }

    #[test]
    #[should_panic(expected = "Degrees")]
    fn test_assert_degrees_minus_epsilon_panics() {
        assert_degrees(100.0, 100.0 - EPSILON_DEGREES);
    }

    #[test]
    fn test_assert_distance() {
        assert_distance(5.0, 5.005);
        let asserter = collecting();
        asserter.distance(5.0, 5.5);
        assert_eq!(asserter.channel().len(), 1);
        assert!(asserter.channel().failures()[0].starts_with("DistanceAbsolute difference"));
    }

    #[test]
    fn test_point_xy_reports_each_coordinate() {
        assert_point_xy((1.0, 2.0), (1.001, 1.999));

        let asserter = collecting();
        asserter.point_xy((0.0, 0.0), (1.0, 1.0));
        let failures = asserter.into_channel().take();
        assert_eq!(failures.len(), 2);
        assert!(failures[0].starts_with('X'));
        assert!(failures[1].starts_with('Y'));
    }

    #[test]
    fn test_assert_sequences_equivalent_passes() {
        assert_sequences_equivalent(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "Length is different!")]
    fn test_assert_sequences_equivalent_too_short_panics() {
        assert_sequences_equivalent(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "[2] Expected '3' but actual is '4'!")]
    fn test_assert_sequences_equivalent_mismatch_panics() {
        assert_sequences_equivalent(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_assert_sequence_equal_passes() {
        assert_sequence_equal(vec![1, 2, 3], vec![1, 2, 3], "message");
    }

    #[test]
    #[should_panic(expected = "message: Expected sequence is '{1,2,3}' but actual is '{1,2}'!")]
    fn test_assert_sequence_equal_too_short_panics() {
        assert_sequence_equal(vec![1, 2, 3], vec![1, 2], "message");
    }

    #[test]
    fn test_collecting_asserter_soft_failures() {
        let asserter = collecting();
        asserter.is_equivalent(1.0, 1.0, &EquivalenceOptions::default());
        asserter.sequence_equal([1, 2], [2, 1], "swap");
        asserter.sequences_equivalent(&[1.0], &[]);
        let failures = asserter.channel().failures();
        assert_eq!(failures.len(), 2);
        assert!(failures[0].starts_with("swap: "));
        assert!(failures[1].starts_with("Length is different!"));
    }

    #[test]
    fn test_asserter_with_borrowed_channel() {
        let channel = CollectingChannel::new();
        let asserter = Asserter::new(&channel);
        asserter.radians(0.0, 1.0);
        assert_eq!(channel.len(), 1);
    }
}
