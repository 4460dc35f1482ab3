use std::fmt::Display;

use super::constants::EPSILON;
use super::numeric::is_equivalent_within;
use crate::error::AssertionFailure;
use crate::text::sequence_to_string;

/// Check two float sequences position by position with [`EPSILON`]
pub fn check_sequences_equivalent(expected: &[f64], actual: &[f64]) -> Result<(), AssertionFailure> {
    check_sequences_equivalent_within(expected, actual, EPSILON)
}

/// Check two float sequences position by position
///
/// Lengths are compared first; after that the first pair that is not
/// equivalent (see [`is_equivalent_within`]) is reported with its index.
pub fn check_sequences_equivalent_within(
    expected: &[f64],
    actual: &[f64],
    epsilon: f64,
) -> Result<(), AssertionFailure> {
    if expected.len() != actual.len() {
        tracing::debug!(
            expected = expected.len(),
            actual = actual.len(),
            "sequence lengths differ"
        );
        return Err(AssertionFailure::new(format!(
            "Length is different! Expected {} but actual is {}!",
            expected.len(),
            actual.len()
        )));
    }

    let mismatch = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| !is_equivalent_within(*e, *a, epsilon));

    match mismatch {
        Some(index) => {
            tracing::debug!(index, epsilon, "sequence element not equivalent");
            Err(AssertionFailure::new(format!(
                "[{index}] Expected '{}' but actual is '{}'!",
                expected[index], actual[index]
            )))
        }
        None => Ok(()),
    }
}

/// Check two sequences for exact element-wise equality
///
/// Both sides are collected first, so one-shot iterators are fine. The
/// failure message shows both sequences as `{e0,e1,...}`.
pub fn check_sequence_equal<T, A, B>(
    expected: A,
    actual: B,
    message: &str,
) -> Result<(), AssertionFailure>
where
    T: PartialEq + Display,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let expected: Vec<T> = expected.into_iter().collect();
    let actual: Vec<T> = actual.into_iter().collect();

    if expected == actual {
        return Ok(());
    }

    let expected_text = sequence_to_string(&expected);
    let actual_text = sequence_to_string(&actual);
    tracing::debug!(expected = %expected_text, actual = %actual_text, "sequences differ");

    Err(AssertionFailure::new(format!(
        "{message}: Expected sequence is '{expected_text}' but actual is '{actual_text}'!"
    )))
}

/// `true` if any list in `lists` equals `target`, order included
pub fn contains<T, L>(lists: &[L], target: &[T]) -> bool
where
    T: PartialEq,
    L: AsRef<[T]>,
{
    lists.iter().any(|list| list.as_ref() == target)
}
