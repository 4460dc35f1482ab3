//! Output formatting for numeric comparisons

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::equivalence::{EquivalenceOptions, check_equivalent, is_equivalent_within};

/// Outcome of comparing two numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub expected: f64,
    pub actual: f64,
    pub epsilon: f64,
    pub difference: f64,
    /// Strict test: difference below epsilon
    pub equivalent: bool,
    /// Assertion test: difference not above epsilon
    pub passed: bool,
    pub failure: Option<String>,
}

impl Comparison {
    pub fn run(expected: f64, actual: f64, options: &EquivalenceOptions) -> Self {
        let failure = check_equivalent(expected, actual, options)
            .err()
            .map(|failure| failure.into_message());

        Comparison {
            expected,
            actual,
            epsilon: options.epsilon,
            difference: (expected - actual).abs(),
            equivalent: is_equivalent_within(expected, actual, options.epsilon),
            passed: failure.is_none(),
            failure,
        }
    }
}

/// Format a comparison as human-readable text
pub fn format_comparison(comparison: &Comparison) -> String {
    let mut output = String::new();

    let verdict = if comparison.passed {
        format!("{}", "PASS".green().bold())
    } else {
        format!("{}", "FAIL".red().bold())
    };
    output.push_str(&format!(
        "{} expected {} actual {}\n",
        verdict, comparison.expected, comparison.actual
    ));

    output.push_str(&format!(
        "    {} {} (epsilon {})\n",
        "difference:".dimmed(),
        comparison.difference,
        comparison.epsilon
    ));

    // Only differs from the verdict when the difference sits exactly on epsilon
    if comparison.passed && !comparison.equivalent {
        output.push_str(&format!(
            "    {} difference equals epsilon; strict equivalence does not hold\n",
            "!".yellow()
        ));
    }

    if let Some(ref failure) = comparison.failure {
        output.push_str(&format!("    {} {}\n", "→".red(), failure));
    }

    output
}

/// Format a comparison as JSON
pub fn format_comparison_json(comparison: &Comparison) -> String {
    serde_json::to_string_pretty(comparison).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_pass() {
        let comparison = Comparison::run(1.0, 1.005, &EquivalenceOptions::default());
        assert!(comparison.passed);
        assert!(comparison.equivalent);
        assert!(comparison.failure.is_none());
        assert!(format_comparison(&comparison).contains("PASS"));
    }

    #[test]
    fn test_comparison_fail() {
        let options = EquivalenceOptions::new(2.0).with_message("m");
        let comparison = Comparison::run(0.0, 4.0, &options);
        assert!(!comparison.passed);
        assert_eq!(comparison.difference, 4.0);

        let output = format_comparison(&comparison);
        assert!(output.contains("FAIL"));
        assert!(output.contains("mAbsolute difference 4 but epsilon is 2!"));
    }

    #[test]
    fn test_comparison_boundary_flagged() {
        let comparison = Comparison::run(1.0, 1.5, &EquivalenceOptions::new(0.5));
        assert!(comparison.passed);
        assert!(!comparison.equivalent);
        assert!(format_comparison(&comparison).contains("strict equivalence does not hold"));
    }

    #[test]
    fn test_comparison_json() {
        let comparison = Comparison::run(2.0, 2.0, &EquivalenceOptions::default());
        let json = format_comparison_json(&comparison);
        assert!(json.contains("\"passed\": true"));
        assert!(json.contains("\"failure\": null"));
    }
}
