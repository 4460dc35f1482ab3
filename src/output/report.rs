//! Output formatting for text helper results

use serde::Serialize;

/// Result of running one text helper
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextReport {
    pub operation: String,
    pub items: Vec<String>,
}

impl TextReport {
    pub fn new(operation: impl Into<String>, items: Vec<String>) -> Self {
        TextReport {
            operation: operation.into(),
            items,
        }
    }

    /// A report holding a single result
    pub fn single(operation: impl Into<String>, item: String) -> Self {
        Self::new(operation, vec![item])
    }
}

/// One item per line, in order
pub fn format_report(report: &TextReport) -> String {
    let mut output = String::new();
    for item in &report.items {
        output.push_str(item);
        output.push('\n');
    }
    output
}

/// Format a report as JSON
pub fn format_report_json(report: &TextReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
