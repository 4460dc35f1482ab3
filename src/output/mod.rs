mod compare;
mod report;

pub use compare::{Comparison, format_comparison, format_comparison_json};
pub use report::{TextReport, format_report, format_report_json};
