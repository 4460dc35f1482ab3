//! String helpers: joining, chunking, line and word splitting,
//! newline normalization and positional formatting

mod groups;
mod inject;
mod join;
mod lines;
mod newline;

pub use groups::{Groups, as_groups_of};
pub use inject::{Arg, inject, inject_invariant, inject_with};
pub use join::{join, join_chars, join_with_last};
pub use lines::{Lines, lines};
pub use newline::{NEW_LINE, replace_new_lines_with, replace_new_lines_with_default, words};

/// Render `sequence` as `{e0,e1,...,en}`
pub fn sequence_to_string<I>(sequence: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let rendered: Vec<String> = sequence.into_iter().map(|e| e.to_string()).collect();
    format!("{{{}}}", join(&rendered, ","))
}
