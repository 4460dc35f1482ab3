use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Line terminator of the current platform
#[cfg(windows)]
pub const NEW_LINE: &str = "\r\n";
/// Line terminator of the current platform
#[cfg(not(windows))]
pub const NEW_LINE: &str = "\n";

// `\r\n` must come first so a pair is replaced once, not twice
static FIND_NEW_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n|\r").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Replace every `\r\n`, `\n` and `\r` in `text` with `new_line`
///
/// `new_line` is inserted literally; `$` has no special meaning.
pub fn replace_new_lines_with(text: &str, new_line: &str) -> String {
    FIND_NEW_LINES
        .replace_all(text, NoExpand(new_line))
        .into_owned()
}

/// Replace every line terminator in `text` with [`NEW_LINE`]
pub fn replace_new_lines_with_default(text: &str) -> String {
    replace_new_lines_with(text, NEW_LINE)
}

/// Split `text` on runs of whitespace, dropping empty tokens
pub fn words(text: &str) -> Vec<&str> {
    WHITESPACE_RUN
        .split(text)
        .filter(|word| !word.is_empty())
        .collect()
}
