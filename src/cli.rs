use clap::{Parser, Subcommand, ValueEnum};

use crate::equivalence::EPSILON;
use crate::text::Arg;

#[derive(Parser, Debug)]
#[command(name = "textassert")]
#[command(
    author,
    version,
    about = "String helpers and tolerance checks from the command line"
)]
#[command(
    long_about = "Runs the textassert string helpers (join, groups, lines, words, \
    newline normalization, positional formatting) and the epsilon comparison \
    on command-line input. TEXT arguments default to standard input."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Join elements, optionally with a different last separator
    Join {
        #[arg(value_name = "ELEMENTS")]
        elements: Vec<String>,

        /// Separator between elements
        #[arg(short, long, default_value = ",")]
        separator: String,

        /// Separator between the last two elements (defaults to --separator)
        #[arg(short, long)]
        last_separator: Option<String>,
    },

    /// Split text into groups of N characters
    Groups {
        /// Characters per group
        #[arg(short, long)]
        size: usize,

        text: Option<String>,
    },

    /// Split text into lines
    Lines { text: Option<String> },

    /// Split text into whitespace-separated words
    Words { text: Option<String> },

    /// Replace every line terminator
    Normalize {
        text: Option<String>,

        /// Replacement terminator; \n, \r, \t and \\ are decoded
        #[arg(short, long)]
        newline: Option<String>,
    },

    /// Substitute {0}, {1}, ... placeholders
    Inject {
        #[arg(value_name = "FORMAT")]
        template: String,

        /// Numeric-looking arguments are formatted as numbers
        #[arg(allow_hyphen_values = true)]
        arguments: Vec<String>,

        /// Use invariant number formatting instead of the current locale
        #[arg(long)]
        invariant: bool,
    },

    /// Compare two numbers within an epsilon
    #[command(allow_negative_numbers = true)]
    Compare {
        expected: f64,
        actual: f64,

        /// Largest accepted absolute difference
        #[arg(short, long, default_value_t = EPSILON)]
        epsilon: f64,

        /// Prefix for the failure message
        #[arg(short, long, default_value = "")]
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Groups { size, .. } if *size == 0 => {
                Err("--size must be a positive number of characters".to_string())
            }
            Command::Compare { epsilon, .. } if epsilon.is_nan() || *epsilon <= 0.0 => Err(format!(
                "--epsilon must be a positive number, got {}",
                epsilon
            )),
            _ => Ok(()),
        }
    }
}

/// Decode `\n`, `\r`, `\t` and `\\`; other backslashes are kept as written
pub fn decode_escapes(raw: &str) -> String {
    let mut output = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            output.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => output.push('\n'),
            Some('r') => output.push('\r'),
            Some('t') => output.push('\t'),
            Some('\\') => output.push('\\'),
            Some(other) => {
                output.push('\\');
                output.push(other);
            }
            None => output.push('\\'),
        }
    }

    output
}

/// A command-line argument for `inject`, typed by how it parses
#[derive(Debug, Clone, PartialEq)]
pub enum CliValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CliValue {
    pub fn parse(raw: &str) -> Self {
        if let Ok(value) = raw.parse::<i64>() {
            CliValue::Int(value)
        } else if let Some(value) = parse_decimal(raw) {
            CliValue::Float(value)
        } else {
            CliValue::Text(raw.to_string())
        }
    }

    pub fn as_arg(&self) -> Arg<'_> {
        match self {
            CliValue::Int(value) => Arg::from(*value),
            CliValue::Float(value) => Arg::from(*value),
            CliValue::Text(value) => Arg::from(value),
        }
    }
}

/// Plain decimal notation only; words like `inf` or `nan` stay text
fn parse_decimal(raw: &str) -> Option<f64> {
    let looks_numeric = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && raw.chars().any(|c| c.is_ascii_digit());
    if looks_numeric { raw.parse().ok() } else { None }
}
