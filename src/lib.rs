//! String utilities and tolerance-based assertion helpers for test suites
//!
//! - [`text`]: joining with a distinct last separator, fixed-size character
//!   groups, line and word splitting, newline normalization and
//!   `{0}`-style positional formatting
//! - [`equivalence`]: epsilon comparisons, sequence checks and the
//!   assertion helpers that report through a [`equivalence::FailureChannel`]
//!
//! The `textassert` binary exposes the same helpers on the command line.

pub mod cli;
pub mod culture;
pub mod equivalence;
pub mod error;
pub mod logging;
pub mod output;
pub mod text;

pub use error::{AssertionFailure, CommandError, ContractError, FormatError};
