use std::iter::FusedIterator;

use crate::error::ContractError;

/// Split `text` into consecutive groups of `size` characters
///
/// The last group is shorter when the character count is not a multiple
/// of `size`. Concatenating every group gives back `text`.
///
/// A `size` of zero is a contract violation.
pub fn as_groups_of(text: &str, size: usize) -> Result<Groups<'_>, ContractError> {
    if size == 0 {
        return Err(ContractError::InvalidGroupSize(size));
    }
    Ok(Groups {
        text,
        size,
        offset: 0,
    })
}

/// Lazy cursor over fixed-size character groups
///
/// A clone continues from the current position. Call [`as_groups_of`]
/// again for a fresh pass over the same text.
#[derive(Debug, Clone)]
pub struct Groups<'a> {
    text: &'a str,
    size: usize,
    offset: usize,
}

impl<'a> Groups<'a> {
    /// The group size this cursor was created with
    pub fn size(&self) -> usize {
        self.size
    }

    /// The part of the input not yet yielded
    pub fn remainder(&self) -> &'a str {
        &self.text[self.offset..]
    }
}

impl<'a> Iterator for Groups<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remainder();
        if rest.is_empty() {
            return None;
        }

        // Byte index just past the `size`-th char, or the end of input
        let end = rest
            .char_indices()
            .nth(self.size)
            .map_or(rest.len(), |(idx, _)| idx);

        self.offset += end;
        Some(&rest[..end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.remainder();
        if rest.is_empty() {
            return (0, Some(0));
        }
        // Each char is 1..=4 bytes
        let lower = rest.len().div_ceil(4).div_ceil(self.size);
        let upper = rest.len().div_ceil(self.size);
        (lower, Some(upper))
    }
}

impl FusedIterator for Groups<'_> {}
