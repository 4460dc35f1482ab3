use std::iter::FusedIterator;

/// Iterate over the lines of `text`
///
/// Lines end at `\n`, `\r\n` or a lone `\r`, and never include the
/// terminator. A terminator at the very end does not start another line,
/// so `"a\nb\n"` yields `a`, `b` while `"a\n\n"` yields `a` and an empty
/// line. Empty input yields nothing.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Lazy cursor over the lines of a string
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\r', '\n']) {
            Some(idx) => {
                let line = &self.rest[..idx];
                let terminator_len = if self.rest[idx..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[idx + terminator_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

impl FusedIterator for Lines<'_> {}
