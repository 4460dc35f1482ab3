/// Concatenate `elements` with `separator` between each pair
///
/// Equivalent to [`join_with_last`] using `separator` for the last pair too.
pub fn join<I, S>(elements: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_with_last(elements, separator, separator)
}

/// Concatenate `elements`, using `last_separator` between the final two
///
/// - no elements: `""`
/// - one element: the element unchanged
/// - otherwise: `a{sep}b{sep}...{last}z`
///
/// ```
/// use textassert::text::join_with_last;
///
/// assert_eq!(join_with_last(["a", "b", "c"], ",", "."), "a,b.c");
/// assert_eq!(join_with_last(["red", "green", "blue"], ", ", " and "), "red, green and blue");
/// ```
pub fn join_with_last<I, S>(elements: I, separator: &str, last_separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut iter = elements.into_iter().peekable();

    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut output = String::from(first.as_ref());
    while let Some(element) = iter.next() {
        // The separator depends on whether anything follows this element
        if iter.peek().is_some() {
            output.push_str(separator);
        } else {
            output.push_str(last_separator);
        }
        output.push_str(element.as_ref());
    }

    output
}

/// Character-separator form of [`join_with_last`]
pub fn join_chars<I, S>(elements: I, separator: char, last_separator: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sep = [0u8; 4];
    let mut last = [0u8; 4];
    join_with_last(
        elements,
        separator.encode_utf8(&mut sep),
        last_separator.encode_utf8(&mut last),
    )
}
