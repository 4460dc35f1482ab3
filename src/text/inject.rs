//! Positional placeholder substitution
//!
//! Format strings use `{index[,alignment][:format]}` items; `{{` and `}}`
//! stand for literal braces. Numbers are rendered with a [`Culture`].

use std::fmt;

use crate::culture::Culture;
use crate::error::FormatError;

/// Largest accepted `{index,alignment}` width, either direction
const MAX_ALIGNMENT: i64 = 1_000_000;

/// Largest precision digit count after a format letter
const MAX_PRECISION: usize = 99;

/// A value that can be substituted into a format string
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    Str(&'a str),
    Char(char),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Display(&'a dyn fmt::Display),
}

impl<'a> Arg<'a> {
    /// Wrap any `Display` value; it accepts no format component
    pub fn display(value: &'a dyn fmt::Display) -> Self {
        Arg::Display(value)
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Arg::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Arg::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Arg::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Arg::UInt(u) => f.debug_tuple("UInt").field(u).finish(),
            Arg::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Arg::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(value)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Arg<'_> {
            fn from(value: $ty) -> Self {
                Arg::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Arg<'_> {
            fn from(value: $ty) -> Self {
                Arg::UInt(u64::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        Arg::Int(value as i64)
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Arg::UInt(value as u64)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

/// Substitute `arguments` into `format` using the current culture
///
/// ```
/// use textassert::text::{inject, Arg};
///
/// let text = inject("Text: {0} {1}!", &[Arg::from("Hello"), Arg::from("World")]).unwrap();
/// assert_eq!(text, "Text: Hello World!");
/// ```
pub fn inject(format: &str, arguments: &[Arg<'_>]) -> Result<String, FormatError> {
    inject_with(&Culture::current(), format, arguments)
}

/// Substitute `arguments` into `format` using invariant number formatting
pub fn inject_invariant(format: &str, arguments: &[Arg<'_>]) -> Result<String, FormatError> {
    inject_with(&Culture::invariant(), format, arguments)
}

/// Substitute `arguments` into `format` using an explicit culture
pub fn inject_with(
    culture: &Culture,
    format: &str,
    arguments: &[Arg<'_>],
) -> Result<String, FormatError> {
    let mut output = String::with_capacity(format.len());
    let mut chars = format.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    output.push('{');
                    continue;
                }

                let body_start = pos + 1;
                let Some(len) = format[body_start..].find('}') else {
                    return Err(FormatError::Malformed {
                        position: pos,
                        reason: "placeholder is not closed",
                    });
                };
                let body = &format[body_start..body_start + len];
                if body.contains('{') {
                    return Err(FormatError::Malformed {
                        position: pos,
                        reason: "placeholder contains an opening brace",
                    });
                }

                let item = parse_item(body, pos)?;
                let argument = arguments
                    .get(item.index)
                    .ok_or(FormatError::IndexOutOfRange {
                        index: item.index,
                        count: arguments.len(),
                    })?;
                let rendered = render(argument, item.format, culture)?;
                push_aligned(&mut output, &rendered, item.alignment);

                // Skip the body and the closing brace
                while chars.next_if(|&(idx, _)| idx <= body_start + len).is_some() {}
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_some() {
                    output.push('}');
                } else {
                    return Err(FormatError::Malformed {
                        position: pos,
                        reason: "closing brace is not escaped",
                    });
                }
            }
            _ => output.push(c),
        }
    }

    Ok(output)
}

/// Shorthand for [`inject`] converting each argument with [`Arg::from`]
///
/// ```
/// use textassert::inject;
///
/// assert_eq!(inject!("{0}-{1}", "a", 7).unwrap(), "a-7");
/// ```
#[macro_export]
macro_rules! inject {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::text::inject($format, &[$($crate::text::Arg::from($arg)),*])
    };
}

/// Shorthand for [`inject_invariant`] converting each argument with [`Arg::from`]
#[macro_export]
macro_rules! inject_invariant {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::text::inject_invariant($format, &[$($crate::text::Arg::from($arg)),*])
    };
}

struct FormatItem<'f> {
    index: usize,
    alignment: i64,
    format: Option<&'f str>,
}

fn parse_item(body: &str, position: usize) -> Result<FormatItem<'_>, FormatError> {
    let (head, format) = match body.split_once(':') {
        Some((head, format)) => (head, Some(format)),
        None => (body, None),
    };
    let (index, alignment) = match head.split_once(',') {
        Some((index, alignment)) => (index, Some(alignment)),
        None => (head, None),
    };

    let index = index.trim_end();
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::Malformed {
            position,
            reason: "placeholder index must be a non-negative integer",
        });
    }
    let index = index.parse::<usize>().map_err(|_| FormatError::Malformed {
        position,
        reason: "placeholder index is too large",
    })?;

    let alignment = match alignment {
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| FormatError::Malformed {
            position,
            reason: "alignment must be an integer",
        })?,
        None => 0,
    };
    if !(-MAX_ALIGNMENT..=MAX_ALIGNMENT).contains(&alignment) {
        return Err(FormatError::Malformed {
            position,
            reason: "alignment is out of range",
        });
    }

    Ok(FormatItem {
        index,
        alignment,
        format,
    })
}

fn push_aligned(output: &mut String, rendered: &str, alignment: i64) {
    let width = alignment.unsigned_abs() as usize;
    let padding = width.saturating_sub(rendered.chars().count());

    if alignment > 0 {
        output.extend(std::iter::repeat_n(' ', padding));
        output.push_str(rendered);
    } else {
        output.push_str(rendered);
        output.extend(std::iter::repeat_n(' ', padding));
    }
}

/// A format component split into its letter and optional precision
struct Specifier {
    letter: char,
    precision: Option<usize>,
}

fn parse_specifier(spec: &str) -> Result<Specifier, FormatError> {
    let unknown = || FormatError::UnknownSpecifier {
        specifier: spec.to_string(),
    };

    let mut chars = spec.chars();
    let letter = chars.next().filter(char::is_ascii_alphabetic).ok_or_else(unknown)?;
    let digits = chars.as_str();
    let precision = if digits.is_empty() {
        None
    } else {
        let precision = digits.parse::<usize>().map_err(|_| unknown())?;
        if precision > MAX_PRECISION {
            return Err(unknown());
        }
        Some(precision)
    };

    Ok(Specifier { letter, precision })
}

fn render(argument: &Arg<'_>, format: Option<&str>, culture: &Culture) -> Result<String, FormatError> {
    match (argument, format) {
        (Arg::Str(s), None) => Ok((*s).to_string()),
        (Arg::Char(c), None) => Ok(c.to_string()),
        (Arg::Bool(b), None) => Ok(if *b { "True" } else { "False" }.to_string()),
        (Arg::Display(d), None) => Ok(d.to_string()),
        (Arg::Str(_) | Arg::Char(_) | Arg::Bool(_) | Arg::Display(_), Some(spec)) => {
            Err(FormatError::UnknownSpecifier {
                specifier: spec.to_string(),
            })
        }
        (Arg::Int(i), None) => Ok(i.to_string()),
        (Arg::UInt(u), None) => Ok(u.to_string()),
        (Arg::Float(x), None) => Ok(general_float(*x, culture)),
        (Arg::Int(i), Some(spec)) => {
            render_integer(i.is_negative(), i.unsigned_abs(), *i as u64, spec, culture)
        }
        (Arg::UInt(u), Some(spec)) => render_integer(false, *u, *u, spec, culture),
        (Arg::Float(x), Some(spec)) => render_float(*x, spec, culture),
    }
}

fn render_integer(
    negative: bool,
    magnitude: u64,
    bits: u64,
    spec: &str,
    culture: &Culture,
) -> Result<String, FormatError> {
    let specifier = parse_specifier(spec)?;
    let sign = if negative { "-" } else { "" };

    match specifier.letter {
        'D' | 'd' => {
            let width = specifier.precision.unwrap_or(0);
            Ok(format!("{sign}{magnitude:0width$}"))
        }
        'X' => {
            let width = specifier.precision.unwrap_or(0);
            Ok(format!("{bits:0width$X}"))
        }
        'x' => {
            let width = specifier.precision.unwrap_or(0);
            Ok(format!("{bits:0width$x}"))
        }
        _ => {
            let value = if negative {
                -(magnitude as f64)
            } else {
                magnitude as f64
            };
            render_float(value, spec, culture)
        }
    }
}

fn render_float(value: f64, spec: &str, culture: &Culture) -> Result<String, FormatError> {
    let specifier = parse_specifier(spec)?;
    if !value.is_finite() {
        return Ok(non_finite(value).to_string());
    }

    match specifier.letter {
        'F' | 'f' => {
            let precision = specifier.precision.unwrap_or(2);
            Ok(localize(&format!("{value:.precision$}"), culture, false))
        }
        'N' | 'n' => {
            let precision = specifier.precision.unwrap_or(2);
            Ok(localize(&format!("{value:.precision$}"), culture, true))
        }
        'P' | 'p' => {
            let precision = specifier.precision.unwrap_or(2);
            let percent = value * 100.0;
            Ok(format!(
                "{} %",
                localize(&format!("{percent:.precision$}"), culture, true)
            ))
        }
        'E' | 'e' => {
            let precision = specifier.precision.unwrap_or(6);
            Ok(scientific(value, precision, specifier.letter, culture))
        }
        _ => Err(FormatError::UnknownSpecifier {
            specifier: spec.to_string(),
        }),
    }
}

fn general_float(value: f64, culture: &Culture) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    // Round-trip digits, switching to `1E-05` / `1E+15` outside that range
    if value != 0.0 && !(-4..15).contains(&exponent) {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}E{exp_sign}{:02}",
            localize(mantissa, culture, false),
            exponent.unsigned_abs()
        )
    } else {
        localize(&value.to_string(), culture, false)
    }
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

/// `1.234560e3` becomes `1.234560E+003`
fn scientific(value: f64, precision: usize, letter: char, culture: &Culture) -> String {
    let raw = format!("{value:.precision$e}");
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}{letter}{exp_sign}{:03}",
        localize(mantissa, culture, false),
        exponent.unsigned_abs()
    )
}

/// Swap in the culture's decimal separator, optionally grouping thousands
fn localize(plain: &str, culture: &Culture, grouped: bool) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut output = String::from(sign);
    if grouped {
        output.push_str(&group_digits(integer, culture.group_separator));
    } else {
        output.push_str(integer);
    }
    if let Some(fraction) = fraction {
        output.push(culture.decimal_separator);
        output.push_str(fraction);
    }
    output
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(separator);
        }
        output.push(digit);
    }
    output
}
