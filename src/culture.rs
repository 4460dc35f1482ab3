//! Number formatting culture
//!
//! [`crate::text::inject`] renders numbers with the current culture and
//! [`crate::text::inject_invariant`] with [`Culture::invariant`]. The current
//! culture comes from the usual POSIX locale variables; nothing is read from
//! disk.

use std::env;

use serde::Serialize;

/// Locale variables consulted in priority order
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Languages that write `1.234,5`
const DOT_GROUPED_COMMA_DECIMAL: [&str; 8] = ["de", "es", "it", "nl", "pt", "tr", "da", "id"];

/// Languages that write `1 234,5` (with a no-break space)
const SPACE_GROUPED_COMMA_DECIMAL: [&str; 7] = ["fr", "ru", "pl", "sv", "nb", "fi", "cs"];

const NO_BREAK_SPACE: char = '\u{a0}';

/// Separators used when rendering numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Culture {
    pub name: String,
    pub decimal_separator: char,
    pub group_separator: char,
}

impl Culture {
    /// Locale-independent formatting: `1,234.5`
    pub fn invariant() -> Self {
        Culture {
            name: String::new(),
            decimal_separator: '.',
            group_separator: ',',
        }
    }

    /// Culture of the running process, resolved from `LC_ALL`, `LC_NUMERIC`
    /// and `LANG`
    pub fn current() -> Self {
        let culture = resolve_locale(|key| env::var(key).ok())
            .map(|locale| Culture::from_locale(&locale))
            .unwrap_or_else(Culture::invariant);
        tracing::trace!(culture = %culture.name, "resolved current culture");
        culture
    }

    /// Build a culture from a POSIX locale name such as `de_DE.UTF-8@euro`
    ///
    /// `C`, `POSIX` and unknown languages fall back to invariant separators
    /// (the name is still kept).
    pub fn from_locale(locale: &str) -> Self {
        let base = locale
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();

        if base.is_empty() || base == "C" || base == "POSIX" {
            return Culture::invariant();
        }

        let name = base.replace('_', "-");
        let language = name
            .split('-')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let (decimal_separator, group_separator) =
            if DOT_GROUPED_COMMA_DECIMAL.contains(&language.as_str()) {
                (',', '.')
            } else if SPACE_GROUPED_COMMA_DECIMAL.contains(&language.as_str()) {
                (',', NO_BREAK_SPACE)
            } else {
                ('.', ',')
            };

        Culture {
            name,
            decimal_separator,
            group_separator,
        }
    }

    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }
}

impl Default for Culture {
    fn default() -> Self {
        Culture::invariant()
    }
}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_invariant() {
            write!(f, "invariant")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// First non-empty locale variable, in POSIX priority order
fn resolve_locale(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    LOCALE_VARS
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &'static [(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_invariant_separators() {
        let culture = Culture::invariant();
        assert_eq!(culture.decimal_separator, '.');
        assert_eq!(culture.group_separator, ',');
        assert!(culture.is_invariant());
        assert_eq!(culture.to_string(), "invariant");
    }

    #[test]
    fn test_from_locale_german() {
        let culture = Culture::from_locale("de_DE.UTF-8");
        assert_eq!(culture.name, "de-DE");
        assert_eq!(culture.decimal_separator, ',');
        assert_eq!(culture.group_separator, '.');
    }

    #[test]
    fn test_from_locale_french_uses_no_break_space() {
        let culture = Culture::from_locale("fr_FR@euro");
        assert_eq!(culture.decimal_separator, ',');
        assert_eq!(culture.group_separator, NO_BREAK_SPACE);
    }

    #[test]
    fn test_from_locale_english() {
        let culture = Culture::from_locale("en_US.UTF-8");
        assert_eq!(culture.name, "en-US");
        assert_eq!(culture.decimal_separator, '.');
        assert!(!culture.is_invariant());
    }

    #[test]
    fn test_from_locale_posix_is_invariant() {
        assert!(Culture::from_locale("C").is_invariant());
        assert!(Culture::from_locale("POSIX").is_invariant());
        assert!(Culture::from_locale("C.UTF-8").is_invariant());
        assert!(Culture::from_locale("").is_invariant());
    }

    #[test]
    fn test_resolve_locale_priority() {
        let lookup = lookup_in(&[("LANG", "en_US.UTF-8"), ("LC_NUMERIC", "de_DE.UTF-8")]);
        assert_eq!(resolve_locale(lookup), Some("de_DE.UTF-8".to_string()));

        let lookup = lookup_in(&[
            ("LANG", "en_US.UTF-8"),
            ("LC_NUMERIC", "de_DE.UTF-8"),
            ("LC_ALL", "fr_FR.UTF-8"),
        ]);
        assert_eq!(resolve_locale(lookup), Some("fr_FR.UTF-8".to_string()));
    }

    #[test]
    fn test_resolve_locale_skips_empty() {
        let lookup = lookup_in(&[("LC_ALL", ""), ("LANG", "nl_NL")]);
        assert_eq!(resolve_locale(lookup), Some("nl_NL".to_string()));
    }

    #[test]
    fn test_resolve_locale_none_set() {
        assert_eq!(resolve_locale(lookup_in(&[])), None);
    }
}
