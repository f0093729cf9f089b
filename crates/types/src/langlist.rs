use std::fmt;

/// The serialized language list carried by `ContactPoint.availableLanguage`.
///
/// Upstream datasets store this column as the string form of a list,
/// e.g. `['nl', 'en']`. This type keeps the languages as a real `Vec` in
/// memory while reading and writing that encoding on the CSV boundary.
/// Parsing also accepts double-quoted items and a bare single code (`nl`) so
/// that hand-edited fixtures load cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageList(Vec<String>);

impl LanguageList {
    pub fn new(languages: Vec<String>) -> Self {
        Self(languages)
    }

    pub fn languages(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first listed language, if any.
    ///
    /// The generator writes the local language first, so this is the
    /// preferred target for language-dependent variations.
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Parses the serialized form.
    ///
    /// Accepted encodings:
    /// - bracketed list with single or double quotes: `['nl', 'en']`
    /// - bracketed list without quotes: `[nl, en]`
    /// - a bare code: `nl`
    /// - empty string: empty list
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self(Vec::new());
        }

        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'));

        let languages = match inner {
            Some(body) => body
                .split(',')
                .map(|item| item.trim().trim_matches('\'').trim_matches('"'))
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
            None => vec![trimmed.to_string()],
        };

        Self(languages)
    }
}

impl fmt::Display for LanguageList {
    /// Formats as the bracketed single-quoted list, matching the upstream
    /// column encoding exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, language) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", language)?;
        }
        write!(f, "]")
    }
}

impl serde::Serialize for LanguageList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LanguageList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(LanguageList::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_quoted_list() {
        let list = LanguageList::parse("['nl', 'en']");
        assert_eq!(list.languages(), ["nl", "en"]);
    }

    #[test]
    fn test_parse_double_quoted_list() {
        let list = LanguageList::parse("[\"et\", \"en\", \"ru\"]");
        assert_eq!(list.languages(), ["et", "en", "ru"]);
    }

    #[test]
    fn test_parse_bare_code() {
        let list = LanguageList::parse("de");
        assert_eq!(list.languages(), ["de"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(LanguageList::parse("").is_empty());
        assert!(LanguageList::parse("[]").is_empty());
    }

    #[test]
    fn test_display_matches_upstream_encoding() {
        let list = LanguageList::new(vec!["nl".into(), "en".into()]);
        assert_eq!(list.to_string(), "['nl', 'en']");
    }

    #[test]
    fn test_round_trip() {
        let original = LanguageList::new(vec!["et".into(), "en".into()]);
        let parsed = LanguageList::parse(&original.to_string());
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_primary() {
        let list = LanguageList::parse("['de', 'en']");
        assert_eq!(list.primary(), Some("de"));
        assert_eq!(LanguageList::parse("").primary(), None);
    }
}
