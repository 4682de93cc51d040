//! Language codes and the configured language sets.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// ISO-639 code, optionally followed by a region or script (`zh-TW`).
static LANGUAGE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}(-[A-Za-z]{2,4})?$").unwrap());

/// Source language of every record stored by the app.
pub const SOURCE_LANGUAGE: &str = "en";

/// Target languages for article and video fan-out.
pub const DEFAULT_FANOUT_LANGUAGES: [&str; 6] = ["hi", "es", "ur", "zh", "fr", "ja"];

/// Languages accepted by the single-text translation endpoint.
pub const DEFAULT_SUPPORTED_LANGUAGES: [&str; 10] =
    ["en", "hi", "es", "fr", "de", "zh", "ar", "ja", "ko", "ru"];

/// A syntactically valid language code.
///
/// Membership in a particular [`LanguageSet`] is checked separately via
/// [`LanguageSet::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parses a code, returning `None` when it is not well-formed.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        LANGUAGE_CODE_REGEX
            .is_match(code)
            .then(|| Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the language records are written in.
    pub fn is_source(&self) -> bool {
        self.0 == SOURCE_LANGUAGE
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// An ordered, duplicate-free list of language codes.
///
/// Built once from configuration and shared by every component that needs
/// it, so the lists are never re-declared per handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSet {
    codes: Vec<LanguageCode>,
}

impl LanguageSet {
    /// Builds a set from raw codes, keeping first-seen order.
    ///
    /// # Errors
    ///
    /// Returns the offending input if a code is malformed, or an empty string
    /// if the list is empty.
    pub fn new<I, S>(codes: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<LanguageCode> = Vec::new();

        for raw in codes {
            let raw = raw.as_ref();
            let code = LanguageCode::parse(raw).ok_or_else(|| raw.to_string())?;
            if !parsed.contains(&code) {
                parsed.push(code);
            }
        }

        if parsed.is_empty() {
            return Err(String::new());
        }

        Ok(Self { codes: parsed })
    }

    /// Parses a comma-separated list such as `hi,es,ur`.
    pub fn from_csv(list: &str) -> Result<Self, String> {
        Self::new(list.split(',').map(str::trim).filter(|s| !s.is_empty()))
    }

    pub fn default_fanout() -> Self {
        Self::new(DEFAULT_FANOUT_LANGUAGES).expect("default fan-out languages are valid")
    }

    pub fn default_supported() -> Self {
        Self::new(DEFAULT_SUPPORTED_LANGUAGES).expect("default supported languages are valid")
    }

    /// Returns the member matching `code`, or `None` if it is not in the set.
    pub fn resolve(&self, code: &str) -> Option<&LanguageCode> {
        let code = code.trim();
        self.codes.iter().find(|c| c.as_str() == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.resolve(code).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<'a> IntoIterator for &'a LanguageSet {
    type Item = &'a LanguageCode;
    type IntoIter = std::slice::Iter<'a, LanguageCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

impl fmt::Display for LanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.codes.iter().map(LanguageCode::as_str).collect();
        f.write_str(&joined.join(","))
    }
}
