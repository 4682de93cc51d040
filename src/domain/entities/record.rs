//! Records submitted for translation and the per-language results.

use crate::domain::entities::LanguageCode;

/// A record whose named text fields are translated into every configured
/// language.
///
/// Field order is preserved so results line up with the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableRecord {
    pub id: String,
    fields: Vec<(String, Option<String>)>,
}

impl TranslatableRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field; `None` marks it absent.
    pub fn with_field(mut self, name: impl Into<String>, text: Option<String>) -> Self {
        self.fields.push((name.into(), text));
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_deref()))
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, text)| text.as_deref())
    }
}

/// Returns true when `text` carries something worth sending upstream.
pub fn is_translatable(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.trim().is_empty())
}

/// Outcome of translating one field into one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTranslation {
    pub name: String,
    /// Translated text, or the original value when the field was skipped or
    /// the call degraded.
    pub text: Option<String>,
    /// True only if an upstream call returned a usable translation.
    pub translated: bool,
}

/// All field translations of one record into one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub record_id: String,
    pub language: LanguageCode,
    pub fields: Vec<FieldTranslation>,
}

impl TranslationResult {
    pub fn field(&self, name: &str) -> Option<&FieldTranslation> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Translated value of `name`, falling back to `None` for unknown fields.
    pub fn text(&self, name: &str) -> Option<String> {
        self.field(name).and_then(|f| f.text.clone())
    }

    pub fn was_translated(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.translated)
    }

    /// True if every translatable field got an upstream translation.
    pub fn success(&self) -> bool {
        self.fields
            .iter()
            .filter(|f| is_translatable(f.text.as_deref()))
            .all(|f| f.translated)
    }
}
