//! DTOs for the article fan-out translation endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use validator::Validate;

use super::record_id::{RecordId, validate_record_id};
use crate::domain::entities::{LanguageCode, TranslatableRecord, TranslationResult};

pub const REQUIRED_MESSAGE: &str = "Article ID is required";

pub const TITLE: &str = "title";
pub const SUMMARY: &str = "summary";

/// Keys of the `headline` object that are translated. Other keys are copied.
pub const HEADLINE_KEYS: [&str; 2] = ["headline", "subheadline"];

/// Request body for `POST /auto-translate-news`.
#[derive(Debug, Deserialize, Validate)]
pub struct NewsTranslationRequest {
    #[validate(required, custom(function = "validate_record_id"))]
    pub article_id: Option<RecordId>,
    pub title: Option<String>,
    pub summary: Option<String>,
    /// Usually `{ "headline": .., "subheadline": .. }`; anything else is
    /// returned untouched.
    pub headline: Option<Value>,
}

impl NewsTranslationRequest {
    /// Builds the record handed to the fan-out translator.
    pub fn to_record(&self, id: &RecordId) -> TranslatableRecord {
        let mut record = TranslatableRecord::new(id.to_string())
            .with_field(TITLE, self.title.clone())
            .with_field(SUMMARY, self.summary.clone());

        if let Some(Value::Object(headline)) = &self.headline {
            for key in HEADLINE_KEYS {
                let text = headline.get(key).and_then(Value::as_str).map(str::to_string);
                record = record.with_field(key, text);
            }
        }

        record
    }
}

/// Translation of one article into one language.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct NewsTranslationItem {
    pub language: LanguageCode,
    pub translated_title: Option<String>,
    pub translated_summary: Option<String>,
    pub translated_headline: Option<Value>,
}

impl NewsTranslationItem {
    /// Combines a fan-out result with the original `headline` value.
    pub fn from_result(result: &TranslationResult, headline: Option<&Value>) -> Self {
        let translated_headline = headline.map(|value| match value {
            Value::Object(original) => {
                let mut translated = original.clone();
                for key in HEADLINE_KEYS {
                    if result.was_translated(key)
                        && let Some(text) = result.text(key)
                    {
                        translated.insert(key.to_string(), Value::String(text));
                    }
                }
                Value::Object(translated)
            }
            other => other.clone(),
        });

        Self {
            language: result.language.clone(),
            translated_title: result.text(TITLE),
            translated_summary: result.text(SUMMARY),
            translated_headline,
        }
    }
}

/// Response for `POST /auto-translate-news`.
#[derive(Debug, Serialize)]
pub struct NewsTranslationResponse {
    pub success: bool,
    pub article_id: RecordId,
    pub translations: Vec<NewsTranslationItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldTranslation;
    use serde_json::json;

    fn request(headline: Value) -> NewsTranslationRequest {
        NewsTranslationRequest {
            article_id: Some(RecordId::Number(7)),
            title: Some("Hello".to_string()),
            summary: None,
            headline: Some(headline),
        }
    }

    #[test]
    fn test_record_includes_headline_keys() {
        let req = request(json!({ "headline": "Big", "subheadline": "Small", "style": "bold" }));
        let record = req.to_record(&RecordId::Number(7));

        let names: Vec<&str> = record.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["title", "summary", "headline", "subheadline"]);
        assert_eq!(record.id, "7");
        assert_eq!(record.field("headline"), Some("Big"));
    }

    #[test]
    fn test_non_object_headline_adds_no_fields() {
        let req = request(json!("just text"));
        let record = req.to_record(&RecordId::Number(7));

        assert_eq!(record.fields().count(), 2);
    }

    #[test]
    fn test_item_keeps_extra_headline_keys() {
        let original = json!({ "headline": "Big", "subheadline": "Small", "style": "bold" });
        let result = TranslationResult {
            record_id: "7".to_string(),
            language: LanguageCode::parse("es").unwrap(),
            fields: vec![
                FieldTranslation {
                    name: "title".to_string(),
                    text: Some("Hola".to_string()),
                    translated: true,
                },
                FieldTranslation {
                    name: "headline".to_string(),
                    text: Some("Grande".to_string()),
                    translated: true,
                },
                FieldTranslation {
                    name: "subheadline".to_string(),
                    text: Some("Small".to_string()),
                    translated: false,
                },
            ],
        };

        let item = NewsTranslationItem::from_result(&result, Some(&original));

        assert_eq!(item.translated_title.as_deref(), Some("Hola"));
        assert_eq!(item.translated_summary, None);
        assert_eq!(
            item.translated_headline,
            Some(json!({ "headline": "Grande", "subheadline": "Small", "style": "bold" }))
        );
    }
}
