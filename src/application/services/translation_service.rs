//! Fan-out translation with silent fallback and inter-language throttle.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{
    FieldTranslation, LanguageCode, LanguageSet, TranslatableRecord, TranslationResult,
    is_translatable,
};
use crate::error::AppError;
use crate::infrastructure::translate::Translator;

/// Outcome of translating one text into one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTranslation {
    /// Translated text, or the input when the call degraded.
    pub text: String,
    pub translated: bool,
    /// True if the endpoint could not be reached at all.
    pub transport_failed: bool,
}

impl TextTranslation {
    fn passthrough(text: &str) -> Self {
        Self {
            text: text.to_string(),
            translated: false,
            transport_failed: false,
        }
    }
}

/// Result of the single-text endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleTranslation {
    pub translated_text: String,
    pub original_text: String,
    pub target_language: LanguageCode,
    /// Set when the translation endpoint was unreachable.
    pub error: Option<&'static str>,
}

/// Translates records into a configured list of languages.
///
/// Calls run strictly one after another. After the last field of one
/// language, the service waits `pause` before starting the next language, so
/// the upstream endpoint sees a bounded request rate. Failures never
/// propagate: a failed call leaves the original text in place.
pub struct TranslationService {
    translator: Arc<dyn Translator>,
    fanout_languages: LanguageSet,
    supported_languages: LanguageSet,
    pause: Duration,
}

impl TranslationService {
    /// Creates a new translation service.
    ///
    /// - `fanout_languages` - targets for [`Self::translate_record`]
    /// - `supported_languages` - targets accepted by [`Self::translate_single`]
    /// - `pause` - wait between two languages of one record
    pub fn new(
        translator: Arc<dyn Translator>,
        fanout_languages: LanguageSet,
        supported_languages: LanguageSet,
        pause: Duration,
    ) -> Self {
        Self {
            translator,
            fanout_languages,
            supported_languages,
            pause,
        }
    }

    pub fn fanout_languages(&self) -> &LanguageSet {
        &self.fanout_languages
    }

    pub fn supported_languages(&self) -> &LanguageSet {
        &self.supported_languages
    }

    /// Translates `text` into `target`, degrading to `text` on any failure.
    ///
    /// The source language is returned as is without a call.
    pub async fn translate_text(&self, text: &str, target: &LanguageCode) -> TextTranslation {
        if target.is_source() {
            return TextTranslation::passthrough(text);
        }

        metrics::counter!("translation_calls_total").increment(1);

        match self.translator.translate(text, target).await {
            Ok(translated) => TextTranslation {
                text: translated,
                translated: true,
                transport_failed: false,
            },
            Err(e) => {
                metrics::counter!("translation_fallbacks_total").increment(1);
                tracing::warn!(language = %target, error = %e, "Translation degraded to original text");

                TextTranslation {
                    transport_failed: e.is_transport(),
                    ..TextTranslation::passthrough(text)
                }
            }
        }
    }

    /// Translates one text for the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `target_language` is not in the
    /// supported set. No call is made in that case.
    pub async fn translate_single(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<SingleTranslation, AppError> {
        let target = self
            .supported_languages
            .resolve(target_language)
            .cloned()
            .ok_or_else(|| {
                AppError::bad_request(
                    "Unsupported language",
                    json!({
                        "target_language": target_language,
                        "supported": self.supported_languages.to_string(),
                    }),
                )
            })?;

        let outcome = self.translate_text(text, &target).await;

        Ok(SingleTranslation {
            translated_text: outcome.text,
            original_text: text.to_string(),
            target_language: target,
            error: outcome.transport_failed.then_some("Translation failed"),
        })
    }

    /// Translates every field of `record` into every fan-out language.
    ///
    /// Always returns exactly one result per configured language, in
    /// configuration order. Blank or absent fields are passed through without
    /// a call.
    pub async fn translate_record(&self, record: &TranslatableRecord) -> Vec<TranslationResult> {
        let mut results = Vec::with_capacity(self.fanout_languages.len());

        for (index, language) in self.fanout_languages.iter().enumerate() {
            if index > 0 && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }

            let mut fields = Vec::new();
            for (name, text) in record.fields() {
                let field = match text {
                    Some(source) if is_translatable(Some(source)) => {
                        let outcome = self.translate_text(source, language).await;
                        FieldTranslation {
                            name: name.to_string(),
                            text: Some(outcome.text),
                            translated: outcome.translated,
                        }
                    }
                    _ => FieldTranslation {
                        name: name.to_string(),
                        text: text.map(str::to_string),
                        translated: false,
                    },
                };
                fields.push(field);
            }

            let result = TranslationResult {
                record_id: record.id.clone(),
                language: language.clone(),
                fields,
            };

            tracing::debug!(
                record_id = %record.id,
                language = %language,
                success = result.success(),
                "Language translated"
            );

            results.push(result);
        }

        results
    }
}
