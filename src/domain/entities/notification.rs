//! Push notification targets and messages.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entities::NewsArticle;
use crate::utils::text::truncate_chars;

/// Body used when an article has no summary.
pub const DEFAULT_BODY: &str = "New news update";

/// Suffix appended to every notification body.
pub const BODY_ELLIPSIS: &str = "...";

/// A registered device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTarget {
    pub token: Option<String>,
    pub platform: Option<String>,
}

impl NotificationTarget {
    pub fn new(token: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            platform: Some(platform.into()),
        }
    }

    /// Token, if present and non-blank.
    pub fn deliverable_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn platform_label(&self) -> &str {
        self.platform.as_deref().unwrap_or("unknown")
    }
}

/// Notification title and body shown by the OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Android delivery hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AndroidConfig {
    pub priority: String,
}

/// `aps` dictionary of an APNs payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aps {
    pub sound: String,
    pub badge: u32,
    pub alert: Notification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApnsPayload {
    pub aps: Aps,
}

/// iOS delivery hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApnsConfig {
    pub payload: ApnsPayload,
    pub headers: BTreeMap<String, String>,
}

/// One message addressed to one device token.
///
/// Serializes to the `message` object of the FCM v1 `messages:send` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushMessage {
    pub token: String,
    pub notification: Notification,
    pub data: BTreeMap<String, String>,
    pub android: AndroidConfig,
    pub apns: ApnsConfig,
}

impl PushMessage {
    /// Builds the "new article" message for `token`.
    ///
    /// The body is the first `body_chars` characters of the summary (or
    /// [`DEFAULT_BODY`]) followed by [`BODY_ELLIPSIS`].
    pub fn for_article(article: &NewsArticle, token: &str, body_chars: usize) -> Self {
        let source = article
            .summary
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BODY);
        let body = format!("{}{}", truncate_chars(source, body_chars), BODY_ELLIPSIS);

        let notification = Notification {
            title: article.title.clone(),
            body,
        };

        let data = BTreeMap::from([
            ("article_id".to_string(), article.id.clone()),
            ("type".to_string(), "new_news".to_string()),
            (
                "click_action".to_string(),
                "FLUTTER_NOTIFICATION_CLICK".to_string(),
            ),
        ]);

        Self {
            token: token.to_string(),
            notification: notification.clone(),
            data,
            android: AndroidConfig {
                priority: "high".to_string(),
            },
            apns: ApnsConfig {
                payload: ApnsPayload {
                    aps: Aps {
                        sound: "default".to_string(),
                        badge: 1,
                        alert: notification,
                    },
                },
                headers: BTreeMap::from([("apns-priority".to_string(), "10".to_string())]),
            },
        }
    }
}

/// Result of one send, counted but never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    pub article_id: String,
    pub token: String,
    pub result: Result<String, String>,
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
