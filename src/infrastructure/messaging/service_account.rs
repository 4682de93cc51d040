//! Firebase service-account credential.

use serde::Deserialize;
use std::fmt;

use super::service::PushError;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The subset of a Google service-account key file used for FCM.
#[derive(Clone, Deserialize)]
pub struct ServiceAccount {
    pub project_id: String,
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccount {
    /// Parses the JSON blob from `FIREBASE_SERVICE_ACCOUNT`.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::Credentials`] if the blob is not JSON, lacks a
    /// required key, or has an empty one.
    pub fn from_json(raw: &str) -> Result<Self, PushError> {
        let account: Self =
            serde_json::from_str(raw).map_err(|e| PushError::Credentials(e.to_string()))?;

        for (name, value) in [
            ("project_id", &account.project_id),
            ("client_email", &account.client_email),
            ("private_key", &account.private_key),
        ] {
            if value.trim().is_empty() {
                return Err(PushError::Credentials(format!("{name} is empty")));
            }
        }

        Ok(account)
    }
}

impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("private_key", &"***")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
