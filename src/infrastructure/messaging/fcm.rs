//! Firebase Cloud Messaging HTTP v1 sender.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration as StdDuration;
use tokio::sync::Mutex;

use super::service::{PushError, PushResult, PushSender};
use super::service_account::ServiceAccount;
use crate::domain::entities::PushMessage;

const FCM_BASE_URL: &str = "https://fcm.googleapis.com";
const MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for the signed assertion.
const ASSERTION_TTL_SECS: i64 = 3600;

/// Access tokens are refreshed this long before they expire.
const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    name: String,
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(REFRESH_MARGIN_SECS) < self.expires_at
    }
}

/// Sends [`PushMessage`]s through `projects/{id}/messages:send`.
///
/// Authenticates with an OAuth2 access token obtained by exchanging an RS256
/// assertion signed with the service-account key. The token is reused until
/// it is about to expire.
pub struct FcmSender {
    client: Client,
    account: ServiceAccount,
    encoding_key: EncodingKey,
    send_url: String,
    token: Mutex<Option<AccessToken>>,
}

impl FcmSender {
    /// Creates a sender for the project named in `account`.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::Credentials`] if the private key is not a valid
    /// RSA PEM, or [`PushError::Transport`] if the HTTP client cannot be built.
    pub fn new(account: ServiceAccount, timeout: StdDuration) -> PushResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(account.private_key.as_bytes())
            .map_err(|e| PushError::Credentials(format!("private_key: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PushError::Transport(e.to_string()))?;

        let send_url = format!(
            "{FCM_BASE_URL}/v1/projects/{}/messages:send",
            account.project_id
        );

        Ok(Self {
            client,
            account,
            encoding_key,
            send_url,
            token: Mutex::new(None),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.account.project_id
    }

    async fn access_token(&self) -> PushResult<String> {
        let mut cached = self.token.lock().await;
        let now = Utc::now();

        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(now)) {
            return Ok(token.value.clone());
        }

        let token = self.fetch_access_token(now).await?;
        let value = token.value.clone();
        *cached = Some(token);

        Ok(value)
    }

    async fn fetch_access_token(&self, now: DateTime<Utc>) -> PushResult<AccessToken> {
        let iat = now.timestamp();
        let claims = AssertionClaims {
            iss: &self.account.client_email,
            scope: MESSAGING_SCOPE,
            aud: &self.account.token_uri,
            iat,
            exp: iat + ASSERTION_TTL_SECS,
        };

        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|e| PushError::Auth(format!("failed to sign assertion: {e}")))?;

        let response = self
            .client
            .post(&self.account.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| PushError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::Auth(format!("token endpoint {status}: {body}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| PushError::Auth(e.to_string()))?;

        tracing::debug!(expires_in = token.expires_in, "Obtained FCM access token");

        Ok(AccessToken {
            value: token.access_token,
            expires_at: now + Duration::seconds(token.expires_in),
        })
    }
}

#[async_trait]
impl PushSender for FcmSender {
    async fn send(&self, message: &PushMessage) -> PushResult<String> {
        let access_token = self.access_token().await?;

        let response = self
            .client
            .post(&self.send_url)
            .bearer_auth(access_token)
            .json(&json!({ "message": message }))
            .send()
            .await
            .map_err(|e| PushError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PushError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let sent: SendResponse = response
            .json()
            .await
            .map_err(|e| PushError::Transport(e.to_string()))?;

        Ok(sent.name)
    }
}
