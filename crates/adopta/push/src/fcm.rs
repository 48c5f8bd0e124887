//! FCM push implementation over the HTTP v1 API.

use std::collections::HashMap;

use adopta_core::{NotificationPayload, PushError, PushErrorKind, PushResult};

use crate::Pusher;

const DEFAULT_BASE_URL: &str = "https://fcm.googleapis.com/v1";

/// Android notification channel the mobile client registers.
const ANDROID_CHANNEL_ID: &str = "pet_adoption_channel";

/// Launcher icon resource on the Android client.
const ANDROID_ICON: &str = "@mipmap/ic_launcher";

/// FCM pusher using the HTTP v1 `messages:send` endpoint.
///
/// The v1 API has no multicast call; a multicast send is one request per
/// token, mirroring what the platform SDK does under the hood.
#[derive(Clone)]
pub struct FcmPusher {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    access_token: String,
}

impl FcmPusher {
    /// Create a new FCM pusher.
    ///
    /// The access token is an OAuth 2.0 bearer token for the Firebase
    /// project's service account.
    pub fn new(project_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            project_id: project_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Override the API base URL (test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn send_url(&self) -> String {
        format!("{}/projects/{}/messages:send", self.base_url, self.project_id)
    }
}

impl Pusher for FcmPusher {
    async fn push(&self, tokens: &[String], payload: &NotificationPayload) -> Vec<PushResult> {
        let mut results = Vec::with_capacity(tokens.len());

        for token in tokens {
            let result = self.push_single(token, payload).await;
            results.push(result);
        }

        results
    }
}

impl FcmPusher {
    async fn push_single(&self, token: &str, payload: &NotificationPayload) -> PushResult {
        let request = SendRequest {
            message: Message {
                token,
                notification: Notification {
                    title: &payload.title,
                    body: &payload.body,
                },
                data: &payload.data,
                android: AndroidConfig::default(),
            },
        };

        let response = self
            .client
            .post(self.send_url())
            .header("Authorization", format!("Bearer {}", self.access_token))
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                return PushResult::failure(
                    token.to_string(),
                    PushError::new(PushErrorKind::Other, format!("fcm request failed: {}", e)),
                );
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            let accepted: SendResponse = serde_json::from_str(&body).unwrap_or_default();
            return PushResult::success(token.to_string(), accepted.name);
        }

        PushResult::failure(token.to_string(), classify_error(&body))
    }
}

/// Map an FCM error body onto a [`PushError`].
fn classify_error(body: &str) -> PushError {
    let Ok(response) = serde_json::from_str::<ErrorResponse>(body) else {
        return PushError::new(PushErrorKind::Other, body.to_string());
    };

    let error = response.error;
    let fcm_code = error
        .details
        .iter()
        .find(|d| !d.error_code.is_empty())
        .map(|d| d.error_code.as_str())
        .unwrap_or("");

    // UNREGISTERED and INVALID_ARGUMENT are the v1 names for the legacy
    // registration-token-not-registered / invalid-registration-token codes.
    let kind = match (error.status.as_str(), fcm_code) {
        (_, "UNREGISTERED") | ("NOT_FOUND", _) => PushErrorKind::Unregistered,
        (_, "INVALID_ARGUMENT") | ("INVALID_ARGUMENT", _) => PushErrorKind::InvalidToken,
        _ => PushErrorKind::Other,
    };

    PushError::new(kind, error.message)
}

#[derive(Debug, serde::Serialize)]
struct SendRequest<'a> {
    message: Message<'a>,
}

#[derive(Debug, serde::Serialize)]
struct Message<'a> {
    token: &'a str,
    notification: Notification<'a>,
    data: &'a HashMap<String, String>,
    android: AndroidConfig,
}

#[derive(Debug, serde::Serialize)]
struct Notification<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, serde::Serialize)]
struct AndroidConfig {
    priority: &'static str,
    notification: AndroidNotification,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct AndroidNotification {
    channel_id: &'static str,
    icon: &'static str,
    default_sound: bool,
    default_vibrate_timings: bool,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            priority: "high",
            notification: AndroidNotification {
                channel_id: ANDROID_CHANNEL_ID,
                icon: ANDROID_ICON,
                default_sound: true,
                default_vibrate_timings: true,
            },
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
struct SendResponse {
    #[serde(default)]
    name: String,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ErrorBody {
    message: String,
    status: String,
    details: Vec<ErrorDetail>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ErrorDetail {
    error_code: String,
}
