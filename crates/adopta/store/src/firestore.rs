//! Firestore REST implementation.

use color_eyre::eyre::WrapErr as _;
use reqwest::StatusCode;

use crate::UserStore;

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Minimal Firestore document model.
///
/// Only models the value shapes this service reads: strings and arrays of
/// strings.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Document {
    /// Typed field values keyed by field name.
    #[serde(default)]
    pub fields: std::collections::HashMap<String, Value>,
}

/// A single Firestore field value.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    #[serde(default)]
    pub string_value: Option<String>,
    #[serde(default)]
    pub array_value: Option<ArrayValue>,
}

/// A Firestore array value.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<Value>,
}

impl Document {
    /// Extract a field as a list of strings.
    ///
    /// A missing or non-array field yields an empty list; non-string
    /// elements are skipped.
    pub fn string_array(&self, field: &str) -> Vec<String> {
        self.fields
            .get(field)
            .and_then(|v| v.array_value.as_ref())
            .map(|arr| {
                arr.values
                    .iter()
                    .filter_map(|v| v.string_value.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Extract a field as a string.
    pub fn string_field(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|v| v.string_value.as_deref())
    }
}

/// Thin client for Firestore document reads.
#[derive(Clone)]
pub struct FirestoreClient {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    access_token: String,
}

impl FirestoreClient {
    /// Create a new client for a project.
    ///
    /// The access token is an OAuth 2.0 bearer token provisioned by the
    /// hosting environment.
    pub fn new(project_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            project_id: project_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Override the API base URL (emulator or test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            self.base_url, self.project_id, collection, id
        )
    }

    /// Fetch a document by collection and id.
    ///
    /// Returns `None` when the document does not exist.
    pub async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> color_eyre::eyre::Result<Option<Document>> {
        let url = self.document_url(collection, id);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .send()
            .await
            .wrap_err("firestore request failed")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            color_eyre::eyre::bail!(
                "firestore read failed: status={}, error={}",
                status,
                error_text
            );
        }

        let doc = response
            .json::<Document>()
            .await
            .wrap_err("failed to decode firestore document")?;

        Ok(Some(doc))
    }
}

/// User store backed by the `users` collection.
#[derive(Clone)]
pub struct FirestoreUserStore {
    client: FirestoreClient,
}

impl FirestoreUserStore {
    /// Create a new user store over a Firestore client.
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }
}

impl UserStore for FirestoreUserStore {
    async fn fcm_tokens(&self, user_id: &str) -> color_eyre::eyre::Result<Vec<String>> {
        let doc = self.client.get_document("users", user_id).await?;

        let Some(doc) = doc else {
            tracing::info!(user_id = %user_id, "user not found");
            return Ok(Vec::new());
        };

        Ok(doc.string_array("fcmTokens"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_doc(json: &str) -> Document {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_string_array_extraction() {
        let doc = user_doc(
            r#"{
                "name": "projects/p/databases/(default)/documents/users/u1",
                "fields": {
                    "name": {"stringValue": "Ana"},
                    "fcmTokens": {
                        "arrayValue": {
                            "values": [
                                {"stringValue": "tok-1"},
                                {"stringValue": "tok-2"}
                            ]
                        }
                    }
                }
            }"#,
        );

        assert_eq!(doc.string_array("fcmTokens"), vec!["tok-1", "tok-2"]);
        assert_eq!(doc.string_field("name"), Some("Ana"));
    }

    #[test]
    fn test_missing_token_field_is_empty() {
        let doc = user_doc(r#"{"fields": {"name": {"stringValue": "Ana"}}}"#);
        assert!(doc.string_array("fcmTokens").is_empty());
    }

    #[test]
    fn test_empty_array_value() {
        let doc = user_doc(r#"{"fields": {"fcmTokens": {"arrayValue": {}}}}"#);
        assert!(doc.string_array("fcmTokens").is_empty());
    }

    #[test]
    fn test_non_array_field_is_empty() {
        let doc = user_doc(r#"{"fields": {"fcmTokens": {"stringValue": "tok-1"}}}"#);
        assert!(doc.string_array("fcmTokens").is_empty());
    }

    #[test]
    fn test_document_url() {
        let client = FirestoreClient::new("adopta-prod", "tok");
        assert_eq!(
            client.document_url("users", "u1"),
            "https://firestore.googleapis.com/v1/projects/adopta-prod/databases/(default)/documents/users/u1"
        );
    }
}
