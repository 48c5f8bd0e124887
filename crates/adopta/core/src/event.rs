//! Document event envelopes.
//!
//! Wire format of the webhooks the event relay delivers for the
//! `adoption_requests` collection. Snapshots may be absent; handlers guard
//! on that rather than the decoder.

use crate::AdoptionRequest;

/// A new adoption-request document was created.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCreated {
    /// Document id of the new request.
    pub request_id: String,

    /// When the source emitted the event.
    #[serde(default)]
    pub time: Option<chrono::DateTime<chrono::Utc>>,

    /// Snapshot of the created document.
    #[serde(default)]
    pub doc: Option<AdoptionRequest>,
}

/// An existing adoption-request document was updated.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestUpdated {
    /// Document id of the updated request.
    pub request_id: String,

    /// When the source emitted the event.
    #[serde(default)]
    pub time: Option<chrono::DateTime<chrono::Utc>>,

    /// Snapshot before the update.
    #[serde(default)]
    pub before: Option<AdoptionRequest>,

    /// Snapshot after the update.
    #[serde(default)]
    pub after: Option<AdoptionRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_event_decodes() {
        let event: RequestCreated = serde_json::from_str(
            r#"{
                "requestId": "req-1",
                "time": "2024-05-01T12:00:00Z",
                "doc": {"ownerId": "u1", "status": "pending"}
            }"#,
        )
        .unwrap();

        assert_eq!(event.request_id, "req-1");
        assert!(event.time.is_some());
        assert_eq!(event.doc.unwrap().owner_id, "u1");
    }

    #[test]
    fn test_updated_event_tolerates_missing_snapshots() {
        let event: RequestUpdated = serde_json::from_str(r#"{"requestId": "req-1"}"#).unwrap();

        assert!(event.before.is_none());
        assert!(event.after.is_none());
        assert!(event.time.is_none());
    }
}
