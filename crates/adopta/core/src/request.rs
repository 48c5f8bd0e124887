//! Adoption request document types.

/// Adoption request document as the application stores it.
///
/// This service only observes these records; it never writes them. Field
/// names mirror the store's camelCase keys.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequest {
    /// User that listed the pet.
    #[serde(default)]
    pub owner_id: String,

    /// User asking to adopt.
    #[serde(default)]
    pub requester_id: String,

    /// Display name of the requester.
    #[serde(default)]
    pub requester_name: Option<String>,

    /// Pet being requested.
    #[serde(default)]
    pub pet_id: String,

    /// Display name of the pet.
    #[serde(default)]
    pub pet_name: Option<String>,

    /// Lifecycle status. Open set of values; only the ones in
    /// [`RequestStatus`] are meaningful to dispatch.
    #[serde(default)]
    pub status: String,
}

/// Request statuses the dispatch logic understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    /// Awaiting a decision from the owner.
    Pending,
    /// Owner accepted the request.
    Accepted,
    /// Owner rejected the request.
    Rejected,
    /// Adoption went through.
    Completed,
}

impl RequestStatus {
    /// Parse a stored status value.
    ///
    /// Returns `None` for anything outside the known set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Stored representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(RequestStatus::parse("pending"), Some(RequestStatus::Pending));
        assert_eq!(RequestStatus::parse("accepted"), Some(RequestStatus::Accepted));
        assert_eq!(RequestStatus::parse("rejected"), Some(RequestStatus::Rejected));
        assert_eq!(
            RequestStatus::parse("completed"),
            Some(RequestStatus::Completed)
        );
    }

    #[test]
    fn test_parse_unknown_status() {
        assert_eq!(RequestStatus::parse("cancelled"), None);
        assert_eq!(RequestStatus::parse(""), None);
        assert_eq!(RequestStatus::parse("Accepted"), None);
    }

    #[test]
    fn test_document_field_names() {
        let req: AdoptionRequest = serde_json::from_str(
            r#"{
                "ownerId": "u1",
                "requesterId": "r1",
                "requesterName": "Ana",
                "petId": "p1",
                "petName": "Rex",
                "status": "pending"
            }"#,
        )
        .unwrap();

        assert_eq!(req.owner_id, "u1");
        assert_eq!(req.requester_id, "r1");
        assert_eq!(req.requester_name.as_deref(), Some("Ana"));
        assert_eq!(req.pet_id, "p1");
        assert_eq!(req.pet_name.as_deref(), Some("Rex"));
        assert_eq!(req.status, "pending");
    }

    #[test]
    fn test_document_missing_fields_default() {
        let req: AdoptionRequest = serde_json::from_str(r#"{"ownerId": "u1"}"#).unwrap();

        assert_eq!(req.owner_id, "u1");
        assert_eq!(req.requester_id, "");
        assert!(req.requester_name.is_none());
        assert!(req.pet_name.is_none());
        assert_eq!(req.status, "");
    }
}
