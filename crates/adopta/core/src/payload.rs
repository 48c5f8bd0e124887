//! Notification payload construction.
//!
//! One constructor per event type; these own the display strings and the
//! routing metadata the mobile client expects.

use std::collections::HashMap;

use crate::AdoptionRequest;

/// Tap action understood by the Flutter client.
pub const CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";

/// Displayed content and routing metadata for a single notification.
///
/// Ephemeral; built per event and handed straight to the dispatcher.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NotificationPayload {
    /// Display title.
    pub title: String,
    /// Display body.
    pub body: String,
    /// Flat string map the client uses for routing.
    pub data: HashMap<String, String>,
}

impl NotificationPayload {
    /// Payload for a newly created request, addressed to the pet's owner.
    pub fn new_request(request_id: &str, req: &AdoptionRequest) -> Self {
        let requester = req.requester_name.as_deref().unwrap_or("Alguien");
        let pet = req.pet_name.as_deref().unwrap_or("tu mascota");

        Self {
            title: "🐾 Nueva solicitud de adopción".to_string(),
            body: format!("{} quiere adoptar a {}", requester, pet),
            data: HashMap::from([
                ("type".to_string(), "new_request".to_string()),
                ("requestId".to_string(), request_id.to_string()),
                ("petId".to_string(), req.pet_id.clone()),
                ("requesterId".to_string(), req.requester_id.clone()),
                ("click_action".to_string(), CLICK_ACTION.to_string()),
            ]),
        }
    }

    /// Payload for an accepted request, addressed to the requester.
    pub fn request_accepted(request_id: &str, req: &AdoptionRequest) -> Self {
        let pet = req.pet_name.as_deref().unwrap_or("la mascota");

        Self {
            title: "🎉 ¡Solicitud aceptada!".to_string(),
            body: format!(
                "Tu solicitud para adoptar a {} ha sido aceptada. ¡Puedes iniciar el chat!",
                pet
            ),
            data: HashMap::from([
                ("type".to_string(), "request_accepted".to_string()),
                ("requestId".to_string(), request_id.to_string()),
                ("petId".to_string(), req.pet_id.clone()),
                ("ownerId".to_string(), req.owner_id.clone()),
                ("click_action".to_string(), CLICK_ACTION.to_string()),
            ]),
        }
    }

    /// Payload for a rejected request, addressed to the requester.
    pub fn request_rejected(request_id: &str, req: &AdoptionRequest) -> Self {
        let pet = req.pet_name.as_deref().unwrap_or("la mascota");

        Self {
            title: "😔 Solicitud rechazada".to_string(),
            body: format!("Tu solicitud para adoptar a {} no fue aceptada", pet),
            data: HashMap::from([
                ("type".to_string(), "request_rejected".to_string()),
                ("requestId".to_string(), request_id.to_string()),
                ("petId".to_string(), req.pet_id.clone()),
                ("click_action".to_string(), CLICK_ACTION.to_string()),
            ]),
        }
    }

    /// Payload for a completed adoption, addressed to the requester.
    pub fn adoption_completed(request_id: &str, req: &AdoptionRequest) -> Self {
        let pet = req.pet_name.as_deref().unwrap_or("la mascota");

        Self {
            title: "🏠 ¡Adopción completada!".to_string(),
            body: format!(
                "¡Felicidades! La adopción de {} se ha completado. ¡Bienvenido a tu nuevo hogar, {}!",
                pet, pet
            ),
            data: HashMap::from([
                ("type".to_string(), "adoption_completed".to_string()),
                ("requestId".to_string(), request_id.to_string()),
                ("petId".to_string(), req.pet_id.clone()),
                ("click_action".to_string(), CLICK_ACTION.to_string()),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> AdoptionRequest {
        AdoptionRequest {
            owner_id: "u1".to_string(),
            requester_id: "r1".to_string(),
            requester_name: Some("Ana".to_string()),
            pet_id: "p1".to_string(),
            pet_name: Some("Rex".to_string()),
            status: "pending".to_string(),
        }
    }

    #[test]
    fn test_new_request_payload() {
        let payload = NotificationPayload::new_request("req-1", &sample_request());

        assert_eq!(payload.body, "Ana quiere adoptar a Rex");
        assert_eq!(payload.data["type"], "new_request");
        assert_eq!(payload.data["requestId"], "req-1");
        assert_eq!(payload.data["petId"], "p1");
        assert_eq!(payload.data["requesterId"], "r1");
        assert_eq!(payload.data["click_action"], CLICK_ACTION);
        assert_eq!(payload.data.len(), 5);
    }

    #[test]
    fn test_new_request_defaults() {
        let req = AdoptionRequest {
            owner_id: "u1".to_string(),
            ..Default::default()
        };
        let payload = NotificationPayload::new_request("req-1", &req);

        assert_eq!(payload.body, "Alguien quiere adoptar a tu mascota");
    }

    #[test]
    fn test_request_accepted_payload() {
        let payload = NotificationPayload::request_accepted("req-1", &sample_request());

        assert_eq!(payload.data["type"], "request_accepted");
        assert_eq!(payload.data["ownerId"], "u1");
        assert!(payload.body.contains("Rex"));
    }

    #[test]
    fn test_request_rejected_payload() {
        let payload = NotificationPayload::request_rejected("req-1", &sample_request());

        assert_eq!(payload.data["type"], "request_rejected");
        assert_eq!(payload.body, "Tu solicitud para adoptar a Rex no fue aceptada");
        // Rejection does not carry the owner id.
        assert!(!payload.data.contains_key("ownerId"));
    }

    #[test]
    fn test_adoption_completed_payload() {
        let payload = NotificationPayload::adoption_completed("req-1", &sample_request());

        assert_eq!(payload.data["type"], "adoption_completed");
        assert_eq!(payload.body.matches("Rex").count(), 2);
    }

    #[test]
    fn test_update_payloads_default_pet_name() {
        let req = AdoptionRequest {
            requester_id: "r1".to_string(),
            ..Default::default()
        };

        let payload = NotificationPayload::request_rejected("req-1", &req);
        assert_eq!(
            payload.body,
            "Tu solicitud para adoptar a la mascota no fue aceptada"
        );
    }
}
