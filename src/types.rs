//! Request-side wire types for the voice platform envelope
//!
//! All types use camelCase JSON serialization for wire compatibility.
//! The platform sends one envelope per invocation; nothing here is
//! persisted across invocations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The event object the platform delivers on every invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    /// Envelope schema version (e.g., "1.0")
    #[serde(default)]
    pub version: String,

    /// Per-conversation context maintained by the platform
    #[serde(default)]
    pub session: Session,

    /// The request to route
    pub request: Request,
}

/// Per-conversation context
///
/// The skill treats this as opaque: it never reads attributes and every
/// reply carries an empty attribute set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    /// True on the first request of a session
    pub new: bool,

    /// Platform-assigned session identifier
    pub session_id: String,

    /// Attributes carried across turns (unused by this skill)
    pub attributes: HashMap<String, serde_json::Value>,

    /// The skill this session belongs to
    pub application: Option<Application>,

    /// The user the platform resolved for this session
    pub user: Option<User>,
}

/// Skill identity within a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub application_id: String,
}

/// User identity within a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub user_id: String,
}

/// The routable request, discriminated by the wire `type` tag
///
/// The platform's request vocabulary is closed; a tag outside it
/// deserializes to `Unknown` so the router can reject it instead of
/// the deserializer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Skill opened without an intent
    #[serde(rename = "LaunchRequest")]
    Launch(LaunchRequest),

    /// User speech resolved to an intent
    #[serde(rename = "IntentRequest")]
    Intent(IntentRequest),

    /// The platform ended the session
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded(SessionEndedRequest),

    /// Unrecognized request type tag
    #[serde(other)]
    Unknown,
}

/// Launch request payload, carrying only per-request metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchRequest {
    /// Platform-assigned request identifier
    pub request_id: String,

    /// When the platform created the request (ISO 8601)
    pub timestamp: Option<DateTime<Utc>>,

    /// Locale of the user's device (e.g., "en-US")
    pub locale: Option<String>,
}

/// Intent request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(default)]
    pub request_id: String,

    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub locale: Option<String>,

    /// The intent the platform recognized from speech
    pub intent: Intent,
}

/// Session-ended request payload
///
/// Sent when the platform closes the session on its own. Never sent
/// after a reply that set `shouldEndSession` to true.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionEndedRequest {
    pub request_id: String,

    pub timestamp: Option<DateTime<Utc>>,

    pub locale: Option<String>,

    /// Why the platform ended the session
    pub reason: Option<SessionEndReason>,

    /// Error detail when `reason` is `Error`
    pub error: Option<SessionError>,
}

/// Platform-reported reason a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum SessionEndReason {
    UserInitiated,
    Error,
    ExceededMaxReprompts,
    /// Reason value this crate does not know about
    Unknown,
}

impl From<String> for SessionEndReason {
    fn from(value: String) -> Self {
        match value.as_str() {
            "USER_INITIATED" => Self::UserInitiated,
            "ERROR" => Self::Error,
            "EXCEEDED_MAX_REPROMPTS" => Self::ExceededMaxReprompts,
            _ => Self::Unknown,
        }
    }
}

/// Error detail attached to a session-ended request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

/// A named user goal with zero or more slot values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Intent name (e.g., "ScoopsForCupsIntent", "AMAZON.HelpIntent")
    pub name: String,

    /// Slot name → slot. A slot may be absent from the map entirely,
    /// or present without a value.
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Create an intent with no slots
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }

    /// Add a slot carrying a value
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.slots.insert(
            name.clone(),
            Slot {
                name,
                value: Some(value.into()),
            },
        );
        self
    }

    /// The value of a slot, if the slot exists and carries one
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name)?.value.as_deref()
    }
}

/// A named, optionally-populated intent parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slot {
    pub name: String,

    /// Absent when the platform matched the slot but captured no value
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_envelope_deserialization() {
        let json = r#"{
            "version": "1.0",
            "session": {"new": true, "sessionId": "amzn1.echo-api.session.abc"},
            "request": {
                "type": "LaunchRequest",
                "requestId": "amzn1.echo-api.request.123",
                "timestamp": "2016-03-04T05:06:07Z",
                "locale": "en-US"
            }
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.version, "1.0");
        assert!(envelope.session.new);
        assert_eq!(envelope.session.session_id, "amzn1.echo-api.session.abc");

        match envelope.request {
            Request::Launch(req) => {
                assert_eq!(req.request_id, "amzn1.echo-api.request.123");
                assert_eq!(req.locale.as_deref(), Some("en-US"));
                assert!(req.timestamp.is_some());
            }
            other => panic!("Expected launch request, got {:?}", other),
        }
    }

    #[test]
    fn test_intent_envelope_deserialization() {
        let json = r#"{
            "session": {},
            "request": {
                "type": "IntentRequest",
                "intent": {
                    "name": "ScoopsForCupsIntent",
                    "slots": {"Cups": {"name": "Cups", "value": "10"}}
                }
            }
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();
        match envelope.request {
            Request::Intent(req) => {
                assert_eq!(req.intent.name, "ScoopsForCupsIntent");
                assert_eq!(req.intent.slot_value("Cups"), Some("10"));
            }
            other => panic!("Expected intent request, got {:?}", other),
        }
    }

    #[test]
    fn test_minimal_envelope_uses_defaults() {
        // Session and version may be absent entirely
        let json = r#"{"request": {"type": "LaunchRequest"}}"#;

        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.version, "");
        assert!(!envelope.session.new);
        assert!(envelope.session.attributes.is_empty());
        assert!(matches!(envelope.request, Request::Launch(_)));
    }

    #[test]
    fn test_unknown_request_type_deserializes_to_unknown() {
        let json = r#"{"request": {"type": "AudioPlayerRequest", "requestId": "r-1"}}"#;

        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();
        assert!(matches!(envelope.request, Request::Unknown));
    }

    #[test]
    fn test_session_ended_reason_and_error() {
        let json = r#"{
            "request": {
                "type": "SessionEndedRequest",
                "reason": "ERROR",
                "error": {"type": "INVALID_RESPONSE", "message": "bad card"}
            }
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();
        match envelope.request {
            Request::SessionEnded(req) => {
                assert_eq!(req.reason, Some(SessionEndReason::Error));
                let error = req.error.unwrap();
                assert_eq!(error.error_type, "INVALID_RESPONSE");
                assert_eq!(error.message, "bad card");
            }
            other => panic!("Expected session-ended request, got {:?}", other),
        }
    }

    #[test]
    fn test_session_ended_unrecognized_reason() {
        let json = r#"{"request": {"type": "SessionEndedRequest", "reason": "SOMETHING_NEW"}}"#;

        let envelope: RequestEnvelope = serde_json::from_str(json).unwrap();
        match envelope.request {
            Request::SessionEnded(req) => {
                assert_eq!(req.reason, Some(SessionEndReason::Unknown));
            }
            other => panic!("Expected session-ended request, got {:?}", other),
        }
    }

    #[test]
    fn test_slot_without_value() {
        let json = r#"{"name": "Cups"}"#;
        let slot: Slot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.name, "Cups");
        assert!(slot.value.is_none());
    }

    #[test]
    fn test_intent_builder_and_slot_value() {
        let intent = Intent::new("ScoopsForCupsIntent").with_slot("Cups", "4");
        assert_eq!(intent.slot_value("Cups"), Some("4"));
        assert_eq!(intent.slot_value("Mugs"), None);

        let empty = Intent::new("AMAZON.HelpIntent");
        assert_eq!(empty.slot_value("Cups"), None);
    }

    #[test]
    fn test_intent_without_slots_key() {
        // Help and launch-adjacent intents carry no slots map at all
        let json = r#"{"name": "AMAZON.HelpIntent"}"#;
        let intent: Intent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.name, "AMAZON.HelpIntent");
        assert!(intent.slots.is_empty());
    }

    #[test]
    fn test_envelope_serialization_roundtrip() {
        let envelope = RequestEnvelope {
            version: "1.0".to_string(),
            session: Session::default(),
            request: Request::Intent(IntentRequest {
                request_id: "r-42".to_string(),
                timestamp: None,
                locale: Some("en-US".to_string()),
                intent: Intent::new("ScoopsForCupsIntent").with_slot("Cups", "2"),
            }),
        };

        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains("\"type\":\"IntentRequest\""));
        assert!(json.contains("\"requestId\":\"r-42\""));

        let parsed: RequestEnvelope = serde_json::from_str(&json).unwrap();
        match parsed.request {
            Request::Intent(req) => assert_eq!(req.intent.slot_value("Cups"), Some("2")),
            other => panic!("Expected intent request, got {:?}", other),
        }
    }
}
