//! # coffee-skill
//!
//! Request routing and response building for a coffee-scoops voice skill.
//!
//! ## Overview
//!
//! `coffee-skill` implements the request-handling core of a voice
//! assistant custom skill that answers one question: how many scoops of
//! coffee grounds to use for a given number of cups. The hosting
//! runtime deserializes the platform event into a [`RequestEnvelope`],
//! hands it to the skill, and serializes the [`ResponseEnvelope`] back.
//!
//! ## Quick Start
//!
//! ```rust
//! use coffee_skill::{CoffeeSkill, RequestEnvelope, SkillHandler};
//!
//! # async fn example() -> coffee_skill::Result<()> {
//! let skill = CoffeeSkill::new();
//!
//! let envelope: RequestEnvelope = serde_json::from_value(serde_json::json!({
//!     "session": {},
//!     "request": {
//!         "type": "IntentRequest",
//!         "intent": {
//!             "name": "ScoopsForCupsIntent",
//!             "slots": {"Cups": {"name": "Cups", "value": "10"}}
//!         }
//!     }
//! }))?;
//!
//! if let Some(reply) = skill.handle(envelope).await? {
//!     println!("{}", serde_json::to_string(&reply)?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **SkillHandler** trait — the platform-facing entry point
//! - **CoffeeSkill** — router dispatching on the request type, plus the
//!   launch, intent, and session-ended handlers
//! - **RequestEnvelope** / **ResponseEnvelope** — the platform's wire
//!   shapes, camelCase JSON with explicit `null` markers on the reply
//! - **build_response** — pure assembly of the reply envelope
//!
//! Logging goes through the `tracing` facade; installing a subscriber
//! is the host's concern.

pub mod error;
pub mod handler;
pub mod response;
pub mod types;

// Re-export core types
pub use error::{Result, SkillError};
pub use handler::{
    scoops_for_cups_response, welcome_response, CoffeeSkill, SkillHandler, CUPS_SLOT,
    HELP_INTENT, SCOOPS_FOR_CUPS_INTENT, SCOOPS_PER_CUP,
};
pub use response::{
    build_response, Card, OutputSpeech, Reprompt, ResponseBody, ResponseEnvelope,
    RESPONSE_VERSION,
};
pub use types::{
    Application, Intent, IntentRequest, LaunchRequest, Request, RequestEnvelope, Session,
    SessionEndReason, SessionEndedRequest, SessionError, Slot, User,
};
