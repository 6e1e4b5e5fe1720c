//! Response-side wire types and the response builder
//!
//! All types use camelCase JSON serialization for wire compatibility.
//! The platform distinguishes an absent key from an explicit `null`:
//! `card` and `reprompt` must serialize as `null` when not supplied, so
//! the `Option` fields here are never skipped.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Envelope schema version emitted on every reply
pub const RESPONSE_VERSION: &str = "1.0";

/// The reply object returned to the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Always `RESPONSE_VERSION`
    pub version: String,

    /// Attributes persisted into the session. This skill keeps none.
    pub session_attributes: HashMap<String, serde_json::Value>,

    /// The reply body
    pub response: ResponseBody,
}

/// The reply body the platform renders and speaks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    /// Visual supplement shown in the companion app; `null` when the
    /// reply carries no card
    pub card: Option<Card>,

    /// Primary spoken output
    pub output_speech: OutputSpeech,

    /// Spoken again if the user goes silent while the session is open;
    /// `null` when the reply carries no re-prompt
    pub reprompt: Option<Reprompt>,

    /// True closes the session after this reply
    pub should_end_session: bool,
}

/// Spoken output, discriminated by the wire `type` tag
///
/// This skill only emits plain text; the SSML form is part of the
/// platform vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    /// Literal text the platform synthesizes
    PlainText { text: String },

    /// Speech Synthesis Markup Language document
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    /// Plain-text speech
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    /// SSML speech
    pub fn ssml(ssml: impl Into<String>) -> Self {
        Self::Ssml { ssml: ssml.into() }
    }
}

/// Card rendered in the platform's companion app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    /// Title plus plain text content
    Simple { title: String, content: String },
}

impl Card {
    /// A simple card
    pub fn simple(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Simple {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Wrapper around the re-prompt speech
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl Reprompt {
    /// A plain-text re-prompt
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            output_speech: OutputSpeech::plain(text),
        }
    }
}

/// Assemble a reply envelope from its parts
///
/// Total over its inputs: a card is attached only when a title is
/// supplied (its content is the spoken output), a re-prompt only when
/// re-prompt text is supplied. Session attributes are always empty.
pub fn build_response(
    card_title: Option<&str>,
    output: &str,
    reprompt_text: Option<&str>,
    should_end_session: bool,
) -> ResponseEnvelope {
    ResponseEnvelope {
        version: RESPONSE_VERSION.to_string(),
        session_attributes: HashMap::new(),
        response: ResponseBody {
            card: card_title.map(|title| Card::simple(title, output)),
            output_speech: OutputSpeech::plain(output),
            reprompt: reprompt_text.map(Reprompt::plain),
            should_end_session,
        },
    }
}
