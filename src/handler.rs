//! Request routing and intent handlers for the coffee skill
//!
//! One invocation is one `handle` call: the router matches on the
//! request type, the selected handler builds the reply, and the raw
//! wire payloads are logged on the way in and out. No state survives
//! between calls.

use crate::error::{Result, SkillError};
use crate::response::{build_response, ResponseEnvelope};
use crate::types::{Intent, IntentRequest, LaunchRequest, Request, RequestEnvelope, SessionEndedRequest};
use async_trait::async_trait;

/// Scoops of grounds per cup of water, the house ratio
pub const SCOOPS_PER_CUP: f64 = 5.0 / 6.0;

/// The skill's custom intent
pub const SCOOPS_FOR_CUPS_INTENT: &str = "ScoopsForCupsIntent";

/// The platform's built-in help intent
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";

/// Slot carrying the number of cups
pub const CUPS_SLOT: &str = "Cups";

const WELCOME_PROMPT: &str = "How many cups of coffee are you making?";
const UNKNOWN_CUPS_OUTPUT: &str = "I'm not sure how many cups you're making.";
const CARD_TITLE: &str = "Coffee scoops";

/// Handler for platform invocations
///
/// The single entry point of the skill. Implementations receive the
/// deserialized event envelope and return the reply envelope, or `None`
/// when the platform expects no reply body.
#[async_trait]
pub trait SkillHandler: Send + Sync {
    /// Handle one invocation
    ///
    /// Returns `Ok(None)` only for session-ended requests; every other
    /// routable request produces a full reply.
    async fn handle(&self, envelope: RequestEnvelope) -> Result<Option<ResponseEnvelope>>;
}

/// The coffee skill
///
/// Stateless; each invocation is routed independently, so the skill is
/// trivially `Send + Sync` and shareable across invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoffeeSkill;

impl CoffeeSkill {
    /// Create the skill
    pub fn new() -> Self {
        Self
    }

    /// User opened the skill without saying what they want
    fn on_launch(&self, _request: &LaunchRequest) -> ResponseEnvelope {
        welcome_response()
    }

    /// User speech resolved to an intent
    fn on_intent(&self, request: &IntentRequest) -> Result<ResponseEnvelope> {
        match request.intent.name.as_str() {
            SCOOPS_FOR_CUPS_INTENT => Ok(scoops_for_cups_response(&request.intent)),
            HELP_INTENT => Ok(welcome_response()),
            name => Err(SkillError::UnknownIntent(name.to_string())),
        }
    }

    /// The platform ended the session
    ///
    /// Not invoked when a prior reply set `should_end_session`. Reserved
    /// as the cleanup hook; currently only logs what the platform
    /// reported.
    fn on_session_ended(&self, request: &SessionEndedRequest) {
        tracing::debug!(
            reason = ?request.reason,
            error = ?request.error,
            "Session ended by platform"
        );
    }
}

#[async_trait]
impl SkillHandler for CoffeeSkill {
    async fn handle(&self, envelope: RequestEnvelope) -> Result<Option<ResponseEnvelope>> {
        tracing::debug!(event = %serde_json::to_string(&envelope)?, "Received event");

        let response = match &envelope.request {
            Request::Launch(request) => Some(self.on_launch(request)),
            Request::Intent(request) => Some(self.on_intent(request)?),
            Request::SessionEnded(request) => {
                self.on_session_ended(request);
                None
            }
            Request::Unknown => return Err(SkillError::UnroutableRequestType),
        };

        if let Some(response) = &response {
            tracing::debug!(response = %serde_json::to_string(response)?, "Sending response");
        }

        Ok(response)
    }
}

/// The welcome reply, also used for the help intent
///
/// Keeps the session open waiting for a cup count, with no card and no
/// re-prompt.
pub fn welcome_response() -> ResponseEnvelope {
    build_response(None, WELCOME_PROMPT, None, false)
}

/// The scoops recommendation for a cup count carried in the `Cups` slot
///
/// A missing slot, a valueless slot, or a value that does not parse as
/// an integer degrades to a clarifying re-prompt with the session left
/// open. A parsed count is trusted as-is; zero and negative counts
/// compute normally.
pub fn scoops_for_cups_response(intent: &Intent) -> ResponseEnvelope {
    let cups = match cups_from(intent) {
        Some(cups) => cups,
        None => return build_response(None, UNKNOWN_CUPS_OUTPUT, Some(WELCOME_PROMPT), false),
    };

    let scoops = cups as f64 * SCOOPS_PER_CUP;
    let output = format!(
        "Use {} scoops for {} cups.",
        format_significant(scoops, 2),
        cups
    );
    build_response(Some(CARD_TITLE), &output, None, true)
}

/// Read and parse the cup count from the `Cups` slot
fn cups_from(intent: &Intent) -> Option<i64> {
    let value = intent.slot_value(CUPS_SLOT)?;
    value.trim().parse().ok()
}

/// Format `value` to `digits` significant figures, printf `%g` style
///
/// Trailing zeros are stripped, and magnitudes whose decimal exponent
/// falls outside `[-4, digits)` switch to exponent notation with a
/// signed two-digit exponent.
fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = digits.saturating_sub(1);
    let sci = format!("{:.*e}", precision, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exp.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_trailing_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        trim_trailing_zeros(&fixed).to_string()
    }
}

fn trim_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
