use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::communication::Communication;
use super::reference::Reference;

/// Content type of FHIR JSON event payloads.
pub const FHIR_JSON: &str = "application/fhir+json";

/// The envelope the platform delivers to a bot on each triggering event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotEvent {
    /// The bot being invoked.
    pub bot: Reference,
    /// The record whose creation triggered this invocation.
    pub input: Communication,
    /// MIME type of `input`, normally [`FHIR_JSON`].
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Per-bot secrets configured on the platform.
    #[serde(default)]
    pub secrets: HashMap<String, String>,
}

fn default_content_type() -> String {
    FHIR_JSON.to_string()
}

impl BotEvent {
    /// Wrap a triggering Communication in an event envelope.
    pub fn new(bot: Reference, input: Communication) -> Self {
        Self {
            bot,
            input,
            content_type: FHIR_JSON.to_string(),
            secrets: HashMap::new(),
        }
    }
}
