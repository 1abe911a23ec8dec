use serde::{Deserialize, Serialize};

use super::reference::Reference;

/// Wire discriminator carried by every Communication document.
pub const RESOURCE_TYPE: &str = "Communication";

/// A unit of clinical messaging content exchanged between actors, optionally
/// grouped into a thread via `part_of`.
///
/// Records are created once by the platform store and never mutated by the
/// bots; the `id` is server-assigned on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    #[serde(default = "default_resource_type")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: CommunicationStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part_of: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipient: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payload: Vec<Payload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent: Option<jiff::Timestamp>,
}

fn default_resource_type() -> String {
    RESOURCE_TYPE.to_string()
}

impl Default for Communication {
    fn default() -> Self {
        Self {
            resource_type: default_resource_type(),
            id: None,
            status: CommunicationStatus::Unknown,
            identifier: Vec::new(),
            part_of: Vec::new(),
            sender: None,
            recipient: Vec::new(),
            subject: None,
            topic: None,
            payload: Vec::new(),
            sent: None,
        }
    }
}

/// Lifecycle status of a Communication. The bots pass this through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommunicationStatus {
    Preparation,
    InProgress,
    NotDone,
    OnHold,
    Stopped,
    Completed,
    EnteredInError,
    Unknown,
}

/// An external-system-scoped tag. The thread responder uses these as dedup
/// markers on the replies it creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Identifier {
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            value: Some(value.into()),
        }
    }
}

/// A single content item of a Communication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_string: Option<String>,
}

impl Payload {
    /// A plain-text content item.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content_string: Some(content.into()),
        }
    }
}

/// Free-text topic of a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
