use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A reference to another platform resource, e.g. `"Practitioner/123"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Reference {
    /// Build a relative reference from a kind and id.
    pub fn local(kind: ResourceKind, id: &str) -> Self {
        Self {
            reference: format!("{kind}/{id}"),
            display: None,
        }
    }

    /// Decompose the reference string into its kind and id.
    ///
    /// Malformed strings yield `None`; callers treat those as non-matching
    /// rather than as failures.
    pub fn target(&self) -> Option<ResourceTarget> {
        self.reference.parse().ok()
    }

    /// Whether this reference points at a resource of the given kind.
    pub fn is_a(&self, kind: &ResourceKind) -> bool {
        self.target().is_some_and(|target| target.kind == *kind)
    }
}

/// Resource kinds that appear in reference strings.
///
/// Kinds the bots never act on are carried as `Other` so references round-trip
/// without loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    Practitioner,
    Patient,
    Communication,
    Bot,
    Other(String),
}

impl ResourceKind {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceKind::Practitioner => "Practitioner",
            ResourceKind::Patient => "Patient",
            ResourceKind::Communication => "Communication",
            ResourceKind::Bot => "Bot",
            ResourceKind::Other(kind) => kind,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ResourceKind {
    fn from(kind: &str) -> Self {
        match kind {
            "Practitioner" => ResourceKind::Practitioner,
            "Patient" => ResourceKind::Patient,
            "Communication" => ResourceKind::Communication,
            "Bot" => ResourceKind::Bot,
            other => ResourceKind::Other(other.to_string()),
        }
    }
}

/// A reference string decomposed into kind and id.
///
/// Parsed once at the boundary; the decision functions compare kinds instead
/// of repeating string-prefix checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTarget {
    pub kind: ResourceKind,
    pub id: String,
}

impl FromStr for ResourceTarget {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once('/')
            .ok_or_else(|| CoreError::InvalidReference(s.to_string()))?;
        if kind.is_empty() || id.is_empty() {
            return Err(CoreError::InvalidReference(s.to_string()));
        }
        Ok(Self {
            kind: ResourceKind::from(kind),
            id: id.to_string(),
        })
    }
}

impl fmt::Display for ResourceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}
