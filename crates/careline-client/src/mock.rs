use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use careline_core::models::communication::{self, Communication, Identifier};

use crate::api::RecordClient;
use crate::error::ClientError;

/// In-memory stand-in for the platform record store.
///
/// Holds created Communications in insertion order and answers the
/// identifier searches the bots perform. Queries it does not understand are
/// an error rather than an empty result, so handler typos fail loudly in
/// tests.
#[derive(Default)]
pub struct MockClient {
    store: Mutex<Vec<Communication>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record, in insertion order.
    pub async fn records(&self) -> Vec<Communication> {
        self.store.lock().await.clone()
    }
}

/// A parsed `identifier=` search token.
enum IdentifierQuery {
    Value(String),
    SystemValue(String, String),
}

fn parse_identifier_query(query: &str) -> Result<IdentifierQuery, ClientError> {
    let token = query
        .strip_prefix("identifier=")
        .ok_or_else(|| ClientError::InvalidQuery(query.to_string()))?;
    Ok(match token.split_once('|') {
        Some((system, value)) => {
            IdentifierQuery::SystemValue(system.to_string(), value.to_string())
        }
        None => IdentifierQuery::Value(token.to_string()),
    })
}

impl IdentifierQuery {
    fn matches(&self, identifier: &Identifier) -> bool {
        match self {
            IdentifierQuery::Value(value) => identifier.value.as_deref() == Some(value.as_str()),
            IdentifierQuery::SystemValue(system, value) => {
                identifier.system.as_deref() == Some(system.as_str())
                    && identifier.value.as_deref() == Some(value.as_str())
            }
        }
    }
}

#[async_trait]
impl RecordClient for MockClient {
    async fn search(
        &self,
        resource_type: &str,
        query: &str,
    ) -> Result<Vec<Communication>, ClientError> {
        if resource_type != communication::RESOURCE_TYPE {
            return Err(ClientError::UnsupportedResourceType(
                resource_type.to_string(),
            ));
        }
        let wanted = parse_identifier_query(query)?;

        let store = self.store.lock().await;
        Ok(store
            .iter()
            .filter(|record| record.identifier.iter().any(|id| wanted.matches(id)))
            .cloned()
            .collect())
    }

    async fn create(&self, mut resource: Communication) -> Result<Communication, ClientError> {
        resource.id = Some(Uuid::new_v4().to_string());
        self.store.lock().await.push(resource.clone());
        Ok(resource)
    }
}
