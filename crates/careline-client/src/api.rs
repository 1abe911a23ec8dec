use async_trait::async_trait;

use careline_core::models::communication::Communication;

use crate::error::ClientError;

/// Capabilities the platform record store exposes to bots.
///
/// Bots receive this as an injected handle: production code talks to the
/// FHIR endpoint via [`crate::http::FhirClient`], tests substitute
/// [`crate::mock::MockClient`].
#[async_trait]
pub trait RecordClient: Send + Sync {
    /// Search records of `resource_type` with a platform search string,
    /// e.g. `identifier=auto-response-Communication/123`.
    ///
    /// Results are ordered as returned by the store.
    async fn search(
        &self,
        resource_type: &str,
        query: &str,
    ) -> Result<Vec<Communication>, ClientError>;

    /// Create a record. The store assigns the server-side id; every other
    /// field is caller-supplied.
    async fn create(&self, resource: Communication) -> Result<Communication, ClientError>;
}
