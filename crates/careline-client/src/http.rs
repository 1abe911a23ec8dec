use async_trait::async_trait;
use serde::Deserialize;

use careline_core::models::communication::Communication;

use crate::api::RecordClient;
use crate::error::ClientError;

/// HTTP client for the platform FHIR R4 endpoint.
pub struct FhirClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl FhirClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token for authenticated requests.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

/// A searchset bundle; only the parts the client reads.
#[derive(Deserialize)]
struct Bundle {
    #[serde(default)]
    entry: Vec<BundleEntry>,
}

#[derive(Deserialize)]
struct BundleEntry {
    resource: Option<Communication>,
}

#[async_trait]
impl RecordClient for FhirClient {
    async fn search(
        &self,
        resource_type: &str,
        query: &str,
    ) -> Result<Vec<Communication>, ClientError> {
        let url = format!("{}/fhir/R4/{resource_type}?{query}", self.base_url);
        let response = self.authorize(self.http.get(&url)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bundle: Bundle = response.json().await?;
        Ok(bundle
            .entry
            .into_iter()
            .filter_map(|entry| entry.resource)
            .collect())
    }

    async fn create(&self, resource: Communication) -> Result<Communication, ClientError> {
        let url = format!("{}/fhir/R4/{}", self.base_url, resource.resource_type);
        let response = self
            .authorize(self.http.post(&url))
            .json(&resource)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
