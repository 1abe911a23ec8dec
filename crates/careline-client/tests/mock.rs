use careline_client::api::RecordClient;
use careline_client::error::ClientError;
use careline_client::mock::MockClient;
use careline_core::models::communication::{
    self, Communication, CommunicationStatus, Identifier,
};

fn tagged(value: &str) -> Communication {
    Communication {
        status: CommunicationStatus::InProgress,
        identifier: vec![Identifier::new("http://example.com", value)],
        ..Default::default()
    }
}

#[tokio::test]
async fn create_assigns_an_id_and_stores_the_record() {
    let client = MockClient::new();
    let created = client
        .create(tagged("a"))
        .await
        .expect("create should succeed");

    assert!(created.id.is_some());
    let records = client.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], created);
}

#[tokio::test]
async fn searches_by_identifier_value() {
    let client = MockClient::new();
    client
        .create(tagged("auto-response-Communication/t1"))
        .await
        .expect("create should succeed");
    client
        .create(tagged("other"))
        .await
        .expect("create should succeed");

    let matches = client
        .search(
            communication::RESOURCE_TYPE,
            "identifier=auto-response-Communication/t1",
        )
        .await
        .expect("search should succeed");

    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0].identifier[0].value.as_deref(),
        Some("auto-response-Communication/t1")
    );
}

#[tokio::test]
async fn searches_by_system_scoped_identifier() {
    let client = MockClient::new();
    client
        .create(tagged("tag"))
        .await
        .expect("create should succeed");

    let matches = client
        .search(
            communication::RESOURCE_TYPE,
            "identifier=http://example.com|tag",
        )
        .await
        .expect("search should succeed");
    assert_eq!(matches.len(), 1);

    let misses = client
        .search(
            communication::RESOURCE_TYPE,
            "identifier=http://other.example|tag",
        )
        .await
        .expect("search should succeed");
    assert!(misses.is_empty());
}

#[tokio::test]
async fn rejects_unknown_resource_types() {
    let client = MockClient::new();
    let err = client
        .search("Patient", "identifier=x")
        .await
        .expect_err("search should fail");
    assert!(matches!(err, ClientError::UnsupportedResourceType(_)));
}

#[tokio::test]
async fn rejects_non_identifier_queries() {
    let client = MockClient::new();
    let err = client
        .search(communication::RESOURCE_TYPE, "status=in-progress")
        .await
        .expect_err("search should fail");
    assert!(matches!(err, ClientError::InvalidQuery(_)));
}
