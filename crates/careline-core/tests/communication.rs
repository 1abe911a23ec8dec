use careline_core::models::communication::{
    Communication, CommunicationStatus, Identifier, Payload,
};
use careline_core::models::reference::{Reference, ResourceKind};

#[test]
fn serializes_with_platform_field_names() {
    let message = Communication {
        status: CommunicationStatus::InProgress,
        sender: Some(Reference::local(ResourceKind::Practitioner, "p1")),
        part_of: vec![Reference::local(ResourceKind::Communication, "t1")],
        payload: vec![Payload::text("Hello")],
        ..Default::default()
    };

    let json = serde_json::to_value(&message).expect("should serialize");
    assert_eq!(json["resourceType"], "Communication");
    assert_eq!(json["status"], "in-progress");
    assert_eq!(json["sender"]["reference"], "Practitioner/p1");
    assert_eq!(json["partOf"][0]["reference"], "Communication/t1");
    assert_eq!(json["payload"][0]["contentString"], "Hello");
    assert!(json.get("id").is_none());
    assert!(json.get("recipient").is_none());
    assert!(json.get("sent").is_none());
}

#[test]
fn deserializes_a_platform_document() {
    let message: Communication = serde_json::from_str(
        r#"{
            "resourceType": "Communication",
            "status": "completed",
            "sender": {"reference": "Patient/x"},
            "identifier": [{"system": "http://example.com", "value": "tag"}]
        }"#,
    )
    .expect("should deserialize");

    assert_eq!(message.status, CommunicationStatus::Completed);
    assert_eq!(
        message.identifier,
        vec![Identifier::new("http://example.com", "tag")]
    );
    assert!(message.part_of.is_empty());
    assert!(message.sent.is_none());
}
