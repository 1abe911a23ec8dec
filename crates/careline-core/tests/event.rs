use careline_core::models::event::{BotEvent, FHIR_JSON};

#[test]
fn missing_envelope_fields_take_defaults() {
    let event: BotEvent = serde_json::from_str(
        r#"{
            "bot": {"reference": "Bot/123"},
            "input": {"resourceType": "Communication", "status": "in-progress"}
        }"#,
    )
    .expect("should deserialize");

    assert_eq!(event.content_type, FHIR_JSON);
    assert!(event.secrets.is_empty());
    assert_eq!(event.bot.reference, "Bot/123");
}
