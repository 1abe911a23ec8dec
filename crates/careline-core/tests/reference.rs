use careline_core::models::reference::{Reference, ResourceKind, ResourceTarget};

#[test]
fn parses_kind_and_id() {
    let target: ResourceTarget = "Practitioner/123".parse().expect("should parse");
    assert_eq!(target.kind, ResourceKind::Practitioner);
    assert_eq!(target.id, "123");
}

#[test]
fn unknown_kinds_are_preserved() {
    let target: ResourceTarget = "Organization/abc".parse().expect("should parse");
    assert_eq!(target.kind, ResourceKind::Other("Organization".to_string()));
    assert_eq!(target.to_string(), "Organization/abc");
}

#[test]
fn rejects_malformed_references() {
    assert!("Practitioner".parse::<ResourceTarget>().is_err());
    assert!("/123".parse::<ResourceTarget>().is_err());
    assert!("Practitioner/".parse::<ResourceTarget>().is_err());
    assert!("".parse::<ResourceTarget>().is_err());
}

#[test]
fn local_reference_round_trips() {
    let reference = Reference::local(ResourceKind::Patient, "jane");
    assert_eq!(reference.reference, "Patient/jane");
    assert!(reference.is_a(&ResourceKind::Patient));
    assert!(!reference.is_a(&ResourceKind::Practitioner));
}

#[test]
fn malformed_reference_matches_no_kind() {
    let reference = Reference {
        reference: "not-a-reference".to_string(),
        display: None,
    };
    assert!(reference.target().is_none());
    assert!(!reference.is_a(&ResourceKind::Practitioner));
}
